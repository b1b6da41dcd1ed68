//! Cable schedule schema definitions.

use crate::validate::ValidationError;
use cs_sizing::{CircuitType, EngineConfig, SizingRequest};
use cs_tables::{InstallationMethod, Material};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleFile {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<EngineConfig>,
    #[serde(default)]
    pub defaults: CircuitDefaults,
    #[serde(default)]
    pub circuits: Vec<CircuitDef>,
}

/// Values used by circuits that leave a field out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CircuitDefaults {
    pub material: String,
    pub installation_method: String,
    pub voltage_v: f64,
    pub derating_factor: f64,
}

impl Default for CircuitDefaults {
    fn default() -> Self {
        Self {
            material: Material::Copper.to_string(),
            installation_method: InstallationMethod::Ducts.to_string(),
            voltage_v: 400.0,
            derating_factor: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CircuitDef {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Connected load before any circuit-type multiplier
    pub load_amps: f64,
    pub length_m: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voltage_v: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derating_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuit_type: Option<CircuitType>,
}

impl CircuitDef {
    pub fn material(&self, defaults: &CircuitDefaults) -> Result<Material, ValidationError> {
        let raw = self.material.as_deref().unwrap_or(&defaults.material);
        raw.parse().map_err(|_| ValidationError::InvalidValue {
            field: format!("circuits[{}].material", self.id),
            value: raw.to_string(),
            reason: "expected copper or aluminium".to_string(),
        })
    }

    pub fn installation_method(
        &self,
        defaults: &CircuitDefaults,
    ) -> Result<InstallationMethod, ValidationError> {
        let raw = self
            .installation_method
            .as_deref()
            .unwrap_or(&defaults.installation_method);
        raw.parse().map_err(|_| ValidationError::InvalidValue {
            field: format!("circuits[{}].installation_method", self.id),
            value: raw.to_string(),
            reason: "expected ground, ducts or air".to_string(),
        })
    }

    /// Design load after the circuit-type multiplier (A).
    pub fn design_load_amps(&self) -> f64 {
        match self.circuit_type {
            Some(ty) => self.load_amps * ty.load_multiplier(),
            None => self.load_amps,
        }
    }

    /// Build the engine request, falling back to `defaults` for missing fields.
    pub fn sizing_request(
        &self,
        defaults: &CircuitDefaults,
    ) -> Result<SizingRequest, ValidationError> {
        let request = SizingRequest::new(
            self.design_load_amps(),
            self.voltage_v.unwrap_or(defaults.voltage_v),
            self.length_m,
            self.material(defaults)?,
            self.installation_method(defaults)?,
        )
        .with_derating(self.derating_factor.unwrap_or(defaults.derating_factor));
        Ok(request)
    }
}
