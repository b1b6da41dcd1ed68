//! Schedule validation logic.
//!
//! Structural problems (ids, names, non-finite numbers) fail the whole file.
//! Physical limits such as a zero load are left to the sizing engine so they
//! are reported per circuit.

use crate::schema::{CircuitDef, ScheduleFile};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_schedule(schedule: &ScheduleFile) -> Result<(), ValidationError> {
    if schedule.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: schedule.version,
        });
    }

    if let Some(settings) = &schedule.settings {
        settings
            .validate()
            .map_err(|e| ValidationError::InvalidValue {
                field: "settings".to_string(),
                value: format!("{settings:?}"),
                reason: e.to_string(),
            })?;
    }

    let defaults = &schedule.defaults;
    check_finite("defaults.voltage_v", defaults.voltage_v)?;
    check_finite("defaults.derating_factor", defaults.derating_factor)?;

    let mut ids = HashSet::new();
    for circuit in &schedule.circuits {
        if circuit.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "circuits.id".to_string(),
                value: format!("{:?}", circuit.id),
                reason: "circuit id must not be empty".to_string(),
            });
        }
        if !ids.insert(&circuit.id) {
            return Err(ValidationError::DuplicateId {
                id: circuit.id.clone(),
                context: "circuits".to_string(),
            });
        }
        validate_circuit(circuit, schedule)?;
    }

    Ok(())
}

fn validate_circuit(circuit: &CircuitDef, schedule: &ScheduleFile) -> Result<(), ValidationError> {
    let field = |name: &str| format!("circuits[{}].{}", circuit.id, name);

    check_finite(&field("load_amps"), circuit.load_amps)?;
    check_finite(&field("length_m"), circuit.length_m)?;
    if let Some(v) = circuit.voltage_v {
        check_finite(&field("voltage_v"), v)?;
    }
    if let Some(f) = circuit.derating_factor {
        check_finite(&field("derating_factor"), f)?;
    }

    circuit.material(&schedule.defaults)?;
    circuit.installation_method(&schedule.defaults)?;
    Ok(())
}

fn check_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be a finite number".to_string(),
        })
    }
}
