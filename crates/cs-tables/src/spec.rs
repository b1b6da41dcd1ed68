//! One row of a reference table.

use crate::{InstallationMethod, Phase};
use cs_core::{CsResult, ensure_finite, ensure_non_negative};
use serde::{Deserialize, Serialize};

/// Electrical and commercial data for a single conductor size.
///
/// Costs are currency per metre of one cable. Voltage-drop coefficients are in
/// millivolts per ampere per metre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableSpec {
    /// Conductor cross-section (mm²)
    pub size_mm2: f64,
    /// Current rating direct in ground (A)
    pub ampacity_ground_a: f64,
    /// Current rating in ducts (A)
    pub ampacity_ducts_a: f64,
    /// Current rating in free air (A)
    pub ampacity_air_a: f64,
    /// Conductor impedance (Ω/km)
    pub ohm_per_km: f64,
    /// Three-phase voltage drop (mV/A/m)
    pub volt_drop_3ph_mv_per_a_m: f64,
    /// Single-phase voltage drop (mV/A/m)
    pub volt_drop_1ph_mv_per_a_m: f64,
    pub supply_cost_per_m: f64,
    pub install_cost_per_m: f64,
    /// Overall diameter (mm), display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter_mm: Option<f64>,
    /// Mass (kg/km), display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_kg_per_km: Option<f64>,
}

impl CableSpec {
    /// Display label such as `16mm²` or `1.5mm²`.
    pub fn size_label(&self) -> String {
        format!("{}mm²", self.size_mm2)
    }

    /// Current rating for the given installation method (A).
    pub fn ampacity(&self, method: InstallationMethod) -> f64 {
        match method {
            InstallationMethod::Ground => self.ampacity_ground_a,
            InstallationMethod::Ducts => self.ampacity_ducts_a,
            InstallationMethod::Air => self.ampacity_air_a,
        }
    }

    /// Voltage-drop coefficient for the given phase configuration (mV/A/m).
    pub fn volt_drop_mv_per_a_m(&self, phase: Phase) -> f64 {
        match phase {
            Phase::ThreePhase => self.volt_drop_3ph_mv_per_a_m,
            Phase::SinglePhase => self.volt_drop_1ph_mv_per_a_m,
        }
    }

    /// Supply plus install cost for one metre of one cable.
    pub fn unit_cost_per_m(&self) -> f64 {
        self.supply_cost_per_m + self.install_cost_per_m
    }

    /// Check that every numeric field is finite and physically meaningful.
    pub fn check(&self) -> CsResult<()> {
        for (value, what) in [
            (self.size_mm2, "size_mm2"),
            (self.ampacity_ground_a, "ampacity_ground_a"),
            (self.ampacity_ducts_a, "ampacity_ducts_a"),
            (self.ampacity_air_a, "ampacity_air_a"),
            (self.ohm_per_km, "ohm_per_km"),
            (self.volt_drop_3ph_mv_per_a_m, "volt_drop_3ph_mv_per_a_m"),
            (self.volt_drop_1ph_mv_per_a_m, "volt_drop_1ph_mv_per_a_m"),
        ] {
            if ensure_finite(value, what)? <= 0.0 {
                return Err(cs_core::CsError::InvalidArg { what });
            }
        }
        ensure_non_negative(self.supply_cost_per_m, "supply_cost_per_m")?;
        ensure_non_negative(self.install_cost_per_m, "install_cost_per_m")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CableSpec {
        CableSpec {
            size_mm2: 16.0,
            ampacity_ground_a: 91.0,
            ampacity_ducts_a: 75.0,
            ampacity_air_a: 72.0,
            ohm_per_km: 1.38,
            volt_drop_3ph_mv_per_a_m: 2.4,
            volt_drop_1ph_mv_per_a_m: 2.8,
            supply_cost_per_m: 164.0,
            install_cost_per_m: 85.0,
            diameter_mm: None,
            mass_kg_per_km: None,
        }
    }

    #[test]
    fn label_drops_trailing_zero() {
        assert_eq!(sample().size_label(), "16mm²");
        let mut small = sample();
        small.size_mm2 = 1.5;
        assert_eq!(small.size_label(), "1.5mm²");
    }

    #[test]
    fn ampacity_by_method() {
        let spec = sample();
        assert_eq!(spec.ampacity(InstallationMethod::Ground), 91.0);
        assert_eq!(spec.ampacity(InstallationMethod::Ducts), 75.0);
        assert_eq!(spec.ampacity(InstallationMethod::Air), 72.0);
    }

    #[test]
    fn volt_drop_by_phase() {
        let spec = sample();
        assert_eq!(spec.volt_drop_mv_per_a_m(Phase::ThreePhase), 2.4);
        assert_eq!(spec.volt_drop_mv_per_a_m(Phase::SinglePhase), 2.8);
    }

    #[test]
    fn check_rejects_bad_numbers() {
        assert!(sample().check().is_ok());

        let mut bad = sample();
        bad.ohm_per_km = f64::NAN;
        assert!(bad.check().is_err());

        let mut bad = sample();
        bad.ampacity_air_a = 0.0;
        assert!(bad.check().is_err());

        let mut bad = sample();
        bad.install_cost_per_m = -1.0;
        assert!(bad.check().is_err());
    }
}
