//! Sizing requests and their validation.

use crate::error::SizingError;
use crate::voltage_drop::{SINGLE_PHASE_DROP_LIMIT_PCT, THREE_PHASE_DROP_LIMIT_PCT};
use cs_core::units::{Current, Length, Voltage, amps, m, volts};
use cs_core::{Tolerances, nearly_equal};
use cs_tables::{InstallationMethod, Material, Phase};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported supply systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplyVoltage {
    /// 230 V single-phase
    SinglePhase230,
    /// 400 V three-phase
    ThreePhase400,
}

impl SupplyVoltage {
    /// Match a nominal voltage to a supported supply system.
    pub fn from_volts(voltage_v: f64) -> Option<Self> {
        let tol = Tolerances::default();
        if nearly_equal(voltage_v, 230.0, tol) {
            Some(SupplyVoltage::SinglePhase230)
        } else if nearly_equal(voltage_v, 400.0, tol) {
            Some(SupplyVoltage::ThreePhase400)
        } else {
            None
        }
    }

    pub fn phase(self) -> Phase {
        match self {
            SupplyVoltage::SinglePhase230 => Phase::SinglePhase,
            SupplyVoltage::ThreePhase400 => Phase::ThreePhase,
        }
    }

    pub fn nominal_volts(self) -> f64 {
        match self {
            SupplyVoltage::SinglePhase230 => 230.0,
            SupplyVoltage::ThreePhase400 => 400.0,
        }
    }

    /// Maximum permitted voltage drop for this supply (%).
    pub fn drop_limit_percent(self) -> f64 {
        match self {
            SupplyVoltage::SinglePhase230 => SINGLE_PHASE_DROP_LIMIT_PCT,
            SupplyVoltage::ThreePhase400 => THREE_PHASE_DROP_LIMIT_PCT,
        }
    }
}

impl fmt::Display for SupplyVoltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} V {}", self.nominal_volts(), self.phase())
    }
}

/// Inputs for one sizing call.
///
/// The derating factor scales the conductor rating down before comparison, so
/// a factor of 0.8 needs a cable rated for 125 % of the per-cable load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingRequest {
    pub load: Current,
    pub voltage: Voltage,
    pub length: Length,
    pub material: Material,
    pub method: InstallationMethod,
    pub derating_factor: f64,
}

impl SizingRequest {
    /// Request with no derating.
    pub fn new(
        load_a: f64,
        voltage_v: f64,
        length_m: f64,
        material: Material,
        method: InstallationMethod,
    ) -> Self {
        Self {
            load: amps(load_a),
            voltage: volts(voltage_v),
            length: m(length_m),
            material,
            method,
            derating_factor: 1.0,
        }
    }

    pub fn with_derating(mut self, factor: f64) -> Self {
        self.derating_factor = factor;
        self
    }

    /// Check the request in a fixed order: load, length, voltage, derating.
    ///
    /// The material is checked later against the reference store.
    pub fn validate(&self) -> Result<ValidRequest, SizingError> {
        let load_a = self.load.value;
        if !(load_a.is_finite() && load_a > 0.0) {
            return Err(SizingError::InvalidLoad { load_a });
        }

        let length_m = self.length.value;
        if !(length_m.is_finite() && length_m >= 0.0) {
            return Err(SizingError::InvalidLength { length_m });
        }

        let voltage_v = self.voltage.value;
        let supply = SupplyVoltage::from_volts(voltage_v)
            .ok_or(SizingError::UnsupportedVoltage { voltage_v })?;

        let factor = self.derating_factor;
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(SizingError::InvalidDeratingFactor { factor });
        }

        Ok(ValidRequest {
            load_a,
            length_m,
            supply,
            material: self.material,
            method: self.method,
            derating_factor: factor,
        })
    }
}

/// A request that passed validation, in plain SI numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidRequest {
    pub load_a: f64,
    pub length_m: f64,
    pub supply: SupplyVoltage,
    pub material: Material,
    pub method: InstallationMethod,
    pub derating_factor: f64,
}
