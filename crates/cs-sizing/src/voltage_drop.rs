//! Voltage drop along a cable run.
//!
//! `drop % = mV/A/m × I × L / (1000 × V) × 100`, using the three-phase
//! coefficient on 400 V supplies and the single-phase one on 230 V.

use crate::request::SupplyVoltage;
use cs_core::units::{Current, Length};
use cs_tables::CableSpec;

/// Permitted drop on 230 V single-phase circuits (%).
pub const SINGLE_PHASE_DROP_LIMIT_PCT: f64 = 3.0;

/// Permitted drop on 400 V three-phase circuits (%).
pub const THREE_PHASE_DROP_LIMIT_PCT: f64 = 5.0;

/// Absolute voltage drop (V) for one cable carrying `current` over `length`.
pub fn drop_volts(
    spec: &CableSpec,
    current: Current,
    length: Length,
    supply: SupplyVoltage,
) -> f64 {
    let coeff = spec.volt_drop_mv_per_a_m(supply.phase());
    coeff * current.value * length.value / 1000.0
}

/// Voltage drop as a percentage of the nominal supply voltage.
pub fn drop_percent(
    spec: &CableSpec,
    current: Current,
    length: Length,
    supply: SupplyVoltage,
) -> f64 {
    drop_volts(spec, current, length, supply) / supply.nominal_volts() * 100.0
}
