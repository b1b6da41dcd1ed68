//! Error types for sizing calculations.

use thiserror::Error;

/// Why a sizing request produced no recommendation.
///
/// The first five variants are caller-input errors. `NoFeasibleConfiguration`
/// is a legitimate domain outcome: the inputs are fine but nothing within the
/// bounded search meets both limits.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    #[error("Load must be greater than zero (got {load_a} A)")]
    InvalidLoad { load_a: f64 },

    #[error("Circuit length must be zero or more (got {length_m} m)")]
    InvalidLength { length_m: f64 },

    #[error("Unsupported supply voltage {voltage_v} V (expected 230 or 400)")]
    UnsupportedVoltage { voltage_v: f64 },

    #[error("Derating factor must be in (0, 1] (got {factor})")]
    InvalidDeratingFactor { factor: f64 },

    #[error("Unknown conductor material: {0}")]
    UnknownMaterial(String),

    #[error(
        "No cable configuration with up to {max_parallel_runs} parallel runs meets the ampacity and {drop_limit_percent}% voltage-drop limits"
    )]
    NoFeasibleConfiguration {
        max_parallel_runs: usize,
        drop_limit_percent: f64,
    },

    #[error("Invalid engine configuration: {what}")]
    InvalidConfig { what: &'static str },
}

impl SizingError {
    /// True for errors caused by the request itself rather than the search.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SizingError::InvalidLoad { .. }
                | SizingError::InvalidLength { .. }
                | SizingError::UnsupportedVoltage { .. }
                | SizingError::InvalidDeratingFactor { .. }
                | SizingError::UnknownMaterial(_)
        )
    }
}
