//! Circuit-type load multipliers.
//!
//! Applied by callers to the connected load before a `SizingRequest` is built;
//! the engine itself never sees the circuit type.

use cs_core::units::{Current, amps};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CircuitType {
    Lighting,
    Power,
    Hvac,
    Motor,
}

impl CircuitType {
    pub const ALL: [CircuitType; 4] = [
        CircuitType::Lighting,
        CircuitType::Power,
        CircuitType::Hvac,
        CircuitType::Motor,
    ];

    /// Factor applied to the connected load to get the design load.
    pub fn load_multiplier(self) -> f64 {
        match self {
            CircuitType::Lighting => 1.1,
            CircuitType::Power => 1.2,
            CircuitType::Hvac => 1.3,
            // Starting current headroom
            CircuitType::Motor => 1.5,
        }
    }

    pub fn design_load(self, connected: Current) -> Current {
        amps(connected.value * self.load_multiplier())
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CircuitType::Lighting => "lighting",
            CircuitType::Power => "power",
            CircuitType::Hvac => "hvac",
            CircuitType::Motor => "motor",
        }
    }
}

impl fmt::Display for CircuitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CircuitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lighting" => Ok(CircuitType::Lighting),
            "power" => Ok(CircuitType::Power),
            "hvac" => Ok(CircuitType::Hvac),
            "motor" => Ok(CircuitType::Motor),
            other => Err(format!("unknown circuit type: {other}")),
        }
    }
}
