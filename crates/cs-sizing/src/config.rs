//! Search bounds for the optimizer.

use crate::error::SizingError;
use serde::{Deserialize, Serialize};

/// Default upper bound on cables run in parallel.
pub const DEFAULT_MAX_PARALLEL_RUNS: usize = 6;

/// Default number of alternatives kept for display.
pub const DEFAULT_MAX_ALTERNATIVES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Largest parallel-run count the optimizer tries
    pub max_parallel_runs: usize,
    /// Alternatives kept after ranking
    pub max_alternatives: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_parallel_runs: DEFAULT_MAX_PARALLEL_RUNS,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), SizingError> {
        if self.max_parallel_runs == 0 {
            return Err(SizingError::InvalidConfig {
                what: "max_parallel_runs must be at least 1",
            });
        }
        if self.max_alternatives == 0 {
            return Err(SizingError::InvalidConfig {
                what: "max_alternatives must be at least 1",
            });
        }
        Ok(())
    }
}
