//! Whole-schedule sizing.

use crate::error::AppResult;
use crate::table_service::is_json;
use cs_project::ScheduleFile;
use cs_sizing::{CircuitType, SizingEngine, SizingResult};
use cs_tables::ReferenceTableStore;
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// Outcome for one circuit of a schedule.
#[derive(Debug, Clone, Serialize)]
pub struct CircuitReport {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit_type: Option<CircuitType>,
    /// Load after the circuit-type multiplier (A)
    pub design_load_a: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizing: Option<SizingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CircuitReport {
    pub fn is_sized(&self) -> bool {
        self.sizing.is_some()
    }
}

/// Sized schedule, circuits in file order.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleReport {
    pub name: String,
    pub table_fingerprint: String,
    pub circuits: Vec<CircuitReport>,
    pub sized_count: usize,
    pub failed_count: usize,
    /// Sum of total cost over sized circuits
    pub total_cost: f64,
}

impl ScheduleReport {
    pub fn get(&self, id: &str) -> Option<&CircuitReport> {
        self.circuits.iter().find(|c| c.id == id)
    }
}

/// Load a schedule from YAML or JSON, chosen by extension.
pub fn load_schedule(path: &Path) -> AppResult<ScheduleFile> {
    let schedule = if is_json(path) {
        cs_project::load_json(path)?
    } else {
        cs_project::load_yaml(path)?
    };
    Ok(schedule)
}

/// Write a schedule as YAML or JSON, chosen by extension.
pub fn save_schedule(path: &Path, schedule: &ScheduleFile) -> AppResult<()> {
    if is_json(path) {
        cs_project::save_json(path, schedule)?;
    } else {
        cs_project::save_yaml(path, schedule)?;
    }
    info!(path = %path.display(), circuits = schedule.circuits.len(), "schedule written");
    Ok(())
}

/// Size every circuit of `schedule` against `store`.
///
/// Circuits are independent and sized in parallel. A circuit that cannot be
/// sized is reported with its error; it does not abort the schedule.
pub fn size_schedule(
    store: &ReferenceTableStore,
    schedule: &ScheduleFile,
) -> AppResult<ScheduleReport> {
    let config = schedule.settings.unwrap_or_default();
    let engine = SizingEngine::with_config(store, config)?;

    let circuits: Vec<CircuitReport> = schedule
        .circuits
        .par_iter()
        .map(|circuit| {
            let outcome = circuit
                .sizing_request(&schedule.defaults)
                .map_err(|e| e.to_string())
                .and_then(|req| engine.calculate(&req).map_err(|e| e.to_string()));

            let (sizing, error) = match outcome {
                Ok(result) => (Some(result), None),
                Err(message) => {
                    warn!(circuit = %circuit.id, error = %message, "circuit not sized");
                    (None, Some(message))
                }
            };

            CircuitReport {
                id: circuit.id.clone(),
                name: circuit.name.clone(),
                circuit_type: circuit.circuit_type,
                design_load_a: circuit.design_load_amps(),
                sizing,
                error,
            }
        })
        .collect();

    let sized_count = circuits.iter().filter(|c| c.is_sized()).count();
    let failed_count = circuits.len() - sized_count;
    let total_cost = circuits
        .iter()
        .filter_map(|c| c.sizing.as_ref())
        .map(|s| s.total_cost)
        .sum();

    info!(
        schedule = %schedule.name,
        sized = sized_count,
        failed = failed_count,
        total_cost,
        "schedule sized"
    );

    Ok(ScheduleReport {
        name: schedule.name.clone(),
        table_fingerprint: store.fingerprint(),
        circuits,
        sized_count,
        failed_count,
        total_cost,
    })
}
