//! Single-circuit sizing from loosely typed front-end input.

use crate::error::{AppError, AppResult};
use cs_sizing::{CircuitType, EngineConfig, SizingEngine, SizingError, SizingRequest, SizingResult};
use cs_tables::{InstallationMethod, Material, ReferenceTableStore};
use tracing::info;

/// One circuit as a front-end collects it: names still unparsed.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitInput {
    pub load_a: f64,
    pub voltage_v: f64,
    pub length_m: f64,
    pub material: String,
    pub installation_method: String,
    pub derating_factor: f64,
    pub circuit_type: Option<String>,
}

impl CircuitInput {
    /// Parse names and apply the circuit-type multiplier.
    pub fn to_request(&self) -> AppResult<SizingRequest> {
        let material: Material = self
            .material
            .parse()
            .map_err(|_| SizingError::UnknownMaterial(self.material.clone()))?;
        let method: InstallationMethod = self.installation_method.parse()?;

        let load_a = match self.circuit_type.as_deref() {
            Some(raw) => {
                let ty: CircuitType = raw.parse().map_err(AppError::InvalidInput)?;
                self.load_a * ty.load_multiplier()
            }
            None => self.load_a,
        };

        Ok(
            SizingRequest::new(load_a, self.voltage_v, self.length_m, material, method)
                .with_derating(self.derating_factor),
        )
    }
}

/// Size one circuit against `store`.
pub fn size_circuit(
    store: &ReferenceTableStore,
    input: &CircuitInput,
    config: EngineConfig,
) -> AppResult<SizingResult> {
    let request = input.to_request()?;
    let engine = SizingEngine::with_config(store, config)?;
    let result = engine.calculate(&request)?;

    info!(
        size = %result.recommended_size,
        runs = result.cables_in_parallel,
        total_cost = result.total_cost,
        "circuit sized"
    );
    Ok(result)
}
