//! Sizing facade: validation, table lookup, search and ranking.

use crate::config::EngineConfig;
use crate::error::SizingError;
use crate::optimizer::{Candidate, ParallelRunOptimizer};
use crate::ranker::rank;
use crate::request::SizingRequest;
use cs_tables::{InstallationMethod, Material, ReferenceTableStore};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Recommended configuration plus ranked alternatives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    pub material: Material,
    pub installation_method: InstallationMethod,
    pub load_a: f64,
    pub voltage_v: f64,
    pub length_m: f64,
    pub derating_factor: f64,

    pub recommended_size: String,
    pub recommended_size_mm2: f64,
    pub cables_in_parallel: usize,
    pub load_per_cable_a: f64,
    pub ohm_per_km: f64,
    pub volt_drop_percent: f64,
    pub drop_limit_percent: f64,
    pub supply_cost: f64,
    pub install_cost: f64,
    pub total_cost: f64,

    /// Cheapest first; the first entry is the recommendation
    pub alternatives: Vec<Candidate>,
    /// Next-cheapest alternative minus the recommendation
    pub cost_savings: f64,
    /// Best single-cable configuration minus the recommendation, if one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings_vs_single_run: Option<f64>,
}

/// Stateless sizing engine bound to a reference store.
#[derive(Debug, Clone, Copy)]
pub struct SizingEngine<'a> {
    store: &'a ReferenceTableStore,
    optimizer: ParallelRunOptimizer,
}

impl<'a> SizingEngine<'a> {
    pub fn new(store: &'a ReferenceTableStore) -> Self {
        Self {
            store,
            optimizer: ParallelRunOptimizer::default(),
        }
    }

    pub fn with_config(
        store: &'a ReferenceTableStore,
        config: EngineConfig,
    ) -> Result<Self, SizingError> {
        config.validate()?;
        Ok(Self {
            store,
            optimizer: ParallelRunOptimizer::new(config),
        })
    }

    pub fn config(&self) -> EngineConfig {
        self.optimizer.config()
    }

    pub fn calculate(&self, request: &SizingRequest) -> Result<SizingResult, SizingError> {
        let req = request.validate()?;
        let table = self
            .store
            .lookup(req.material)
            .map_err(|_| SizingError::UnknownMaterial(req.material.to_string()))?;

        let drop_limit_percent = req.supply.drop_limit_percent();
        let candidates = self.optimizer.optimize(table, &req).map_err(|e| {
            SizingError::NoFeasibleConfiguration {
                max_parallel_runs: e.max_parallel_runs,
                drop_limit_percent,
            }
        })?;

        let single_run_cost = candidates
            .iter()
            .find(|c| c.cables_in_parallel == 1)
            .map(|c| c.total_cost);

        let ranked = rank(candidates, self.config().max_alternatives);
        let best = ranked
            .recommended()
            .cloned()
            .ok_or(SizingError::NoFeasibleConfiguration {
                max_parallel_runs: self.config().max_parallel_runs,
                drop_limit_percent,
            })?;

        debug!(
            material = %req.material,
            method = %req.method,
            load_a = req.load_a,
            runs = best.cables_in_parallel,
            size = %best.size,
            total_cost = best.total_cost,
            "sized circuit"
        );

        Ok(SizingResult {
            material: req.material,
            installation_method: req.method,
            load_a: req.load_a,
            voltage_v: req.supply.nominal_volts(),
            length_m: req.length_m,
            derating_factor: req.derating_factor,
            recommended_size: best.size.clone(),
            recommended_size_mm2: best.size_mm2,
            cables_in_parallel: best.cables_in_parallel,
            load_per_cable_a: best.load_per_cable_a,
            ohm_per_km: best.ohm_per_km,
            volt_drop_percent: best.volt_drop_percent,
            drop_limit_percent,
            supply_cost: best.supply_cost,
            install_cost: best.install_cost,
            total_cost: best.total_cost,
            savings_vs_single_run: single_run_cost.map(|cost| cost - best.total_cost),
            alternatives: ranked.alternatives,
            cost_savings: ranked.cost_savings,
        })
    }
}

/// Size one circuit against `store` with the default search bounds.
pub fn calculate_cable_size(
    store: &ReferenceTableStore,
    request: &SizingRequest,
) -> Result<SizingResult, SizingError> {
    SizingEngine::new(store).calculate(request)
}
