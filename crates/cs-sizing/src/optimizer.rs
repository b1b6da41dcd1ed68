//! Parallel-run search.
//!
//! For each run count `n` in `1..=max_parallel_runs` the load is split evenly,
//! the smallest size whose derated rating carries the per-cable load is picked,
//! and it is stepped up until the voltage drop is within the
//! supply limit. Because unit cost never decreases with size, the first size
//! that passes both checks is the cheapest one for that `n`.

use crate::ampacity::select_minimum_size;
use crate::config::EngineConfig;
use crate::request::ValidRequest;
use crate::voltage_drop::drop_percent;
use cs_core::units::{amps, m};
use cs_tables::{CableSpec, CableTable};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// One feasible configuration: `cables_in_parallel` identical cables of one size.
///
/// Costs cover every cable over the full run length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub size: String,
    pub size_mm2: f64,
    pub cables_in_parallel: usize,
    pub load_per_cable_a: f64,
    /// Per-cable rating at the requested installation method, before derating
    pub ampacity_a: f64,
    pub ohm_per_km: f64,
    pub volt_drop_percent: f64,
    pub supply_cost: f64,
    pub install_cost: f64,
    pub total_cost: f64,
    #[serde(default)]
    pub is_recommended: bool,
}

impl Candidate {
    fn new(
        spec: &CableSpec,
        req: &ValidRequest,
        n: usize,
        load_per_cable_a: f64,
        drop: f64,
    ) -> Self {
        let runs_m = n as f64 * req.length_m;
        let supply_cost = spec.supply_cost_per_m * runs_m;
        let install_cost = spec.install_cost_per_m * runs_m;
        Self {
            size: spec.size_label(),
            size_mm2: spec.size_mm2,
            cables_in_parallel: n,
            load_per_cable_a,
            ampacity_a: spec.ampacity(req.method),
            ohm_per_km: spec.ohm_per_km,
            volt_drop_percent: drop,
            supply_cost,
            install_cost,
            total_cost: supply_cost + install_cost,
            is_recommended: false,
        }
    }
}

/// No run count in range produced a configuration meeting both limits.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no feasible configuration within {max_parallel_runs} parallel runs")]
pub struct Infeasible {
    pub max_parallel_runs: usize,
}

/// Stateless search over parallel-run counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelRunOptimizer {
    config: EngineConfig,
}

impl ParallelRunOptimizer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// All feasible configurations, one per run count, in increasing `n`.
    pub fn optimize(
        &self,
        table: &CableTable,
        req: &ValidRequest,
    ) -> Result<Vec<Candidate>, Infeasible> {
        let max_parallel_runs = self.config.max_parallel_runs;
        let mut candidates = Vec::with_capacity(max_parallel_runs);

        for n in 1..=max_parallel_runs {
            match self.evaluate(table, req, n) {
                Some(candidate) => {
                    debug!(
                        runs = n,
                        size = %candidate.size,
                        drop_pct = candidate.volt_drop_percent,
                        total_cost = candidate.total_cost,
                        "feasible configuration"
                    );
                    candidates.push(candidate);
                }
                None => debug!(runs = n, "no feasible size"),
            }
        }

        if candidates.is_empty() {
            return Err(Infeasible { max_parallel_runs });
        }
        Ok(candidates)
    }

    /// Cheapest feasible size for exactly `n` runs, if any.
    pub fn evaluate(&self, table: &CableTable, req: &ValidRequest, n: usize) -> Option<Candidate> {
        let load_per_cable_a = req.load_a / n as f64;
        let limit = req.supply.drop_limit_percent();

        let start = select_minimum_size(
            table,
            amps(load_per_cable_a),
            req.derating_factor,
            req.method,
        )?;

        for spec in &table.rows()[start.index..] {
            let drop = drop_percent(spec, amps(load_per_cable_a), m(req.length_m), req.supply);
            if drop <= limit {
                return Some(Candidate::new(spec, req, n, load_per_cable_a, drop));
            }
            trace!(
                runs = n,
                size = %spec.size_label(),
                drop_pct = drop,
                limit_pct = limit,
                "voltage drop over limit, stepping up"
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::SizingRequest;
    use cs_tables::{InstallationMethod, Material, ReferenceTableStore};

    fn valid(
        load: f64,
        volts: f64,
        len: f64,
        material: Material,
        method: InstallationMethod,
    ) -> ValidRequest {
        SizingRequest::new(load, volts, len, material, method)
            .validate()
            .unwrap()
    }

    #[test]
    fn single_run_for_moderate_load() {
        let store = ReferenceTableStore::builtin();
        let table = store.lookup(Material::Copper).unwrap();
        let req = valid(100.0, 400.0, 50.0, Material::Copper, InstallationMethod::Ducts);

        let one = ParallelRunOptimizer::default().evaluate(table, &req, 1).unwrap();
        assert_eq!(one.size, "35mm²");
        assert_eq!(one.cables_in_parallel, 1);
        // (335 + 91) per metre × 50 m
        assert!((one.total_cost - 21_300.0).abs() < 1e-9);
    }

    #[test]
    fn steps_up_when_drop_exceeds_limit() {
        let store = ReferenceTableStore::builtin();
        let table = store.lookup(Material::Copper).unwrap();
        // 20 A fits 1.5mm² by rating but drops 6.25 % over 50 m at 400 V.
        let req = valid(100.0, 400.0, 50.0, Material::Copper, InstallationMethod::Ducts);

        let five = ParallelRunOptimizer::default().evaluate(table, &req, 5).unwrap();
        assert_eq!(five.size, "2.5mm²");
        assert!(five.volt_drop_percent <= 5.0);
    }

    #[test]
    fn derating_inflates_the_requirement() {
        let store = ReferenceTableStore::builtin();
        let table = store.lookup(Material::Copper).unwrap();
        let req =
            SizingRequest::new(100.0, 400.0, 10.0, Material::Copper, InstallationMethod::Ducts)
                .with_derating(0.8)
                .validate()
                .unwrap();

        // 125 A needed: 35mm² (115 A) no longer fits.
        let one = ParallelRunOptimizer::default().evaluate(table, &req, 1).unwrap();
        assert_eq!(one.size, "50mm²");
        assert!(one.ampacity_a * 0.8 >= 100.0);
    }

    #[test]
    fn oversize_load_needs_parallel_runs() {
        let store = ReferenceTableStore::builtin();
        let table = store.lookup(Material::Aluminium).unwrap();
        let req = valid(400.0, 400.0, 80.0, Material::Aluminium, InstallationMethod::Air);

        let optimizer = ParallelRunOptimizer::default();
        assert!(optimizer.evaluate(table, &req, 1).is_none());

        let candidates = optimizer.optimize(table, &req).unwrap();
        assert!(candidates.iter().all(|c| c.cables_in_parallel > 1));
        assert_eq!(candidates.len(), 5);
    }

    #[test]
    fn very_long_run_is_infeasible() {
        let store = ReferenceTableStore::builtin();
        let table = store.lookup(Material::Copper).unwrap();
        let req = valid(100.0, 230.0, 5_000.0, Material::Copper, InstallationMethod::Ducts);

        let err = ParallelRunOptimizer::default().optimize(table, &req).unwrap_err();
        assert_eq!(err, Infeasible { max_parallel_runs: 6 });
    }

    #[test]
    fn max_parallel_runs_bounds_the_search() {
        let store = ReferenceTableStore::builtin();
        let table = store.lookup(Material::Aluminium).unwrap();
        let req = valid(400.0, 400.0, 80.0, Material::Aluminium, InstallationMethod::Air);

        let optimizer = ParallelRunOptimizer::new(EngineConfig {
            max_parallel_runs: 1,
            ..Default::default()
        });
        assert_eq!(
            optimizer.optimize(table, &req).unwrap_err().max_parallel_runs,
            1
        );
    }
}
