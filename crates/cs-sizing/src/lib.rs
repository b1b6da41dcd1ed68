//! cs-sizing: cable sizing and cost-optimised parallel-run selection.
//!
//! Given a load, supply voltage, run length, conductor material and
//! installation method, the engine picks the cheapest configuration (one cable
//! or several identical cables in parallel) that satisfies both the ampacity
//! and the voltage-drop limit, and ranks the cheaper alternatives.
//!
//! Pipeline, leaves first:
//! - [`ampacity`]: smallest size whose rating covers the required current
//! - [`voltage_drop`]: percentage drop for a size, current and length
//! - [`optimizer`]: searches 1..=N parallel runs for the minimal feasible size
//! - [`ranker`]: dedups, sorts and caps the candidates
//! - [`engine`]: validates the request and orchestrates the above
//!
//! Every call is a pure function of the request and the read-only
//! [`ReferenceTableStore`](cs_tables::ReferenceTableStore).
//!
//! # Example
//!
//! ```
//! use cs_sizing::{SizingEngine, SizingRequest};
//! use cs_tables::{InstallationMethod, Material, ReferenceTableStore};
//!
//! let store = ReferenceTableStore::builtin();
//! let engine = SizingEngine::new(&store);
//! let request = SizingRequest::new(100.0, 400.0, 50.0, Material::Copper, InstallationMethod::Ducts);
//!
//! let result = engine.calculate(&request).unwrap();
//! println!(
//!     "{} x {} at {:.2}% drop",
//!     result.cables_in_parallel, result.recommended_size, result.volt_drop_percent
//! );
//! ```

pub mod ampacity;
pub mod circuit;
pub mod config;
pub mod engine;
pub mod error;
pub mod optimizer;
pub mod ranker;
pub mod request;
pub mod voltage_drop;

// Re-exports
pub use ampacity::{SizeSelection, select_minimum_size};
pub use circuit::CircuitType;
pub use config::EngineConfig;
pub use engine::{SizingEngine, SizingResult, calculate_cable_size};
pub use error::SizingError;
pub use optimizer::{Candidate, Infeasible, ParallelRunOptimizer};
pub use ranker::{RankedCandidates, rank};
pub use request::{SizingRequest, SupplyVoltage, ValidRequest};
pub use voltage_drop::{
    SINGLE_PHASE_DROP_LIMIT_PCT, THREE_PHASE_DROP_LIMIT_PCT, drop_percent, drop_volts,
};
