//! Shared application service layer for cablesize.
//!
//! This crate provides one interface for front-ends, centralizing table
//! loading, single-circuit sizing and whole-schedule sizing.

pub mod error;
pub mod schedule_service;
pub mod sizing_service;
pub mod table_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use schedule_service::{
    CircuitReport, ScheduleReport, load_schedule, save_schedule, size_schedule,
};
pub use sizing_service::{CircuitInput, size_circuit};
pub use table_service::{load_store, save_store};
