//! Error types for the cs-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the library crates and
/// provides one error interface for every front-end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Reference table error: {0}")]
    Tables(String),

    #[error("Failed to load reference tables from {path}: {message}")]
    TableFile { path: PathBuf, message: String },

    #[error("Schedule error: {0}")]
    Schedule(String),

    #[error("Sizing failed: {0}")]
    Sizing(#[from] cs_sizing::SizingError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for cs-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from library error types
impl From<cs_tables::TableError> for AppError {
    fn from(err: cs_tables::TableError) -> Self {
        match err {
            cs_tables::TableError::UnknownMaterial(_)
            | cs_tables::TableError::UnknownInstallationMethod(_) => {
                AppError::InvalidInput(err.to_string())
            }
            other => AppError::Tables(other.to_string()),
        }
    }
}

impl From<cs_project::ScheduleError> for AppError {
    fn from(err: cs_project::ScheduleError) -> Self {
        AppError::Schedule(err.to_string())
    }
}
