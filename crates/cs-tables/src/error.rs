//! Reference table errors.

use crate::Material;
use cs_core::CsError;
use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while parsing, building or loading reference tables.
///
/// Everything except `UnknownMaterial` and `UnknownInstallationMethod` is a
/// configuration error detected when the store is built, never per call.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Unknown conductor material: {0}")]
    UnknownMaterial(String),

    #[error("Unknown installation method: {0}")]
    UnknownInstallationMethod(String),

    #[error("Reference table for {material} has no rows")]
    EmptyTable { material: Material },

    #[error("Reference store has no tables")]
    NoTables,

    #[error("Duplicate reference table for {material}")]
    DuplicateMaterial { material: Material },

    #[error("Invalid row {size_mm2}mm² in {material} table: {what}")]
    InvalidRow {
        material: Material,
        size_mm2: f64,
        what: String,
    },

    #[error("{material} table is not monotonic at {size_mm2}mm²: {what}")]
    NonMonotonic {
        material: Material,
        size_mm2: f64,
        what: &'static str,
    },

    #[error("Unsupported table file version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TableError {
    pub(crate) fn invalid_row(material: Material, size_mm2: f64, err: CsError) -> Self {
        TableError::InvalidRow {
            material,
            size_mm2,
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = TableError::UnknownMaterial("gold".into());
        assert!(err.to_string().contains("gold"));

        let err = TableError::NonMonotonic {
            material: Material::Copper,
            size_mm2: 16.0,
            what: "air ampacity decreases",
        };
        let msg = err.to_string();
        assert!(msg.contains("copper"));
        assert!(msg.contains("16mm²"));
    }

    #[test]
    fn invalid_row_keeps_core_message() {
        let core = CsError::NonFinite {
            what: "ohm_per_km",
            value: f64::NAN,
        };
        let err = TableError::invalid_row(Material::Aluminium, 25.0, core);
        assert!(err.to_string().contains("ohm_per_km"));
    }
}
