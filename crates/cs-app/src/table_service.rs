//! Reference table loading.

use crate::error::{AppError, AppResult};
use cs_tables::ReferenceTableStore;
use std::path::Path;
use tracing::info;

/// True when `path` ends in `.json` (any case); everything else is YAML.
pub(crate) fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Load the built-in tables, or a YAML/JSON table file when `path` is given.
pub fn load_store(path: Option<&Path>) -> AppResult<ReferenceTableStore> {
    let Some(path) = path else {
        return Ok(ReferenceTableStore::builtin());
    };

    let loaded = if is_json(path) {
        cs_tables::load_json(path)
    } else {
        cs_tables::load_yaml(path)
    };
    let store = loaded.map_err(|e| AppError::TableFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    info!(
        path = %path.display(),
        fingerprint = %store.fingerprint(),
        "loaded reference tables"
    );
    Ok(store)
}

/// Write `store` to a YAML or JSON table file, chosen by extension.
pub fn save_store(path: &Path, store: &ReferenceTableStore) -> AppResult<()> {
    if is_json(path) {
        cs_tables::save_json(path, store)?;
    } else {
        cs_tables::save_yaml(path, store)?;
    }
    Ok(())
}
