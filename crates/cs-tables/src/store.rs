//! Immutable, load-once reference table store.

use crate::builtin::builtin_table;
use crate::{CableTable, Material, TableError, TableResult};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Per-material reference tables, read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTableStore {
    tables: BTreeMap<Material, CableTable>,
}

impl ReferenceTableStore {
    /// Store holding the compiled-in copper and aluminium tables.
    pub fn builtin() -> Self {
        let tables = Material::ALL
            .into_iter()
            .map(|material| (material, builtin_table(material)))
            .collect();
        Self { tables }
    }

    /// Build a store from already validated tables.
    ///
    /// Fails on an empty set or on two tables for the same material.
    pub fn from_tables(tables: impl IntoIterator<Item = CableTable>) -> TableResult<Self> {
        let mut map = BTreeMap::new();
        for table in tables {
            let material = table.material();
            if map.insert(material, table).is_some() {
                return Err(TableError::DuplicateMaterial { material });
            }
        }
        if map.is_empty() {
            return Err(TableError::NoTables);
        }
        Ok(Self { tables: map })
    }

    /// Ordered table for `material`.
    pub fn lookup(&self, material: Material) -> TableResult<&CableTable> {
        self.tables
            .get(&material)
            .ok_or_else(|| TableError::UnknownMaterial(material.to_string()))
    }

    /// Materials present in this store, in a stable order.
    pub fn materials(&self) -> impl Iterator<Item = Material> + '_ {
        self.tables.keys().copied()
    }

    pub fn tables(&self) -> impl Iterator<Item = &CableTable> + '_ {
        self.tables.values()
    }

    /// Hex SHA-256 over the canonical JSON of every table.
    ///
    /// Two stores with the same rows share a fingerprint, so callers can tag
    /// results with the table revision they were computed against.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for table in self.tables.values() {
            let json = serde_json::to_string(table).unwrap_or_default();
            hasher.update(json.as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}

impl Default for ReferenceTableStore {
    fn default() -> Self {
        Self::builtin()
    }
}
