//! Reference table files (YAML or JSON).
//!
//! ```yaml
//! version: 1
//! tables:
//!   - material: copper
//!     rows:
//!       - size_mm2: 16
//!         ampacity_ground_a: 91
//!         ...
//! ```

use crate::{CableSpec, CableTable, Material, ReferenceTableStore, TableError, TableResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const TABLE_FILE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableFileDef {
    pub version: u32,
    #[serde(default)]
    pub tables: Vec<TableDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableDef {
    pub material: Material,
    #[serde(default)]
    pub rows: Vec<CableSpec>,
}

impl TableFileDef {
    pub fn from_store(store: &ReferenceTableStore) -> Self {
        Self {
            version: TABLE_FILE_VERSION,
            tables: store
                .tables()
                .map(|t| TableDef {
                    material: t.material(),
                    rows: t.rows().to_vec(),
                })
                .collect(),
        }
    }

    /// Validate every table and build the store.
    pub fn into_store(self) -> TableResult<ReferenceTableStore> {
        if self.version > TABLE_FILE_VERSION {
            return Err(TableError::UnsupportedVersion {
                version: self.version,
            });
        }
        let tables = self
            .tables
            .into_iter()
            .map(|def| CableTable::new(def.material, def.rows))
            .collect::<TableResult<Vec<_>>>()?;
        ReferenceTableStore::from_tables(tables)
    }
}

pub fn from_yaml_str(content: &str) -> TableResult<ReferenceTableStore> {
    let file: TableFileDef = serde_yaml::from_str(content)?;
    file.into_store()
}

pub fn from_json_str(content: &str) -> TableResult<ReferenceTableStore> {
    let file: TableFileDef = serde_json::from_str(content)?;
    file.into_store()
}

pub fn load_yaml(path: &Path) -> TableResult<ReferenceTableStore> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn load_json(path: &Path) -> TableResult<ReferenceTableStore> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_yaml(path: &Path, store: &ReferenceTableStore) -> TableResult<()> {
    let content = serde_yaml::to_string(&TableFileDef::from_store(store))?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn save_json(path: &Path, store: &ReferenceTableStore) -> TableResult<()> {
    let content = serde_json::to_string_pretty(&TableFileDef::from_store(store))?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
version: 1
tables:
  - material: copper
    rows:
      - size_mm2: 2.5
        ampacity_ground_a: 33
        ampacity_ducts_a: 27
        ampacity_air_a: 25
        ohm_per_km: 8.87
        volt_drop_3ph_mv_per_a_m: 15
        volt_drop_1ph_mv_per_a_m: 18
        supply_cost_per_m: 43
        install_cost_per_m: 81
      - size_mm2: 4
        ampacity_ground_a: 43
        ampacity_ducts_a: 35
        ampacity_air_a: 32
        ohm_per_km: 5.52
        volt_drop_3ph_mv_per_a_m: 9.5
        volt_drop_1ph_mv_per_a_m: 11
        supply_cost_per_m: 56
        install_cost_per_m: 81
        diameter_mm: 17.5
"#;

    #[test]
    fn parses_yaml_table() {
        let store = from_yaml_str(SMALL).unwrap();
        let copper = store.lookup(Material::Copper).unwrap();
        assert_eq!(copper.len(), 2);
        assert_eq!(copper.rows()[1].diameter_mm, Some(17.5));
        assert_eq!(copper.rows()[0].mass_kg_per_km, None);
        assert!(store.lookup(Material::Aluminium).is_err());
    }

    #[test]
    fn rejects_future_version() {
        let content = SMALL.replace("version: 1", "version: 7");
        let err = from_yaml_str(&content).unwrap_err();
        assert!(matches!(err, TableError::UnsupportedVersion { version: 7 }));
    }

    #[test]
    fn rejects_unknown_material_name() {
        let content = SMALL.replace("material: copper", "material: gold");
        assert!(matches!(from_yaml_str(&content), Err(TableError::Yaml(_))));
    }

    #[test]
    fn builtin_survives_json_round_trip() {
        let store = ReferenceTableStore::builtin();
        let json = serde_json::to_string(&TableFileDef::from_store(&store)).unwrap();
        let loaded = from_json_str(&json).unwrap();
        assert_eq!(loaded.fingerprint(), store.fingerprint());
    }
}
