//! cs-tables: reference cable tables for cablesize.
//!
//! Provides:
//! - Conductor materials and installation methods
//! - Per-size cable specifications (ampacity, impedance, voltage drop, cost)
//! - Validated, ordered per-material tables
//! - The immutable `ReferenceTableStore` shared by every sizing call
//! - Table files (YAML/JSON) and a content fingerprint
//!
//! Tables are loaded once and never mutated afterwards, so a store can be shared
//! across threads by reference or behind an `Arc` without locking.
//!
//! # Example
//!
//! ```
//! use cs_tables::{InstallationMethod, Material, ReferenceTableStore};
//!
//! let store = ReferenceTableStore::builtin();
//! let copper = store.lookup(Material::Copper).unwrap();
//! let smallest = &copper.rows()[0];
//! println!("{} carries {} A in ducts", smallest.size_label(), smallest.ampacity(InstallationMethod::Ducts));
//! ```

pub mod builtin;
pub mod error;
pub mod file;
pub mod material;
pub mod spec;
pub mod store;
pub mod table;

// Re-exports for ergonomics
pub use error::{TableError, TableResult};
pub use file::{TableDef, TableFileDef, load_json, load_yaml, save_json, save_yaml};
pub use material::{InstallationMethod, Material, Phase};
pub use spec::CableSpec;
pub use store::ReferenceTableStore;
pub use table::CableTable;
