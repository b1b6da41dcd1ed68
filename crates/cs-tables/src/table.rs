//! Validated, size-ordered table for one conductor material.

use crate::{CableSpec, InstallationMethod, Material, TableError, TableResult};
use serde::Serialize;

/// Rows for one material, ordered by increasing cross-section.
///
/// Construction enforces the ordering the optimizer relies on: for every
/// installation method the ampacity never decreases with size, and neither
/// does the unit cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CableTable {
    material: Material,
    rows: Vec<CableSpec>,
}

impl CableTable {
    pub fn new(material: Material, rows: Vec<CableSpec>) -> TableResult<Self> {
        if rows.is_empty() {
            return Err(TableError::EmptyTable { material });
        }

        for row in &rows {
            row.check()
                .map_err(|e| TableError::invalid_row(material, row.size_mm2, e))?;
        }

        for pair in rows.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let fail = |what| TableError::NonMonotonic {
                material,
                size_mm2: next.size_mm2,
                what,
            };

            if next.size_mm2 <= prev.size_mm2 {
                return Err(fail("sizes must be strictly increasing"));
            }
            for method in InstallationMethod::ALL {
                if next.ampacity(method) < prev.ampacity(method) {
                    return Err(fail(match method {
                        InstallationMethod::Ground => "ground ampacity decreases",
                        InstallationMethod::Ducts => "ducts ampacity decreases",
                        InstallationMethod::Air => "air ampacity decreases",
                    }));
                }
            }
            if next.unit_cost_per_m() < prev.unit_cost_per_m() {
                return Err(fail("unit cost decreases"));
            }
        }

        Ok(Self { material, rows })
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn rows(&self) -> &[CableSpec] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, index: usize) -> Option<&CableSpec> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CableSpec> {
        self.rows.iter()
    }

    pub fn largest(&self) -> &CableSpec {
        // Non-empty by construction.
        &self.rows[self.rows.len() - 1]
    }

    /// Find a row by cross-section.
    pub fn find_size(&self, size_mm2: f64) -> Option<&CableSpec> {
        self.rows.iter().find(|r| r.size_mm2 == size_mm2)
    }
}

impl<'a> IntoIterator for &'a CableTable {
    type Item = &'a CableSpec;
    type IntoIter = std::slice::Iter<'a, CableSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(size: f64, amps: f64, cost: f64) -> CableSpec {
        CableSpec {
            size_mm2: size,
            ampacity_ground_a: amps,
            ampacity_ducts_a: amps,
            ampacity_air_a: amps,
            ohm_per_km: 20.0 / size,
            volt_drop_3ph_mv_per_a_m: 35.0 / size,
            volt_drop_1ph_mv_per_a_m: 40.0 / size,
            supply_cost_per_m: cost,
            install_cost_per_m: 10.0,
            diameter_mm: None,
            mass_kg_per_km: None,
        }
    }

    #[test]
    fn accepts_monotone_rows() {
        let table = CableTable::new(
            Material::Copper,
            vec![row(2.5, 27.0, 40.0), row(4.0, 35.0, 55.0), row(6.0, 44.0, 70.0)],
        )
        .unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.largest().size_mm2, 6.0);
        assert!(table.find_size(4.0).is_some());
        assert!(table.find_size(5.0).is_none());
    }

    #[test]
    fn rejects_empty_table() {
        let err = CableTable::new(Material::Copper, vec![]).unwrap_err();
        assert!(matches!(err, TableError::EmptyTable { .. }));
    }

    #[test]
    fn rejects_unordered_sizes() {
        let err = CableTable::new(
            Material::Copper,
            vec![row(4.0, 35.0, 55.0), row(2.5, 40.0, 60.0)],
        )
        .unwrap_err();
        assert!(matches!(err, TableError::NonMonotonic { .. }));
    }

    #[test]
    fn rejects_decreasing_ampacity() {
        let mut bigger = row(4.0, 35.0, 55.0);
        bigger.ampacity_air_a = 20.0;
        let err =
            CableTable::new(Material::Aluminium, vec![row(2.5, 27.0, 40.0), bigger]).unwrap_err();
        match err {
            TableError::NonMonotonic { what, .. } => assert_eq!(what, "air ampacity decreases"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_decreasing_cost() {
        let err = CableTable::new(
            Material::Copper,
            vec![row(2.5, 27.0, 60.0), row(4.0, 35.0, 40.0)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TableError::NonMonotonic {
                what: "unit cost decreases",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_finite_row() {
        let mut bad = row(2.5, 27.0, 40.0);
        bad.volt_drop_1ph_mv_per_a_m = f64::INFINITY;
        let err = CableTable::new(Material::Copper, vec![bad]).unwrap_err();
        assert!(matches!(err, TableError::InvalidRow { .. }));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rows_from_steps(steps: &[(f64, f64, f64)]) -> Vec<CableSpec> {
        let (mut size, mut amps, mut cost) = (1.0, 10.0, 20.0);
        steps
            .iter()
            .map(|&(ds, da, dc)| {
                size += ds;
                amps += da;
                cost += dc;
                CableSpec {
                    size_mm2: size,
                    ampacity_ground_a: amps * 1.2,
                    ampacity_ducts_a: amps,
                    ampacity_air_a: amps * 1.1,
                    ohm_per_km: 20.0 / size,
                    volt_drop_3ph_mv_per_a_m: 35.0 / size,
                    volt_drop_1ph_mv_per_a_m: 40.0 / size,
                    supply_cost_per_m: cost,
                    install_cost_per_m: 50.0,
                    diameter_mm: None,
                    mass_kg_per_km: None,
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn monotone_rows_are_accepted(
            steps in prop::collection::vec((0.5_f64..50.0, 0.0_f64..40.0, 0.0_f64..200.0), 1..20)
        ) {
            let rows = rows_from_steps(&steps);
            let table = CableTable::new(Material::Copper, rows.clone()).unwrap();
            prop_assert_eq!(table.len(), rows.len());
            for row in &rows {
                prop_assert!(table.find_size(row.size_mm2).is_some());
            }
        }

        #[test]
        fn reversed_rows_are_rejected(
            steps in prop::collection::vec((0.5_f64..50.0, 0.0_f64..40.0, 0.0_f64..200.0), 2..20)
        ) {
            let mut rows = rows_from_steps(&steps);
            rows.reverse();
            let rejected = matches!(
                CableTable::new(Material::Copper, rows),
                Err(TableError::NonMonotonic { .. })
            );
            prop_assert!(rejected);
        }
    }
}
