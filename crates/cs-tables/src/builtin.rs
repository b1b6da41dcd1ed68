//! Built-in reference tables.
//!
//! Four-core PVC-insulated, steel-wire-armoured 600/1000 V cables. Ratings are
//! for 30 °C air / 25 °C ground, single circuit, no grouping. Costs are
//! indicative per-metre rates for one cable.

use crate::{CableSpec, CableTable, Material};

// size, ground, ducts, air, Ω/km, 3ph mV/A/m, 1ph mV/A/m, supply, install, diameter mm, kg/km
type Row = (f64, f64, f64, f64, f64, f64, f64, f64, f64, f64, f64);

const COPPER: [Row; 16] = [
    (1.5, 25.0, 20.0, 18.0, 14.48, 25.0, 29.0, 34.0, 80.0, 14.5, 420.0),
    (2.5, 33.0, 27.0, 25.0, 8.87, 15.0, 18.0, 43.0, 81.0, 16.0, 520.0),
    (4.0, 43.0, 35.0, 32.0, 5.52, 9.5, 11.0, 56.0, 81.0, 17.5, 650.0),
    (6.0, 53.0, 44.0, 41.0, 3.69, 6.4, 7.3, 74.0, 82.0, 19.0, 790.0),
    (10.0, 71.0, 58.0, 55.0, 2.19, 3.8, 4.4, 135.0, 83.0, 21.5, 1050.0),
    (16.0, 91.0, 75.0, 72.0, 1.38, 2.4, 2.8, 164.0, 85.0, 24.0, 1400.0),
    (25.0, 116.0, 96.0, 95.0, 0.8749, 1.5, 1.75, 245.0, 88.0, 28.0, 2100.0),
    (35.0, 139.0, 115.0, 115.0, 0.6335, 1.1, 1.25, 335.0, 91.0, 30.0, 2600.0),
    (50.0, 164.0, 135.0, 140.0, 0.4718, 0.80, 0.93, 470.0, 95.0, 33.5, 3300.0),
    (70.0, 200.0, 167.0, 175.0, 0.3325, 0.57, 0.66, 650.0, 101.0, 37.5, 4400.0),
    (95.0, 239.0, 197.0, 215.0, 0.2460, 0.42, 0.48, 875.0, 109.0, 42.0, 5800.0),
    (120.0, 271.0, 223.0, 250.0, 0.2012, 0.35, 0.40, 1100.0, 116.0, 46.0, 7100.0),
    (150.0, 300.0, 251.0, 285.0, 0.1698, 0.29, 0.34, 1370.0, 125.0, 51.0, 8700.0),
    (185.0, 341.0, 281.0, 330.0, 0.1445, 0.24, 0.28, 1685.0, 136.0, 56.0, 10600.0),
    (240.0, 394.0, 330.0, 385.0, 0.1160, 0.20, 0.23, 2180.0, 152.0, 62.0, 13600.0),
    (300.0, 440.0, 365.0, 440.0, 0.0986, 0.17, 0.20, 2720.0, 170.0, 68.0, 16700.0),
];

const ALUMINIUM: [Row; 10] = [
    (25.0, 90.0, 74.0, 72.0, 1.20, 2.5, 2.9, 90.0, 86.0, 27.0, 1250.0),
    (35.0, 108.0, 89.0, 88.0, 0.868, 1.8, 2.1, 120.0, 89.0, 29.0, 1450.0),
    (50.0, 128.0, 106.0, 107.0, 0.641, 1.35, 1.55, 165.0, 93.0, 32.0, 1750.0),
    (70.0, 157.0, 130.0, 135.0, 0.443, 0.93, 1.08, 225.0, 98.0, 35.0, 2200.0),
    (95.0, 186.0, 154.0, 165.0, 0.320, 0.68, 0.79, 300.0, 104.0, 39.0, 2800.0),
    (120.0, 211.0, 175.0, 191.0, 0.253, 0.54, 0.63, 375.0, 110.0, 42.0, 3300.0),
    (150.0, 236.0, 196.0, 218.0, 0.206, 0.45, 0.52, 465.0, 118.0, 46.0, 3900.0),
    (185.0, 267.0, 222.0, 250.0, 0.164, 0.37, 0.43, 570.0, 126.0, 51.0, 4700.0),
    (240.0, 310.0, 258.0, 296.0, 0.125, 0.29, 0.34, 735.0, 140.0, 56.0, 5900.0),
    (300.0, 350.0, 291.0, 340.0, 0.100, 0.24, 0.28, 915.0, 155.0, 62.0, 7100.0),
];

fn to_spec(row: &Row) -> CableSpec {
    let &(size, ground, ducts, air, ohm, vd3, vd1, supply, install, dia, mass) = row;
    CableSpec {
        size_mm2: size,
        ampacity_ground_a: ground,
        ampacity_ducts_a: ducts,
        ampacity_air_a: air,
        ohm_per_km: ohm,
        volt_drop_3ph_mv_per_a_m: vd3,
        volt_drop_1ph_mv_per_a_m: vd1,
        supply_cost_per_m: supply,
        install_cost_per_m: install,
        diameter_mm: Some(dia),
        mass_kg_per_km: Some(mass),
    }
}

/// Raw rows of the built-in table for `material`.
pub fn builtin_rows(material: Material) -> Vec<CableSpec> {
    let rows: &[Row] = match material {
        Material::Copper => &COPPER,
        Material::Aluminium => &ALUMINIUM,
    };
    rows.iter().map(to_spec).collect()
}

/// Validated built-in table for `material`.
///
/// # Panics
///
/// Panics if the compiled-in data violates the table invariants. The unit
/// tests below guard against that.
pub fn builtin_table(material: Material) -> CableTable {
    CableTable::new(material, builtin_rows(material))
        .unwrap_or_else(|e| panic!("built-in {material} table is invalid: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InstallationMethod;

    #[test]
    fn builtin_tables_are_valid() {
        for material in Material::ALL {
            let rows = builtin_rows(material);
            assert!(CableTable::new(material, rows).is_ok(), "{material} table");
        }
    }

    #[test]
    fn copper_covers_small_final_circuits() {
        let table = builtin_table(Material::Copper);
        assert_eq!(table.rows()[0].size_label(), "1.5mm²");
        assert_eq!(table.largest().size_label(), "300mm²");
    }

    #[test]
    fn aluminium_largest_air_rating_is_below_400a() {
        let table = builtin_table(Material::Aluminium);
        assert!(table.largest().ampacity(InstallationMethod::Air) < 400.0);
    }

    #[test]
    fn voltage_drop_falls_with_size() {
        for material in Material::ALL {
            let table = builtin_table(material);
            for pair in table.rows().windows(2) {
                assert!(pair[1].volt_drop_3ph_mv_per_a_m < pair[0].volt_drop_3ph_mv_per_a_m);
                assert!(pair[1].volt_drop_1ph_mv_per_a_m < pair[0].volt_drop_1ph_mv_per_a_m);
                assert!(pair[1].ohm_per_km < pair[0].ohm_per_km);
            }
        }
    }
}
