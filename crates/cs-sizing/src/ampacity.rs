//! Minimum conductor size for a required current.

use cs_core::units::Current;
use cs_tables::{CableSpec, CableTable, InstallationMethod};

/// A row picked from a table, with its position for stepping up.
#[derive(Debug, Clone, Copy)]
pub struct SizeSelection<'a> {
    pub index: usize,
    pub spec: &'a CableSpec,
}

/// First (smallest) row whose derated rating for `method` carries `load`.
///
/// The test is `ampacity × derating_factor >= load`, evaluated in that form
/// so the returned row always satisfies it exactly.
///
/// `None` means even the largest size is too small. That is an expected
/// outcome the optimizer handles by trying more parallel runs.
pub fn select_minimum_size(
    table: &CableTable,
    load: Current,
    derating_factor: f64,
    method: InstallationMethod,
) -> Option<SizeSelection<'_>> {
    table
        .iter()
        .enumerate()
        .find(|(_, spec)| spec.ampacity(method) * derating_factor >= load.value)
        .map(|(index, spec)| SizeSelection { index, spec })
}
