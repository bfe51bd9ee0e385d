//! Column removal.

use crate::table::Table;
use log::warn;

/// Result of a [`drop_columns`] call: which names were removed and which
/// were not present to begin with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DropOutcome {
    pub dropped: Vec<String>,
    pub skipped: Vec<String>,
}

/// Remove the named columns that exist. Names that do not exist are
/// reported in the outcome (and logged) without failing the rest of the
/// operation; this op partially succeeds by design.
pub fn drop_columns(table: &mut Table, names: &[&str]) -> DropOutcome {
    let mut outcome = DropOutcome::default();
    for &name in names {
        if table.remove_column(name).is_some() {
            outcome.dropped.push(name.to_string());
        } else {
            outcome.skipped.push(name.to_string());
        }
    }
    if !outcome.skipped.is_empty() {
        warn!("columns not found, skipped: {:?}", outcome.skipped);
    }
    outcome
}
