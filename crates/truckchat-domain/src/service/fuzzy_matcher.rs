//! Resolves free-text truck identification against the reference table
//!
//! A case-insensitive exact hit is authoritative. Otherwise the entry with
//! the smallest edit distance is proposed, and the caller must get an
//! explicit yes/no from the user before treating it as the user's truck.

use tracing::debug;

use crate::model::{ReferenceEntry, ReferenceTable};
use crate::service::edit_distance;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// Lowercase input equals an entry's lowercase primary name
    Exact(&'a ReferenceEntry),
    /// Nearest entry by edit distance, needs confirmation
    Candidate {
        entry: &'a ReferenceEntry,
        distance: usize,
    },
    /// Empty table, nothing to propose
    Unmatched,
}

/// Match `input` against the primary names of `table`.
///
/// Ties on distance go to the entry that appears first in the table.
pub fn resolve<'a>(input: &str, table: &'a ReferenceTable) -> MatchResult<'a> {
    let normalized = input.trim().to_lowercase();

    if let Some(entry) = table
        .entries()
        .iter()
        .find(|e| e.name_lower() == normalized)
    {
        debug!(input, matched = entry.name(), "exact reference match");
        return MatchResult::Exact(entry);
    }

    let mut best: Option<(&ReferenceEntry, usize)> = None;
    for entry in table.distinct_primary() {
        let distance = edit_distance(&normalized, entry.name_lower());
        match best {
            Some((_, best_distance)) if best_distance <= distance => {}
            _ => best = Some((entry, distance)),
        }
    }

    match best {
        Some((entry, distance)) => {
            debug!(input, candidate = entry.name(), distance, "nearest reference match");
            MatchResult::Candidate { entry, distance }
        }
        None => {
            debug!(input, "reference table is empty");
            MatchResult::Unmatched
        }
    }
}

/// Case-insensitive exact lookup of a model, restricted to one manufacturer
pub fn find_model<'a>(
    table: &'a ReferenceTable,
    manufacturer: &str,
    model: &str,
) -> Option<&'a ReferenceEntry> {
    let model_lower = model.trim().to_lowercase();
    table
        .models_of(manufacturer)
        .into_iter()
        .find(|e| e.model_lower() == Some(model_lower.as_str()))
}
