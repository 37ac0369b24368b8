//! Linear substring filter over the in-memory record list.
//!
//! # Responsibility
//! - Match a search term against title, description, tags, and id.
//! - Preserve the list's original order in the result.
//!
//! # Invariants
//! - Matching is case-insensitive on both sides.
//! - A blank term matches every record.
//!
//! The list holds dozens of records, so every call is a plain linear scan;
//! there is no index to maintain.

use crate::model::record::ProjectRecord;

/// Returns the records whose searchable fields contain `term`.
pub fn filter_records<'a>(records: &'a [ProjectRecord], term: &str) -> Vec<&'a ProjectRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| record_matches(record, &needle))
        .collect()
}

/// Checks one record against an already-lowercased needle.
fn record_matches(record: &ProjectRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.tags.to_lowercase().contains(needle)
        || record.id.to_lowercase().contains(needle)
}
