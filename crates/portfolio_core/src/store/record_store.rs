//! Record store implementation.
//!
//! # Responsibility
//! - Own the single authoritative `Vec<ProjectRecord>` for the session.
//! - Expose read APIs for controller and presentation callers.
//!
//! # Invariants
//! - List order is whatever the active backend returned; the store never
//!   re-sorts.
//! - `replace_all` is the only mutation path; there is no per-entry write
//!   API.

use crate::model::record::ProjectRecord;

/// Holder of the current authoritative record list.
///
/// The store itself does not validate, persist, or notify. The controller
/// decides when its contents are replaced, always with a full list a
/// backend has already accepted.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<ProjectRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current list in backend order.
    pub fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Atomically swaps the held list.
    ///
    /// The presentation layer's view is stale after this call until it asks
    /// for a re-render; there is no reactive binding.
    pub fn replace_all(&mut self, records: Vec<ProjectRecord>) {
        self.records = records;
    }

    /// Finds one record by exact id.
    pub fn find_by_id(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Returns whether a record with `id` is present.
    pub fn contains_id(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
