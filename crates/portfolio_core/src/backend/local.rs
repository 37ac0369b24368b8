//! File-slot storage variant.
//!
//! # Responsibility
//! - Persist the record list as one JSON array in a single named slot file.
//! - Map absent or undecodable slots to non-fatal load notices.
//!
//! # Invariants
//! - The slot holds a bare JSON array; no schema version field, no
//!   migration path.
//! - Corrupt slot contents are never overwritten by `load`; only `save`
//!   rewrites the file.

use super::{BackendError, BackendResult, LoadNotice, LoadOutcome, StorageBackend};
use crate::model::record::ProjectRecord;
use log::{error, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const LOCAL_BACKEND_LABEL: &str = "local";

/// Default slot key, matching the name the site has always stored under.
pub const DEFAULT_SLOT_KEY: &str = "portfolio-projects";

/// Storage variant backed by a JSON slot file.
pub struct LocalBackend {
    slot_path: PathBuf,
}

impl LocalBackend {
    /// Creates a backend writing to an explicit slot file path.
    pub fn new(slot_path: impl Into<PathBuf>) -> Self {
        Self {
            slot_path: slot_path.into(),
        }
    }

    /// Creates a backend using a named slot inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>, slot_key: &str) -> Self {
        Self::new(dir.as_ref().join(format!("{slot_key}.json")))
    }

    /// Path of the slot file this backend reads and writes.
    pub fn slot_path(&self) -> &Path {
        &self.slot_path
    }
}

impl StorageBackend for LocalBackend {
    fn label(&self) -> &str {
        LOCAL_BACKEND_LABEL
    }

    fn load(&self) -> BackendResult<LoadOutcome> {
        let started_at = Instant::now();

        let raw = match fs::read_to_string(&self.slot_path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "event=slot_load module=backend status=ok backend=local notice=empty_slot duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(LoadOutcome::empty_with(LoadNotice::EmptySlot));
            }
            Err(err) => {
                // Unreadable is handled like undecodable: the session starts
                // empty and the slot is left as-is.
                error!(
                    "event=slot_load module=backend status=error backend=local error_code=slot_unreadable error={err}"
                );
                return Ok(LoadOutcome::empty_with(LoadNotice::CorruptSlot {
                    detail: err.to_string(),
                }));
            }
        };

        match serde_json::from_str::<Vec<ProjectRecord>>(&raw) {
            Ok(records) => {
                info!(
                    "event=slot_load module=backend status=ok backend=local count={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(LoadOutcome::clean(records))
            }
            Err(err) => {
                error!(
                    "event=slot_load module=backend status=error backend=local error_code=slot_corrupt error={err}"
                );
                Ok(LoadOutcome::empty_with(LoadNotice::CorruptSlot {
                    detail: err.to_string(),
                }))
            }
        }
    }

    fn save(&self, records: &[ProjectRecord]) -> BackendResult<Vec<ProjectRecord>> {
        let started_at = Instant::now();
        let encoded = serde_json::to_string(records)?;

        if let Some(parent) = self.slot_path.parent() {
            fs::create_dir_all(parent).map_err(|source| BackendError::Storage {
                slot: self.slot_path.clone(),
                source,
            })?;
        }

        if let Err(source) = fs::write(&self.slot_path, encoded) {
            error!(
                "event=slot_save module=backend status=error backend=local error_code=slot_write_failed error={source}"
            );
            return Err(BackendError::Storage {
                slot: self.slot_path.clone(),
                source,
            });
        }

        info!(
            "event=slot_save module=backend status=ok backend=local count={} duration_ms={}",
            records.len(),
            started_at.elapsed().as_millis()
        );

        // The slot write is all-or-nothing, so the written list is the echo.
        Ok(records.to_vec())
    }
}
