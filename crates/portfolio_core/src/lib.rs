//! Core domain logic for the portfolio project manager.
//! This crate is the single source of truth for record invariants.

pub mod backend;
pub mod logging;
pub mod model;
pub mod notify;
pub mod search;
pub mod service;
pub mod store;

pub use backend::{
    BackendError, BackendRegistry, BackendResult, LoadNotice, LoadOutcome, LocalBackend,
    RegistryError, RemoteBackend, RemoteConfig, StorageBackend, DEFAULT_SLOT_KEY,
    LOCAL_BACKEND_LABEL, REMOTE_BACKEND_LABEL,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{
    parse_count_field, validate_record_id, ProjectRecord, RecordValidationError,
    KNOWN_PROJECT_STATUSES,
};
pub use notify::{Notification, NotificationSink, Severity};
pub use search::filter::filter_records;
pub use service::project_service::{
    ProjectService, RecordDraft, RecordPatch, ServiceError, ServiceResult,
};
pub use store::record_store::RecordStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
