//! Persistence backends for the record list.
//!
//! # Responsibility
//! - Define the `{load, save}` contract both storage variants implement.
//! - Keep transport and encoding details inside each variant.
//!
//! # Invariants
//! - `save` is a full-document overwrite; there is no incremental write.
//! - `save` returns the echoed authoritative list, which callers adopt even
//!   when it differs from what was sent.
//! - Switching variants never merges data between them.

use crate::model::record::ProjectRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub mod local;
pub mod registry;
pub mod remote;

pub use local::{LocalBackend, DEFAULT_SLOT_KEY, LOCAL_BACKEND_LABEL};
pub use registry::{BackendRegistry, RegistryError};
pub use remote::{RemoteBackend, RemoteConfig, REMOTE_BACKEND_LABEL};

pub type BackendResult<T> = Result<T, BackendError>;

/// Failure raised by a storage variant.
#[derive(Debug)]
pub enum BackendError {
    /// Local slot could not be written (quota exhaustion, permissions, ...).
    Storage { slot: PathBuf, source: io::Error },
    /// Record list could not be serialized for storage.
    Encode(serde_json::Error),
    /// Network-level failure talking to the remote document store.
    Transport(reqwest::Error),
    /// Remote endpoint answered with a non-success HTTP status.
    RemoteStatus { status: u16 },
    /// Remote response body lacked the expected `record` payload wrapper.
    MalformedEnvelope { detail: String },
}

impl Display for BackendError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage { slot, source } => {
                write!(f, "failed to write slot `{}`: {source}", slot.display())
            }
            Self::Encode(err) => write!(f, "failed to encode record list: {err}"),
            Self::Transport(err) => write!(f, "remote request failed: {err}"),
            Self::RemoteStatus { status } => {
                write!(f, "remote document store answered with status {status}")
            }
            Self::MalformedEnvelope { detail } => {
                write!(f, "remote response missing expected payload wrapper: {detail}")
            }
        }
    }
}

impl Error for BackendError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
            Self::Transport(err) => Some(err),
            Self::RemoteStatus { .. } => None,
            Self::MalformedEnvelope { .. } => None,
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Non-fatal condition observed while loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadNotice {
    /// The slot does not exist yet; a fresh session starts empty.
    EmptySlot,
    /// The slot exists but its contents could not be decoded; the stored
    /// data is left untouched and the session starts empty.
    CorruptSlot { detail: String },
}

/// Result of a full-list load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Records in the order the backend returned them.
    pub records: Vec<ProjectRecord>,
    /// Informational condition for the caller to surface, if any.
    pub notice: Option<LoadNotice>,
}

impl LoadOutcome {
    /// Clean load with no condition to report.
    pub fn clean(records: Vec<ProjectRecord>) -> Self {
        Self {
            records,
            notice: None,
        }
    }

    /// Empty load carrying a notice.
    pub fn empty_with(notice: LoadNotice) -> Self {
        Self {
            records: Vec::new(),
            notice: Some(notice),
        }
    }
}

/// Persistence strategy over the full record list.
///
/// Implementations are interchangeable behind this contract; the caller must
/// reload explicitly after switching to a different variant.
pub trait StorageBackend {
    /// Stable identifier used for registry keys and log events.
    fn label(&self) -> &str;

    /// Reads the entire record list.
    fn load(&self) -> BackendResult<LoadOutcome>;

    /// Overwrites the entire stored list and returns the echoed
    /// authoritative copy.
    fn save(&self, records: &[ProjectRecord]) -> BackendResult<Vec<ProjectRecord>>;
}
