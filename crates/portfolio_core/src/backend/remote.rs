//! Hosted-document storage variant.
//!
//! # Responsibility
//! - Read and overwrite the record list kept in a hosted JSON document bin.
//! - Unwrap the `record` payload envelope the document store answers with.
//!
//! # Invariants
//! - `save` is PUT semantics: the entire list replaces the remote document;
//!   no merge, no version reconciliation.
//! - The server's echoed record list is adopted as ground truth.

use super::{BackendError, BackendResult, LoadOutcome, StorageBackend};
use crate::model::record::ProjectRecord;
use log::{error, info};
use serde::Deserialize;
use std::time::Instant;

pub const REMOTE_BACKEND_LABEL: &str = "remote";

/// Document store API root (jsonbin v3 layout).
pub const DEFAULT_BASE_URL: &str = "https://api.jsonbin.io/v3";

const ACCESS_KEY_HEADER: &str = "X-Access-Key";
const VERSIONING_HEADER: &str = "X-Bin-Versioning";

/// Connection settings for one deployment's document bin.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    /// Fixed per-deployment document identifier.
    pub bin_id: String,
    /// Static access key sent on every request.
    pub access_key: String,
    /// Whether the server keeps a revision per overwrite. Off by default:
    /// the document is a plain mirror of the working list.
    pub versioning: bool,
}

impl RemoteConfig {
    pub fn new(bin_id: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            bin_id: bin_id.into(),
            access_key: access_key.into(),
            versioning: false,
        }
    }
}

/// Envelope wrapper the document store answers with.
#[derive(Debug, Deserialize)]
struct RecordEnvelope {
    record: Vec<ProjectRecord>,
}

/// Extracts the record array from a response body.
///
/// A body that is not JSON, lacks the `record` field, or carries a
/// non-array payload is a malformed envelope.
pub fn parse_record_envelope(body: &str) -> BackendResult<Vec<ProjectRecord>> {
    serde_json::from_str::<RecordEnvelope>(body)
        .map(|envelope| envelope.record)
        .map_err(|err| BackendError::MalformedEnvelope {
            detail: err.to_string(),
        })
}

/// Storage variant backed by the hosted document endpoint.
pub struct RemoteBackend {
    config: RemoteConfig,
    client: reqwest::blocking::Client,
}

impl RemoteBackend {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn read_url(&self) -> String {
        format!("{}/b/{}/latest", self.config.base_url, self.config.bin_id)
    }

    fn write_url(&self) -> String {
        format!("{}/b/{}", self.config.base_url, self.config.bin_id)
    }

    fn check_status(&self, event: &str, status: reqwest::StatusCode) -> BackendResult<()> {
        if status.is_success() {
            return Ok(());
        }
        error!(
            "event={event} module=backend status=error backend=remote error_code=remote_status http_status={}",
            status.as_u16()
        );
        Err(BackendError::RemoteStatus {
            status: status.as_u16(),
        })
    }
}

impl StorageBackend for RemoteBackend {
    fn label(&self) -> &str {
        REMOTE_BACKEND_LABEL
    }

    fn load(&self) -> BackendResult<LoadOutcome> {
        let started_at = Instant::now();

        let response = self
            .client
            .get(self.read_url())
            .header(ACCESS_KEY_HEADER, &self.config.access_key)
            .send()?;
        self.check_status("remote_load", response.status())?;

        let body = response.text()?;
        let records = parse_record_envelope(&body)?;

        info!(
            "event=remote_load module=backend status=ok backend=remote count={} duration_ms={}",
            records.len(),
            started_at.elapsed().as_millis()
        );
        Ok(LoadOutcome::clean(records))
    }

    fn save(&self, records: &[ProjectRecord]) -> BackendResult<Vec<ProjectRecord>> {
        let started_at = Instant::now();

        let mut request = self
            .client
            .put(self.write_url())
            .header(ACCESS_KEY_HEADER, &self.config.access_key)
            .json(records);
        if !self.config.versioning {
            request = request.header(VERSIONING_HEADER, "false");
        }

        let response = request.send()?;
        self.check_status("remote_save", response.status())?;

        let body = response.text()?;
        let echoed = parse_record_envelope(&body)?;

        info!(
            "event=remote_save module=backend status=ok backend=remote sent={} echoed={} duration_ms={}",
            records.len(),
            echoed.len(),
            started_at.elapsed().as_millis()
        );
        Ok(echoed)
    }
}
