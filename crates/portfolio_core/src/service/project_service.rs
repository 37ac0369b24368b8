//! Project CRUD controller.
//!
//! # Responsibility
//! - Resolve the five user intents (create, search, update, delete, switch
//!   backend) against the store and the active storage variant.
//! - Report every intent outcome as exactly one notification.
//!
//! # Invariants
//! - Mutations build a working copy; the store changes only after the
//!   active backend accepted the full list, and then adopts the backend's
//!   echoed copy.
//! - A failed intent leaves the store at its last known-good state.
//! - One intent resolves at a time; the in-flight latch rejects overlap
//!   instead of assuming UI discipline.

use crate::backend::{BackendError, BackendRegistry, LoadNotice, RegistryError, StorageBackend};
use crate::model::record::{
    parse_count_field, validate_record_id, ProjectRecord, RecordValidationError,
};
use crate::notify::{Notification, NotificationSink};
use crate::search::filter::filter_records;
use crate::store::record_store::RecordStore;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Controller-level intent failure.
#[derive(Debug)]
pub enum ServiceError {
    Validation(RecordValidationError),
    /// Create intent targeting an id already in the working list.
    DuplicateId(String),
    /// Update/delete intent handed a blank selection.
    NoSelection,
    /// Update/delete intent targeting an id absent from the working list.
    RecordNotFound(String),
    /// A second intent was entered while one was still unresolved.
    OperationInFlight,
    Backend(BackendError),
    Registry(RegistryError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(
                f,
                "a project with id `{id}` already exists; choose a different id"
            ),
            Self::NoSelection => write!(f, "select a project first"),
            Self::RecordNotFound(id) => write!(f, "no project with id `{id}` exists"),
            Self::OperationInFlight => write!(f, "another operation is still in progress"),
            Self::Backend(err) => write!(f, "{err}"),
            Self::Registry(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Backend(err) => Some(err),
            Self::Registry(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RecordValidationError> for ServiceError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<BackendError> for ServiceError {
    fn from(value: BackendError) -> Self {
        Self::Backend(value)
    }
}

impl From<RegistryError> for ServiceError {
    fn from(value: RegistryError) -> Self {
        Self::Registry(value)
    }
}

/// Form-shaped input for the create intent.
///
/// Numeric fields stay raw form text here; blank coerces to 0 during record
/// construction and anything non-numeric is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub alt: String,
    pub github: String,
    pub tags: String,
    pub commit_count: String,
    pub contributors: String,
    pub project_status: String,
    pub license_type: String,
}

impl RecordDraft {
    fn into_record(self) -> Result<ProjectRecord, RecordValidationError> {
        Ok(ProjectRecord {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image,
            alt: self.alt,
            github: self.github,
            tags: self.tags,
            commit_count: parse_count_field("commitCount", &self.commit_count)?,
            contributors: parse_count_field("contributors", &self.contributors)?,
            project_status: self.project_status,
            license_type: self.license_type,
        })
    }
}

/// Field-wise change set for the update intent.
///
/// `None` preserves the current value; `Some` replaces it. The record id is
/// not part of the patch and can never change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
    pub github: Option<String>,
    pub tags: Option<String>,
    pub commit_count: Option<String>,
    pub contributors: Option<String>,
    pub project_status: Option<String>,
    pub license_type: Option<String>,
}

impl RecordPatch {
    /// Builds the replacement entry for one existing record.
    pub fn apply_to(&self, existing: &ProjectRecord) -> Result<ProjectRecord, RecordValidationError> {
        Ok(ProjectRecord {
            id: existing.id.clone(),
            title: pick(&self.title, &existing.title),
            description: pick(&self.description, &existing.description),
            image: pick(&self.image, &existing.image),
            alt: pick(&self.alt, &existing.alt),
            github: pick(&self.github, &existing.github),
            tags: pick(&self.tags, &existing.tags),
            commit_count: match &self.commit_count {
                Some(raw) => parse_count_field("commitCount", raw)?,
                None => existing.commit_count,
            },
            contributors: match &self.contributors {
                Some(raw) => parse_count_field("contributors", raw)?,
                None => existing.contributors,
            },
            project_status: pick(&self.project_status, &existing.project_status),
            license_type: pick(&self.license_type, &existing.license_type),
        })
    }
}

fn pick(patched: &Option<String>, current: &str) -> String {
    patched.clone().unwrap_or_else(|| current.to_string())
}

/// Explicit serialization latch for mutating intents.
///
/// The UI is assumed to submit one action at a time; this latch turns that
/// assumption into an enforced contract.
#[derive(Debug, Default)]
struct IntentGuard {
    in_flight: bool,
}

impl IntentGuard {
    fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    fn finish(&mut self) {
        self.in_flight = false;
    }
}

/// CRUD controller over the record store and the registered backends.
pub struct ProjectService<S: NotificationSink> {
    store: RecordStore,
    backends: BackendRegistry,
    sink: S,
    guard: IntentGuard,
}

impl<S: NotificationSink> ProjectService<S> {
    /// Creates a controller with an empty store.
    ///
    /// Callers select a backend and `reload` (or `switch_backend`) to fill
    /// the store.
    pub fn new(backends: BackendRegistry, sink: S) -> Self {
        Self {
            store: RecordStore::new(),
            backends,
            sink,
            guard: IntentGuard::default(),
        }
    }

    /// Current authoritative list in backend order.
    pub fn records(&self) -> &[ProjectRecord] {
        self.store.all()
    }

    /// Looks up one record by exact id.
    pub fn find(&self, id: &str) -> Option<&ProjectRecord> {
        self.store.find_by_id(id)
    }

    /// Case-insensitive substring search over title, description, tags, and
    /// id. Pure read: no guard, no persistence, no notification.
    pub fn search(&self, term: &str) -> Vec<&ProjectRecord> {
        filter_records(self.store.all(), term)
    }

    /// Label of the currently selected storage variant.
    pub fn active_backend_label(&self) -> Option<&str> {
        self.backends.active_label()
    }

    /// Notification sink handle, mainly for inspection by the caller.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Create intent: validate, append to a working copy, persist, adopt
    /// the echoed list.
    pub fn create(&mut self, draft: RecordDraft) -> ServiceResult<()> {
        if !self.guard.begin() {
            return Err(ServiceError::OperationInFlight);
        }
        let result = self.create_inner(draft);
        self.finish_intent("intent_create", result)
    }

    /// Update intent: patch the matching entry (id immutable), persist,
    /// adopt the echoed list.
    pub fn update(&mut self, id: &str, patch: RecordPatch) -> ServiceResult<()> {
        if !self.guard.begin() {
            return Err(ServiceError::OperationInFlight);
        }
        let result = self.update_inner(id, patch);
        self.finish_intent("intent_update", result)
    }

    /// Delete intent: drop the matching entry, persist, adopt the echoed
    /// list.
    pub fn delete(&mut self, id: &str) -> ServiceResult<()> {
        if !self.guard.begin() {
            return Err(ServiceError::OperationInFlight);
        }
        let result = self.delete_inner(id);
        self.finish_intent("intent_delete", result)
    }

    /// Switch intent: select another registered variant and refresh from it.
    ///
    /// Data never moves between variants; the store simply adopts whatever
    /// the newly active backend loads.
    pub fn switch_backend(&mut self, label: &str) -> ServiceResult<()> {
        if !self.guard.begin() {
            return Err(ServiceError::OperationInFlight);
        }
        let result = self.switch_inner(label);
        self.finish_intent("backend_switch", result)
    }

    /// Re-runs `load()` on the active variant and replaces store contents.
    pub fn reload(&mut self) -> ServiceResult<()> {
        if !self.guard.begin() {
            return Err(ServiceError::OperationInFlight);
        }
        let result = self.reload_inner();
        self.finish_intent("store_reload", result)
    }

    fn create_inner(&mut self, draft: RecordDraft) -> ServiceResult<Notification> {
        validate_record_id(&draft.id)?;
        if self.store.contains_id(&draft.id) {
            return Err(ServiceError::DuplicateId(draft.id));
        }

        let record = draft.into_record()?;
        let id = record.id.clone();
        let mut working = self.store.all().to_vec();
        working.push(record);

        let echoed = self.persist(&working)?;
        self.store.replace_all(echoed);
        Ok(Notification::success(format!("Project `{id}` created.")))
    }

    fn update_inner(&mut self, id: &str, patch: RecordPatch) -> ServiceResult<Notification> {
        let selection = self.require_selection(id)?;
        let existing = self
            .store
            .find_by_id(&selection)
            .ok_or_else(|| ServiceError::RecordNotFound(selection.clone()))?;
        let replacement = patch.apply_to(existing)?;

        let working: Vec<ProjectRecord> = self
            .store
            .all()
            .iter()
            .map(|record| {
                if record.id == selection {
                    replacement.clone()
                } else {
                    record.clone()
                }
            })
            .collect();

        let echoed = self.persist(&working)?;
        self.store.replace_all(echoed);
        Ok(Notification::success(format!(
            "Project `{selection}` updated."
        )))
    }

    fn delete_inner(&mut self, id: &str) -> ServiceResult<Notification> {
        let selection = self.require_selection(id)?;
        if !self.store.contains_id(&selection) {
            return Err(ServiceError::RecordNotFound(selection));
        }

        let working: Vec<ProjectRecord> = self
            .store
            .all()
            .iter()
            .filter(|record| record.id != selection)
            .cloned()
            .collect();

        let echoed = self.persist(&working)?;
        self.store.replace_all(echoed);
        Ok(Notification::success(format!(
            "Project `{selection}` deleted."
        )))
    }

    fn switch_inner(&mut self, label: &str) -> ServiceResult<Notification> {
        self.backends.select_active(label)?;
        let backend = self.backends.require_active()?;
        Ok(self.refresh_with(backend))
    }

    fn reload_inner(&mut self) -> ServiceResult<Notification> {
        let backend = self.backends.require_active()?;
        Ok(self.refresh_with(backend))
    }

    /// Replaces store contents from one backend's `load()`.
    ///
    /// Load failure is not an intent failure: the store degrades to an
    /// empty list and the condition is reported through the notification.
    fn refresh_with(&mut self, backend: Arc<dyn StorageBackend>) -> Notification {
        let label = backend.label().to_string();
        match backend.load() {
            Ok(outcome) => {
                let count = outcome.records.len();
                self.store.replace_all(outcome.records);
                match outcome.notice {
                    None => Notification::success(format!(
                        "Loaded {count} project(s) from {label} storage."
                    )),
                    Some(LoadNotice::EmptySlot) => Notification::info(format!(
                        "No projects found in {label} storage yet. Create one to get started."
                    )),
                    Some(LoadNotice::CorruptSlot { detail }) => Notification::error(format!(
                        "Stored projects in {label} storage could not be read: {detail}"
                    )),
                }
            }
            Err(err) => {
                self.store.replace_all(Vec::new());
                Notification::error(format!(
                    "Error loading projects from {label} storage: {err}"
                ))
            }
        }
    }

    fn persist(&self, working: &[ProjectRecord]) -> ServiceResult<Vec<ProjectRecord>> {
        let backend = self.backends.require_active()?;
        Ok(backend.save(working)?)
    }

    fn require_selection(&self, id: &str) -> ServiceResult<String> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ServiceError::NoSelection);
        }
        Ok(trimmed.to_string())
    }

    fn finish_intent(
        &mut self,
        event: &'static str,
        result: ServiceResult<Notification>,
    ) -> ServiceResult<()> {
        self.guard.finish();
        match result {
            Ok(notification) => {
                info!("event={event} module=service status=ok count={}", self.store.len());
                self.sink.notify(notification);
                Ok(())
            }
            Err(err) => {
                error!("event={event} module=service status=error error={err}");
                self.sink.notify(Notification::error(err.to_string()));
                Err(err)
            }
        }
    }
}
