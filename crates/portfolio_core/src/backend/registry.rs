//! In-process backend registry and active-variant selection.
//!
//! # Responsibility
//! - Hold every registered storage variant under a validated label.
//! - Track which single variant load/save calls are dispatched to.
//!
//! # Invariants
//! - Labels are non-empty lowercase `[a-z0-9_-]` and unique.
//! - Selecting a variant changes dispatch only; no data moves between
//!   variants.

use super::StorageBackend;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Registration and selection errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    InvalidLabel(String),
    DuplicateLabel(String),
    UnknownLabel(String),
    /// A load/save was requested before any variant was selected.
    NoActiveBackend,
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLabel(label) => write!(f, "backend label is invalid: `{label}`"),
            Self::DuplicateLabel(label) => {
                write!(f, "backend label already registered: `{label}`")
            }
            Self::UnknownLabel(label) => write!(f, "no backend registered as `{label}`"),
            Self::NoActiveBackend => write!(f, "no active storage backend selected"),
        }
    }
}

impl Error for RegistryError {}

/// Runtime registry of storage variants.
#[derive(Default)]
pub struct BackendRegistry {
    backends: BTreeMap<String, Arc<dyn StorageBackend>>,
    active_label: Option<String>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one storage variant under its own label.
    pub fn register(&mut self, backend: Arc<dyn StorageBackend>) -> Result<(), RegistryError> {
        let label = backend.label().trim().to_string();
        if !is_valid_label(&label) {
            return Err(RegistryError::InvalidLabel(label));
        }
        if self.backends.contains_key(label.as_str()) {
            return Err(RegistryError::DuplicateLabel(label));
        }

        self.backends.insert(label, backend);
        Ok(())
    }

    /// Returns sorted registered labels.
    pub fn labels(&self) -> Vec<String> {
        self.backends.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Selects the variant subsequent load/save calls target.
    ///
    /// The caller must reload explicitly afterwards; selection itself never
    /// touches stored data.
    pub fn select_active(&mut self, label: &str) -> Result<(), RegistryError> {
        let normalized = label.trim();
        if !self.backends.contains_key(normalized) {
            return Err(RegistryError::UnknownLabel(normalized.to_string()));
        }
        self.active_label = Some(normalized.to_string());
        Ok(())
    }

    /// Returns the active variant's label.
    pub fn active_label(&self) -> Option<&str> {
        self.active_label.as_deref()
    }

    /// Returns one variant by label.
    pub fn get(&self, label: &str) -> Option<Arc<dyn StorageBackend>> {
        self.backends.get(label.trim()).cloned()
    }

    /// Returns the active variant handle.
    pub fn active_backend(&self) -> Option<Arc<dyn StorageBackend>> {
        let label = self.active_label()?;
        self.get(label)
    }

    /// Returns the active variant or the selection error.
    pub fn require_active(&self) -> Result<Arc<dyn StorageBackend>, RegistryError> {
        self.active_backend().ok_or(RegistryError::NoActiveBackend)
    }
}

fn is_valid_label(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}
