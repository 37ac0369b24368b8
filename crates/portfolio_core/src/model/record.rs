//! Project record domain model.
//!
//! # Responsibility
//! - Define the canonical record shape shared by both storage backends and
//!   the rendering collaborator.
//! - Own record id validation and numeric form-field coercion.
//!
//! # Invariants
//! - `id` is restricted to `[A-Za-z0-9_-]+` and never changes after creation.
//! - Wire field names are the fixed camelCase set consumed by the card
//!   renderer (`commitCount`, `projectStatus`, ...).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static RECORD_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid record id regex"));

/// Status values the card renderer styles specially.
///
/// Presentation vocabulary only: the data layer stores `project_status` as
/// free text and never validates it against this list.
pub const KNOWN_PROJECT_STATUSES: [&str; 4] =
    ["Active", "Completed", "In Progress", "Experimental"];

/// Validation error for record construction from user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Record id contains characters outside `[A-Za-z0-9_-]`.
    InvalidIdFormat { id: String },
    /// A numeric form field holds text that is neither blank nor an integer.
    InvalidNumericField { field: &'static str, value: String },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdFormat { id } => write!(
                f,
                "record id `{id}` may only contain letters, numbers, hyphens, and underscores"
            ),
            Self::InvalidNumericField { field, value } => {
                write!(f, "field `{field}` expects a whole number, got `{value}`")
            }
        }
    }
}

impl Error for RecordValidationError {}

/// One project's structured data.
///
/// A single flat entity: no foreign keys, no nested collections. `tags` is
/// kept as comma-separated free text, exactly as it crosses the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Unique within the working list; immutable post-creation.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Card image path or URL.
    pub image: String,
    /// Alt text for the card image.
    pub alt: String,
    /// Repository link shown on the card.
    pub github: String,
    /// Comma-separated free text.
    pub tags: String,
    #[serde(default)]
    pub commit_count: u32,
    #[serde(default)]
    pub contributors: u32,
    /// Free text; see [`KNOWN_PROJECT_STATUSES`] for the styled values.
    #[serde(default)]
    pub project_status: String,
    #[serde(default)]
    pub license_type: String,
}

/// Checks the record id character class.
pub fn validate_record_id(id: &str) -> Result<(), RecordValidationError> {
    if RECORD_ID_RE.is_match(id) {
        return Ok(());
    }
    Err(RecordValidationError::InvalidIdFormat { id: id.to_string() })
}

/// Coerces a numeric form field to a count.
///
/// Blank input defaults to 0 to match the submit-empty-form flow; anything
/// else must parse as a non-negative integer.
pub fn parse_count_field(field: &'static str, raw: &str) -> Result<u32, RecordValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| RecordValidationError::InvalidNumericField {
            field,
            value: raw.to_string(),
        })
}
