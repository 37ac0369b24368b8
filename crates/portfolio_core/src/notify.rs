//! Notification contract toward the presentation collaborator.
//!
//! # Responsibility
//! - Define the severity/message shape every intent outcome is reported
//!   with.
//! - Keep rendering, auto-dismissal, and styling on the presentation side.

/// Notification severity understood by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// One human-readable notification event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Receiver of controller notifications.
///
/// Implemented by the presentation layer; tests use an in-memory recorder.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}
