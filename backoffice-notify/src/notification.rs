//! Notification payloads
//!
//! A [`Notification`] is what a host renders as a toast or status line. The
//! well-known constructors carry the canonical message for each failure class
//! so hosts and tests can match on [`NotificationKind`] instead of prose.

use serde::{Deserialize, Serialize};

/// Visual weight a host should give a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Stable discriminator for the notification's origin.
///
/// Hosts that want custom copy per class match here; the `message` field is
/// the default copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    /// The backend rejected the credential; the session was torn down.
    SessionExpired,
    /// Authenticated but not allowed (HTTP 403).
    AccessDenied,
    /// The backend failed (HTTP 5xx).
    ServerError,
    /// The request hit the client-side timeout.
    Timeout,
    /// No response at all (DNS, refused connection, dropped socket).
    Network,
    /// A row action or form submission completed.
    ActionSucceeded,
    /// A row action or form submission failed.
    ActionFailed,
    /// Anything else a caller wants to surface.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }

    pub fn session_expired() -> Self {
        Self::new(
            NotificationKind::SessionExpired,
            Severity::Warning,
            "Your session has expired. Please sign in again.",
        )
    }

    pub fn access_denied() -> Self {
        Self::new(
            NotificationKind::AccessDenied,
            Severity::Error,
            "You do not have permission to perform this action.",
        )
    }

    pub fn server_error() -> Self {
        Self::new(
            NotificationKind::ServerError,
            Severity::Error,
            "Something went wrong on our end. Please try again later.",
        )
    }

    pub fn timeout() -> Self {
        Self::new(
            NotificationKind::Timeout,
            Severity::Error,
            "The request timed out. Please check your connection and try again.",
        )
    }

    pub fn network() -> Self {
        Self::new(
            NotificationKind::Network,
            Severity::Error,
            "Could not reach the server. Please check your connection.",
        )
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::ActionSucceeded, Severity::Success, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::ActionFailed, Severity::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Custom, Severity::Info, message)
    }
}
