//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Normalized request failure.
///
/// The well-known classes (401/403/5xx/timeout/network) have their own
/// variants because each carries distinct side effects; every other non-2xx
/// lands in [`ApiError::Response`] with whatever message the backend sent.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the credential (HTTP 401).
    #[error("Not authenticated")]
    Unauthorized,

    /// Authenticated but not allowed (HTTP 403).
    #[error("Access denied")]
    Forbidden,

    /// The backend failed (HTTP 5xx).
    #[error("Server error: {status}")]
    Server {
        /// HTTP status code.
        status: u16,
    },

    /// The request hit the client-side timeout.
    #[error("Request timed out")]
    Timeout,

    /// No response at all.
    #[error("Network error: {0}")]
    Network(String),

    /// Any other non-2xx verdict, message extracted from the body.
    #[error("Request failed: {status} - {message}")]
    Response {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, for the caller to display.
        message: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// Whether retrying the same request could plausibly succeed.
    ///
    /// Verdicts (401, 403, 4xx payload errors) are final; only transport
    /// trouble and server-side failures are worth repeating.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout | Self::Network(_) => true,
            Self::Server { .. } => true,
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }

    /// HTTP status code, when the failure came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::Server { status } | Self::Response { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message fit for end-user display.
    pub fn display_message(&self) -> String {
        match self {
            Self::Response { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classes() {
        assert!(ApiError::Timeout.is_retryable());
        assert!(ApiError::Network("refused".into()).is_retryable());
        assert!(ApiError::Server { status: 502 }.is_retryable());
    }

    #[test]
    fn test_final_verdicts_are_not_retryable() {
        assert!(!ApiError::Unauthorized.is_retryable());
        assert!(!ApiError::Forbidden.is_retryable());
        assert!(
            !ApiError::Response {
                status: 409,
                message: "duplicate".into()
            }
            .is_retryable()
        );
        assert!(!ApiError::Json("bad".into()).is_retryable());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::Unauthorized.status_code(), Some(401));
        assert_eq!(ApiError::Server { status: 503 }.status_code(), Some(503));
        assert_eq!(ApiError::Timeout.status_code(), None);
    }
}
