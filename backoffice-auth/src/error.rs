// Error types for authentication flows

use backoffice_forms::{ValidationError, ValidationErrors};
use backoffice_http::ApiError;
use thiserror::Error;

/// Result type for auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors surfaced by [`AuthClient`](crate::AuthClient) operations.
///
/// `Rejected` carries the server's own verdict on the submitted form
/// (wrong password, duplicate email) so hosts can render it verbatim.
/// Transport-level failures stay wrapped in [`Api`](AuthError::Api); the
/// adapter has already produced their notifications by the time the error
/// reaches the caller.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The same flow is already pending; the submit was dropped.
    #[error("another attempt is already in progress")]
    FlowPending,

    /// The server accepted the login but returned no usable credential.
    #[error("the server did not return a credential")]
    MissingCredential,

    /// Password reset invoked without the token from the reset link.
    #[error("the reset link is missing its token")]
    MissingResetToken,

    /// Client-side validation failed; nothing was sent.
    #[error("validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// The server rejected the submission with a displayable message.
    #[error("{message}")]
    Rejected { message: String },

    /// Transport-level failure.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AuthError {
    /// Errors for a single field, empty unless this is `Validation`.
    pub fn field_errors(&self, field: &str) -> Vec<&ValidationError> {
        match self {
            AuthError::Validation(errors) => {
                errors.iter().filter(|e| e.field == field).collect()
            }
            _ => Vec::new(),
        }
    }
}

impl From<ValidationErrors> for AuthError {
    fn from(errors: ValidationErrors) -> Self {
        AuthError::Validation(errors.errors)
    }
}

impl From<Vec<ValidationError>> for AuthError {
    fn from(errors: Vec<ValidationError>) -> Self {
        AuthError::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
