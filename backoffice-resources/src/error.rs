// Error types for resource access

use backoffice_http::ApiError;
use thiserror::Error;

/// Result type for resource operations
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Errors surfaced by [`ResourceClient`](crate::ResourceClient) operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Transport-level failure; its notification already fired.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response parsed as JSON but not as the expected entity shape.
    #[error("failed to decode {resource}: {message}")]
    Decode { resource: String, message: String },

    /// The operation is disabled for this resource, e.g. deleting a
    /// WhatsApp lead.
    #[error("{resource} does not support {operation}")]
    Unsupported {
        resource: String,
        operation: &'static str,
    },

    /// A mutation was invoked with an empty id.
    #[error("{resource} {operation} requires an id")]
    MissingId {
        resource: String,
        operation: &'static str,
    },
}

impl ResourceError {
    pub(crate) fn decode(resource: &str, error: impl std::fmt::Display) -> Self {
        ResourceError::Decode {
            resource: resource.to_string(),
            message: error.to_string(),
        }
    }

    pub(crate) fn unsupported(resource: &str, operation: &'static str) -> Self {
        ResourceError::Unsupported {
            resource: resource.to_string(),
            operation,
        }
    }

    pub(crate) fn missing_id(resource: &str, operation: &'static str) -> Self {
        ResourceError::MissingId {
            resource: resource.to_string(),
            operation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_resource() {
        let error = ResourceError::unsupported("whatsapp-leads", "delete");
        assert_eq!(error.to_string(), "whatsapp-leads does not support delete");

        let error = ResourceError::missing_id("products", "update");
        assert_eq!(error.to_string(), "products update requires an id");
    }
}
