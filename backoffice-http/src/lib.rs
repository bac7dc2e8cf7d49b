//! HTTP transport for the Backoffice SDK
//!
//! Every request to the admin backend goes through [`ApiClient`]. It is the
//! single choke point where the bearer credential is attached and where
//! failures are normalized into [`ApiError`] with uniform side effects:
//!
//! | outcome               | side effects                                         | error |
//! |-----------------------|------------------------------------------------------|-------|
//! | 401                   | session cleared, "session expired" toast, sign-in redirect | [`ApiError::Unauthorized`] |
//! | 403                   | "access denied" toast                                | [`ApiError::Forbidden`] |
//! | 5xx                   | generic server-error toast                           | [`ApiError::Server`] |
//! | client-side timeout   | timeout toast                                        | [`ApiError::Timeout`] |
//! | no response           | network toast                                        | [`ApiError::Network`] |
//! | other non-2xx         | none; server message carried to the caller           | [`ApiError::Response`] |
//!
//! Side effects run exactly once per user-visible failure, after any retries
//! are exhausted. Callers always get the `Err` as well; nothing is swallowed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backoffice_http::{ApiClient, HttpConfig, RetryPolicy};
//! use backoffice_notify::{NotificationHub, NoopNavigator};
//! use backoffice_session::SessionStore;
//! use std::sync::Arc;
//!
//! let config = HttpConfig::from_env()?; // BACKOFFICE_API_URL
//! let session = SessionStore::in_memory();
//! let hub = NotificationHub::new();
//! let api = ApiClient::new(config, session, hub, Arc::new(NoopNavigator))?;
//!
//! // Reads retry transient failures; the bearer header is attached
//! // automatically while a credential is set.
//! let response = api
//!     .get("/products/product")
//!     .query("page", "1")
//!     .send_with_retry(&RetryPolicy::default())
//!     .await?;
//! let products: serde_json::Value = response.json()?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod retry;

pub use client::ApiClient;
pub use config::{HttpConfig, HttpConfigBuilder, ENV_BASE_URL, ENV_TIMEOUT_SECS};
pub use error::{ApiError, Result};
pub use request::{FormPayload, RequestBuilder};
pub use response::Response;
pub use retry::{Backoff, RetryPolicy};

// The transport's collaborators, re-exported for downstream convenience.
pub use http::{Method, StatusCode};
