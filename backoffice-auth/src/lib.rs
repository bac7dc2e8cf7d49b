//! Authentication flows for the Backoffice SDK
//!
//! Sits on top of [`backoffice_http`] and [`backoffice_session`] and drives
//! the auth endpoints end to end: validation, the request itself, credential
//! installation, the follow-up profile fetch, notifications, and navigation.
//!
//! ## Features
//!
//! - **Non-reentrant flows**: login, register, logout, forgot- and
//!   reset-password each guard against double submission
//! - **Credential discipline**: a 2xx login without a usable token is a
//!   failure, never a half-authenticated session
//! - **Local-first logout**: server revocation is best-effort; the local
//!   teardown always happens
//! - **Enumeration-safe recovery**: forgot-password answers identically
//!   whether or not the account exists
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backoffice_auth::AuthClient;
//! use backoffice_http::{ApiClient, HttpConfig};
//! use backoffice_notify::{NotificationHub, NoopNavigator};
//! use backoffice_session::SessionStore;
//! use std::sync::Arc;
//!
//! let api = ApiClient::new(
//!     HttpConfig::from_env()?,
//!     SessionStore::in_memory(),
//!     NotificationHub::new(),
//!     Arc::new(NoopNavigator),
//! )?;
//! let auth = AuthClient::new(api);
//!
//! auth.login("admin@example.com", "hunter2!A").await?;
//! assert!(auth.api().session().is_authenticated());
//! ```

pub mod client;
pub mod error;
pub mod flow;
pub mod types;

pub use client::{AuthClient, PASSWORD_RESET_SENT};
pub use error::{AuthError, Result};
pub use flow::{FlowKind, FlowPhase};
pub use types::{
    AccessToken, ForgotPasswordRequest, LoginRequest, LoginResponse, RegisterRequest,
    ResetPasswordRequest, TokenPair,
};
