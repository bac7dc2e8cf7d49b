//! Backoffice - a headless admin-console SDK for a commerce REST backend
//!
//! The workspace splits along runtime concerns; this crate re-exports the
//! members and assembles them into one [`Backoffice`] handle:
//!
//! - [`backoffice_session`]: credential + profile state with a generation
//!   counter that fences out results from a superseded sign-in.
//! - [`backoffice_http`]: the single transport choke point. Attaches the
//!   bearer credential and normalizes failures (401 teardown, toasts,
//!   retries) so callers never branch on status codes.
//! - [`backoffice_auth`]: login, registration, logout, and the password
//!   reset flows, with client-side validation before any request.
//! - [`backoffice_resources`]: typed resource clients with
//!   stale-while-revalidate caching, write-through invalidation, and
//!   debounced table controllers.
//! - [`backoffice_notify`]: UI-agnostic toast and navigation events.
//! - [`backoffice_forms`]: field validators shared by auth and checkout
//!   forms.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backoffice::prelude::*;
//!
//! let console = Backoffice::from_env()?; // BACKOFFICE_API_URL
//! let mut toasts = console.hub().subscribe();
//!
//! console.auth().login("admin@example.com", "hunter2!A").await?;
//!
//! let products = console.admin().products();
//! let page = products.list(&ListQuery::default().search("shampoo")).await?;
//! ```

pub mod app;

pub use app::{Backoffice, BackofficeBuilder};

// Re-export the member crates under their concern names.
pub use backoffice_auth as auth;
pub use backoffice_forms as forms;
pub use backoffice_http as http;
pub use backoffice_notify as notify;
pub use backoffice_resources as resources;
pub use backoffice_session as session;

/// The types most hosts touch, in one import.
pub mod prelude {
    pub use crate::app::{Backoffice, BackofficeBuilder};

    pub use backoffice_auth::{AuthClient, AuthError, FlowKind, FlowPhase};
    pub use backoffice_forms::{ValidationError, ValidationErrors};
    pub use backoffice_http::{ApiClient, ApiError, HttpConfig, RetryPolicy};
    pub use backoffice_notify::{
        Navigator, Notification, NotificationHub, NotificationKind, Route, Severity,
    };
    pub use backoffice_resources::{
        AdminApi, ListQuery, Page, ResourceClient, ResourceError, TableController, TableState,
    };
    pub use backoffice_session::{Session, SessionStore, UserProfile};
}
