//! Session state for the Backoffice SDK
//!
//! One process-wide [`SessionStore`] is the single source of truth for "who
//! is signed in". Everything else (the HTTP transport, auth flows, the
//! resource cache) holds a cheap clone of it.
//!
//! ## Features
//!
//! - **Snapshot State** - Credential, profile, loading flag, last error
//! - **Generation Counter** - Sign-in/sign-out each start a new session
//!   identity; results from a previous identity are discarded on arrival
//! - **Pluggable Persistence** - [`CredentialStore`] trait with in-memory
//!   and cookie-line implementations
//! - **Watch Subscription** - Hosts observe every state change
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backoffice_session::SessionStore;
//!
//! let session = SessionStore::in_memory();
//! let mut changes = session.subscribe();
//!
//! session.set_credential("abc");
//! assert!(session.is_authenticated());
//!
//! session.clear();
//! assert_eq!(session.credential(), None);
//! ```
//!
//! ## The generation counter
//!
//! Profile fetches and cached reads race sign-out. Rather than cancelling
//! in-flight work, each mutation of the session identity bumps a counter and
//! late results carrying an old generation are dropped:
//!
//! ```rust,ignore
//! let generation = session.begin_profile_fetch();
//! // ... network round trip, during which the user signs out ...
//! session.apply_profile(generation, Ok(profile)); // discarded, session stays empty
//! ```

pub mod credentials;
pub mod profile;
pub mod store;

pub use credentials::{
    CookieCredentialStore, CredentialStore, InMemoryCredentialStore, CREDENTIAL_COOKIE,
};
pub use profile::UserProfile;
pub use store::{Session, SessionStore};
