//! User-facing notifications and navigation events for the Backoffice SDK
//!
//! The SDK never renders anything. Instead, every part of it that would show
//! a toast or change the current page publishes through this crate, and the
//! embedding host (web view, TUI, test harness) decides what to do with it.
//!
//! ## Features
//!
//! - **Notification Hub** - Broadcast channel fan-out of toast-style messages
//! - **Canonical Messages** - One constructor per well-known failure class
//! - **Navigation Seam** - `Navigator` trait with noop and recording impls
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use backoffice_notify::{NotificationHub, Notification, Route};
//!
//! let hub = NotificationHub::new();
//! let mut toasts = hub.subscribe();
//!
//! hub.notify(Notification::session_expired());
//!
//! let seen = toasts.recv().await?;
//! assert_eq!(seen.message, "Your session has expired. Please sign in again.");
//! ```

pub mod hub;
pub mod navigation;
pub mod notification;

pub use hub::NotificationHub;
pub use navigation::{Navigator, NoopNavigator, RecordingNavigator, Route};
pub use notification::{Notification, NotificationKind, Severity};
