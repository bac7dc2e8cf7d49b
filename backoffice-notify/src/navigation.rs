//! Navigation seam
//!
//! The SDK decides *when* to change pages (session expiry, login success,
//! post-registration) but the host owns the actual router. [`Navigator`] is
//! that boundary.

use std::fmt;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Pages the SDK navigates to on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Dashboard,
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
}

impl Route {
    pub fn as_path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Login => "/auth/sign-in",
            Route::Register => "/auth/sign-up",
            Route::ForgotPassword => "/auth/forgot-password",
            Route::ResetPassword => "/auth/reset-password",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Host-owned router. Implementations must not block.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Discards navigation requests. Default for headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "navigation dropped (noop navigator)");
    }
}

/// Remembers every requested route. Used by tests and by hosts that poll
/// instead of reacting.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Route> {
        self.routes.lock().last().copied()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().clone()
    }

    pub fn take(&self) -> Vec<Route> {
        std::mem::take(&mut *self.routes.lock())
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().push(route);
    }
}
