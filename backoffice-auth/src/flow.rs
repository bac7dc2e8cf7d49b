//! Flow state tracking
//!
//! Each auth operation is non-reentrant: while one submit is pending,
//! further submits of the same flow fail fast with
//! [`AuthError::FlowPending`](crate::AuthError::FlowPending) instead of
//! firing duplicate requests. Phases are readable so hosts can disable
//! submit buttons and render progress.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::AuthError;

/// The five independent auth flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    Login,
    Register,
    Logout,
    ForgotPassword,
    ResetPassword,
}

/// Where a flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPhase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Tracks all five flows for one [`AuthClient`](crate::AuthClient).
#[derive(Debug, Default)]
pub(crate) struct FlowTracker {
    phases: Mutex<HashMap<FlowKind, FlowPhase>>,
}

impl FlowTracker {
    pub(crate) fn phase(&self, kind: FlowKind) -> FlowPhase {
        self.phases.lock().get(&kind).copied().unwrap_or_default()
    }

    /// Marks `kind` pending and returns the guard that settles the outcome.
    pub(crate) fn begin(&self, kind: FlowKind) -> Result<FlowGuard<'_>, AuthError> {
        let mut phases = self.phases.lock();
        if phases.get(&kind) == Some(&FlowPhase::Pending) {
            return Err(AuthError::FlowPending);
        }
        phases.insert(kind, FlowPhase::Pending);
        Ok(FlowGuard {
            tracker: self,
            kind,
            settled: false,
        })
    }

    fn settle(&self, kind: FlowKind, phase: FlowPhase) {
        self.phases.lock().insert(kind, phase);
    }
}

/// Settles its flow on drop. Dropping without [`succeed`](Self::succeed)
/// records a failure, so early returns via `?` leave the phase correct.
pub(crate) struct FlowGuard<'a> {
    tracker: &'a FlowTracker,
    kind: FlowKind,
    settled: bool,
}

impl FlowGuard<'_> {
    pub(crate) fn succeed(mut self) {
        self.settled = true;
        self.tracker.settle(self.kind, FlowPhase::Succeeded);
    }
}

impl Drop for FlowGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.tracker.settle(self.kind, FlowPhase::Failed);
        }
    }
}
