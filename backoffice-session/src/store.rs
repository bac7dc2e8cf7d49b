//! The session store
//!
//! Mutated by login success, logout, the transport's 401 teardown, and
//! profile refreshes. Reads hand out cloned snapshots; watchers get a
//! snapshot per mutation, in mutation order.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::credentials::{CredentialStore, InMemoryCredentialStore};
use crate::profile::UserProfile;

/// Point-in-time view of the session. Internally consistent: all fields
/// were read under one lock.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub credential: Option<String>,
    pub user: Option<UserProfile>,
    pub loading: bool,
    pub last_error: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }
}

struct State {
    session: Session,
    generation: u64,
}

struct Inner {
    state: RwLock<State>,
    store: Arc<dyn CredentialStore>,
    watch: watch::Sender<Session>,
}

/// Cheap-clone handle to the process-wide session.
///
/// The generation counter defines the session identity: `set_credential` and
/// `clear` each bump it, and results computed under an older generation
/// (profile fetches, cached pages) are discarded when they arrive.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Build over a persistence backend, seeding the credential from
    /// whatever it already holds.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let session = Session {
            credential: store.load(),
            ..Session::default()
        };
        let (watch, _) = watch::channel(session.clone());
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(State {
                    session,
                    generation: 0,
                }),
                store,
                watch,
            }),
        }
    }

    /// Volatile store; nothing survives the process. Handy in tests.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCredentialStore::new()))
    }

    pub fn snapshot(&self) -> Session {
        self.inner.state.read().session.clone()
    }

    pub fn credential(&self) -> Option<String> {
        self.inner.state.read().session.credential.clone()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.inner.state.read().session.user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.read().session.is_authenticated()
    }

    pub fn generation(&self) -> u64 {
        self.inner.state.read().generation
    }

    /// Observe every mutation. The receiver always holds the latest
    /// snapshot; intermediate states may be skipped under load.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.watch.subscribe()
    }

    /// Install a new credential (login success). Starts a new session
    /// identity: any profile or cached data from before does not belong to
    /// this credential and is invalidated by the generation bump.
    pub fn set_credential(&self, credential: &str) {
        self.inner.store.save(credential);
        self.mutate(|state| {
            state.session.credential = Some(credential.to_string());
            state.session.user = None;
            state.session.last_error = None;
            state.session.loading = false;
            state.generation += 1;
        });
        tracing::debug!("credential installed");
    }

    /// Tear the session down (logout, or the transport saw a 401). Wipes
    /// memory and persistence; never navigates. Idempotent.
    pub fn clear(&self) {
        self.inner.store.clear();
        self.mutate(|state| {
            state.session = Session::default();
            state.generation += 1;
        });
        tracing::debug!("session cleared");
    }

    /// Mark a profile fetch as started and capture the generation it runs
    /// under. Pass the returned value to [`apply_profile`](Self::apply_profile).
    pub fn begin_profile_fetch(&self) -> u64 {
        let mut generation = 0;
        self.mutate(|state| {
            state.session.loading = true;
            generation = state.generation;
        });
        generation
    }

    /// Land a profile fetch. A result from a generation other than the
    /// current one is dropped: a sign-out (or a newer sign-in) happened while
    /// it was in flight and wins.
    ///
    /// A failed fetch records the error and keeps any previously loaded
    /// profile; transient network trouble must not sign the user out.
    pub fn apply_profile(&self, generation: u64, result: Result<UserProfile, String>) {
        self.mutate(|state| {
            if state.generation != generation {
                tracing::debug!(
                    fetched = generation,
                    current = state.generation,
                    "stale profile result discarded"
                );
                return;
            }
            match result {
                Ok(profile) => {
                    state.session.user = Some(profile);
                    state.session.last_error = None;
                }
                Err(message) => {
                    state.session.last_error = Some(message);
                }
            }
            state.session.loading = false;
        });
    }

    fn mutate(&self, f: impl FnOnce(&mut State)) {
        let mut state = self.inner.state.write();
        f(&mut state);
        // Publish while still holding the lock so watchers observe
        // mutations in order.
        self.inner.watch.send_replace(state.session.clone());
    }
}
