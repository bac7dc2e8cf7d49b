//! Paginated table driver
//!
//! [`TableController`] owns the query state behind one table view: debounced
//! search, paging, and row actions. Results are published on a watch channel
//! as [`TableState`]; a failed load becomes an inline error state, never a
//! crash of the surrounding view.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use backoffice_notify::{Notification, NotificationHub};

use crate::client::ResourceClient;
use crate::error::Result;
use crate::page::Page;
use crate::query::ListQuery;

/// How long a search term must settle before the list fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// What a table currently shows.
#[derive(Debug, Clone)]
pub enum TableState<T> {
    /// Nothing requested yet.
    Idle,
    Loading {
        query: ListQuery,
    },
    Loaded {
        query: ListQuery,
        page: Page<T>,
    },
    /// The load failed; hosts render this inline and keep the table alive.
    Failed {
        query: ListQuery,
        message: String,
    },
}

/// Drives one table: search, paging, refresh, and row actions.
///
/// Clones share query state, the keystroke counter, and the published
/// state, so a clone handed to a spawned task stays coherent with the
/// original.
pub struct TableController<T> {
    client: ResourceClient<T>,
    hub: NotificationHub,
    query: Arc<Mutex<ListQuery>>,
    keystroke: Arc<AtomicU64>,
    debounce: Duration,
    state: Arc<watch::Sender<TableState<T>>>,
}

impl<T> Clone for TableController<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            hub: self.hub.clone(),
            query: self.query.clone(),
            keystroke: self.keystroke.clone(),
            debounce: self.debounce,
            state: self.state.clone(),
        }
    }
}

impl<T> TableController<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    pub fn new(client: ResourceClient<T>, hub: NotificationHub) -> Self {
        let (state, _) = watch::channel(TableState::Idle);
        Self {
            client,
            hub,
            query: Arc::new(Mutex::new(ListQuery::new())),
            keystroke: Arc::new(AtomicU64::new(0)),
            debounce: DEFAULT_DEBOUNCE,
            state: Arc::new(state),
        }
    }

    /// Shortens or lengthens the settle window. Tests use a few
    /// milliseconds here.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Replaces the initial query, e.g. to pre-apply a filter.
    pub fn with_query(self, query: ListQuery) -> Self {
        *self.query.lock() = query;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<TableState<T>> {
        self.state.subscribe()
    }

    /// Snapshot of the published state.
    pub fn current(&self) -> TableState<T>
    where
        T: Clone,
    {
        self.state.borrow().clone()
    }

    /// Snapshot of the query the next load would use.
    pub fn query(&self) -> ListQuery {
        self.query.lock().clone()
    }

    pub fn client(&self) -> &ResourceClient<T> {
        &self.client
    }

    /// Records a search keystroke.
    ///
    /// The list fires once the term has settled for the debounce window; a
    /// newer keystroke supersedes a pending one, so typing a word produces
    /// exactly one request. On settle the term replaces the previous one
    /// and the page resets to 1.
    pub fn search(&self, term: impl Into<String>) {
        let term = term.into();
        let token = self.keystroke.fetch_add(1, Ordering::SeqCst) + 1;
        let controller = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(controller.debounce).await;
            if controller.keystroke.load(Ordering::SeqCst) != token {
                return;
            }
            let query = {
                let mut query = controller.query.lock();
                query.set_search(&term);
                query.set_page(1);
                query.clone()
            };
            controller.run_list(query).await;
        });
    }

    /// Jumps to a page immediately. Supersedes any pending search settle.
    pub async fn set_page(&self, page: u64) {
        self.keystroke.fetch_add(1, Ordering::SeqCst);
        let query = {
            let mut query = self.query.lock();
            query.set_page(page);
            query.clone()
        };
        self.run_list(query).await;
    }

    /// Re-runs the current query immediately.
    pub async fn refresh(&self) {
        self.keystroke.fetch_add(1, Ordering::SeqCst);
        let query = self.query.lock().clone();
        self.run_list(query).await;
    }

    /// Deletes a row. Success notifies and refreshes the table; failure
    /// notifies and returns the error so the host keeps its dialog open.
    pub async fn delete_row(&self, id: &str) -> Result<()> {
        match self.client.delete(id).await {
            Ok(()) => {
                self.hub.notify(Notification::success("Deleted successfully."));
                self.refresh().await;
                Ok(())
            }
            Err(error) => {
                self.hub.notify(Notification::failure(error.to_string()));
                Err(error)
            }
        }
    }

    /// Saves an edited row with the resource's update verb.
    pub async fn save_row<P: Serialize>(&self, id: &str, payload: &P) -> Result<T> {
        match self.client.update(id, payload).await {
            Ok(entity) => {
                self.hub.notify(Notification::success("Saved successfully."));
                self.refresh().await;
                Ok(entity)
            }
            Err(error) => {
                self.hub.notify(Notification::failure(error.to_string()));
                Err(error)
            }
        }
    }

    async fn run_list(&self, query: ListQuery) {
        self.state.send_replace(TableState::Loading {
            query: query.clone(),
        });
        match self.client.list(&query).await {
            Ok(page) => {
                self.state.send_replace(TableState::Loaded { query, page });
            }
            Err(error) => {
                debug!(resource = self.client.name(), %error, "table load failed");
                self.state.send_replace(TableState::Failed {
                    query,
                    message: error.to_string(),
                });
            }
        }
    }
}
