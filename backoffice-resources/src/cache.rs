//! Shared resource cache
//!
//! One cache serves every resource of an [`AdminApi`](crate::AdminApi).
//! Entries hold raw JSON keyed by `resource:kind:key` and carry the session
//! generation observed when their fetch started: an entry stored under an
//! older generation is a miss, so logout, login, and the 401 teardown
//! invalidate everything wholesale without walking the map. Mutations call
//! [`invalidate_resource`](ResourceCache::invalidate_resource) instead,
//! which is resource-wide but parameter-blind.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

/// Which operation produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    List,
    Detail,
}

impl EntryKind {
    fn as_str(self) -> &'static str {
        match self {
            EntryKind::List => "list",
            EntryKind::Detail => "detail",
        }
    }
}

/// What a lookup found.
#[derive(Debug, Clone, PartialEq)]
pub enum Freshness {
    /// Serve this; no action required.
    Fresh(Value),
    /// Serve this and start a background refresh. Handed to at most one
    /// caller per staleness period: the lookup flips the in-flight flag and
    /// later lookups see [`Fresh`](Freshness::Fresh) until the refresh
    /// lands or is abandoned.
    Stale(Value),
    Miss,
}

#[derive(Debug)]
struct CacheEntry {
    value: Value,
    stored_at: Instant,
    generation: u64,
    revalidating: bool,
}

/// Process-local cache of list pages and entity details.
#[derive(Debug, Default)]
pub struct ResourceCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry_key(resource: &str, kind: EntryKind, key: &str) -> String {
        format!("{resource}:{}:{key}", kind.as_str())
    }

    /// Looks up an entry against the caller's session generation and
    /// staleness threshold.
    pub fn lookup(
        &self,
        resource: &str,
        kind: EntryKind,
        key: &str,
        stale_after: Duration,
        generation: u64,
    ) -> Freshness {
        let full_key = Self::entry_key(resource, kind, key);
        let mut entries = self.entries.lock();
        let Some(entry) = entries.get_mut(&full_key) else {
            return Freshness::Miss;
        };
        if entry.generation != generation {
            // Stored under different credentials; drop it lazily.
            entries.remove(&full_key);
            return Freshness::Miss;
        }
        if entry.stored_at.elapsed() < stale_after || entry.revalidating {
            return Freshness::Fresh(entry.value.clone());
        }
        entry.revalidating = true;
        Freshness::Stale(entry.value.clone())
    }

    /// Inserts or replaces an entry. Last writer wins at the entry level;
    /// `generation` is the session generation observed when the fetch
    /// started, not when it landed.
    pub fn store(&self, resource: &str, kind: EntryKind, key: &str, value: Value, generation: u64) {
        let entry = CacheEntry {
            value,
            stored_at: Instant::now(),
            generation,
            revalidating: false,
        };
        self.entries
            .lock()
            .insert(Self::entry_key(resource, kind, key), entry);
    }

    /// Re-arms a stale entry after its background refresh failed, so the
    /// next lookup can try again.
    pub fn end_revalidation(&self, resource: &str, kind: EntryKind, key: &str) {
        if let Some(entry) = self
            .entries
            .lock()
            .get_mut(&Self::entry_key(resource, kind, key))
        {
            entry.revalidating = false;
        }
    }

    /// Removes every entry for `resource`: all parameter tuples, list and
    /// detail alike.
    pub fn invalidate_resource(&self, resource: &str) {
        let prefix = format!("{resource}:");
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(&prefix));
        debug!(resource, dropped = before - entries.len(), "cache invalidated");
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
