//! Cache Store Module
//!
//! Main cache engine: a mutex-guarded HashMap swept by a background task.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::CacheEntry;
use crate::tasks::spawn_sweep_task;

// == Shared State ==
/// State shared between cache handles and the sweeper.
#[derive(Debug)]
pub(crate) struct CacheShared {
    /// Key-value storage
    entries: Mutex<HashMap<String, CacheEntry>>,
    /// Maximum age before an entry becomes eligible for removal
    ttl: Duration,
}

impl CacheShared {
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // No operation panics while holding the guard, so a poisoned map is still whole.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Remove Expired ==
    /// Removes every entry older than the ttl at `now`.
    ///
    /// Returns the number of entries removed.
    pub(crate) fn remove_expired(&self, now: Instant) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now, self.ttl));
        before - entries.len()
    }
}

// == TTL Cache ==
/// Thread-safe byte cache whose entries are swept once they outlive the ttl.
///
/// Handles are cheap to clone and share the same underlying map. Expiration is
/// driven only by the sweeper, so `get` may still return an entry that has
/// outlived the ttl if no sweep has run since.
#[derive(Debug, Clone)]
pub struct TtlCache {
    inner: Arc<CacheShared>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweeper.
    ///
    /// The sweeper fires every `ttl` and stops once every handle to this
    /// cache has been dropped.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let inner = Arc::new(CacheShared {
            entries: Mutex::new(HashMap::new()),
            ttl,
        });

        spawn_sweep_task(Arc::downgrade(&inner), ttl);

        Self { inner }
    }

    // == Add ==
    /// Inserts or replaces the value stored under `key`.
    ///
    /// An overwrite resets the entry's age to zero.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let entry = CacheEntry::new(value.into());
        self.inner.lock().insert(key.into(), entry);
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if present.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.lock().get(key).map(|entry| entry.value.clone())
    }

    /// Returns the ttl this cache was created with.
    pub fn ttl(&self) -> Duration {
        self.inner.ttl
    }

    // == Length ==
    /// Returns the current number of entries, including any not yet swept.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    #[cfg(test)]
    pub(crate) fn shared(&self) -> &Arc<CacheShared> {
        &self.inner
    }
}
