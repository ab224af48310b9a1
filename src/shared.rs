//! Thread-Safe Cache Handle
//!
//! The recency-list splice and the index mutation inside each cache
//! operation must be atomic with respect to each other: a reader observing
//! the index after a partial splice could follow a slot mid-relink. A
//! single mutex therefore guards the whole cache and is held for the full
//! duration of every operation. A reader/writer split buys nothing here
//! because even `get` rewrites recency links.

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::FixedCapacityCache;
use crate::stats::StatsSnapshot;
use crate::Result;

/// Cloneable, thread-safe handle to a [`FixedCapacityCache`].
///
/// `Clone` clones the handle; all clones operate on the same cache.
/// Operations appear in some total order consistent with real-time
/// issuance, and none of them can block on anything but the lock itself.
pub struct SharedCache<K, V> {
    inner: Arc<Mutex<FixedCapacityCache<K, V>>>,
}

impl<K: Eq + Hash + Clone, V> SharedCache<K, V> {
    /// Create a shared cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`MAX_CAPACITY`](crate::MAX_CAPACITY);
    /// see [`try_new`](SharedCache::try_new).
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "created shared cache");
        Self {
            inner: Arc::new(Mutex::new(FixedCapacityCache::new(capacity))),
        }
    }

    /// Non-panicking constructor for capacities taken from configuration.
    pub fn try_new(capacity: usize) -> Result<Self> {
        let cache = FixedCapacityCache::try_new(capacity)?;
        debug!(capacity, "created shared cache");
        Ok(Self {
            inner: Arc::new(Mutex::new(cache)),
        })
    }

    /// Look up a key, mark it most-recently used, and clone the value out
    /// of the critical section.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Look up a key without touching recency order or statistics.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// Insert or update an entry, returning the previous value for an
    /// already-present key.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().put(key, value)
    }

    /// Remove an entry, returning its value.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    /// Detach and return the least-recently-used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.inner.lock().pop_lru()
    }

    /// Whether a key is resident. No recency effect.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// Current resident entry count.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Maximum resident entry count, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Drop all entries. Idempotent.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Keys in recency order (most-recent first), assembled under the lock
    /// so the result is a true point-in-time snapshot.
    pub fn keys_snapshot(&self) -> Vec<K> {
        self.inner.lock().keys().cloned().collect()
    }

    /// Snapshot of the operation counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.lock().stats()
    }

    /// Zero the operation counters.
    pub fn reset_stats(&self) {
        self.inner.lock().reset_stats();
    }

    /// Run `f` with exclusive access to the underlying cache.
    ///
    /// Useful for compound read-modify-write sequences that must not
    /// interleave with other handles.
    pub fn with<R>(&self, f: impl FnOnce(&mut FixedCapacityCache<K, V>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
