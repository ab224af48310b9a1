//! FixedCapacityCache implementation

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use super::arena::RecencyList;
use super::iter::{Iter, Keys};
use super::MAX_CAPACITY;
use crate::stats::{CacheStats, StatsSnapshot};
use crate::{CacheError, Result};

/// Bounded key-value store with O(1) average-case get/put and strict
/// least-recently-used eviction.
///
/// The hash index maps keys to slot ids in the recency list; the two are
/// mutated together inside every operation, so `len() <= capacity()` holds
/// after every call and eviction is synchronous within `put`.
///
/// A miss is a first-class `None`, never a reserved value, so any payload
/// type is representable. All operations are single-threaded and
/// non-blocking; wrap the cache in [`SharedCache`](crate::SharedCache) for
/// concurrent use.
pub struct FixedCapacityCache<K, V> {
    capacity: usize,
    index: HashMap<K, u32, RandomState>,
    list: RecencyList<K, V>,
    stats: CacheStats,
}

impl<K: Eq + Hash + Clone, V> FixedCapacityCache<K, V> {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// A capacity of 0 is valid: every insert is evicted immediately and
    /// nothing is ever retained.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`MAX_CAPACITY`]. Use [`try_new`] when
    /// the capacity comes from configuration rather than code.
    ///
    /// [`try_new`]: FixedCapacityCache::try_new
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity <= MAX_CAPACITY,
            "capacity {} exceeds maximum supported capacity {}",
            capacity,
            MAX_CAPACITY
        );
        Self {
            capacity,
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            list: RecencyList::with_capacity(capacity),
            stats: CacheStats::new(),
        }
    }

    /// Non-panicking constructor for capacities taken from configuration.
    pub fn try_new(capacity: usize) -> Result<Self> {
        if capacity > MAX_CAPACITY {
            return Err(CacheError::CapacityTooLarge {
                requested: capacity,
                max: MAX_CAPACITY,
            });
        }
        Ok(Self::new(capacity))
    }

    /// Look up a key and mark it most-recently used.
    ///
    /// A miss has no side effect on the cache contents or recency order.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        if let Some(&id) = self.index.get(key) {
            self.list.move_to_front(id);
            self.stats.record_hit();
            self.list.entry(id).map(|(_, v)| v)
        } else {
            self.stats.record_miss();
            None
        }
    }

    /// Like [`get`](FixedCapacityCache::get), with a mutable borrow of the
    /// payload.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        if let Some(&id) = self.index.get(key) {
            self.list.move_to_front(id);
            self.stats.record_hit();
            self.list.value_mut(id)
        } else {
            self.stats.record_miss();
            None
        }
    }

    /// Insert or update an entry, returning the previous value for an
    /// already-present key.
    ///
    /// Updating a present key never evicts, even at capacity. Inserting an
    /// absent key at capacity synchronously evicts the least-recently-used
    /// entry; with capacity 0 that is the entry just inserted, so nothing
    /// is retained.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&id) = self.index.get(&key) {
            let old = self.list.replace_value(id, value);
            self.list.move_to_front(id);
            self.stats.record_update();
            return old;
        }

        let id = self.list.push_front(key.clone(), value);
        self.index.insert(key, id);
        self.stats.record_insertion();

        if self.list.len() > self.capacity {
            self.evict_lru();
        }
        None
    }

    /// Look up a key without touching recency order or statistics.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let &id = self.index.get(key)?;
        self.list.entry(id).map(|(_, v)| v)
    }

    /// Whether a key is resident. No recency effect.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Remove an entry, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        let (_key, value) = self.list.remove(id)?;
        self.stats.record_removal();
        Some(value)
    }

    /// Detach and return the least-recently-used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.pop_back()?;
        self.index.remove(&key);
        self.stats.record_removal();
        Some((key, value))
    }

    /// Iterate over keys, most-recently used first.
    ///
    /// The `&self` borrow freezes the cache for the duration of the walk,
    /// so the sequence is a consistent snapshot.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(&self.list)
    }

    /// Iterate over `(key, value)` pairs, most-recently used first.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.list)
    }

    /// Current resident entry count.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum resident entry count, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all entries. Idempotent; statistics counters are cumulative
    /// and survive (use [`reset_stats`](FixedCapacityCache::reset_stats)
    /// to zero them).
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
        self.stats.record_clear();
        debug!(capacity = self.capacity, "cache cleared");
    }

    /// Snapshot of the operation counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Zero the operation counters.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Evict the entry at the least-recently-used position.
    fn evict_lru(&mut self) {
        if let Some((key, _value)) = self.list.pop_back() {
            self.index.remove(&key);
            self.stats.record_eviction();
            trace!(len = self.list.len(), "evicted least-recently-used entry");
        }
    }
}

impl<'a, K: Eq + Hash + Clone, V> IntoIterator for &'a FixedCapacityCache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
