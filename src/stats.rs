//! Cache Operation Statistics
//!
//! Counts lookups and mutations so callers can monitor hit rate and
//! eviction pressure. The counters live inside the cache and are bumped on
//! the operation paths; every cache operation already takes `&mut self`,
//! so plain integers suffice and there is no atomic overhead on the hot
//! path. [`SharedCache`](crate::SharedCache) snapshots them under its lock.

use serde::{Deserialize, Serialize};

/// Cumulative operation counters for one cache instance.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: u64,
    misses: u64,
    insertions: u64,
    updates: u64,
    evictions: u64,
    removals: u64,
    clears: u64,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup that found its key.
    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Record a lookup that missed.
    #[inline]
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Record an insert of an absent key.
    #[inline]
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Record an overwrite of a present key.
    #[inline]
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Record a capacity-triggered eviction.
    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Record an explicit removal (`remove` or `pop_lru`).
    #[inline]
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Record a `clear`.
    #[inline]
    pub fn record_clear(&mut self) {
        self.clears += 1;
    }

    /// Lookup hit rate as a percentage (0-100).
    ///
    /// Reports 100.0 before any lookup has happened.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            100.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }

    /// Zero all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Take a snapshot of the current counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits,
            misses: self.misses,
            insertions: self.insertions,
            updates: self.updates,
            evictions: self.evictions,
            removals: self.removals,
            clears: self.clears,
            hit_rate: self.hit_rate(),
        }
    }
}

/// Point-in-time view of [`CacheStats`], exportable to monitoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub updates: u64,
    pub evictions: u64,
    pub removals: u64,
    pub clears: u64,
    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate() {
        let mut stats = CacheStats::new();

        stats.record_hit();
        stats.record_hit();
        stats.record_miss();

        let rate = stats.hit_rate();
        assert!((rate - 66.66).abs() < 0.1, "Expected ~66.66%, got {}", rate);
    }

    #[test]
    fn test_hit_rate_no_lookups() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 100.0);
    }

    #[test]
    fn test_snapshot_and_reset() {
        let mut stats = CacheStats::new();

        stats.record_insertion();
        stats.record_insertion();
        stats.record_eviction();
        stats.record_hit();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.insertions, 2);
        assert_eq!(snapshot.evictions, 1);
        assert_eq!(snapshot.hits, 1);
        assert_eq!(snapshot.hit_rate, 100.0);

        stats.reset();
        let snapshot = stats.snapshot();
        assert_eq!(snapshot.insertions, 0);
        assert_eq!(snapshot.evictions, 0);
        assert_eq!(snapshot.hits, 0);
    }
}
