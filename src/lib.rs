//! capcache - Fixed-Capacity LRU Cache
//!
//! A bounded in-memory key-value store with O(1) average-case get/put and
//! strict least-recently-used eviction. The recency list is arena-backed
//! (index-addressed slots, no raw pointers), so eviction and removal can
//! never produce a dangling reference.

pub mod cache;
pub mod shared;
pub mod stats;

// Re-export main types
pub use cache::{FixedCapacityCache, Iter, Keys, MAX_CAPACITY};
pub use shared::SharedCache;
pub use stats::{CacheStats, StatsSnapshot};

/// Cache error type
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("requested capacity {requested} exceeds maximum supported capacity {max}")]
    CapacityTooLarge { requested: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, CacheError>;
