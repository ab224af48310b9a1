//! Fixed-capacity cache with strict LRU eviction
//!
//! The cache is an aggregate of two structures that must stay in lockstep:
//! a hash index mapping keys to slot ids, and an arena-backed recency list
//! ordered most-recently-used to least-recently-used. Every operation
//! re-establishes the bijection between the two before returning.

mod arena;
mod iter;
mod lru;

pub use iter::{Iter, Keys};
pub use lru::FixedCapacityCache;

/// Maximum supported capacity.
///
/// Slot ids are `u32`, and two ids are reserved for the list sentinels, so
/// the arena can address at most `u32::MAX - 2` resident entries.
pub const MAX_CAPACITY: usize = u32::MAX as usize - 2;
