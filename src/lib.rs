#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Structure
//!
//! ```text
//!   Index: HashTable<(hash, SlotId)>     RecencyList: arena of (K, V) entries
//!   ┌─────────┬────────┐
//!   │ h("k0") │ slot 1 │            head                              tail
//!   │ h("k1") │ slot 2 │             │                                 │
//!   │ h("k2") │ slot 0 │             ▼                                 ▼
//!   └─────────┴────────┘       [slot 0: k2] ⇄ [slot 1: k0] ⇄ [slot 2: k1]
//!                                 (MRU)                          (LRU)
//!
//!   Keys live only in the arena; the index compares them through their slot.
//! ```
//!
//! ## Quick Reference
//!
//! | Operation | Recency | Complexity |
//! |-----------|---------|------------|
//! | [`LruCache::get`] / [`LruCache::get_mut`] | promotes on hit | O(1) |
//! | [`LruCache::put`] | inserts or promotes, may evict one | O(1) |
//! | [`LruCache::peek`] / [`LruCache::contains`] | unchanged | O(1) |
//! | [`LruCache::remove`] / [`LruCache::pop_lru`] | unlinks | O(1) |
//! | [`LruCache::iter`] | unchanged | O(n) |
//!
//! ## Example
//!
//! ```rust
//! use arena_lru::LruCache;
//! use arena_lru::config::LruCacheConfig;
//!
//! let config = LruCacheConfig { capacity: 2 };
//! let mut cache: LruCache<&str, i32> = LruCache::init(config, None);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`config`]: Configuration structures
//! - [`metrics`]: Metrics collection for cache performance monitoring

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

/// Error returned by the recency list when asked to evict from an empty list.
pub(crate) mod error;

/// Arena-backed doubly linked list ordering entries by recency.
///
/// **Note**: This module is internal infrastructure. Entries are addressed by
/// `SlotId` handles that are only meaningful to the list that issued them.
pub(crate) mod list;

/// Key to slot index used by the cache for O(1) lookup.
pub(crate) mod index;

/// Cache configuration structures.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Cache metrics system.
///
/// Hit, miss, insertion, update, and eviction counters reported through the
/// `CacheMetrics` trait.
pub mod metrics;

pub use lru::LruCache;
