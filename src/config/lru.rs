//! Configuration for the Least Recently Used (LRU) cache.
//!
//! # Sizing Guidelines
//!
//! `capacity` is an entry count. Each entry costs the size of the key twice
//! (once in the index, once in the recency list), the size of the value, and
//! roughly 40 bytes of links and hash table overhead:
//!
//! ```text
//! Total Memory ≈ capacity × (2 × size_of::<K>() + size_of::<V>() + overhead_per_entry)
//! ```
//!
//! A capacity of `0` is valid and yields a cache that never stores anything,
//! which is handy for switching caching off without changing call sites.
//!
//! # Examples
//!
//! ```
//! use arena_lru::config::LruCacheConfig;
//! use arena_lru::LruCache;
//!
//! let config = LruCacheConfig { capacity: 10_000 };
//! let cache: LruCache<String, Vec<u8>> = LruCache::init(config, None);
//! assert_eq!(cache.cap(), 10_000);
//!
//! // Caching disabled
//! let config = LruCacheConfig { capacity: 0 };
//! let mut cache: LruCache<&str, i32> = LruCache::init(config, None);
//! cache.put("a", 1);
//! assert!(cache.is_empty());
//! ```

use core::fmt;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed entry when an insertion would exceed
/// `capacity`. The capacity is fixed for the lifetime of the cache.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: usize,
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
