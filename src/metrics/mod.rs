//! Cache Metrics System
//!
//! Provides BTreeMap-based metrics reporting for the cache. Counters live in
//! [`CoreCacheMetrics`]; [`LruCacheMetrics`] wraps them for the LRU cache and
//! the [`CacheMetrics`] trait is the uniform read side.
//!
//! BTreeMap is used instead of HashMap so metrics always come out in the same
//! order, which keeps logs and test assertions stable.
//!
//! Metrics are bookkeeping only. Recording a miss does not change what the
//! cache holds.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;

pub use lru::LruCacheMetrics;

/// Counters tracked by the cache.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get` and `get_mut`) made to the cache
    pub requests: u64,

    /// Number of lookups that found their key
    pub cache_hits: u64,

    /// Number of new keys stored
    pub insertions: u64,

    /// Number of `put` calls that replaced the value of a present key
    pub updates: u64,

    /// Number of entries evicted to stay within capacity, including `pop_lru`
    pub evictions: u64,

    /// Number of entries dropped by an explicit `remove`
    pub removals: u64,

    /// Number of entries currently stored
    pub entries: u64,

    /// Configured capacity in entries
    pub capacity: u64,
}

impl CoreCacheMetrics {
    /// Creates zeroed metrics for a cache holding at most `capacity` entries.
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    ///
    /// Misses are derived as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new key entering the cache.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
        self.entries += 1;
    }

    /// Records a value replaced in place for a present key.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an entry leaving the cache because of capacity pressure.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
        self.entries = self.entries.saturating_sub(1);
    }

    /// Records an entry leaving the cache through an explicit removal.
    pub fn record_removal(&mut self) {
        self.removals += 1;
        self.entries = self.entries.saturating_sub(1);
    }

    /// Records that every entry was dropped at once.
    pub fn record_clear(&mut self) {
        self.entries = 0;
    }

    /// Fraction of lookups that hit, between 0.0 and 1.0; 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, between 0.0 and 1.0; 0.0 before any lookup.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.cache_hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// How full the cache is, between 0.0 and 1.0; 0.0 for a zero-capacity cache.
    pub fn utilization(&self) -> f64 {
        if self.capacity > 0 {
            self.entries as f64 / self.capacity as f64
        } else {
            0.0
        }
    }

    /// Converts the counters to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        // Counters
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert(
            "cache_misses".to_string(),
            (self.requests - self.cache_hits) as f64,
        );
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        // Rates (0.0 to 1.0)
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        // Occupancy
        metrics.insert("entries".to_string(), self.entries as f64);
        metrics.insert("capacity".to_string(), self.capacity as f64);
        metrics.insert("utilization".to_string(), self.utilization());

        if self.requests > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / self.requests as f64,
            );
        }

        metrics
    }
}

/// Uniform metrics reporting for cache implementations.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs, sorted by key.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Short name of the eviction algorithm, e.g. `"LRU"`.
    fn algorithm_name(&self) -> &'static str;
}
