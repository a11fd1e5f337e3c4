//! LRU Cache Metrics
//!
//! Metrics specific to the LRU (Least Recently Used) cache algorithm.

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// LRU metrics. LRU has no per-algorithm counters beyond the core set.
#[derive(Debug, Clone)]
pub struct LruCacheMetrics {
    /// Core counters
    pub core: CoreCacheMetrics,
}

impl LruCacheMetrics {
    /// Creates zeroed metrics for a cache holding at most `capacity` entries.
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(capacity),
        }
    }

    /// Converts the metrics to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        self.core.to_btreemap()
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
