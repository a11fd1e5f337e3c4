//! Cache Metrics Demonstration
//!
//! Runs a skewed workload against caches of different sizes and prints the
//! metrics each one reports.
//!
//! Run with: cargo run --example metrics_demo

use arena_lru::config::LruCacheConfig;
use arena_lru::metrics::CacheMetrics;
use arena_lru::LruCache;

const KEY_SPACE: u64 = 1_000;
const REQUESTS: u64 = 50_000;

/// Cheap deterministic skew: low keys are requested far more often.
fn key_for(i: u64) -> u64 {
    let x = i.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407) >> 33;
    let r = (x % 10_000) as f64 / 10_000.0;
    ((r * r * r) * KEY_SPACE as f64) as u64
}

fn run(capacity: usize) -> LruCache<u64, u64> {
    let mut cache = LruCache::init(LruCacheConfig { capacity }, None);
    for i in 0..REQUESTS {
        let key = key_for(i);
        if cache.get(&key).is_none() {
            cache.put(key, key * 2);
        }
    }
    cache
}

fn main() {
    println!("Workload: {REQUESTS} requests over {KEY_SPACE} keys (skewed)\n");

    for capacity in [0, 10, 100, 500] {
        let cache = run(capacity);
        println!("{} cache, capacity {}", cache.algorithm_name(), capacity);
        for (name, value) in cache.metrics() {
            println!("  {name:<16} {value:>12.4}");
        }
        println!();
    }
}
