//! LRU Cache Usage
//!
//! Walks through the basic operations and prints the recency order after each
//! step. Eviction and removal events are logged through `tracing`.
//!
//! Run with: RUST_LOG=arena_lru=trace cargo run --example lru_usage

use arena_lru::LruCache;
use tracing_subscriber::EnvFilter;

fn show(label: &str, cache: &LruCache<u32, &'static str>) {
    let order: Vec<String> = cache.iter().map(|(k, v)| format!("{k}={v}")).collect();
    println!(
        "{label:<28} [{}]  len={}/{}",
        order.join(", "),
        cache.len(),
        cache.cap()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut cache = LruCache::new(2);

    cache.put(1, "a");
    cache.put(2, "b");
    show("put 1, put 2", &cache);

    assert_eq!(cache.get(&1), Some(&"a"));
    show("get 1 (promotes)", &cache);

    let evicted = cache.put(3, "c");
    println!("put 3 evicted {:?}", evicted);
    show("after put 3", &cache);

    assert_eq!(cache.get(&2), None);
    cache.put(1, "A");
    show("re-put 1 (no eviction)", &cache);

    println!("next victim: {:?}", cache.peek_lru());
    println!("popped: {:?}", cache.pop_lru());
    show("after pop_lru", &cache);

    let mut disabled: LruCache<u32, &'static str> = LruCache::new(0);
    disabled.put(1, "ignored");
    println!("zero-capacity cache holds {} entries", disabled.len());
}
