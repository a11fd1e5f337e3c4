//! Correctness Tests for the LRU Cache
//!
//! Validates the observable behaviour of `LruCache` using small, predictable
//! access patterns. Each eviction test checks explicitly which key left the
//! cache after the put that caused it.
//!
//! ## Test Strategy
//! - Small cache sizes (1-5 entries) for predictable behavior
//! - Simple, deterministic access patterns
//! - A reference model (a plain Vec ordered by recency) cross-checks long
//!   pseudo-random operation sequences

use arena_lru::config::LruCacheConfig;
use arena_lru::metrics::CacheMetrics;
use arena_lru::LruCache;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Helper to create an LruCache with the given capacity
fn make_lru<K: std::hash::Hash + Eq, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig { capacity: cap };
    LruCache::init(config, None)
}

/// Keys from most to least recently used.
fn recency_order<K: Clone + std::hash::Hash + Eq, V>(cache: &LruCache<K, V>) -> Vec<K> {
    cache.iter().map(|(k, _)| k.clone()).collect()
}

/// Minimal deterministic generator so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

// ============================================================================
// EVICTION
// ============================================================================
// 1. Most recently accessed items stay in cache
// 2. Oldest accessed items are evicted first
// 3. Exactly one eviction per over-capacity insertion

#[test]
fn test_lru_evicts_least_recently_used() {
    let mut cache = make_lru(3);

    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);
    // LRU order: 1 (LRU) -> 2 -> 3 (MRU)

    // Insert new key - should evict key 1 (LRU)
    assert_eq!(cache.put(4, 40), Some((1, 10)));
    assert!(
        cache.get(&1).is_none(),
        "Key 1 should have been evicted (was LRU)"
    );
    assert!(cache.get(&2).is_some(), "Key 2 should remain");
    assert!(cache.get(&3).is_some(), "Key 3 should remain");
    assert!(cache.get(&4).is_some(), "Key 4 should be present");
    // After gets: LRU order is 2 -> 3 -> 4

    assert_eq!(cache.put(5, 50), Some((2, 20)));
    assert!(
        cache.get(&2).is_none(),
        "Key 2 should have been evicted (was LRU)"
    );
    assert_eq!(cache.len(), 3);
}

#[test]
fn test_lru_eviction_exactness() {
    for cap in 1..=5 {
        let mut cache = make_lru(cap);
        for i in 0..cap {
            assert_eq!(cache.put(i, i * 10), None, "no eviction while filling");
        }

        // The (cap + 1)-th distinct key evicts exactly the first one
        assert_eq!(cache.put(cap, cap * 10), Some((0, 0)));
        assert_eq!(cache.len(), cap);
        assert!(cache.get(&0).is_none());
        for i in 1..=cap {
            assert_eq!(cache.get(&i), Some(&(i * 10)), "key {} should remain", i);
        }
    }
}

#[test]
fn test_lru_eviction_order_is_predictable() {
    let mut cache = make_lru(5);
    for i in 0..5 {
        cache.put(i, i * 10);
    }

    for (next, expected_victim) in (5..8).zip(0..3) {
        assert_eq!(
            cache.put(next, next * 10),
            Some((expected_victim, expected_victim * 10))
        );
    }

    assert_eq!(recency_order(&cache), vec![7, 6, 5, 4, 3]);
}

// ============================================================================
// RECENCY
// ============================================================================

#[test]
fn test_lru_get_updates_recency() {
    let mut cache = make_lru(3);
    cache.put(1, 10);
    cache.put(2, 20);
    cache.put(3, 30);

    // Access key 1 to make it recently used
    assert_eq!(cache.get(&1), Some(&10));
    // LRU order: 2 (LRU) -> 3 -> 1 (MRU)

    assert_eq!(cache.put(4, 40), Some((2, 20)));
    assert!(
        cache.get(&1).is_some(),
        "Key 1 should survive due to recent access"
    );
    assert!(cache.get(&3).is_some(), "Key 3 should remain");
}

#[test]
fn test_lru_put_existing_updates_recency() {
    let mut cache = make_lru(3);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.put("c", 3);

    // Re-putting "a" promotes it without eviction
    assert_eq!(cache.put("a", 100), None);
    assert_eq!(recency_order(&cache), vec!["a", "c", "b"]);

    assert_eq!(cache.put("d", 4), Some(("b", 2)));
    assert_eq!(cache.get(&"a"), Some(&100));
}

#[test]
fn test_lru_repeated_get_is_idempotent() {
    let mut cache = make_lru(2);
    cache.put("k", String::from("v"));
    cache.put("other", String::from("w"));

    let len = cache.len();
    let first = cache.get(&"k").cloned();
    let second = cache.get(&"k").cloned();
    assert_eq!(first, second);
    assert_eq!(first.as_deref(), Some("v"));
    assert_eq!(cache.len(), len);
    assert_eq!(recency_order(&cache), vec!["k", "other"]);
}

#[test]
fn test_lru_miss_has_no_side_effects() {
    let mut cache = make_lru(2);
    cache.put(1, 'a');
    cache.put(2, 'b');
    let before = recency_order(&cache);

    assert_eq!(cache.get(&99), None);
    assert_eq!(cache.get_mut(&98), None);

    assert_eq!(recency_order(&cache), before);
    assert_eq!(cache.len(), 2);
}

// ============================================================================
// UPDATE SEMANTICS
// ============================================================================

#[test]
fn test_lru_update_keeps_size() {
    let mut cache = make_lru(4);
    cache.put("k", 1);
    cache.put("other", 2);
    let len = cache.len();

    cache.put("k", 2);
    cache.put("k", 3);
    assert_eq!(cache.get(&"k"), Some(&3));
    assert_eq!(cache.len(), len);
}

#[test]
fn test_lru_update_on_full_cache_never_evicts() {
    let mut cache = make_lru(2);
    cache.put(1, 1);
    cache.put(2, 2);
    for v in 0..10 {
        assert_eq!(cache.put(1, v), None);
        assert_eq!(cache.put(2, v), None);
    }
    assert!(cache.contains(&1));
    assert!(cache.contains(&2));
    assert_eq!(cache.metrics().get("evictions"), Some(&0.0));
}

// ============================================================================
// CAPACITY
// ============================================================================

#[test]
fn test_lru_presence_after_insert() {
    for cap in 0..4 {
        let mut cache = make_lru(cap);
        for i in 0..10 {
            cache.put(i, i + 1);
            if cap == 0 {
                assert_eq!(cache.get(&i), None);
            } else {
                assert_eq!(cache.get(&i), Some(&(i + 1)));
            }
        }
    }
}

#[test]
fn test_lru_zero_capacity_accepts_nothing() {
    let mut cache: LruCache<u32, Vec<u8>> = make_lru(0);
    for i in 0..100 {
        assert_eq!(cache.put(i, vec![0; 16]), None);
        assert_eq!(cache.len(), 0);
    }
    assert!(cache.iter().next().is_none());
    assert_eq!(cache.metrics().get("insertions"), Some(&0.0));
}

#[test]
fn test_lru_zero_sized_values() {
    let mut cache = make_lru(2);
    cache.put("a", ());
    cache.put("b", ());
    assert_eq!(cache.get(&"a"), Some(&()));
    assert_eq!(cache.put("c", ()), Some(("b", ())));
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_lru_remove_then_refill() {
    let mut cache = make_lru(3);
    for i in 0..3 {
        cache.put(i, i);
    }
    assert_eq!(cache.remove(&1), Some(1));
    assert_eq!(cache.len(), 2);

    // Freed room is used before anything is evicted
    assert_eq!(cache.put(3, 3), None);
    assert_eq!(cache.put(4, 4), Some((0, 0)));
    assert_eq!(recency_order(&cache), vec![4, 3, 2]);
}

// ============================================================================
// KEY TYPES
// ============================================================================
// Keys are stored once, so any Hash + Eq type works, Clone or not.

/// Owned key that is neither Clone nor Copy, looked up through `&str`.
#[derive(Debug, Hash, PartialEq, Eq)]
struct Name(String);

impl std::borrow::Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[test]
fn test_lru_non_clone_keys() {
    let mut cache = make_lru(2);
    assert_eq!(cache.put(Name(String::from("a")), 1), None);
    assert_eq!(cache.put(Name(String::from("b")), 2), None);

    // Borrowed lookups reach the single stored key
    assert_eq!(cache.get("a"), Some(&1));
    assert!(cache.contains("b"));
    assert_eq!(cache.peek("missing"), None);

    // Re-putting keeps the original key and never evicts
    assert_eq!(cache.put(Name(String::from("b")), 20), None);
    assert_eq!(cache.len(), 2);

    assert_eq!(
        cache.put(Name(String::from("c")), 3),
        Some((Name(String::from("a")), 1))
    );
    assert_eq!(cache.remove("b"), Some(20));
    let keys: Vec<&str> = cache.iter().map(|(k, _)| k.0.as_str()).collect();
    assert_eq!(keys, vec!["c"]);
}

// ============================================================================
// REFERENCE MODEL
// ============================================================================
// A Vec<(key, value)> kept in recency order (front = MRU) is an obviously
// correct, O(n) LRU. Both must agree after every operation.

struct ModelLru {
    cap: usize,
    entries: Vec<(u64, u64)>,
}

impl ModelLru {
    fn get(&mut self, key: u64) -> Option<u64> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        let entry = self.entries.remove(pos);
        self.entries.insert(0, entry);
        Some(entry.1)
    }

    fn put(&mut self, key: u64, value: u64) -> Option<(u64, u64)> {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(pos);
            self.entries.insert(0, (key, value));
            return None;
        }
        if self.cap == 0 {
            return None;
        }
        let evicted = if self.entries.len() >= self.cap {
            self.entries.pop()
        } else {
            None
        };
        self.entries.insert(0, (key, value));
        evicted
    }

    fn remove(&mut self, key: u64) -> Option<u64> {
        let pos = self.entries.iter().position(|(k, _)| *k == key)?;
        Some(self.entries.remove(pos).1)
    }
}

#[test]
fn test_lru_matches_reference_model() {
    for cap in [0usize, 1, 2, 3, 7, 16] {
        let mut rng = Lcg(cap as u64 + 1);
        let mut cache = make_lru(cap);
        let mut model = ModelLru {
            cap,
            entries: Vec::new(),
        };

        for step in 0..5_000 {
            let key = rng.next() % 24;
            match rng.next() % 10 {
                0..=4 => {
                    let value = rng.next();
                    assert_eq!(
                        cache.put(key, value),
                        model.put(key, value),
                        "put mismatch at step {} (cap {})",
                        step,
                        cap
                    );
                }
                5..=7 => {
                    assert_eq!(
                        cache.get(&key).copied(),
                        model.get(key),
                        "get mismatch at step {} (cap {})",
                        step,
                        cap
                    );
                }
                8 => {
                    assert_eq!(cache.remove(&key), model.remove(key));
                }
                _ => {
                    assert_eq!(cache.pop_lru(), model.entries.pop());
                }
            }

            assert!(cache.len() <= cache.cap(), "capacity bound violated");
            assert_eq!(cache.len(), model.entries.len());
            let actual: Vec<(u64, u64)> = cache.iter().map(|(k, v)| (*k, *v)).collect();
            assert_eq!(actual, model.entries, "order mismatch at step {}", step);
        }
    }
}

#[test]
fn test_lru_metrics_track_operations() {
    let mut cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.get(&"a");
    cache.get(&"zzz");
    cache.put("c", 3);
    cache.remove(&"c");

    let metrics = cache.metrics();
    assert_eq!(metrics.get("requests"), Some(&2.0));
    assert_eq!(metrics.get("cache_hits"), Some(&1.0));
    assert_eq!(metrics.get("cache_misses"), Some(&1.0));
    assert_eq!(metrics.get("hit_rate"), Some(&0.5));
    assert_eq!(metrics.get("insertions"), Some(&3.0));
    assert_eq!(metrics.get("evictions"), Some(&1.0));
    assert_eq!(metrics.get("removals"), Some(&1.0));
    assert_eq!(metrics.get("entries"), Some(&1.0));
    assert_eq!(metrics.get("capacity"), Some(&2.0));
}
