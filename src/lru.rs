//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides a fixed-capacity LRU cache with O(1) average time for
//! every operation. When an insertion would exceed the capacity, the entry that
//! was touched longest ago is evicted.
//!
//! # Algorithm
//!
//! The cache pairs two structures that are always updated together:
//!
//! - an **index**, a hash table from key to the arena slot holding its entry
//!   (the key itself is stored once, in the entry, so keys need not be `Clone`)
//! - a **recency list**, a doubly linked list threaded through that arena,
//!   ordered from most recently used (front) to least recently used (back)
//!
//! A hit moves the entry to the front. Inserting a new key into a full cache
//! first evicts the back entry and drops its key from the index, then links
//! the new entry at the front. Re-putting a present key replaces its value in
//! place and never evicts.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Remove: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!   - Evicted slots are reused, so a full cache under churn does not allocate
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. Every operation, `get` included,
//! takes `&mut self` because lookups reorder the recency list. To share a
//! cache between threads, wrap it in a `Mutex`.

use crate::config::LruCacheConfig;
use crate::error::EmptyEvictionError;
use crate::index::Index;
use crate::list::{self, RecencyList, SlotId};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use hashbrown::DefaultHashBuilder;
use tracing::{debug, trace};

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When the cache reaches capacity,
/// the least recently used entry is evicted to make room for new entries.
/// A capacity of zero is allowed; such a cache silently ignores every `put`.
///
/// # Examples
///
/// ```
/// use arena_lru::LruCache;
///
/// let mut cache = LruCache::new(2);
///
/// // Add items to the cache
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// assert_eq!(cache.put("cherry", 3), Some(("banana", 2)));
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// assert_eq!(cache.len(), 2);
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: RecencyList<(K, V)>,
    index: Index<S>,
    metrics: LruCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates an LRU cache that holds at most `cap` entries.
    pub fn new(cap: usize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(cap, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> LruCache<K, V, S> {
    /// Creates an LRU cache from a configuration, using `hasher` or `S::default()`.
    pub fn init(config: LruCacheConfig, hasher: Option<S>) -> Self {
        Self::with_hasher(config.capacity, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates an LRU cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: usize, hash_builder: S) -> Self {
        debug!(capacity = cap, "creating LRU cache");
        LruCache {
            config: LruCacheConfig { capacity: cap },
            list: RecencyList::new(cap),
            index: Index::with_hasher(cap, hash_builder),
            metrics: LruCacheMetrics::new(cap as u64),
        }
    }

    /// Returns the configured capacity. It never changes.
    #[inline]
    pub fn cap(&self) -> usize {
        self.config.capacity
    }

    /// Returns the number of entries currently stored, always `<= cap()`.
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.list.len(), self.index.len());
        self.list.len()
    }

    /// Returns true if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the counters collected so far.
    #[inline]
    pub fn lru_metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Returns a reference to the value of `key` and marks it most recently used.
    ///
    /// A miss returns `None` and leaves the cache contents untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(slot) = self.find(key) else {
            self.metrics.core.record_miss();
            return None;
        };
        self.list.move_to_front(slot);
        self.metrics.core.record_hit();
        self.list.get(slot).map(|(_, v)| v)
    }

    /// Like [`get`](Self::get), but returns a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(slot) = self.find(key) else {
            self.metrics.core.record_miss();
            return None;
        };
        self.list.move_to_front(slot);
        self.metrics.core.record_hit();
        self.list.get_mut(slot).map(|(_, v)| v)
    }

    /// Returns the value of `key` without changing its recency or the metrics.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let slot = self.find(key)?;
        self.list.get(slot).map(|(_, v)| v)
    }

    /// Returns true if `key` is cached. Does not change its recency.
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find(key).is_some()
    }

    /// Returns the entry the next eviction would remove.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.back().map(|(k, v)| (k, v))
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.evict_lru().ok()?;
        trace!(len = self.list.len(), "popped least recently used entry");
        Some((key, value))
    }

    /// Removes `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.index.hash(key);
        let list = &self.list;
        let slot = self
            .index
            .remove(hash, |slot| holds_key(list, slot, key))?;
        let (_, value) = self.list.remove(slot)?;
        self.metrics.core.record_removal();
        trace!(len = self.list.len(), "removed entry");
        Some(value)
    }

    /// Drops every entry. Capacity and lifetime counters are kept.
    pub fn clear(&mut self) {
        debug!(dropped = self.list.len(), "clearing LRU cache");
        self.index.clear();
        self.list.clear();
        self.metrics.core.record_clear();
    }

    /// Iterates from the most recently used entry to the least recently used
    /// one without touching recency.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Inserts `value` under `key` and marks it most recently used.
    ///
    /// - If `key` is present its value is replaced in place. Nothing is evicted
    ///   and the originally stored key is kept.
    /// - If the cache is full, the least recently used entry is evicted first
    ///   and returned.
    /// - If the capacity is zero nothing is stored.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        let hash = self.index.hash(&key);
        let list = &self.list;
        if let Some(slot) = self.index.find(hash, |slot| holds_key(list, slot, &key)) {
            if let Some((_, stored)) = self.list.get_mut(slot) {
                *stored = value;
            }
            self.list.move_to_front(slot);
            self.metrics.core.record_update();
            return None;
        }

        if self.list.cap() == 0 {
            return None;
        }

        let evicted = if self.list.is_full() {
            match self.evict_lru() {
                Ok(pair) => {
                    trace!(capacity = self.cap(), "evicted least recently used entry");
                    Some(pair)
                }
                // is_full() with a nonzero capacity means the list has a tail.
                Err(err) => unreachable!("LRU cache at capacity {}: {}", self.cap(), err),
            }
        } else {
            None
        };

        let slot = self.list.push_front((key, value));
        self.index.insert(hash, slot);
        self.metrics.core.record_insertion();

        evicted
    }

    /// Slot holding `key`, if present.
    fn find<Q>(&self, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let list = &self.list;
        self.index
            .find(self.index.hash(key), |slot| holds_key(list, slot, key))
    }

    /// Unlinks the least recently used entry and drops its key from the index.
    fn evict_lru(&mut self) -> Result<(K, V), EmptyEvictionError> {
        let tail = self.list.back_id().ok_or(EmptyEvictionError)?;
        let (key, value) = self.list.evict_back()?;
        let hash = self.index.hash(&key);
        self.index.remove(hash, |slot| slot == tail);
        self.metrics.core.record_eviction();
        Ok((key, value))
    }
}

/// Returns true if `slot` is occupied by an entry whose key equals `key`.
fn holds_key<K, V, Q>(list: &RecencyList<(K, V)>, slot: SlotId, key: &Q) -> bool
where
    K: Borrow<Q>,
    Q: ?Sized + Eq,
{
    list.get(slot).is_some_and(|(stored, _)| {
        let stored: &Q = stored.borrow();
        stored == key
    })
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Iterator over the entries of an [`LruCache`], most recently used first.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}
