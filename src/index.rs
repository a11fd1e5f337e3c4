//! Key to slot lookup for the LRU cache.
//!
//! The index maps each live key to the [`SlotId`] of its entry in the recency
//! list. It never owns entries or keys; the list does. Each table entry keeps
//! the key's hash next to the slot, so growing the table never reads the list,
//! and callers decide what a match is by looking the slot up in the list.
//! Every cache operation that adds or drops a key updates both structures
//! before returning.

use core::fmt;
use core::hash::{BuildHasher, Hash};

use hashbrown::HashTable;

use crate::list::{SlotId, PREALLOC_LIMIT};

pub(crate) struct Index<S> {
    table: HashTable<(u64, SlotId)>,
    hash_builder: S,
}

impl<S: BuildHasher> Index<S> {
    /// Creates an index sized for `cap` keys.
    pub(crate) fn with_hasher(cap: usize, hash_builder: S) -> Self {
        let table_capacity = cap.min(PREALLOC_LIMIT).next_power_of_two();
        Index {
            table: HashTable::with_capacity(table_capacity),
            hash_builder,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }

    /// Hashes `key` with the index's hash builder.
    ///
    /// A key and every `Q` it borrows as hash the same, so lookups by `&Q` land
    /// in the bucket the owned key was inserted under.
    #[inline]
    pub(crate) fn hash<Q: ?Sized + Hash>(&self, key: &Q) -> u64 {
        self.hash_builder.hash_one(key)
    }

    /// Returns the slot filed under `hash` that `is_match` accepts.
    #[inline]
    pub(crate) fn find(
        &self,
        hash: u64,
        mut is_match: impl FnMut(SlotId) -> bool,
    ) -> Option<SlotId> {
        self.table
            .find(hash, |&(h, slot)| h == hash && is_match(slot))
            .map(|&(_, slot)| slot)
    }

    /// Files `slot` under `hash`. The caller has checked the key is absent.
    #[inline]
    pub(crate) fn insert(&mut self, hash: u64, slot: SlotId) {
        self.table.insert_unique(hash, (hash, slot), |&(h, _)| h);
    }

    /// Forgets the slot filed under `hash` that `is_match` accepts. The caller
    /// unlinks the matching list entry in the same step.
    pub(crate) fn remove(
        &mut self,
        hash: u64,
        mut is_match: impl FnMut(SlotId) -> bool,
    ) -> Option<SlotId> {
        let entry = self
            .table
            .find_entry(hash, |&(h, slot)| h == hash && is_match(slot))
            .ok()?;
        let ((_, slot), _) = entry.remove();
        Some(slot)
    }

    pub(crate) fn clear(&mut self) {
        self.table.clear();
    }
}

impl<S> fmt::Debug for Index<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Index")
            .field("len", &self.table.len())
            .finish()
    }
}
