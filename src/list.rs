use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::error::EmptyEvictionError;

/// Upper bound on the number of slots reserved up front.
///
/// Larger capacities grow the arena on demand until it reaches `cap`.
pub(crate) const PREALLOC_LIMIT: usize = 4096;

/// Stable handle to an entry in a [`RecencyList`].
///
/// A `SlotId` stays valid until its entry is evicted or removed. After that the
/// slot may be handed out again by a later [`RecencyList::push_front`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotId(usize);

/// A node in the recency list.
///
/// `prev` points toward the front (more recently used), `next` toward the back.
/// Both links are plain arena indices and carry no ownership.
struct Entry<T> {
    val: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// A doubly linked list threaded through an arena of entries.
///
/// The front is the most recently used entry and the back the least recently
/// used one. Entries live in `slots`; a vacated slot is pushed on `free` and
/// reused by the next insertion, so a full list under churn never reallocates.
///
/// Every operation is O(1). The list never evicts on its own: callers check
/// [`is_full`](Self::is_full) and call [`evict_back`](Self::evict_back) first.
pub(crate) struct RecencyList<T> {
    /// Maximum number of linked entries.
    cap: usize,
    /// Number of linked entries.
    len: usize,
    /// Most recently used entry.
    head: Option<SlotId>,
    /// Least recently used entry.
    tail: Option<SlotId>,
    /// Entry storage. `None` marks a vacant slot.
    slots: Vec<Option<Entry<T>>>,
    /// Vacant slot indices, reused LIFO.
    free: Vec<SlotId>,
}

impl<T> RecencyList<T> {
    /// Creates an empty list that holds at most `cap` entries.
    pub(crate) fn new(cap: usize) -> RecencyList<T> {
        RecencyList {
            cap,
            len: 0,
            head: None,
            tail: None,
            slots: Vec::with_capacity(cap.min(PREALLOC_LIMIT)),
            free: Vec::new(),
        }
    }

    /// Returns the maximum number of entries the list can hold.
    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.cap
    }

    /// Returns the number of linked entries.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if one more `push_front` would exceed the capacity.
    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len >= self.cap
    }

    /// Returns the most recently used value.
    #[cfg(test)]
    pub(crate) fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the least recently used value, the next one [`evict_back`](Self::evict_back)
    /// would remove.
    pub(crate) fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the slot of the least recently used entry.
    #[inline]
    pub(crate) fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    /// Returns the value stored in `id`, or `None` if the slot is vacant.
    pub(crate) fn get(&self, id: SlotId) -> Option<&T> {
        self.entry(id).map(|e| &e.val)
    }

    /// Returns the value stored in `id` mutably, or `None` if the slot is vacant.
    pub(crate) fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.entry_mut(id).map(|e| &mut e.val)
    }

    /// Links a new entry at the front and returns its slot.
    ///
    /// If the list was empty the entry becomes both head and tail. The caller
    /// must have made room first; this never evicts.
    pub(crate) fn push_front(&mut self, val: T) -> SlotId {
        debug_assert!(self.len < self.cap, "push_front on a full recency list");

        let entry = Entry {
            val,
            prev: None,
            next: None,
        };
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(entry);
                id
            }
            None => {
                self.slots.push(Some(entry));
                SlotId(self.slots.len() - 1)
            }
        };

        self.attach_front(id);
        self.len += 1;
        id
    }

    /// Moves a linked entry to the front. No-op if it is already there or if
    /// `id` does not refer to a linked entry.
    pub(crate) fn move_to_front(&mut self, id: SlotId) {
        if self.head == Some(id) || !self.is_linked(id) {
            return;
        }
        self.detach(id);
        self.attach_front(id);
    }

    /// Unlinks the tail entry and returns its value.
    ///
    /// The evicted slot goes on the free list. When the last entry is evicted
    /// both head and tail are cleared.
    pub(crate) fn evict_back(&mut self) -> Result<T, EmptyEvictionError> {
        let tail = self.tail.ok_or(EmptyEvictionError)?;
        self.take(tail).ok_or(EmptyEvictionError)
    }

    /// Unlinks an arbitrary entry and returns its value.
    pub(crate) fn remove(&mut self, id: SlotId) -> Option<T> {
        if !self.is_linked(id) {
            return None;
        }
        self.take(id)
    }

    /// Drops every entry. Capacity is unchanged.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates from the most recently used entry to the least recently used one.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    #[inline]
    fn is_linked(&self, id: SlotId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    #[inline]
    fn entry(&self, id: SlotId) -> Option<&Entry<T>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    #[inline]
    fn entry_mut(&mut self, id: SlotId) -> Option<&mut Entry<T>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Detaches and vacates a linked slot.
    fn take(&mut self, id: SlotId) -> Option<T> {
        self.detach(id);
        let entry = self.slots.get_mut(id.0).and_then(Option::take)?;
        self.free.push(id);
        self.len -= 1;
        Some(entry.val)
    }

    /// Unlinks `id` from its neighbours and clears its own links.
    ///
    /// Head and tail are patched when `id` sits at either end.
    fn detach(&mut self, id: SlotId) {
        let (prev, next) = match self.entry_mut(id) {
            Some(e) => (e.prev.take(), e.next.take()),
            None => return,
        };

        match prev {
            Some(p) => {
                if let Some(e) = self.entry_mut(p) {
                    e.next = next;
                }
            }
            None => self.head = next,
        }
        match next {
            Some(n) => {
                if let Some(e) = self.entry_mut(n) {
                    e.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    /// Links a detached entry in front of the current head.
    fn attach_front(&mut self, id: SlotId) {
        let old_head = self.head;
        if let Some(e) = self.entry_mut(id) {
            e.prev = None;
            e.next = old_head;
        }
        match old_head {
            Some(h) => {
                if let Some(e) = self.entry_mut(h) {
                    e.prev = Some(id);
                }
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }
}

impl<T> fmt::Debug for RecencyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyList")
            .field("capacity", &self.cap)
            .field("length", &self.len)
            .field("slots", &self.slots.len())
            .finish()
    }
}

/// Front-to-back iterator over a [`RecencyList`].
pub(crate) struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.list.entry(self.front?)?;
        self.front = entry.next;
        self.remaining -= 1;
        Some(&entry.val)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let entry = self.list.entry(self.back?)?;
        self.back = entry.prev;
        self.remaining -= 1;
        Some(&entry.val)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
