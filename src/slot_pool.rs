//! A fixed-capacity allocator mapping ephemeral external identifiers to
//! small stable slot indices.
//!
//! Touch contacts arrive with arbitrary platform identifiers but need a
//! stable small index for the lifetime of the contact so they can address
//! per-slot key ids. [`SlotPool`] hands those indices out from a stack of
//! free slots: acquisition and release are O(1), freed slots are reused
//! LIFO (the most recently freed index is handed out next), and a full
//! pool reports "no slot" rather than failing.

use arrayvec::ArrayVec;
use std::collections::HashMap;

/// A pool of `CAP` slot indices keyed by external identifier.
#[derive(Debug, Clone)]
pub struct SlotPool<const CAP: usize> {
    /// Free slot indices; the top of the stack is handed out next.
    free: ArrayVec<usize, CAP>,
    assigned: HashMap<u64, usize>,
}

impl<const CAP: usize> Default for SlotPool<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> SlotPool<CAP> {
    /// Creates a pool with every slot free; the lowest index is handed
    /// out first.
    #[must_use]
    pub fn new() -> Self {
        let mut free = ArrayVec::new();
        for slot in (0..CAP).rev() {
            free.push(slot);
        }
        Self {
            free,
            assigned: HashMap::new(),
        }
    }

    /// Assigns a slot to `external_id`, or returns `None` when every slot
    /// is taken (the caller drops the sample).
    ///
    /// Acquiring an identifier that already holds a slot returns that
    /// slot unchanged.
    pub fn acquire(&mut self, external_id: u64) -> Option<usize> {
        if let Some(&slot) = self.assigned.get(&external_id) {
            return Some(slot);
        }
        let slot = self.free.pop()?;
        self.assigned.insert(external_id, slot);
        Some(slot)
    }

    /// Releases the slot held by `external_id`, returning it to the top
    /// of the free stack; returns the freed slot, or `None` if the
    /// identifier held nothing.
    pub fn release(&mut self, external_id: u64) -> Option<usize> {
        let slot = self.assigned.remove(&external_id)?;
        self.free.push(slot);
        Some(slot)
    }

    /// The slot currently held by `external_id`.
    #[must_use]
    pub fn slot(&self, external_id: u64) -> Option<usize> {
        self.assigned.get(&external_id).copied()
    }

    /// Forgets every assignment and restores the full free stack.
    ///
    /// Used when the owning adapter loses focus or context and must drop
    /// all ephemeral identifiers at once.
    pub fn reset(&mut self) {
        self.assigned.clear();
        self.free.clear();
        for slot in (0..CAP).rev() {
            self.free.push(slot);
        }
    }

    /// Number of slots currently assigned.
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.assigned.len()
    }

    /// Number of slots still free.
    #[must_use]
    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Total capacity of the pool.
    #[must_use]
    pub fn capacity(&self) -> usize {
        CAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowest_slot_first() {
        let mut pool: SlotPool<4> = SlotPool::new();
        assert_eq!(pool.acquire(100), Some(0));
        assert_eq!(pool.acquire(200), Some(1));
        assert_eq!(pool.slot(100), Some(0));
    }

    #[test]
    fn lifo_reuse() {
        let mut pool: SlotPool<4> = SlotPool::new();
        for id in 0..4 {
            pool.acquire(id);
        }
        assert_eq!(pool.release(1), Some(1));
        assert_eq!(pool.release(3), Some(3));
        // Most recently freed comes back first.
        assert_eq!(pool.acquire(50), Some(3));
        assert_eq!(pool.acquire(51), Some(1));
    }

    #[test]
    fn full_pool_reports_no_slot() {
        let mut pool: SlotPool<2> = SlotPool::new();
        assert!(pool.acquire(1).is_some());
        assert!(pool.acquire(2).is_some());
        assert_eq!(pool.acquire(3), None);
        assert_eq!(pool.in_use(), 2);
    }

    #[test]
    fn duplicate_acquire_returns_existing() {
        let mut pool: SlotPool<2> = SlotPool::new();
        assert_eq!(pool.acquire(7), Some(0));
        assert_eq!(pool.acquire(7), Some(0));
        assert_eq!(pool.in_use(), 1);
    }

    #[test]
    fn reset_restores_everything() {
        let mut pool: SlotPool<3> = SlotPool::new();
        pool.acquire(1);
        pool.acquire(2);
        pool.reset();
        assert_eq!(pool.in_use(), 0);
        assert_eq!(pool.available(), 3);
        assert_eq!(pool.acquire(9), Some(0));
    }

    #[test]
    fn release_of_unknown_id_is_none() {
        let mut pool: SlotPool<2> = SlotPool::new();
        assert_eq!(pool.release(42), None);
    }
}
