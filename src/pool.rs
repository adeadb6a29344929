//! Min-ordered pool of freed identifiers.
//!
//! Erased ids land here and are handed back out by [`FreePool::acquire`],
//! smallest first. Reusing the smallest freed id keeps the id space dense
//! (bounded by the live-entry count) rather than ever-growing, which
//! matters when ids double as array or table indices in the embedding
//! system. The smallest-first order is an observable policy, not an
//! implementation accident.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::id::ResourceId;

/// Collection of identifiers eligible for reuse, ordered smallest-first.
///
/// Backed by a binary min-heap, so `release` and `acquire` are O(log n).
/// The pool never holds duplicates as long as callers only release ids
/// that were actually live (the registry guarantees this).
#[derive(Debug, Default)]
pub struct FreePool {
    heap: BinaryHeap<Reverse<ResourceId>>,
}

impl FreePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Make `id` available for reuse.
    pub fn release(&mut self, id: ResourceId) {
        self.heap.push(Reverse(id));
    }

    /// Take the smallest pending id, if any.
    pub fn acquire(&mut self) -> Option<ResourceId> {
        self.heap.pop().map(|Reverse(id)| id)
    }

    /// The smallest pending id, without removing it.
    pub fn peek(&self) -> Option<ResourceId> {
        self.heap.peek().map(|&Reverse(id)| id)
    }

    /// Number of pending ids.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no ids are pending.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Discard all pending ids.
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
