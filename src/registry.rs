//! The resource registry: value storage plus identifier lifecycle.
//!
//! A [`ResourceRegistry`] couples an id → value map with a [`FreePool`] of
//! erased ids. Insertion draws an id from the pool (smallest first) or, when
//! the pool is empty, mints a fresh id equal to the current live-entry
//! count. Removal returns the id to the pool. Two invariants hold at all
//! times:
//!
//! - live ids and pending-free ids are disjoint;
//! - live ids and pending-free ids together are exactly
//!   `0 .. len() + free count`, so the id space stays dense.
//!
//! The registry is single-threaded and synchronous. If it must be shared
//! across threads, the embedding system serializes access externally (one
//! exclusive lock around all operations, or single-owner confinement).

use std::collections::hash_map;
use std::collections::HashMap;

use crate::error::{LastStatus, RegistryError};
use crate::id::ResourceId;
use crate::pool::FreePool;

/// A generic container that assigns each inserted value an opaque
/// [`ResourceId`] and recycles freed ids smallest-first.
///
/// The registry exclusively owns its stored values; dropping it releases
/// them all. Values are replaced only by erase-and-reinsert (or mutated in
/// place through [`get_mut`](Self::get_mut) / [`iter_mut`](Self::iter_mut)).
///
/// Every public operation overwrites the last-call status: successful calls
/// reset it to neutral, failing calls record a [`RegistryError`]. See
/// [`last_error_message`](Self::last_error_message).
#[derive(Debug)]
pub struct ResourceRegistry<T> {
    /// Live entries, keyed by id. Iteration order is unspecified.
    entries: HashMap<ResourceId, T>,
    /// Erased ids awaiting reuse.
    free: FreePool,
    /// Outcome of the most recently completed operation.
    status: LastStatus,
}

impl<T> ResourceRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            free: FreePool::new(),
            status: LastStatus::default(),
        }
    }

    /// Create an empty registry with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            free: FreePool::new(),
            status: LastStatus::default(),
        }
    }

    /// Smallest freed id, or a fresh id when the pool is empty. The fresh
    /// id equals `len()` because the id space is dense (see module docs).
    fn next_id(&mut self) -> ResourceId {
        self.free.acquire().unwrap_or(self.entries.len())
    }

    /// Store `value`, returning the id it now lives under. Always succeeds.
    pub fn insert(&mut self, value: T) -> ResourceId {
        self.status.reset();
        let id = self.next_id();
        self.entries.insert(id, value);
        id
    }

    /// Like [`insert`](Self::insert), but the value is built in place by
    /// `make`, which receives the id the entry will occupy. Id assignment
    /// is identical to `insert`.
    pub fn insert_with(&mut self, make: impl FnOnce(ResourceId) -> T) -> ResourceId {
        self.status.reset();
        let id = self.next_id();
        let value = make(id);
        self.entries.insert(id, value);
        id
    }

    /// Remove the entry stored under `id`, returning the id to the free
    /// pool.
    ///
    /// Calling this on an empty registry mutates nothing and records
    /// [`RegistryError::EmptyRegistryRemoval`] — the check is on emptiness
    /// of the whole registry, not on membership of `id`. Erasing an id
    /// that is not live in a non-empty registry is a silent no-op: only
    /// ids that actually held an entry are recycled, so the free pool
    /// never collides with a live id.
    pub fn erase(&mut self, id: ResourceId) {
        self.status.reset();
        if self.entries.is_empty() {
            self.status.fail(RegistryError::EmptyRegistryRemoval);
            return;
        }
        if self.entries.remove(&id).is_some() {
            self.free.release(id);
        }
    }

    /// Borrow the value stored under `id`.
    ///
    /// Returns `None` and records [`RegistryError::MissingEntry`] when `id`
    /// is not live.
    pub fn get(&self, id: ResourceId) -> Option<&T> {
        self.status.reset();
        match self.entries.get(&id) {
            Some(value) => Some(value),
            None => {
                self.status.fail(RegistryError::MissingEntry(id));
                None
            }
        }
    }

    /// Mutably borrow the value stored under `id`.
    ///
    /// Same contract as [`get`](Self::get).
    pub fn get_mut(&mut self, id: ResourceId) -> Option<&mut T> {
        self.status.reset();
        match self.entries.get_mut(&id) {
            Some(value) => Some(value),
            None => {
                self.status.fail(RegistryError::MissingEntry(id));
                None
            }
        }
    }

    /// Copy out the value stored under `id`, or `T::default()` when `id` is
    /// not live (recording [`RegistryError::MissingEntry`]).
    ///
    /// The `Default` bound is the price of the default-on-miss contract and
    /// is confined to this accessor; use [`get`](Self::get) to avoid it.
    pub fn value(&self, id: ResourceId) -> T
    where
        T: Clone + Default,
    {
        match self.get(id) {
            Some(value) => value.clone(),
            None => T::default(),
        }
    }

    /// Whether `id` names a live entry.
    pub fn exists(&self, id: ResourceId) -> bool {
        self.status.reset();
        self.entries.contains_key(&id)
    }

    /// Whether the registry holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.status.reset();
        self.entries.is_empty()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.status.reset();
        self.entries.len()
    }

    /// A copy of the full id → value mapping.
    pub fn snapshot(&self) -> HashMap<ResourceId, T>
    where
        T: Clone,
    {
        self.status.reset();
        self.entries.clone()
    }

    /// Drop all entries and discard the free pool, returning the registry
    /// to its initial state.
    pub fn clear(&mut self) {
        self.status.reset();
        self.entries.clear();
        self.free.clear();
    }

    /// Iterate over all live `(id, &value)` pairs in unspecified order.
    ///
    /// Traversal is lazy and restartable. It does not touch the last-call
    /// status, and the borrow rules prevent mutating the registry while an
    /// iterator is live.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate over all live `(id, &mut value)` pairs in unspecified order.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.entries.iter_mut(),
        }
    }

    /// Outcome of the most recently completed operation, if it failed.
    pub fn last_error(&self) -> Option<RegistryError> {
        self.status.get()
    }

    /// Human-readable outcome of the most recently completed operation.
    ///
    /// `"No error."` after a successful call. This is a last-call status,
    /// not an exception: poll it immediately after the call of interest,
    /// since the very next operation overwrites it.
    pub fn last_error_message(&self) -> String {
        self.status.message()
    }
}

impl<T> Default for ResourceRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(ResourceId, &T)` pairs. See [`ResourceRegistry::iter`].
pub struct Iter<'a, T> {
    inner: hash_map::Iter<'a, ResourceId, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (ResourceId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&id, value)| (id, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over `(ResourceId, &mut T)` pairs. See
/// [`ResourceRegistry::iter_mut`].
pub struct IterMut<'a, T> {
    inner: hash_map::IterMut<'a, ResourceId, T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = (ResourceId, &'a mut T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&id, value)| (id, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> IntoIterator for &'a ResourceRegistry<T> {
    type Item = (ResourceId, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ResourceRegistry<T> {
    type Item = (ResourceId, &'a mut T);
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
