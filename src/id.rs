//! Identifier types for the registry.
//!
//! Identifiers are opaque handles: callers obtain them from
//! [`ResourceRegistry::insert`](crate::ResourceRegistry::insert) and pass
//! them back to lookup and removal operations, but never compute with them.
//! Internally they are compact indices, so the embedding system can also
//! use them as array/table slots.

/// Handle to an entry in a [`ResourceRegistry`](crate::ResourceRegistry).
///
/// A `ResourceId` is unique among currently-live entries at any instant.
/// It is *not* unique across the registry's history: once its entry is
/// erased, the id returns to the free pool and a later insertion may reuse
/// it (smallest free id first). A stale handle held across an erase names
/// whatever entry occupies that slot now, or nothing.
pub type ResourceId = usize;
