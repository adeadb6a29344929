//! Generic resource registry with min-order identifier recycling.
//!
//! A [`ResourceRegistry`] accepts values of an arbitrary element type,
//! assigns each an opaque [`ResourceId`] on insertion, and supports lookup,
//! existence-check and removal by that id. Freed ids are recycled for
//! future insertions, smallest first, so the id space stays dense (bounded
//! by the live-entry count) instead of growing without bound.
//!
//! The registry is a plain single-threaded in-process structure: every
//! operation runs to completion, never blocks, never logs. Failures are
//! reported through a last-call status rather than panics — see
//! [`ResourceRegistry::last_error_message`].

pub mod error;
pub mod id;
pub mod pool;
pub mod registry;

pub use error::{RegistryError, NO_ERROR};
pub use id::ResourceId;
pub use pool::FreePool;
pub use registry::ResourceRegistry;
