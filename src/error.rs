//! Error taxonomy and the last-call status protocol.
//!
//! Registry failures are non-fatal: the failing operation degrades to
//! `None` (or a default value) and records a [`RegistryError`] as the
//! registry's last-call status. Nothing is raised, logged, escalated or
//! retried — the embedding system polls the status (or checks `exists`
//! up front) when it needs to distinguish "valid default" from "error".

use std::cell::Cell;

use thiserror::Error;

use crate::id::ResourceId;

/// Rendering of the neutral (no-error) status.
pub const NO_ERROR: &str = "No error.";

/// Failure outcomes a registry operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// `erase` was called while the registry held zero entries.
    #[error("cannot remove from an empty registry")]
    EmptyRegistryRemoval,

    /// A lookup named an id that is not currently live.
    #[error("no live entry for id {0}")]
    MissingEntry(ResourceId),
}

/// Last-call status: the outcome of the most recently completed operation.
///
/// Every public registry operation overwrites this. Successful calls reset
/// it to neutral, so a stale error never survives a later success. Interior
/// mutability (a `Cell`) lets read-only accessors keep `&self` receivers;
/// the registry itself is still single-threaded.
#[derive(Debug, Default)]
pub(crate) struct LastStatus {
    current: Cell<Option<RegistryError>>,
}

impl LastStatus {
    /// Reset to neutral. Called on entry to every operation.
    pub(crate) fn reset(&self) {
        self.current.set(None);
    }

    /// Record a failure for the current operation.
    pub(crate) fn fail(&self, error: RegistryError) {
        self.current.set(Some(error));
    }

    pub(crate) fn get(&self) -> Option<RegistryError> {
        self.current.get()
    }

    /// Human-readable rendering: [`NO_ERROR`] when neutral, otherwise the
    /// error's display text.
    pub(crate) fn message(&self) -> String {
        match self.current.get() {
            None => NO_ERROR.to_string(),
            Some(error) => error.to_string(),
        }
    }
}
