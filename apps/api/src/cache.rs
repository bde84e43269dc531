//! Single-slot, last-writer-wins store for the most recent analysis result.
//!
//! Lives in `AppState` behind an `Arc`, so every handler sees the same slot and
//! tests can build (or `reset`) their own instance.

use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CacheError {
    #[error("No result has been stored yet")]
    Empty,
}

/// Holds at most one value. `put` replaces it wholesale under the write lock,
/// so a concurrent `get` observes either the old or the new value, never a mix.
#[derive(Debug)]
pub struct LastResultCache<T> {
    slot: RwLock<Option<Arc<T>>>,
}

impl<T> Default for LastResultCache<T> {
    fn default() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }
}

impl<T> LastResultCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the slot unconditionally.
    pub fn put(&self, value: T) {
        let value = Arc::new(value);
        // The slot only ever holds complete values, so a poisoned lock is safe to reuse.
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(value);
    }

    /// Returns the current value, or `CacheError::Empty` if nothing was stored.
    pub fn get(&self) -> Result<Arc<T>, CacheError> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(CacheError::Empty)
    }
}

#[cfg(test)]
impl<T> LastResultCache<T> {
    pub fn reset(&self) {
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
