//! Per-collection write locks.
//!
//! The registry hands out one `Mutex<()>` per collection name. Locks are created
//! on first use and kept for the lifetime of the registry, even after the
//! collection directory is deleted, so a lock can never be swapped out from
//! under a writer that is still waiting on it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type CollectionLock = Arc<Mutex<()>>;

#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: Mutex<HashMap<String, CollectionLock>>,
}

impl LockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the lock for `collection`, creating it on first access.
    ///
    /// The registry mutex is only held for the lookup/insert.
    pub fn acquire(&self, collection: &str) -> CollectionLock {
        let mut map = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(lock) = map.get(collection) {
            return Arc::clone(lock);
        }
        let lock = CollectionLock::default();
        map.insert(collection.to_string(), Arc::clone(&lock));
        lock
    }

    /// Number of distinct collections that have been locked so far.
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lock a collection mutex, recovering from poisoning.
///
/// The mutex guards no data; a writer that panicked cannot leave a torn record
/// behind because records are only published by rename.
pub fn lock(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    lock.lock().unwrap_or_else(PoisonError::into_inner)
}
