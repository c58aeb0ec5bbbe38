//! # Store Options
//!
//! Everything a [`Store`](crate::Store) needs besides its root directory.
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `logger` | global subscriber | `tracing` dispatcher receiving the store's events |
//! | `create` | `true` | Create the root directory when it does not exist |
//! | `sync_writes` | `false` | `fsync` temp files before publishing them |
//! | `purge_stale_tmp` | `Some(300s)` | Age after which leftover `*.json.tmp` files are removed on open |

use std::time::Duration;
use tracing::Dispatch;

/// Default age after which leftover temp files are considered abandoned.
pub const DEFAULT_STALE_TMP_AGE: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub(crate) logger: Option<Dispatch>,
    pub(crate) create: bool,
    pub(crate) sync_writes: bool,
    pub(crate) purge_stale_tmp: Option<Duration>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            logger: None,
            create: true,
            sync_writes: false,
            purge_stale_tmp: Some(DEFAULT_STALE_TMP_AGE),
        }
    }
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route the store's log events to `dispatch` instead of the global subscriber.
    pub fn logger(mut self, dispatch: impl Into<Dispatch>) -> Self {
        self.logger = Some(dispatch.into());
        self
    }

    /// Whether `open` may create a missing root directory.
    pub fn create(mut self, enable: bool) -> Self {
        self.create = enable;
        self
    }

    /// Flush each record to disk before it is renamed into place.
    pub fn sync_writes(mut self, enable: bool) -> Self {
        self.sync_writes = enable;
        self
    }

    /// Remove temp files older than `age` when the store is opened. `None` disables it.
    pub fn purge_stale_tmp(mut self, age: Option<Duration>) -> Self {
        self.purge_stale_tmp = age;
        self
    }

    pub fn is_sync_writes(&self) -> bool {
        self.sync_writes
    }

    /// Run `f` with this store's dispatcher as the current default, if one was given.
    pub(crate) fn observe<R>(&self, f: impl FnOnce() -> R) -> R {
        match &self.logger {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }
}
