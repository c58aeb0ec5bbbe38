//! # jsondir Architecture
//!
//! jsondir is a **minimal document store** for single-process applications that
//! want durable, human-readable storage without running a database. Records are
//! grouped into collections and every record is one pretty-printed JSON file:
//!
//! ```text
//! <root>/
//! ├── users/
//! │   ├── zoro.json
//! │   └── sabo.json
//! └── ships/
//!     └── sunny.json
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store.rs)                                           │
//! │  - write / read / read_all / delete pipelines               │
//! │  - Atomic publish: temp file + rename                       │
//! └─────────────────────────────────────────────────────────────┘
//!            │                  │                   │
//!            ▼                  ▼                   ▼
//! ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────┐
//! │ paths.rs         │ │ locks.rs         │ │ codec.rs         │
//! │ ids → file paths │ │ 1 mutex per      │ │ tab-indented     │
//! │                  │ │ collection       │ │ JSON + newline   │
//! └──────────────────┘ └──────────────────┘ └──────────────────┘
//! ```
//!
//! ## Guarantees
//!
//! - A record file is always either fully the old version or fully the new one.
//! - Writes and deletes on one collection are serialized; collections never
//!   contend with each other.
//! - Reads are lock-free. They favour availability over read-after-write
//!   consistency but never see a torn record.
//! - Errors are returned to the caller, never logged and swallowed. Nothing is
//!   retried.
//!
//! ## Logging
//!
//! The store emits `tracing` events. Pass a dispatcher through
//! [`StoreOptions::logger`] to route them somewhere other than the global
//! subscriber.
//!
//! ## Example
//!
//! ```no_run
//! use jsondir::{Store, StoreOptions};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! # fn main() -> jsondir::error::Result<()> {
//! let store = Store::open("./data", StoreOptions::default())?;
//! store.write("users", "zoro", &User { name: "Zoro".into(), age: 23 })?;
//! let zoro: User = store.read("users", "zoro")?;
//! let everyone: Vec<User> = store.read_all_as("users")?;
//! store.delete("users", "")?;
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod locks;
pub mod maintenance;
pub mod options;
pub mod paths;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use error::{Result, StoreError};
pub use options::StoreOptions;
pub use store::Store;
