//! # Store
//!
//! The [`Store`] is the only entry point of the crate. It owns the root
//! directory and the per-collection lock registry.
//!
//! ## Write Protocol
//!
//! 1. Lock the collection.
//! 2. Create the collection directory if needed.
//! 3. Encode the value.
//! 4. Write `resource.json.tmp` (optionally `fsync` it).
//! 5. Rename it over `resource.json`.
//!
//! A reader therefore sees either the previous file or the new one, never a
//! half-written record. If anything fails, the published file is untouched.
//!
//! ## Concurrency
//!
//! - Writes and deletes on the same collection are serialized.
//! - Different collections never contend.
//! - Reads and scans take no lock. They may miss a write that is in flight,
//!   but the rename guarantees they never observe a torn file.

use crate::codec;
use crate::error::{Result, StoreError};
use crate::locks::{self, LockRegistry};
use crate::maintenance;
use crate::options::StoreOptions;
use crate::paths::{self, check_collection, check_resource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct Store {
    root: PathBuf,
    locks: LockRegistry,
    options: StoreOptions,
}

enum DeleteTarget {
    Directory(PathBuf),
    Record(PathBuf),
}

impl Store {
    /// Open the store rooted at `root`, creating the directory if needed.
    ///
    /// An existing directory is reused as-is. With `create(false)` a missing
    /// root is reported as [`StoreError::NotFound`].
    pub fn open(root: impl Into<PathBuf>, options: StoreOptions) -> Result<Self> {
        let root = root.into();

        options.observe(|| -> Result<()> {
            if root.is_dir() {
                debug!("Using {} (database already exists)", root.display());
            } else if options.create {
                debug!("Creating the database at {} ...", root.display());
                fs::create_dir_all(&root)?;
            } else {
                return Err(StoreError::NotFound(format!(
                    "database directory {}",
                    root.display()
                )));
            }

            if let Some(age) = options.purge_stale_tmp {
                maintenance::purge_tmp(&root, age);
            }
            Ok(())
        })?;

        Ok(Self {
            root,
            locks: LockRegistry::new(),
            options,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Number of collections that have been locked by a write or delete.
    pub fn known_collections(&self) -> usize {
        self.locks.len()
    }

    /// Persist `value` as `collection/resource`, replacing any previous version.
    pub fn write<T>(&self, collection: &str, resource: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        check_collection(collection)?;
        check_resource(resource)?;

        let lock = self.locks.acquire(collection);
        let _guard = locks::lock(&lock);

        fs::create_dir_all(paths::collection_dir(&self.root, collection))?;

        let bytes = codec::encode(value)?;
        let target = paths::record_file(&self.root, collection, resource);
        let tmp = paths::temp_for(&target);

        if let Err(e) = self.publish(&tmp, &target, &bytes) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        self.options.observe(|| {
            debug!(path = %target.display(), "Successfully wrote {}/{}", collection, resource)
        });
        Ok(())
    }

    fn publish(&self, tmp: &Path, target: &Path, bytes: &[u8]) -> Result<()> {
        let mut file = File::create(tmp)?;
        file.write_all(bytes)?;
        if self.options.sync_writes {
            file.sync_all()?;
        }
        drop(file);

        fs::rename(tmp, target)?;
        Ok(())
    }

    /// Read and decode `collection/resource` into the caller's type.
    pub fn read<T>(&self, collection: &str, resource: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let bytes = self.read_raw(collection, resource)?;
        codec::decode(&bytes)
    }

    /// Raw bytes of `collection/resource` as stored on disk.
    ///
    /// `resource` may be given with or without the `.json` extension.
    pub fn read_raw(&self, collection: &str, resource: &str) -> Result<Vec<u8>> {
        check_collection(collection)?;
        check_resource(resource)?;

        let not_found = || StoreError::NotFound(format!("{}/{}", collection, resource));
        let path =
            paths::resolve_existing(&self.root, collection, resource).ok_or_else(not_found)?;

        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            // Deleted between resolution and read.
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(not_found()),
            Err(e) => Err(e.into()),
        }
    }

    /// Raw bytes of every record in `collection`, in directory order.
    ///
    /// Only `*.json` files count as records; temp files and nested directories
    /// are skipped. Callers must not rely on the order.
    pub fn read_all(&self, collection: &str) -> Result<Vec<Vec<u8>>> {
        check_collection(collection)?;

        let dir = paths::collection_dir(&self.root, collection);
        if !dir.is_dir() {
            return Err(StoreError::NotFound(collection.to_string()));
        }

        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            // Collection deleted after the check above.
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(collection.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() || !paths::has_record_ext(&path) {
                continue;
            }
            match fs::read(&path) {
                Ok(bytes) => records.push(bytes),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            }
        }

        self.options.observe(|| {
            debug!(
                count = records.len(),
                "Successfully read all records from {}", collection
            )
        });
        Ok(records)
    }

    /// Every record in `collection`, decoded into the caller's type.
    pub fn read_all_as<T>(&self, collection: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        self.read_all(collection)?
            .iter()
            .map(|bytes| codec::decode(bytes))
            .collect()
    }

    /// Delete a record, or the whole collection when `resource` is empty.
    ///
    /// If `collection/resource` names a directory, that directory is removed
    /// recursively. Removing a record also clears a leftover temp file.
    pub fn delete(&self, collection: &str, resource: &str) -> Result<()> {
        check_collection(collection)?;
        if !resource.is_empty() {
            check_resource(resource)?;
        }

        let lock = self.locks.acquire(collection);
        let _guard = locks::lock(&lock);

        let name = if resource.is_empty() {
            collection.to_string()
        } else {
            format!("{}/{}", collection, resource)
        };

        match self.delete_target(collection, resource) {
            None => {
                return Err(StoreError::NotFound(format!(
                    "unable to find file or directory named {}",
                    name
                )))
            }
            Some(DeleteTarget::Directory(dir)) => fs::remove_dir_all(&dir)?,
            Some(DeleteTarget::Record(file)) => {
                remove_if_present(&paths::temp_for(&file))?;
                fs::remove_file(&file)?;
            }
        }

        self.options.observe(|| debug!("Successfully deleted {}", name));
        Ok(())
    }

    fn delete_target(&self, collection: &str, resource: &str) -> Option<DeleteTarget> {
        let dir = paths::collection_dir(&self.root, collection);
        if resource.is_empty() {
            return dir.is_dir().then_some(DeleteTarget::Directory(dir));
        }

        let nested = dir.join(resource);
        if nested.is_dir() {
            return Some(DeleteTarget::Directory(nested));
        }

        paths::resolve_existing(&self.root, collection, resource).map(DeleteTarget::Record)
    }
}

fn remove_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
