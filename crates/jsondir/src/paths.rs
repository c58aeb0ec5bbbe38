//! # Path Resolution
//!
//! Maps `(collection, resource)` identifiers onto the filesystem:
//!
//! ```text
//! <root>/
//! └── <collection>/
//!     ├── <resource>.json       # Published record
//!     └── <resource>.json.tmp   # Only present while a write is in flight
//! ```
//!
//! Writes and deletes always target `<resource>.json`. Reads additionally accept
//! a resource name that already carries the extension (`zoro.json`), so callers
//! that only know the on-disk file name can still look records up.
//!
//! Every identifier must be a single, non-empty path component. Anything that
//! could step outside the collection directory (`..`, separators, NUL) is
//! rejected before a path is ever built.

use crate::error::{Result, StoreError};
use std::path::{Path, PathBuf};

/// Extension of published record files.
pub const RECORD_EXT: &str = "json";

/// Suffix appended to the record file name while a write is in flight.
pub const TMP_SUFFIX: &str = ".tmp";

/// Validate a collection name.
pub fn check_collection(collection: &str) -> Result<()> {
    if collection.is_empty() {
        return Err(StoreError::InvalidArgument(
            "missing collection - no place to save record".to_string(),
        ));
    }
    check_component("collection", collection)
}

/// Validate a resource name.
pub fn check_resource(resource: &str) -> Result<()> {
    if resource.is_empty() {
        return Err(StoreError::InvalidArgument(
            "missing resource - unable to save record (no name)".to_string(),
        ));
    }
    check_component("resource", resource)
}

fn check_component(what: &str, name: &str) -> Result<()> {
    let unsafe_name = name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if unsafe_name {
        return Err(StoreError::InvalidArgument(format!(
            "{} name {:?} must be a single path component",
            what, name
        )));
    }
    Ok(())
}

/// Directory holding every record of `collection`.
pub fn collection_dir(root: &Path, collection: &str) -> PathBuf {
    root.join(collection)
}

/// Canonical on-disk file for a record: `root/collection/resource.json`.
pub fn record_file(root: &Path, collection: &str, resource: &str) -> PathBuf {
    collection_dir(root, collection).join(format!("{}.{}", resource, RECORD_EXT))
}

/// Sibling temp file used by the atomic publish: `resource.json.tmp`.
pub fn temp_file(root: &Path, collection: &str, resource: &str) -> PathBuf {
    temp_for(&record_file(root, collection, resource))
}

/// Temp file name for an arbitrary record file path.
pub fn temp_for(record: &Path) -> PathBuf {
    let mut name = record.as_os_str().to_owned();
    name.push(TMP_SUFFIX);
    PathBuf::from(name)
}

/// Find the file backing an existing record.
///
/// Tries `resource.json` first, then `resource` verbatim for callers that already
/// appended the extension. Returns `None` when neither is a regular file.
pub fn resolve_existing(root: &Path, collection: &str, resource: &str) -> Option<PathBuf> {
    let path = record_file(root, collection, resource);
    if path.is_file() {
        return Some(path);
    }

    if has_record_ext(Path::new(resource)) {
        let bare = collection_dir(root, collection).join(resource);
        if bare.is_file() {
            return Some(bare);
        }
    }

    None
}

/// True for published record files (`*.json`), false for temp files and others.
pub fn has_record_ext(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(RECORD_EXT)
}

/// True for in-flight write artifacts (`*.json.tmp`).
pub fn is_temp_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(&format!(".{}{}", RECORD_EXT, TMP_SUFFIX)))
}
