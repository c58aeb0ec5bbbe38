//! Cleanup of write artifacts left behind by a crash between the temp write and
//! the rename.

use crate::paths::is_temp_file;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

/// Remove `*.json.tmp` files older than `threshold` from the collection
/// directories under `root`. Files directly in `root` are never touched.
///
/// Returns `(removed, failed)`. Failures are logged, never returned: a leftover
/// temp file is harmless garbage.
pub fn purge_tmp(root: &Path, threshold: Duration) -> (usize, usize) {
    let (removed, failed) = remove_stale(root, SystemTime::now(), threshold);
    if removed > 0 || failed > 0 {
        info!(removed, failed, "Cleaned up temporary files");
    }
    (removed, failed)
}

fn remove_stale(root: &Path, now: SystemTime, threshold: Duration) -> (usize, usize) {
    let mut removed = 0;
    let mut failed = 0;

    WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .flatten()
        .filter(|e| e.file_type().is_file() && is_temp_file(e.path()))
        .filter(|e| is_stale(e, now, threshold))
        .for_each(|entry| match std::fs::remove_file(entry.path()) {
            Ok(()) => removed += 1,
            Err(e) => {
                warn!(path = %entry.path().display(), error = %e, "Failed to remove temp file");
                failed += 1;
            }
        });

    (removed, failed)
}

// A file whose age cannot be determined (unreadable metadata, mtime in the
// future) is kept.
fn is_stale(entry: &DirEntry, now: SystemTime, threshold: Duration) -> bool {
    entry
        .metadata()
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|modified| now.duration_since(modified).ok())
        .is_some_and(|age| age >= threshold)
}
