//! Snapshot file read/write operations
//!
//! One file per key under the snapshot root, stored as pretty-printed JSON so
//! baselines stay human-diffable in review.

use crate::services::key::SnapshotKey;
use crate::{Error, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Path of the snapshot file for `key` under `root`.
#[must_use]
pub fn snapshot_path(root: &Path, key: &SnapshotKey) -> PathBuf {
    root.join(key.file_name())
}

/// Write a snapshot, creating the root directory on first use.
///
/// # Errors
/// I/O failures creating the directory or writing the file propagate as
/// `Error::Io`.
pub fn write_snapshot(root: &Path, key: &SnapshotKey, value: &Value) -> Result<()> {
    fs::create_dir_all(root)?;

    let text = serde_json::to_string_pretty(value).map_err(Error::Serialize)?;
    let path = snapshot_path(root, key);
    fs::write(&path, text)?;
    log::trace!("Wrote snapshot {}", path.display());
    Ok(())
}

/// Read a snapshot back, returning `None` when no baseline exists yet.
///
/// # Errors
/// A file that exists but fails to parse is a corrupt baseline and is
/// reported as `Error::CorruptSnapshot`, never as "absent". Other read
/// failures propagate as `Error::Io`.
pub fn read_snapshot(root: &Path, key: &SnapshotKey) -> Result<Option<Value>> {
    let path = snapshot_path(root, key);

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::Io(e)),
    };

    let value = serde_json::from_str(&text).map_err(|e| Error::CorruptSnapshot {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(Some(value))
}
