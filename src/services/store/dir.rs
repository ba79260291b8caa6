//! Filesystem-backed store keeping one `.snap` file per key.

use super::SnapshotStore;
use crate::Result;
use crate::io::snapshot::{read_snapshot, write_snapshot};
use crate::services::key::SnapshotKey;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Store rooted at a snapshot directory. The directory is created lazily on
/// first write and otherwise treated as pre-existing external state; nothing
/// ever deletes snapshot files.
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SnapshotStore for DirStore {
    fn read(&self, key: &SnapshotKey) -> Result<Option<Value>> {
        read_snapshot(&self.root, key)
    }

    fn write(&mut self, key: &SnapshotKey, value: &Value) -> Result<()> {
        write_snapshot(&self.root, key, value)
    }
}
