//! Snapshot stores abstracting where baselines live.
//!
//! The comparison logic only ever talks to this trait, so tests can swap the
//! real snapshot directory for an in-memory map.

use crate::Result;
use crate::services::key::SnapshotKey;
use serde_json::Value;

/// Trait implemented by stores that persist baselines by key.
pub trait SnapshotStore {
    /// Load the baseline for `key`, or `None` when no baseline exists yet.
    ///
    /// A baseline that exists but cannot be parsed is an error, never `None`.
    fn read(&self, key: &SnapshotKey) -> Result<Option<Value>>;

    /// Persist `value` as the baseline for `key`, overwriting any previous one.
    fn write(&mut self, key: &SnapshotKey, value: &Value) -> Result<()>;
}

pub mod dir;
pub mod memory;
