//! In-memory store for exercising comparison logic without touching disk.

use super::SnapshotStore;
use crate::Result;
use crate::services::key::SnapshotKey;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    baselines: HashMap<SnapshotKey, Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: &SnapshotKey) -> Result<Option<Value>> {
        Ok(self.baselines.get(key).cloned())
    }

    fn write(&mut self, key: &SnapshotKey, value: &Value) -> Result<()> {
        self.baselines.insert(key.clone(), value.clone());
        Ok(())
    }
}
