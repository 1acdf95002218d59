use indexmap::IndexMap;

use super::{check_quota, StorageAdapter};
use crate::error::StorageError;
use crate::state::DEFAULT_QUOTA_CHARS;

/// Session-scoped storage; nothing survives the process
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: IndexMap<String, String>,
    quota: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::with_quota(DEFAULT_QUOTA_CHARS)
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            quota,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageAdapter for MemoryStorage {
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_quota(&self.entries, key, value, self.quota)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn list_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.shift_remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        Ok(())
    }
}
