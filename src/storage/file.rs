use std::io::Write;
use std::path::{Path, PathBuf};
use indexmap::IndexMap;
use tempfile::NamedTempFile;

use super::{check_quota, StorageAdapter};
use crate::error::StorageError;

/// Local storage persisted as a single JSON object on disk.
///
/// The whole map is written to a sibling temp file and renamed over the
/// store after every mutation, so the file on disk is always a complete
/// snapshot. A write that fails leaves the in-memory map unchanged.
pub struct FileStorage {
    path: PathBuf,
    entries: IndexMap<String, String>,
    quota: usize,
}

impl FileStorage {
    /// Open the store at `path`. A missing file is an empty store; a corrupt
    /// one is moved aside to `<name>.corrupt` and the store starts empty.
    pub fn open(path: impl Into<PathBuf>, quota: usize) -> Self {
        let path = path.into();
        let entries = read_entries(&path);
        tracing::debug!("Opened local storage at {} ({} entries)", path.display(), entries.len());
        Self { path, entries, quota }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, entries: &IndexMap<String, String>) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;
        let data = serde_json::to_string_pretty(entries)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(data.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn commit(&mut self, entries: IndexMap<String, String>) -> Result<(), StorageError> {
        self.write(&entries)?;
        self.entries = entries;
        Ok(())
    }
}

fn read_entries(path: &Path) -> IndexMap<String, String> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return IndexMap::new(),
        Err(e) => {
            tracing::warn!("Failed to read local storage {}: {}", path.display(), e);
            set_aside(path);
            return IndexMap::new();
        }
    };

    match serde_json::from_str(&data) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to parse local storage {}: {}", path.display(), e);
            set_aside(path);
            IndexMap::new()
        }
    }
}

/// Location a damaged store is moved to
pub fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".corrupt");
    path.with_file_name(name)
}

fn set_aside(path: &Path) {
    let target = corrupt_path(path);
    match std::fs::rename(path, &target) {
        Ok(()) => tracing::warn!("Moved damaged local storage to {}. Starting empty.", target.display()),
        Err(e) => tracing::error!("Failed to move damaged local storage aside: {}. Starting empty.", e),
    }
}

impl StorageAdapter for FileStorage {
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_quota(&self.entries, key, value, self.quota)?;
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.commit(entries)
    }

    fn list_keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut entries = self.entries.clone();
        entries.shift_remove(key);
        self.commit(entries)
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.commit(IndexMap::new())
    }
}
