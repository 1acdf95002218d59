pub mod memory;
pub mod file;

use indexmap::IndexMap;

use crate::error::StorageError;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// String-keyed, string-valued persistent store (local storage semantics)
pub trait StorageAdapter {
    /// Insert or overwrite; last write wins
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Keys in first-insertion order
    fn list_keys(&self) -> Vec<String>;

    /// `None` when the key is absent
    fn get(&self, key: &str) -> Option<String>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;

    fn clear(&mut self) -> Result<(), StorageError>;
}

/// Size of a key or value as browsers count it
fn char_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Storage usage if `key` were set to `value`
fn usage_after_put(entries: &IndexMap<String, String>, key: &str, value: &str) -> usize {
    let current: usize = entries
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| char_len(k) + char_len(v))
        .sum();
    current + char_len(key) + char_len(value)
}

fn check_quota(
    entries: &IndexMap<String, String>,
    key: &str,
    value: &str,
    quota: usize,
) -> Result<(), StorageError> {
    let needed = usage_after_put(entries, key, value);
    if needed > quota {
        return Err(StorageError::QuotaExceeded { needed, quota });
    }
    Ok(())
}
