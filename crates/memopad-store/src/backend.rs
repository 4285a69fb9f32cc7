//! Storage backends for the memo store.

use crate::error::MemoError;
use log::{debug, info};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Host key-value store abstraction used by the memo store.
///
/// Keys map to UTF-8 string values, mirroring browser local storage:
/// reading an absent key yields `None` and a write replaces the whole
/// value. The store borrows one key; the backend owns everything else
/// about the storage lifecycle.
pub trait StorageBackend {
    /// Read the value at `key`, or `None` if the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>, MemoError>;

    /// Replace the value at `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), MemoError>;
}

/// File-backed storage keeping one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileBackend {
    /// Root directory for stored values.
    root: PathBuf,
}

impl FileBackend {
    /// Create a file backend under the given root, creating it if missing.
    pub fn new(root: impl AsRef<Path>) -> Result<Self, MemoError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|err| MemoError::Persistence(err.to_string()))?;
        info!("initialized file backend (root={})", root.display());
        Ok(Self { root })
    }

    /// Path to the value file for a key.
    fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Path to the temporary file used during replacement.
    fn temp_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json.tmp"))
    }
}

impl StorageBackend for FileBackend {
    /// Read the value file for a key; a missing file means an absent key.
    fn read(&self, key: &str) -> Result<Option<String>, MemoError> {
        let path = self.value_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value =
            fs::read_to_string(&path).map_err(|err| MemoError::Persistence(err.to_string()))?;
        Ok(Some(value))
    }

    /// Replace a key's value atomically via a temporary file and rename.
    fn write(&mut self, key: &str, value: &str) -> Result<(), MemoError> {
        let path = self.value_path(key);
        let temp_path = self.temp_path(key);
        fs::write(&temp_path, value).map_err(|err| MemoError::Persistence(err.to_string()))?;
        fs::rename(&temp_path, &path).map_err(|err| MemoError::Persistence(err.to_string()))?;
        debug!("wrote value (key={key}, bytes={})", value.len());
        Ok(())
    }
}

/// In-memory storage backend for tests and ephemeral hosts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    values: HashMap<String, String>,
}

impl InMemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw value directly, bypassing the store.
    pub fn seed(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Raw stored value for a key, if any.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl StorageBackend for InMemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, MemoError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), MemoError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FileBackend, InMemoryBackend, StorageBackend};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn file_backend_reads_absent_key_as_none() {
        let temp = tempdir().expect("tempdir");
        let backend = FileBackend::new(temp.path()).expect("backend");
        assert_eq!(backend.read("memos").expect("read"), None);
    }

    #[test]
    fn file_backend_write_replaces_previous_value() {
        let temp = tempdir().expect("tempdir");
        let mut backend = FileBackend::new(temp.path()).expect("backend");

        backend.write("memos", "[\"a\"]").expect("first write");
        backend.write("memos", "[\"a\",\"b\"]").expect("second write");

        assert_eq!(
            backend.read("memos").expect("read"),
            Some("[\"a\",\"b\"]".to_string())
        );
    }

    #[test]
    fn file_backend_keeps_keys_separate() {
        let temp = tempdir().expect("tempdir");
        let mut backend = FileBackend::new(temp.path()).expect("backend");

        backend.write("memos", "[\"a\"]").expect("write");
        assert_eq!(backend.read("other").expect("read"), None);
    }

    #[test]
    fn in_memory_backend_round_trips_values() {
        let mut backend = InMemoryBackend::new();
        assert_eq!(backend.read("memos").expect("read"), None);

        backend.write("memos", "[]").expect("write");
        assert_eq!(backend.read("memos").expect("read"), Some("[]".to_string()));
        assert_eq!(backend.raw("memos"), Some("[]"));
    }
}
