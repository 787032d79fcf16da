//! Key-value collaborator contract and implementations.
//!
//! # Responsibility
//! - Read and write whole collection payloads under fixed string keys.
//! - Keep filesystem details inside the persistence boundary.
//!
//! # Invariants
//! - `get` on an absent key returns `Ok(None)`, never an error.
//! - `put` replaces the full payload for a key atomically from the caller's
//!   perspective.

use super::{StoreError, StoreResult};
use log::{error, info};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// External key-value store addressed by fixed collection keys.
pub trait KeyValueStore {
    /// Returns the payload stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the payload stored under `key`.
    fn put(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).put(key, value)
    }
}

/// In-memory store, the default backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store keeping one payload file per key under a root directory.
#[derive(Debug)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Opens the store rooted at `root`, creating the directory when needed.
    ///
    /// # Side effects
    /// - Emits `store_open` logging events with status.
    pub fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let root = root.as_ref().to_path_buf();
        if let Err(source) = fs::create_dir_all(&root) {
            error!(
                "event=store_open module=store status=error root={} error={source}",
                root.display()
            );
            return Err(StoreError::Io { path: root, source });
        }
        info!(
            "event=store_open module=store status=ok root={}",
            root.display()
        );
        Ok(Self { root })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.key_path(key);
        fs::write(&path, value).map_err(|source| StoreError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn memory_store_get_returns_none_for_absent_key() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("pharmacies").unwrap(), None);
    }

    #[test]
    fn memory_store_put_replaces_payload() {
        let mut store = MemoryKeyValueStore::new();
        store.put("pharmacies", "[]").unwrap();
        store.put("pharmacies", "[1]").unwrap();
        assert_eq!(store.get("pharmacies").unwrap().as_deref(), Some("[1]"));
    }
}
