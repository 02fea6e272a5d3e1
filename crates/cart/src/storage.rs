//! Key-value persistence for the cart slot.
//!
//! The cart is stored as a single JSON document under one namespaced key.
//! [`CartStore`] is the seam between the manager and whatever holds that
//! document: an in-memory map for tests and ephemeral sessions, or a file
//! per key for durable storage.
//!
//! All methods take `&self`; implementations use interior mutability so a
//! store can be shared without threading `&mut` through the call graph.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// The store's internal lock was poisoned by a panicking holder.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A key-value slot holding one serialized document per key.
///
/// `get` returns `Ok(None)` for an absent key; `delete` of an absent key
/// succeeds. Neither distinction matters to the cart manager, which treats
/// an absent slot as an empty cart.
pub trait CartStore {
    /// Retrieve the document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite the document under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be written.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the document under `key`. Removing an absent key is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be written.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store backed by a mutex-guarded map.
///
/// Used in tests and anywhere a cart should not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.remove(key);
        Ok(())
    }
}

/// File-backed store: one `<root>/<key>.json` file per key.
///
/// The durable analogue of browser local storage. The root directory is
/// created on first write, not on construction, so pointing a `FileStore`
/// at a path that never gets written leaves no trace on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl CartStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl<S: CartStore + ?Sized> CartStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        (**self).delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.put("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.put("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.delete("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_memory_store_delete_absent_key_is_ok() {
        let store = MemoryStore::new();
        assert!(store.delete("never-written").is_ok());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert_eq!(store.get("cart").unwrap(), None);

        store.put("cart", "[1,2,3]").unwrap();
        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[1,2,3]"));
        assert!(dir.path().join("cart.json").exists());

        store.delete("cart").unwrap();
        assert_eq!(store.get("cart").unwrap(), None);
        assert!(!dir.path().join("cart.json").exists());
    }

    #[test]
    fn test_file_store_delete_absent_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.delete("cart").is_ok());
    }

    #[test]
    fn test_file_store_does_not_create_root_until_write() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested");
        let store = FileStore::new(&root);

        assert_eq!(store.get("cart").unwrap(), None);
        assert!(!root.exists());

        store.put("cart", "[]").unwrap();
        assert!(root.exists());
    }
}
