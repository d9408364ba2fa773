//! Browser-style local storage and the cart mirror built on it.
//!
//! [`LocalStorage`] is the `getItem`/`setItem` key-value contract. The cart
//! only ever touches one key through [`CartStore`], which serializes the line
//! items as a JSON array and treats unreadable data as an empty cart.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::LineItem;

/// Errors from a local-storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backing file or a value could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String key-value storage scoped to one origin.
pub trait LocalStorage {
    /// Value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

// =============================================================================
// In-memory backend
// =============================================================================

/// Local storage held in memory for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with one key.
    #[must_use]
    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.items.remove(key);
        Ok(())
    }
}

// =============================================================================
// File backend
// =============================================================================

/// Local storage persisted as a JSON object in a single file.
///
/// The whole file is rewritten on every change, through a temporary sibling
/// file and a rename so a crash never leaves a half-written store.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. So is a file that is not a JSON
    /// object of strings; it is replaced on the next write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Discarding malformed local storage file"
                );
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), keys = items.len(), "Opened local storage file");
        Ok(Self { path, items })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&self.items)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.items.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

// =============================================================================
// Cart mirror
// =============================================================================

/// The cart's view of local storage: one key, a JSON array of line items.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
}

impl<S: LocalStorage> CartStore<S> {
    /// Mirror the cart under `key` in `storage`.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Read the persisted line items.
    ///
    /// A missing key, an unreadable backend or malformed JSON all yield an
    /// empty list.
    #[must_use]
    pub fn load(&self) -> Vec<LineItem> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Could not read stored cart");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<LineItem>>>(&raw) {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Discarding malformed stored cart");
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted line items.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the backend write fails.
    pub fn save(&mut self, items: &[LineItem]) -> Result<(), StorageError> {
        let json = serde_json::to_string(items)?;
        self.storage.set_item(&self.key, &json)
    }

    /// The storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}
