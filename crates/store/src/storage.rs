//! Key-value persistence adapters.
//!
//! Stores persist their collections as JSON strings under named slots.
//! The adapter interface is deliberately narrow: `get` returns the slot
//! contents if present, `set` overwrites them. Adapters report failures
//! through [`StorageError`]; the stores decide what to do with them (log
//! and carry on, per the resilience policy in [`crate::cart`]).

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

/// Errors raised by storage adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The adapter's internal lock was poisoned by a panicking thread.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// A named-slot key-value store scoped to one device/installation.
///
/// Implementations must make `set` followed by `get` of the same key
/// return the written value; slots with distinct keys never interact.
pub trait StorageAdapter {
    /// Read the contents of a slot. Returns `Ok(None)` if the slot has
    /// never been written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the contents of a slot.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: StorageAdapter + ?Sized> StorageAdapter for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Hydrate a collection from a slot, degrading to empty on any failure.
///
/// This is the single boundary where read/parse failures are absorbed:
/// missing slots, unreadable backends, and corrupt JSON all yield an empty
/// collection so that store construction never fails.
pub(crate) fn load_collection<T, S>(storage: &S, slot: &str) -> Vec<T>
where
    T: serde::de::DeserializeOwned,
    S: StorageAdapter + ?Sized,
{
    let raw = match storage.get(slot) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(slot, error = %e, "failed to read persisted collection, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(slot, error = %e, "persisted collection is corrupt, starting empty");
            Vec::new()
        }
    }
}

/// Persist the full collection to a slot, logging instead of failing.
///
/// Write failures leave the in-memory collection authoritative for the
/// session; the worst case is that state does not survive a restart.
pub(crate) fn store_collection<T, S>(storage: &S, slot: &str, items: &[T])
where
    T: serde::Serialize,
    S: StorageAdapter + ?Sized,
{
    let json = match serde_json::to_string(items) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!(slot, error = %e, "failed to serialize collection, skipping persist");
            return;
        }
    };

    if let Err(e) = storage.set(slot, &json) {
        tracing::warn!(slot, error = %e, "failed to persist collection, in-memory state unaffected");
    }
}

/// In-memory adapter backed by a mutexed map.
///
/// State lives only for the lifetime of the process; used for tests and
/// ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageAdapter for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed adapter: one JSON file per slot under a data directory.
///
/// This is the durable analog of per-origin browser storage: slots survive
/// process restarts on the same device. Concurrent writers to the same
/// data directory are last-write-wins; the store layer assumes a single
/// mutator per slot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create an adapter rooted at `dir`. The directory is created lazily
    /// on first write, not here.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory this adapter writes under.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageAdapter for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        // Write to a sibling temp file and rename so a crash mid-write
        // cannot leave a truncated slot; the previous snapshot survives.
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, self.slot_path(key))?;
        Ok(())
    }
}
