//! # Storage Adapter
//!
//! On-device persistence for the stores: the `Storage` contract plus a
//! file-backed production implementation and an in-memory test double.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storage Contract                                     │
//! │                                                                         │
//! │  save(key, json)   called synchronously after EVERY mutating            │
//! │                    transition. Best-effort: no acknowledgment, no       │
//! │                    retry, no failure propagation. Faults are logged.    │
//! │                                                                         │
//! │  load(key)         called exactly ONCE per store per application        │
//! │                    lifetime, at initialization. None when the key       │
//! │                    is absent or unreadable.                             │
//! │                                                                         │
//! │  The two stores persist under independent keys ("cart", "wishlist")    │
//! │  and are never saved atomically together.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Trait?
//! The stores only ever speak this interface, so a debounced or async
//! backend could be swapped in later without changing store semantics.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::error;

use crate::error::StorageResult;

// =============================================================================
// Storage Trait
// =============================================================================

/// On-device key/value persistence for serialized item collections.
///
/// Implementations hold one JSON document per key. Writes are best-effort:
/// implementations log failures and return normally, matching the
/// "best effort local save" durability bar of the storefront.
pub trait Storage: Send {
    /// Writes the serialized collection under `key`, replacing any prior
    /// value. Never fails from the caller's point of view.
    fn save(&self, key: &str, json: &str);

    /// Returns the previously saved document, or `None` when absent or
    /// unreadable. Parse errors are the caller's concern: this layer
    /// moves bytes, the stores interpret them.
    fn load(&self, key: &str) -> Option<String>;
}

// =============================================================================
// File Storage
// =============================================================================

/// File-backed storage: one `<root>/<key>.json` document per key.
///
/// This is the desktop analog of the browser's local storage — a small
/// fixed set of human-readable keys, each holding a plain JSON array.
///
/// ## Configuration
/// The root directory comes from `VELVET_DATA_DIR` when set, falling back
/// to `./data` for development.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates a file storage rooted at the given directory. The directory
    /// is created lazily on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStorage { root: root.into() }
    }

    /// Creates a file storage from environment configuration.
    ///
    /// ## Environment Variables
    /// - `VELVET_DATA_DIR`: Override the storage root (default: `./data`)
    pub fn from_env() -> Self {
        let root = std::env::var("VELVET_DATA_DIR").unwrap_or_else(|_| "data".to_string());
        FileStorage::new(root)
    }

    /// Returns the backing file path for a key.
    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    /// Fallible write used internally so `?` works; `save` logs the result.
    fn try_save(&self, path: &Path, json: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn save(&self, key: &str, json: &str) {
        let path = self.path_for(key);
        if let Err(err) = self.try_save(&path, json) {
            // Best-effort contract: log and carry on with in-memory state
            error!(key, path = %path.display(), %err, "failed to persist record");
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                error!(key, path = %path.display(), %err, "failed to read record");
                None
            }
        }
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-memory storage backed by a shared map.
///
/// ## Uses
/// - Test double: tests clone the handle, run transitions through a store,
///   then inspect what was persisted via [`MemoryStorage::snapshot`]
/// - Ephemeral mode: a storefront session with persistence disabled
///
/// Cloning is cheap; clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Returns the raw document currently stored under `key`.
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.records
            .lock()
            .expect("storage mutex poisoned")
            .get(key)
            .cloned()
    }

    /// Seeds a record directly, bypassing any store. Tests use this to
    /// simulate pre-existing (or corrupt) persisted data.
    pub fn seed(&self, key: &str, json: &str) {
        self.records
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), json.to_string());
    }
}

impl Storage for MemoryStorage {
    fn save(&self, key: &str, json: &str) {
        self.records
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string(), json.to_string());
    }

    fn load(&self, key: &str) -> Option<String> {
        self.snapshot(key)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
