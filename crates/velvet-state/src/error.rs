//! # Error Types
//!
//! Persistence-boundary errors for velvet-state.
//!
//! ## Where Errors Go
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Flow                                      │
//! │                                                                         │
//! │  StorageError (this file)                                               │
//! │  ├── Io         - file read/write failure                               │
//! │  └── Serialize  - item collection could not be encoded                  │
//! │                                                                         │
//! │  Neither variant ever reaches a store consumer. Persistence is          │
//! │  best-effort by contract: the stores log the error and carry on         │
//! │  with their in-memory state. Corrupt data found at load is also         │
//! │  logged and treated as "no prior state".                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors raised inside the persistence adapter.
///
/// These exist so the adapter's internals can use `?` and report precise
/// causes in log lines; they are swallowed at the store boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The item collection could not be serialized to JSON.
    #[error("failed to encode record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for Results with StorageError.
pub type StorageResult<T> = Result<T, StorageError>;
