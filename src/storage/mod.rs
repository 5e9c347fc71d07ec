//! Key-value persistence subsystem.
//!
//! # Data Flow
//! ```text
//! NavigationController / DataStore
//!     → KeyValueStore::get / set / remove (string keys, string values)
//!     → memory.rs (process-local, tests and ephemeral runs)
//!     → file.rs   (JSON object on disk, rewritten on every write)
//! ```
//!
//! # Design Decisions
//! - Values are opaque strings; callers serialize (JSON, "true"/"false")
//! - Handles are shared as `Arc<dyn KeyValueStore>`
//! - No transactions: each write stands alone

pub mod file;
pub mod memory;

use std::sync::Arc;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by store backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not a JSON object of strings.
    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A string key-value store in the spirit of browser local storage.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Fetch the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared store handle.
pub type SharedStore = Arc<dyn KeyValueStore>;
