//! Business data subsystem.
//!
//! # Data Flow
//! ```text
//! KeyValueStore ("invoices", "expenses", "clients", "products", "userSettings")
//!     → store.rs (JSON decode, seed when absent)
//!     → DataStore (typed collections from model.rs)
//!     → page rendering / save back
//! ```

pub mod id;
pub mod model;
pub mod seed;
pub mod store;

use thiserror::Error;

use crate::storage::StorageError;

pub use id::generate_id;
pub use model::{Client, Expense, Invoice, InvoiceItem, InvoiceStatus, Product, UserSettings};
pub use store::DataStore;

/// Errors raised while loading or saving collections.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to decode `{key}`: {source}")]
    Decode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode `{key}`: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
