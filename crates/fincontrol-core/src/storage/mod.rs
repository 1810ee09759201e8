//! Storage abstraction for Fincontrol.
//!
//! This module defines the `KeyValueStore` trait and the core data types
//! persisted through it.
//!
//! ## Architecture
//!
//! The storage layer is a plain key-value seam:
//! - `FileStore`: one JSON file per key inside a data directory
//! - `MemoryStore`: in-process map, for tests and embedding
//!
//! The ledger itself lives under a single key as a JSON array; see
//! [`crate::store`] for the layout.

pub mod file;
pub mod memory;
pub mod traits;
pub mod types;

// Re-export public types
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
pub use types::{
    NewTransaction, Transaction, TransactionFilter, TransactionId, TransactionKind, MAX_AMOUNT,
};
