//! # Fincontrol Core
//!
//! Core library for Fincontrol - a personal finance ledger for recording income
//! and expenses, viewing totals, and filtering the transaction list.
//!
//! This crate provides the domain model, the ledger store, and the derived
//! views, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Key-value storage trait, transaction types, backends
//! - **store**: The ledger store (add/remove/clear + persistence)
//! - **view**: Summary totals and filtered, date-sorted projections
//! - **categories**: Distinct category index for filter controls
//! - **format**: Locale-aware currency and date rendering
//! - **confirm**: Confirmation capability for destructive operations
//! - **samples**: First-run example transactions

pub mod categories;
pub mod confirm;
pub mod error;
pub mod format;
mod fs;
pub mod samples;
pub mod storage;
pub mod store;
pub mod view;

pub use categories::categories;
pub use confirm::{Confirm, Decision};
pub use error::{LedgerError, Result};
pub use format::Locale;
pub use storage::{
    FileStore, KeyValueStore, MemoryStore, NewTransaction, Transaction, TransactionFilter,
    TransactionId, TransactionKind, MAX_AMOUNT,
};
pub use store::{LedgerStore, STORAGE_KEY};
pub use view::{project, summarize, Summary};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
