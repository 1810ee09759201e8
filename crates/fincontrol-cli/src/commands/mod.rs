//! Command handlers.
//!
//! Each ledger command receives the store opened for this invocation.

pub mod misc;
pub mod overview;
pub mod transactions;
