//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying transactions
//! and totals in various formats (JSON, table, plain text).

mod json;
mod text;

pub use json::transaction_views;
pub use text::{plain_amount, print_summary, print_transaction_list};
