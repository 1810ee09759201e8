//! UI primitives for the Fincontrol CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode, locale)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and the income/expense palette
//! - **Render**: Tables, receipts, hints, key-value lines
//! - **Prompt**: Terminal confirmation for destructive commands
//! - **Format**: String utilities (truncate, single-line)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{UiContext, OutputMode, Badge};
//! use crate::ui::render::{table, badge, hint};
//!
//! let ctx = app.ui_context(args.json, args.format.as_deref());
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", table(&ctx, &columns, &rows));
//! println!("{}", hint(&ctx, "fincontrol add <DESCRIPTION> --amount 10 --category Food"));
//! ```

mod context;
pub mod format;
mod mode;
mod prompt;
pub mod render;
pub mod theme;

pub use context::{can_prompt, UiContext};
pub use mode::{validate_format, OutputMode};
pub use prompt::TerminalConfirm;
pub use theme::Badge;

pub use render::{badge, hint, kv, print, print_error, receipt, table, Column};

pub use format::{single_line, truncate};
