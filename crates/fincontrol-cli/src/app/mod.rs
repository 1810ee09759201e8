//! Application-level utilities for the Fincontrol CLI.
//!
//! This module provides:
//! - Path resolution for the config file and data directory
//! - The per-invocation application context

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{resolve_config, resolve_data_dir, resolve_locale};
