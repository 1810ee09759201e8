//! Application context for the Fincontrol CLI.
//!
//! Combines CLI arguments with the lazily-loaded config file.

use once_cell::unsync::OnceCell;
use tracing::debug;

use fincontrol_core::{FileStore, LedgerStore, Locale};

use crate::cli::Cli;
use crate::config::FincontrolConfig;
use crate::ui::UiContext;

use super::resolver::{resolve_config, resolve_data_dir, resolve_locale};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<FincontrolConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file, loading it on first use.
    pub fn config(&self) -> anyhow::Result<&FincontrolConfig> {
        self.config.get_or_try_init(|| resolve_config(self.cli))
    }

    pub fn locale(&self) -> anyhow::Result<Locale> {
        resolve_locale(self.cli, self.config()?)
    }

    /// Open the ledger in the resolved data directory.
    pub fn open_store(&self) -> anyhow::Result<LedgerStore<FileStore>> {
        let dir = resolve_data_dir(self.cli, self.config()?)?;
        debug!(dir = %dir.display(), "opening ledger");
        let storage = FileStore::open(dir)?;
        Ok(LedgerStore::open(storage))
    }

    /// Build the rendering context for a command.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> anyhow::Result<UiContext> {
        Ok(UiContext::from_env(
            json,
            format,
            self.cli.no_color,
            self.cli.ascii,
            self.locale()?,
        ))
    }
}
