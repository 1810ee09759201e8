use fincontrol_core::{KeyValueStore, LedgerStore};

use crate::cli::ExportArgs;
use crate::errors::CliError;

/// Dump the ledger in its storage layout (`descricao`, `valor`, ...).
pub fn handle_export<S: KeyValueStore>(
    store: &LedgerStore<S>,
    args: &ExportArgs,
) -> anyhow::Result<()> {
    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(store.transactions())?);
        }
        "jsonl" => {
            for transaction in store.transactions() {
                println!("{}", serde_json::to_string(transaction)?);
            }
        }
        other => {
            return Err(CliError::invalid_input(format!(
                "Unsupported export format: {} (use json or jsonl)",
                other
            ))
            .into())
        }
    }
    Ok(())
}
