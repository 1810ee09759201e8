//! Fincontrol CLI - a personal finance ledger for income and expenses
//!
//! This is the command-line interface for Fincontrol. Each invocation opens
//! the ledger once, runs one command against it, and exits.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;
mod ui;

use clap::Parser;
use fincontrol_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{misc, overview, transactions};
use crate::errors::exit_code_for;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx
            .ui_context(false, None)
            .unwrap_or_else(|_| fallback_ui_context(&cli));

        let error_msg = format!("{:#}", e);
        let (message, hint) = split_hint(&error_msg);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Error rendering must not depend on a readable config file.
fn fallback_ui_context(cli: &Cli) -> UiContext {
    UiContext::from_env(false, None, cli.no_color, cli.ascii, Default::default())
}

/// Split a trailing `Hint: ...` line off an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (
            &error[..idx],
            Some(error[idx + "\nHint:".len()..].trim()),
        ),
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    let command = match &cli.command {
        Some(Commands::Completions { shell }) => return misc::handle_completions(*shell),
        Some(command) => command,
        None => {
            print_quickstart();
            return Ok(());
        }
    };

    let mut store = ctx.open_store()?;
    match command {
        Commands::Add(args) => transactions::handle_add(ctx, &mut store, args)?,
        Commands::List(args) => transactions::handle_list(ctx, &store, args)?,
        Commands::Summary(args) => overview::handle_summary(ctx, &store, args)?,
        Commands::Categories(args) => overview::handle_categories(ctx, &store, args)?,
        Commands::Delete(args) => transactions::handle_delete(ctx, &mut store, args)?,
        Commands::Clear(args) => transactions::handle_clear(ctx, &mut store, args)?,
        Commands::Seed => transactions::handle_seed(ctx, &mut store)?,
        Commands::Export(args) => transactions::handle_export(&store, args)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}

fn print_quickstart() {
    println!("Fincontrol v{}", VERSION);
    println!("\nQuickstart:");
    println!("  fincontrol seed");
    println!("  fincontrol add \"Salário\" --amount 3500 --category Trabalho --type income");
    println!("  fincontrol list --type expense");
    println!("  fincontrol summary");
    println!("\nRun `fincontrol --help` for full usage.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hint() {
        let (message, hint) = split_hint("Config file not found: /x\nHint: Check --config");
        assert_eq!(message, "Config file not found: /x");
        assert_eq!(hint, Some("Check --config"));
    }

    #[test]
    fn test_split_hint_without_hint() {
        assert_eq!(split_hint("boom"), ("boom", None));
    }
}
