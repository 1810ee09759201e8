//! Read-only views: summary totals and the category index.

use fincontrol_core::{categories, summarize, KeyValueStore, LedgerStore};

use crate::app::AppContext;
use crate::cli::{CategoriesArgs, SummaryArgs};
use crate::output::print_summary;
use crate::ui::{hint, print};

pub fn handle_summary<S: KeyValueStore>(
    ctx: &AppContext,
    store: &LedgerStore<S>,
    args: &SummaryArgs,
) -> anyhow::Result<()> {
    let summary = summarize(store.transactions())?;
    let ui_ctx = ctx.ui_context(args.json, None)?;

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    print_summary(&ui_ctx, &summary);
    Ok(())
}

pub fn handle_categories<S: KeyValueStore>(
    ctx: &AppContext,
    store: &LedgerStore<S>,
    args: &CategoriesArgs,
) -> anyhow::Result<()> {
    let names = categories(store.transactions());
    let ui_ctx = ctx.ui_context(args.json, None)?;

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    if names.is_empty() {
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, "No categories yet.");
            print(&ui_ctx, &hint(&ui_ctx, "fincontrol seed"));
        }
        return Ok(());
    }

    for name in &names {
        print(&ui_ctx, name);
    }
    Ok(())
}
