use fincontrol_core::{project, KeyValueStore, LedgerStore, TransactionFilter};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{print_transaction_list, transaction_views};
use crate::ui::validate_format;

pub fn handle_list<S: KeyValueStore>(
    ctx: &AppContext,
    store: &LedgerStore<S>,
    args: &ListArgs,
) -> anyhow::Result<()> {
    validate_format(args.json, args.format.as_deref())?;

    let mut filter = TransactionFilter::new();
    if let Some(category) = &args.category {
        filter = filter.category(category.as_str());
    }
    if let Some(kind) = args.kind {
        filter = filter.kind(kind);
    }
    let transactions = project(store.transactions(), &filter);

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;
    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&transaction_views(&transactions))?
        );
        return Ok(());
    }

    print_transaction_list(&ui_ctx, &transactions);
    Ok(())
}
