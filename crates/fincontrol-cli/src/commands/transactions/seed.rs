use fincontrol_core::samples::seed_if_empty;
use fincontrol_core::{KeyValueStore, LedgerStore};

use crate::app::AppContext;
use crate::ui::{badge, hint, print, Badge, OutputMode};

pub fn handle_seed<S: KeyValueStore>(
    ctx: &AppContext,
    store: &mut LedgerStore<S>,
) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    let added = seed_if_empty(store, today)?;

    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None)?;
    match ui_ctx.mode {
        OutputMode::Pretty if added.is_empty() => {
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Warn,
                    "Ledger already has transactions; nothing added",
                ),
            );
            print(&ui_ctx, &hint(&ui_ctx, "fincontrol clear --force"));
        }
        OutputMode::Pretty => {
            print(
                &ui_ctx,
                &badge(
                    &ui_ctx,
                    Badge::Ok,
                    &format!("Added {} example transaction(s)", added.len()),
                ),
            );
            print(&ui_ctx, &hint(&ui_ctx, "fincontrol list"));
        }
        OutputMode::Plain | OutputMode::Json => {
            let status = if added.is_empty() { "skipped" } else { "ok" };
            println!("status={}", status);
            println!("added={}", added.len());
        }
    }
    Ok(())
}
