use fincontrol_core::{KeyValueStore, LedgerStore};

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::ui::{badge, print, Badge, OutputMode, TerminalConfirm};

use super::require_prompt;

pub fn handle_delete<S: KeyValueStore>(
    ctx: &AppContext,
    store: &mut LedgerStore<S>,
    args: &DeleteArgs,
) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None)?;

    // Deleting an unknown id is a no-op, so skip the prompt entirely.
    if store.get(args.id).is_none() {
        if !ctx.quiet() {
            match ui_ctx.mode {
                OutputMode::Pretty => print(
                    &ui_ctx,
                    &badge(
                        &ui_ctx,
                        Badge::Info,
                        &format!("No transaction with ID {}; nothing deleted", args.id),
                    ),
                ),
                OutputMode::Plain | OutputMode::Json => {
                    println!("status=not_found");
                    println!("id={}", args.id);
                }
            }
        }
        return Ok(());
    }

    if args.force {
        store.remove(args.id)?;
    } else {
        require_prompt("delete")?;
        let decision = store.remove_confirmed(args.id, &mut TerminalConfirm::new(ui_ctx.locale))?;
        if !decision.is_confirmed() {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled")),
                    OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
                }
            }
            return Ok(());
        }
    }

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => print(
                &ui_ctx,
                &badge(&ui_ctx, Badge::Ok, &format!("Deleted transaction {}", args.id)),
            ),
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("deleted={}", args.id);
            }
        }
    }
    Ok(())
}
