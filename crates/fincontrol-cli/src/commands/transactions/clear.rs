use fincontrol_core::{KeyValueStore, LedgerStore};

use crate::app::AppContext;
use crate::cli::ClearArgs;
use crate::ui::{badge, print, Badge, OutputMode, TerminalConfirm};

use super::require_prompt;

pub fn handle_clear<S: KeyValueStore>(
    ctx: &AppContext,
    store: &mut LedgerStore<S>,
    args: &ClearArgs,
) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None)?;
    let removed = store.len();

    if args.force {
        store.clear()?;
    } else {
        require_prompt("clear the ledger")?;
        let decision = store.clear_confirmed(&mut TerminalConfirm::new(ui_ctx.locale))?;
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
                &badge(
                    &ui_ctx,
                    Badge::Ok,
                    &format!("Deleted {} transaction(s)", removed),
                ),
            ),
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("deleted={}", removed);
            }
        }
    }
    Ok(())
}
