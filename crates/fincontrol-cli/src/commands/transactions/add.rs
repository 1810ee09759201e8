use chrono::NaiveDate;

use fincontrol_core::format::{format_date, format_signed_amount, parse_amount};
use fincontrol_core::{KeyValueStore, LedgerStore, NewTransaction};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::output::plain_amount;
use crate::ui::{print, receipt};

pub fn handle_add<S: KeyValueStore>(
    ctx: &AppContext,
    store: &mut LedgerStore<S>,
    args: &AddArgs,
) -> anyhow::Result<()> {
    let amount = parse_amount(&args.amount)?;
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => chrono::Local::now().date_naive(),
    };

    let new_transaction = NewTransaction::new(
        args.description.as_str(),
        amount,
        args.category.as_str(),
        date,
        args.kind,
    )?;
    let transaction = store.add(new_transaction)?;

    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false, None)?;
    let id = transaction.id.to_string();
    let (amount, date) = if ui_ctx.mode.is_pretty() {
        (
            format_signed_amount(&transaction, ui_ctx.locale),
            format_date(transaction.date, ui_ctx.locale),
        )
    } else {
        (plain_amount(transaction.amount), transaction.date.to_string())
    };
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            &format!("Added {}", transaction.kind),
            &[
                ("ID", id.as_str()),
                ("Type", transaction.kind.as_str()),
                ("Amount", amount.as_str()),
                ("Category", transaction.category.as_str()),
                ("Date", date.as_str()),
            ],
        ),
    );
    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!("Invalid date: {} (expected YYYY-MM-DD)", value))
    })
}
