//! Text and table output formatting for transactions and totals.

use comfy_table::{Cell, Color};
use rust_decimal::{Decimal, RoundingStrategy};

use fincontrol_core::format::{format_currency, format_date, format_signed_amount};
use fincontrol_core::{Summary, Transaction, TransactionKind};

use crate::ui::theme::{balance_style, styled};
use crate::ui::{hint, kv, print, single_line, table, truncate, Column, UiContext};

const DESCRIPTION_WIDTH: usize = 40;

/// Locale-independent amount for plain output (`3500.00`).
pub fn plain_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn amount_cell(ctx: &UiContext, transaction: &Transaction) -> Cell {
    let cell = Cell::new(format_signed_amount(transaction, ctx.locale));
    if !ctx.color {
        return cell;
    }
    match transaction.kind {
        TransactionKind::Income => cell.fg(Color::Green),
        TransactionKind::Expense => cell.fg(Color::Red),
    }
}

/// Print a projected transaction list.
pub fn print_transaction_list(ctx: &UiContext, transactions: &[Transaction]) {
    if ctx.mode.is_pretty() {
        if transactions.is_empty() {
            print(ctx, "No transactions found.");
            print(
                ctx,
                &hint(
                    ctx,
                    "fincontrol add <DESCRIPTION> --amount <N> --category <C>",
                ),
            );
            return;
        }

        let columns = [
            Column::new("DATE"),
            Column::new("DESCRIPTION"),
            Column::new("CATEGORY"),
            Column::right("AMOUNT"),
            Column::right("ID"),
        ];
        let rows: Vec<Vec<Cell>> = transactions
            .iter()
            .map(|t| {
                vec![
                    Cell::new(format_date(t.date, ctx.locale)),
                    Cell::new(truncate(&single_line(&t.description), DESCRIPTION_WIDTH)),
                    Cell::new(&t.category),
                    amount_cell(ctx, t),
                    Cell::new(t.id),
                ]
            })
            .collect();
        print(ctx, &table(ctx, &columns, &rows));
        return;
    }

    let columns = [
        Column::new("id"),
        Column::new("date"),
        Column::new("type"),
        Column::new("amount"),
        Column::new("category"),
        Column::new("description"),
    ];
    let rows: Vec<Vec<Cell>> = transactions
        .iter()
        .map(|t| {
            vec![
                Cell::new(t.id),
                Cell::new(t.date),
                Cell::new(t.kind.as_str()),
                Cell::new(plain_amount(t.amount)),
                Cell::new(single_line(&t.category)),
                Cell::new(single_line(&t.description)),
            ]
        })
        .collect();
    if !rows.is_empty() {
        print(ctx, &table(ctx, &columns, &rows));
    }
}

/// Print summary totals.
pub fn print_summary(ctx: &UiContext, summary: &Summary) {
    if ctx.mode.is_pretty() {
        let balance = styled(
            &format_currency(summary.balance, ctx.locale),
            balance_style(summary.balance < Decimal::ZERO),
            ctx.color,
        );
        print(
            ctx,
            &kv(ctx, "Income", &format_currency(summary.total_income, ctx.locale)),
        );
        print(
            ctx,
            &kv(ctx, "Expenses", &format_currency(summary.total_expense, ctx.locale)),
        );
        print(ctx, &kv(ctx, "Balance", &balance));
        return;
    }

    print(ctx, &kv(ctx, "total_income", &plain_amount(summary.total_income)));
    print(ctx, &kv(ctx, "total_expense", &plain_amount(summary.total_expense)));
    print(ctx, &kv(ctx, "balance", &plain_amount(summary.balance)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_amount() {
        assert_eq!(plain_amount(dec!(3500)), "3500.00");
        assert_eq!(plain_amount(dec!(-250.005)), "-250.01");
        assert_eq!(plain_amount(dec!(0.1)), "0.10");
    }
}
