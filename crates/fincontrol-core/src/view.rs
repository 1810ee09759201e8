//! Derived views over a ledger snapshot: summary totals and projections.
//!
//! Both are recomputed from scratch on every call; ledgers are small.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{LedgerError, Result};
use crate::storage::{Transaction, TransactionFilter, TransactionKind};

/// Aggregate totals over a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Summary {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Sum income and expense amounts; balance is income minus expense.
///
/// # Errors
///
/// Returns `LedgerError::Validation` if a total does not fit in a `Decimal`.
/// Only ledgers loaded from storage can get there, since new amounts are
/// bounded on entry.
pub fn summarize(transactions: &[Transaction]) -> Result<Summary> {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;

    for transaction in transactions {
        let total = match transaction.kind {
            TransactionKind::Income => &mut total_income,
            TransactionKind::Expense => &mut total_expense,
        };
        *total = total
            .checked_add(transaction.amount)
            .ok_or_else(|| overflow(transaction.kind))?;
    }

    let balance = total_income
        .checked_sub(total_expense)
        .ok_or_else(|| LedgerError::Validation("balance is out of range".to_string()))?;

    Ok(Summary {
        total_income,
        total_expense,
        balance,
    })
}

fn overflow(kind: TransactionKind) -> LedgerError {
    LedgerError::Validation(format!("total {} is out of range", kind))
}

/// Filter `transactions` and order them most recent first.
///
/// The sort is stable, so transactions sharing a date keep insertion order.
pub fn project(transactions: &[Transaction], filter: &TransactionFilter) -> Vec<Transaction> {
    let mut projected: Vec<Transaction> = transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    projected.sort_by(|a, b| b.date.cmp(&a.date));
    projected
}
