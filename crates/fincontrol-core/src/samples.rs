//! Example transactions for a first run.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::storage::{KeyValueStore, NewTransaction, Transaction, TransactionKind};
use crate::store::LedgerStore;

/// The three starter entries, all dated `today`: a salary and two bills.
pub fn sample_transactions(today: NaiveDate) -> Result<Vec<NewTransaction>> {
    Ok(vec![
        NewTransaction::new(
            "Salário",
            Decimal::new(3500, 0),
            "Salário",
            today,
            TransactionKind::Income,
        )?,
        NewTransaction::new(
            "Mercado",
            Decimal::new(250, 0),
            "Alimentação",
            today,
            TransactionKind::Expense,
        )?,
        NewTransaction::new(
            "Conta de luz",
            Decimal::new(120, 0),
            "Moradia",
            today,
            TransactionKind::Expense,
        )?,
    ])
}

/// Add the sample entries if, and only if, the ledger is empty.
///
/// Returns the transactions that were added (empty if the ledger already had
/// entries).
pub fn seed_if_empty<S: KeyValueStore>(
    store: &mut LedgerStore<S>,
    today: NaiveDate,
) -> Result<Vec<Transaction>> {
    if !store.is_empty() {
        return Ok(Vec::new());
    }
    sample_transactions(today)?
        .into_iter()
        .map(|new_transaction| store.add(new_transaction))
        .collect()
}
