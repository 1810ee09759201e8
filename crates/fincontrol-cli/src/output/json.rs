//! JSON output views for transactions.
//!
//! `list --json` uses English keys; the stored layout keeps the Portuguese
//! ones. Totals serialize through `Summary` directly.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use fincontrol_core::{Transaction, TransactionId};

/// A transaction as printed by `list --json`.
#[derive(Debug, Serialize)]
pub struct TransactionView<'a> {
    pub id: TransactionId,
    pub description: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: &'a str,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl<'a> From<&'a Transaction> for TransactionView<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        Self {
            id: transaction.id,
            description: &transaction.description,
            amount: transaction.amount,
            category: &transaction.category,
            date: transaction.date,
            kind: transaction.kind.as_str(),
        }
    }
}

pub fn transaction_views(transactions: &[Transaction]) -> Vec<TransactionView<'_>> {
    transactions.iter().map(TransactionView::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fincontrol_core::TransactionKind;
    use rust_decimal_macros::dec;

    fn groceries(amount: Decimal) -> Transaction {
        Transaction {
            id: TransactionId(7),
            description: "Mercado".to_string(),
            amount,
            category: "Alimentação".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            kind: TransactionKind::Expense,
        }
    }

    #[test]
    fn test_transaction_view_uses_english_keys() {
        let transactions = [groceries(dec!(250.5))];

        let value = serde_json::to_value(transaction_views(&transactions)).unwrap();
        let first = &value[0];
        assert_eq!(first["id"], 7);
        assert_eq!(first["description"], "Mercado");
        assert_eq!(first["amount"], 250.5);
        assert_eq!(first["category"], "Alimentação");
        assert_eq!(first["date"], "2024-03-10");
        assert_eq!(first["type"], "expense");
    }

    #[test]
    fn test_amount_is_printed_as_entered() {
        let transactions = [groceries(dec!(999999999999.99))];

        let json = serde_json::to_string(&transaction_views(&transactions)).unwrap();
        assert!(json.contains("\"amount\":999999999999.99"), "{}", json);
    }
}
