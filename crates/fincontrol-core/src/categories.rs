//! Distinct category index for populating filter controls.

use std::collections::HashSet;

use crate::storage::Transaction;

/// Distinct categories in first-seen order.
///
/// Categories compare as exact strings; `"Food"` and `"food "` are distinct.
pub fn categories(transactions: &[Transaction]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut distinct = Vec::new();
    for transaction in transactions {
        if seen.insert(&transaction.category) {
            distinct.push(transaction.category.clone());
        }
    }
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{NewTransaction, TransactionId, TransactionKind};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn tx(id: u64, category: &str) -> Transaction {
        NewTransaction::new(
            "x",
            dec!(1),
            category,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            TransactionKind::Expense,
        )
        .unwrap()
        .with_id(TransactionId(id))
    }

    #[test]
    fn test_empty_ledger_has_no_categories() {
        assert!(categories(&[]).is_empty());
    }

    #[test]
    fn test_first_seen_order_without_duplicates() {
        let ledger = vec![tx(1, "Salário"), tx(2, "Moradia"), tx(3, "Salário"), tx(4, "Lazer")];
        assert_eq!(categories(&ledger), vec!["Salário", "Moradia", "Lazer"]);
    }

    #[test]
    fn test_exact_match_keeps_case_variants() {
        let ledger = vec![tx(1, "Food"), tx(2, "food")];
        assert_eq!(categories(&ledger).len(), 2);
    }
}
