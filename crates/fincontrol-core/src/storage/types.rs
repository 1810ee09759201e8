//! Core data types for the storage layer.
//!
//! The serialized form keeps the field names and kind tags of the original
//! browser ledger (`descricao`, `valor`, `receita`, ...) so existing exports
//! load unchanged.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

/// Identifier of a transaction, unique within a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl TransactionId {
    /// The id following this one, or `None` once the sequence is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TransactionId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| LedgerError::InvalidInput(format!("Invalid transaction ID: {}", s)))
    }
}

/// Whether a transaction adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "receita")]
    Income,
    #[serde(rename = "despesa")]
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    /// Accepts the English names and the stored Portuguese tags.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "receita" => Ok(Self::Income),
            "expense" | "despesa" => Ok(Self::Expense),
            other => Err(LedgerError::InvalidInput(format!(
                "Unknown transaction type: {} (use income or expense)",
                other
            ))),
        }
    }
}

/// A recorded income or expense entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier within the ledger
    pub id: TransactionId,

    /// Free-text label
    #[serde(rename = "descricao")]
    pub description: String,

    /// Non-negative amount; the kind determines the sign
    #[serde(rename = "valor", with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Grouping label used for filtering
    #[serde(rename = "categoria")]
    pub category: String,

    /// Calendar date, serialized as `YYYY-MM-DD`
    #[serde(rename = "data")]
    pub date: NaiveDate,

    /// Income or expense
    #[serde(rename = "tipo")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Amount with the kind's sign applied (expenses negative).
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Largest amount a new transaction may carry (999.999.999.999,99).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// Decimal places a new amount may carry.
pub const AMOUNT_SCALE: u32 = 2;

/// A transaction candidate, before the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

impl NewTransaction {
    /// Build a validated candidate.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if the description or category is
    /// blank, or if the amount is negative, above [`MAX_AMOUNT`], or finer
    /// than cents. Amounts in that range survive the float `valor` field
    /// exactly.
    pub fn new(
        description: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        date: NaiveDate,
        kind: TransactionKind,
    ) -> Result<Self> {
        let description = description.into();
        let category = category.into();

        if description.trim().is_empty() {
            return Err(LedgerError::Validation(
                "description cannot be empty".to_string(),
            ));
        }
        if category.trim().is_empty() {
            return Err(LedgerError::Validation(
                "category cannot be empty".to_string(),
            ));
        }
        if amount < Decimal::ZERO {
            return Err(LedgerError::Validation(format!(
                "amount must not be negative: {}",
                amount
            )));
        }
        if amount > MAX_AMOUNT {
            return Err(LedgerError::Validation(format!(
                "amount must not exceed {}: {}",
                MAX_AMOUNT, amount
            )));
        }
        if amount.normalize().scale() > AMOUNT_SCALE {
            return Err(LedgerError::Validation(format!(
                "amount must have at most {} decimal places: {}",
                AMOUNT_SCALE, amount
            )));
        }

        Ok(Self {
            description,
            amount,
            category,
            date,
            kind,
        })
    }

    pub(crate) fn with_id(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            description: self.description,
            amount: self.amount,
            category: self.category,
            date: self.date,
            kind: self.kind,
        }
    }
}

/// Filter for projecting transactions.
///
/// Both predicates are optional and combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Exact category match
    pub category: Option<String>,

    /// Kind match
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Whether `transaction` passes every set predicate.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if let Some(ref category) = self.category {
            if transaction.category != *category {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if transaction.kind != kind {
                return false;
            }
        }
        true
    }
}
