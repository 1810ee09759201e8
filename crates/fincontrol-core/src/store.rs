//! The ledger store.
//!
//! `LedgerStore` owns the ordered transaction list for a session and writes
//! it back to its `KeyValueStore` after every mutation. The whole ledger is
//! one JSON array stored under [`STORAGE_KEY`].
//!
//! Reads fail open: a missing key, an unreadable backend, or malformed JSON
//! all yield an empty ledger. Writes fail loudly: if persisting fails the
//! in-memory list is restored to its previous state and the error returned.

use tracing::{debug, info, warn};

use crate::confirm::{Confirm, Decision, CLEAR_PROMPT, DELETE_PROMPT};
use crate::error::{LedgerError, Result};
use crate::storage::{KeyValueStore, NewTransaction, Transaction, TransactionId};

/// Storage key holding the serialized ledger.
pub const STORAGE_KEY: &str = "controle-financeiro-transactions";

/// Read the persisted ledger from `storage`.
///
/// Returns an empty list if the key is absent, the read fails, or the stored
/// value does not parse.
pub fn load<S: KeyValueStore + ?Sized>(storage: &S) -> Vec<Transaction> {
    let raw = match storage.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no stored ledger, starting empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(error = %err, "failed to read stored ledger, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Transaction>>(&raw) {
        Ok(transactions) => transactions,
        Err(err) => {
            warn!(error = %err, "stored ledger is malformed, starting empty");
            Vec::new()
        }
    }
}

/// Owner of the session's transactions.
#[derive(Debug)]
pub struct LedgerStore<S: KeyValueStore> {
    storage: S,
    transactions: Vec<Transaction>,
    next_id: Option<TransactionId>,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Load the ledger persisted in `storage` (or start empty).
    pub fn open(storage: S) -> Self {
        let transactions = load(&storage);
        let next_id = match transactions.iter().map(|t| t.id).max() {
            Some(max) => max.next(),
            None => Some(TransactionId(1)),
        };

        let duplicates = count_duplicate_ids(&transactions);
        if duplicates > 0 {
            warn!(duplicates, "stored ledger contains reused transaction ids");
        }

        info!(
            count = transactions.len(),
            next_id = ?next_id,
            "opened ledger"
        );

        Self {
            storage,
            transactions,
            next_id,
        }
    }

    /// Current transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The id the next `add` will assign, `None` once ids are exhausted.
    pub fn next_id(&self) -> Option<TransactionId> {
        self.next_id
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a new transaction, assigning it the next id.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if the id sequence is exhausted, or
    /// `LedgerError::Storage` if persisting fails. The ledger is left
    /// unchanged in both cases.
    pub fn add(&mut self, new_transaction: NewTransaction) -> Result<Transaction> {
        let id = self.next_id.ok_or_else(|| {
            LedgerError::Validation("transaction id sequence is exhausted".to_string())
        })?;
        let transaction = new_transaction.with_id(id);
        let stored = transaction.clone();

        self.apply(|transactions| transactions.push(transaction))?;
        self.next_id = id.next();

        debug!(id = %id, kind = %stored.kind, "added transaction");
        Ok(stored)
    }

    /// Append a fully-formed transaction, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if a transaction with the same id is
    /// already present, or `LedgerError::Storage` if persisting fails.
    pub fn insert(&mut self, transaction: Transaction) -> Result<()> {
        if self.get(transaction.id).is_some() {
            return Err(LedgerError::Validation(format!(
                "transaction id {} already exists",
                transaction.id
            )));
        }

        let id = transaction.id;
        self.apply(|transactions| transactions.push(transaction))?;
        if matches!(self.next_id, Some(next) if id >= next) {
            self.next_id = id.next();
        }

        debug!(id = %id, "inserted transaction");
        Ok(())
    }

    /// Remove the transaction with `id`.
    ///
    /// Returns `Ok(false)` without touching storage if no transaction has
    /// that id.
    pub fn remove(&mut self, id: TransactionId) -> Result<bool> {
        if self.get(id).is_none() {
            debug!(id = %id, "remove: no such transaction");
            return Ok(false);
        }

        self.apply(|transactions| transactions.retain(|t| t.id != id))?;
        debug!(id = %id, "removed transaction");
        Ok(true)
    }

    /// Remove every transaction.
    pub fn clear(&mut self) -> Result<()> {
        let removed = self.transactions.len();
        self.apply(|transactions| transactions.clear())?;
        info!(removed, "cleared ledger");
        Ok(())
    }

    /// Ask `confirm` before removing the transaction with `id`.
    pub fn remove_confirmed<C>(&mut self, id: TransactionId, confirm: &mut C) -> Result<Decision>
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_PROMPT) {
            debug!(id = %id, "remove declined");
            return Ok(Decision::Declined);
        }
        self.remove(id)?;
        Ok(Decision::Confirmed)
    }

    /// Ask `confirm` before removing every transaction.
    pub fn clear_confirmed<C>(&mut self, confirm: &mut C) -> Result<Decision>
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(CLEAR_PROMPT) {
            debug!("clear declined");
            return Ok(Decision::Declined);
        }
        self.clear()?;
        Ok(Decision::Confirmed)
    }

    /// Write the full ledger to storage.
    pub fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.transactions)?;
        self.storage.set(STORAGE_KEY, &json)?;
        debug!(count = self.transactions.len(), "persisted ledger");
        Ok(())
    }

    /// Run `mutation` and persist, restoring the previous list on failure.
    fn apply<T>(&mut self, mutation: impl FnOnce(&mut Vec<Transaction>) -> T) -> Result<T> {
        let snapshot = self.transactions.clone();
        let output = mutation(&mut self.transactions);
        if let Err(err) = self.persist() {
            self.transactions = snapshot;
            return Err(err);
        }
        Ok(output)
    }
}

fn count_duplicate_ids(transactions: &[Transaction]) -> usize {
    let mut seen = std::collections::HashSet::new();
    transactions.iter().filter(|t| !seen.insert(t.id)).count()
}
