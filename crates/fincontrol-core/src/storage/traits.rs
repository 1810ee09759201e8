//! Key-value storage trait definition.
//!
//! The `KeyValueStore` trait is the durable storage interface the ledger
//! store persists through. Values are opaque strings (the ledger writes
//! JSON); keys are short identifiers.

use crate::error::Result;

/// Durable key-value storage.
///
/// All implementations must ensure:
/// - `set` replaces the previous value for the key as a whole
/// - a failed `set` leaves the previous value readable
/// - `get` of a key never written returns `Ok(None)`
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if present, `Ok(None)` if the key was never
    /// written.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the backend cannot be read, and
    /// `LedgerError::InvalidInput` if the key is not acceptable to the backend.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_trait_is_object_safe() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
