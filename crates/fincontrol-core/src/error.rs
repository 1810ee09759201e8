//! Error types for Fincontrol core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-friendly messages.

use thiserror::Error;

/// Result type alias for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Data validation error (blank fields, negative amounts, duplicate ids)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: LedgerError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, LedgerError::Storage(ref msg) if msg.contains("disk full")));
    }

    #[test]
    fn test_display_includes_category() {
        let err = LedgerError::Validation("amount must not be negative".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: amount must not be negative"
        );
    }
}
