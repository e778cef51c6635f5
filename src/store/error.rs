//! Registry error types.

use thiserror::Error;

/// Errors raised by a registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("record '{0}' not found")]
    NotFound(String),

    #[error("record '{0}' already exists")]
    AlreadyExists(String),

    /// Conditional write lost against a concurrent writer
    #[error("record '{id}' changed concurrently: expected version {expected}, found {actual}")]
    VersionMismatch {
        id: String,
        expected: u64,
        actual: u64,
    },

    #[error("{0} registry lock poisoned")]
    Poisoned(&'static str),
}
