//! Error types for item banks.

use thiserror::Error;

/// Result type for bank operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while constructing or loading an item bank.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A bank was constructed with no items.
    #[error("item bank is empty")]
    EmptyBank,

    /// An item violates a data invariant (e.g. answer not among choices).
    #[error("invalid item at index {index}: {reason}")]
    DataIntegrity {
        /// Position of the offending item in the source collection.
        index: usize,
        /// Human-readable description of the violated invariant.
        reason: String,
    },

    /// A bank file could not be read.
    #[error("failed to read bank file: {0}")]
    Io(#[from] std::io::Error),

    /// A bank file could not be parsed.
    #[error("failed to parse bank file: {0}")]
    Json(#[from] serde_json::Error),
}
