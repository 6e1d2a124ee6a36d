//! Error types for drill sessions.

use thiserror::Error;

/// Result type for drill operations.
pub type DrillResult<T> = Result<T, DrillError>;

/// Errors that can occur while driving a drill session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrillError {
    /// A choice index outside the presented options.
    #[error("choice index {index} is out of range ({len} choices)")]
    InvalidChoice {
        /// The zero-based index that was submitted.
        index: usize,
        /// Number of options presented.
        len: usize,
    },

    /// An unrecognized race mode name.
    #[error("unknown mode: {0} (use: easy, hard)")]
    UnknownMode(String),
}
