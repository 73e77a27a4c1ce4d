//! Error types for dictionary operations.

use thiserror::Error;

/// Errors that can occur while inserting into or querying a
/// [`Dictionary`](super::Dictionary).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// The normalized input exceeds the maximum word length.
    ///
    /// Input is rejected outright, never truncated.
    #[error("Normalized input is {len} letters long (maximum is {max})")]
    InputTooLong {
        /// Length of the normalized input
        len: usize,
        /// Maximum accepted length
        max: usize,
    },
}

/// A specialized `Result` type for dictionary operations.
pub type Result<T> = std::result::Result<T, DictionaryError>;
