//! Error types for document operations.

use thiserror::Error;

/// Errors that can occur while editing a [`Document`](super::Document).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The position is outside the range accepted by the operation.
    ///
    /// Inserts accept `0..=len`; deletes and updates accept `0..len`.
    /// The document is left unchanged.
    #[error("Invalid position {position} for document with {len} lines")]
    InvalidPosition {
        /// The rejected position
        position: usize,
        /// Line count at the time of the call
        len: usize,
    },
}

/// A specialized `Result` type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;
