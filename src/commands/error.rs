//! Error types for command parsing.

use thiserror::Error;

/// Errors produced while parsing a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The line was empty or whitespace only.
    #[error("Empty command")]
    Empty,

    /// A required argument was not supplied.
    #[error("Missing argument. Usage: {usage}")]
    MissingArgument {
        /// Usage line for the command
        usage: &'static str,
    },

    /// A line position was not a non-negative integer.
    #[error("Invalid position '{value}' for {keyword}")]
    InvalidPosition {
        /// Command keyword
        keyword: &'static str,
        /// The text that failed to parse
        value: String,
    },
}

/// A specialized `Result` type for command parsing.
pub type Result<T> = std::result::Result<T, CommandError>;
