//! Console command vocabulary
//!
//! Parsing ([`Command::parse`]) and execution ([`execute`]) are kept apart
//! from any terminal handling so the same commands can be driven by the REPL,
//! by one-shot CLI calls, or directly from tests.

pub mod core;
pub mod error;
pub mod handlers;

pub use self::core::{Command, CommandResult, HELP_TEXT};
pub use error::CommandError;
pub use handlers::execute;
