//! # lineweave
//!
//! A line-oriented text editor engine with an invertible edit history and a
//! word-suggestion dictionary.
//!
//! The crate has two independent cores:
//!
//! - [`document`]: an ordered buffer of lines with positional insert, delete
//!   and update, plus unlimited linear undo/redo
//! - [`dictionary`] and [`suggest`]: a 26-ary prefix tree of normalized words
//!   with frequencies, answering exact-prefix autocomplete and
//!   bounded-distance autocorrect queries
//!
//! [`session`] bundles both behind locks for sharing across threads, and
//! [`commands`] implements the textual command vocabulary used by the
//! console.
//!
//! ## Example
//!
//! ```rust
//! use lineweave::prelude::*;
//!
//! let mut doc = Document::new();
//! doc.insert(0, "hello").unwrap();
//! doc.undo().unwrap();
//! assert_eq!(doc.to_string(), "");
//!
//! let dict = Dictionary::from_weighted([("cat", 5), ("cart", 1)]);
//! let fixes = dict.autocorrect("cats", 1, 5).unwrap();
//! assert_eq!(fixes[0].word, "cat");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;
pub mod dictionary;
pub mod distance;
pub mod document;
pub mod session;
pub mod suggest;

/// Interactive line-editing console
#[cfg(feature = "cli")]
pub mod repl;

/// CLI arguments and persistent configuration
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::commands::{execute, Command, CommandError, CommandResult};
    pub use crate::dictionary::{Dictionary, DictionaryError, InsertOutcome};
    pub use crate::document::{Document, DocumentError, EditKind, EditRecord};
    pub use crate::session::{Session, SuggestSettings};
    pub use crate::suggest::{BoundedCollector, Ranking, Suggestion};
}
