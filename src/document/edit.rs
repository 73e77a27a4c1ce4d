//! Invertible edit records.
//!
//! Every successful document mutation is described by one [`EditRecord`].
//! A record carries owned copies of the text it needs, so the history stays
//! valid no matter how the document changes afterwards.

use std::fmt;

/// Kind of mutation described by an [`EditRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// A line was inserted
    Insert,
    /// A line was removed
    Delete,
    /// A line's text was replaced
    Update,
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EditKind::Insert => "insert",
            EditKind::Delete => "delete",
            EditKind::Update => "update",
        };
        f.write_str(name)
    }
}

/// One reversible document mutation.
///
/// Each variant holds only the fields needed to apply it forwards and
/// backwards:
///
/// | Variant  | Forward                      | Inverse                      |
/// |----------|------------------------------|------------------------------|
/// | `Insert` | insert `text` at `position`  | delete at `position`         |
/// | `Delete` | delete at `position`         | insert `text` at `position`  |
/// | `Update` | set line to `new_text`       | set line to `old_text`       |
///
/// # Examples
///
/// ```
/// use lineweave::document::{EditKind, EditRecord};
///
/// let record = EditRecord::Update {
///     position: 0,
///     old_text: "a".to_string(),
///     new_text: "A".to_string(),
/// };
/// assert_eq!(record.kind(), EditKind::Update);
/// assert_eq!(record.position(), 0);
/// assert_eq!(record.old_text(), Some("a"));
/// assert_eq!(record.new_text(), Some("A"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditRecord {
    /// A line containing `text` was inserted at `position`.
    Insert {
        /// Line index the text was inserted at
        position: usize,
        /// Inserted text
        text: String,
    },
    /// The line at `position`, whose content was `text`, was removed.
    Delete {
        /// Line index that was removed
        position: usize,
        /// Text of the removed line
        text: String,
    },
    /// The line at `position` changed from `old_text` to `new_text`.
    Update {
        /// Line index that changed
        position: usize,
        /// Text before the update
        old_text: String,
        /// Text after the update
        new_text: String,
    },
}

impl EditRecord {
    /// The kind of mutation this record describes.
    pub fn kind(&self) -> EditKind {
        match self {
            EditRecord::Insert { .. } => EditKind::Insert,
            EditRecord::Delete { .. } => EditKind::Delete,
            EditRecord::Update { .. } => EditKind::Update,
        }
    }

    /// Line index the mutation applies to.
    pub fn position(&self) -> usize {
        match self {
            EditRecord::Insert { position, .. }
            | EditRecord::Delete { position, .. }
            | EditRecord::Update { position, .. } => *position,
        }
    }

    /// Text present before the mutation, if the line existed.
    pub fn old_text(&self) -> Option<&str> {
        match self {
            EditRecord::Insert { .. } => None,
            EditRecord::Delete { text, .. } => Some(text),
            EditRecord::Update { old_text, .. } => Some(old_text),
        }
    }

    /// Text present after the mutation, if the line still exists.
    pub fn new_text(&self) -> Option<&str> {
        match self {
            EditRecord::Insert { text, .. } => Some(text),
            EditRecord::Delete { .. } => None,
            EditRecord::Update { new_text, .. } => Some(new_text),
        }
    }
}

impl fmt::Display for EditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.kind(), self.position())
    }
}
