//! Line-oriented document with invertible edit history.
//!
//! A [`Document`] is an ordered sequence of lines supporting positional
//! insert, delete and update. Each successful mutation is recorded as an
//! [`EditRecord`] in the document's [`History`], enabling unlimited linear
//! undo and redo.
//!
//! # Example
//!
//! ```
//! use lineweave::document::Document;
//!
//! let mut doc = Document::new();
//! doc.insert(0, "hello").unwrap();
//! doc.insert(1, "world").unwrap();
//! doc.update(1, "there").unwrap();
//! assert_eq!(doc.to_string(), "hello\nthere\n");
//!
//! doc.undo().unwrap();
//! assert_eq!(doc.to_string(), "hello\nworld\n");
//!
//! doc.redo().unwrap();
//! assert_eq!(doc.to_string(), "hello\nthere\n");
//! ```

mod edit;
pub mod error;
mod history;

pub use edit::{EditKind, EditRecord};
pub use error::{DocumentError, Result};
pub use history::History;

use std::fmt;

/// An editable buffer of lines that owns its undo/redo history.
///
/// Lines are stored in a `Vec<String>`; positional insertion and removal
/// shift the tail, which keeps indexing O(1) and splices O(n).
///
/// # Position rules
///
/// - `insert` accepts `0..=len()` (inserting at `len()` appends)
/// - `delete` and `update` accept `0..len()`
///
/// Anything else returns [`DocumentError::InvalidPosition`] and leaves both
/// the lines and the history untouched.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<String>,
    history: History,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with room for `capacity` lines.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
            history: History::new(),
        }
    }

    /// Number of lines in the document.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of the line at `position`, if it exists.
    pub fn line(&self, position: usize) -> Option<&str> {
        self.lines.get(position).map(String::as_str)
    }

    /// Iterate over the lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(String::as_str)
    }

    /// The document's undo/redo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether `position` is accepted by [`insert`](Self::insert).
    pub fn is_valid_insert_position(&self, position: usize) -> bool {
        position <= self.lines.len()
    }

    /// Whether `position` is accepted by [`delete`](Self::delete) and
    /// [`update`](Self::update).
    pub fn is_valid_line_position(&self, position: usize) -> bool {
        position < self.lines.len()
    }

    /// Insert a new line containing `text` at `position`.
    ///
    /// Existing lines at and after `position` move down by one. On success
    /// an [`EditRecord::Insert`] is recorded and the redo stack is cleared.
    ///
    /// # Errors
    ///
    /// [`DocumentError::InvalidPosition`] if `position > len()`.
    pub fn insert(&mut self, position: usize, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        self.splice_in(position, text.clone())?;
        log::debug!("insert line {} ({} lines)", position, self.lines.len());
        self.history.record(EditRecord::Insert { position, text });
        Ok(())
    }

    /// Remove the line at `position`, returning its text.
    ///
    /// # Errors
    ///
    /// [`DocumentError::InvalidPosition`] if `position >= len()`.
    pub fn delete(&mut self, position: usize) -> Result<String> {
        let text = self.splice_out(position)?;
        log::debug!("delete line {} ({} lines)", position, self.lines.len());
        self.history.record(EditRecord::Delete {
            position,
            text: text.clone(),
        });
        Ok(text)
    }

    /// Replace the text of the line at `position`, returning the old text.
    ///
    /// # Errors
    ///
    /// [`DocumentError::InvalidPosition`] if `position >= len()`.
    pub fn update(&mut self, position: usize, text: impl Into<String>) -> Result<String> {
        let new_text = text.into();
        let old_text = self.replace(position, new_text.clone())?;
        log::debug!("update line {}", position);
        self.history.record(EditRecord::Update {
            position,
            old_text: old_text.clone(),
            new_text,
        });
        Ok(old_text)
    }

    /// Reverse the most recent mutation.
    ///
    /// Returns `Ok(None)` when there is nothing to undo. Otherwise the record
    /// is moved, unchanged, onto the redo stack and its kind is returned.
    /// The redo stack is never cleared by an undo.
    ///
    /// # Errors
    ///
    /// Only if the record no longer fits the document, which linear history
    /// rules out; the record is then left on the undo stack.
    pub fn undo(&mut self) -> Result<Option<EditKind>> {
        let Some(record) = self.history.pop_undo() else {
            log::trace!("nothing to undo");
            return Ok(None);
        };

        if let Err(err) = self.apply_inverse(&record) {
            self.history.push_undo(record);
            return Err(err);
        }

        let kind = record.kind();
        log::debug!("undo {}", record);
        self.history.push_redo(record);
        Ok(Some(kind))
    }

    /// Replay the most recently undone mutation.
    ///
    /// Mirror of [`undo`](Self::undo): returns `Ok(None)` when there is
    /// nothing to redo and never clears the undo stack.
    pub fn redo(&mut self) -> Result<Option<EditKind>> {
        let Some(record) = self.history.pop_redo() else {
            log::trace!("nothing to redo");
            return Ok(None);
        };

        if let Err(err) = self.apply_forward(&record) {
            self.history.push_redo(record);
            return Err(err);
        }

        let kind = record.kind();
        log::debug!("redo {}", record);
        self.history.push_undo(record);
        Ok(Some(kind))
    }

    /// Whether [`undo`](Self::undo) would change the document.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`redo`](Self::redo) would change the document.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop every line and reset both history stacks.
    ///
    /// Used for session reset; this is not itself undoable.
    pub fn clear(&mut self) {
        log::debug!("clear document ({} lines)", self.lines.len());
        self.lines.clear();
        self.history.clear();
    }

    /// Render each line as `"{index}: {text}\n"`.
    ///
    /// ```
    /// use lineweave::document::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.insert(0, "alpha").unwrap();
    /// doc.insert(1, "beta").unwrap();
    /// assert_eq!(doc.to_numbered_string(), "0: alpha\n1: beta\n");
    /// ```
    pub fn to_numbered_string(&self) -> String {
        let mut out = String::new();
        for (index, line) in self.lines.iter().enumerate() {
            out.push_str(&format!("{}: {}\n", index, line));
        }
        out
    }

    fn splice_in(&mut self, position: usize, text: String) -> Result<()> {
        if !self.is_valid_insert_position(position) {
            return Err(self.invalid(position));
        }
        self.lines.insert(position, text);
        Ok(())
    }

    fn splice_out(&mut self, position: usize) -> Result<String> {
        if !self.is_valid_line_position(position) {
            return Err(self.invalid(position));
        }
        Ok(self.lines.remove(position))
    }

    fn replace(&mut self, position: usize, text: String) -> Result<String> {
        if !self.is_valid_line_position(position) {
            return Err(self.invalid(position));
        }
        Ok(std::mem::replace(&mut self.lines[position], text))
    }

    fn apply_inverse(&mut self, record: &EditRecord) -> Result<()> {
        match record {
            EditRecord::Insert { position, .. } => self.splice_out(*position).map(drop),
            EditRecord::Delete { position, text } => self.splice_in(*position, text.clone()),
            EditRecord::Update {
                position, old_text, ..
            } => self.replace(*position, old_text.clone()).map(drop),
        }
    }

    fn apply_forward(&mut self, record: &EditRecord) -> Result<()> {
        match record {
            EditRecord::Insert { position, text } => self.splice_in(*position, text.clone()),
            EditRecord::Delete { position, .. } => self.splice_out(*position).map(drop),
            EditRecord::Update {
                position, new_text, ..
            } => self.replace(*position, new_text.clone()).map(drop),
        }
    }

    fn invalid(&self, position: usize) -> DocumentError {
        log::debug!(
            "rejected position {} (document has {} lines)",
            position,
            self.lines.len()
        );
        DocumentError::InvalidPosition {
            position,
            len: self.lines.len(),
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(doc: &Document) -> Vec<&str> {
        doc.lines().collect()
    }

    #[test]
    fn test_new_is_empty() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
        assert_eq!(doc.to_string(), "");
    }

    #[test]
    fn test_insert_positions() {
        let mut doc = Document::new();
        doc.insert(0, "b").unwrap(); // empty buffer
        doc.insert(0, "a").unwrap(); // prepend
        doc.insert(2, "d").unwrap(); // append
        doc.insert(2, "c").unwrap(); // interior
        assert_eq!(lines(&doc), vec!["a", "b", "c", "d"]);
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn test_insert_invalid_position() {
        let mut doc = Document::new();
        let err = doc.insert(1, "x").unwrap_err();
        assert_eq!(err, DocumentError::InvalidPosition { position: 1, len: 0 });
        assert!(doc.is_empty());
        assert!(!doc.can_undo());
    }

    #[test]
    fn test_delete_and_update_invalid_position() {
        let mut doc = Document::new();
        doc.insert(0, "only").unwrap();

        assert!(doc.delete(1).is_err());
        assert!(doc.update(1, "nope").is_err());
        assert_eq!(lines(&doc), vec!["only"]);
        assert_eq!(doc.history().undo_depth(), 1);
    }

    #[test]
    fn test_delete_returns_text() {
        let mut doc = Document::new();
        doc.insert(0, "keep").unwrap();
        doc.insert(1, "drop").unwrap();
        assert_eq!(doc.delete(1).unwrap(), "drop");
        assert_eq!(lines(&doc), vec!["keep"]);
    }

    #[test]
    fn test_update_returns_old_text() {
        let mut doc = Document::new();
        doc.insert(0, "old").unwrap();
        assert_eq!(doc.update(0, "new").unwrap(), "old");
        assert_eq!(doc.line(0), Some("new"));
    }

    #[test]
    fn test_undo_redo_single_insert() {
        let mut doc = Document::new();
        doc.insert(0, "hello").unwrap();
        assert_eq!(doc.to_string(), "hello\n");

        assert_eq!(doc.undo().unwrap(), Some(EditKind::Insert));
        assert_eq!(doc.to_string(), "");

        assert_eq!(doc.redo().unwrap(), Some(EditKind::Insert));
        assert_eq!(doc.to_string(), "hello\n");
    }

    #[test]
    fn test_undo_sequence_with_update() {
        let mut doc = Document::new();
        doc.insert(0, "a").unwrap();
        doc.insert(1, "b").unwrap();
        doc.update(0, "A").unwrap();
        assert_eq!(lines(&doc), vec!["A", "b"]);

        doc.undo().unwrap();
        assert_eq!(lines(&doc), vec!["a", "b"]);
        doc.undo().unwrap();
        assert_eq!(lines(&doc), vec!["a"]);
        doc.undo().unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_undo_delete_restores_line_in_place() {
        let mut doc = Document::new();
        for (i, text) in ["one", "two", "three"].iter().enumerate() {
            doc.insert(i, *text).unwrap();
        }
        doc.delete(1).unwrap();
        assert_eq!(lines(&doc), vec!["one", "three"]);

        assert_eq!(doc.undo().unwrap(), Some(EditKind::Delete));
        assert_eq!(lines(&doc), vec!["one", "two", "three"]);

        assert_eq!(doc.redo().unwrap(), Some(EditKind::Delete));
        assert_eq!(lines(&doc), vec!["one", "three"]);
    }

    #[test]
    fn test_empty_history_is_inert() {
        let mut doc = Document::new();
        assert_eq!(doc.undo().unwrap(), None);
        assert_eq!(doc.redo().unwrap(), None);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_undo_keeps_redo_stack() {
        let mut doc = Document::new();
        doc.insert(0, "a").unwrap();
        doc.insert(1, "b").unwrap();
        doc.undo().unwrap();
        doc.undo().unwrap();
        assert_eq!(doc.history().redo_depth(), 2);
        assert_eq!(doc.history().undo_depth(), 0);
    }

    #[test]
    fn test_mutation_clears_redo() {
        let mut doc = Document::new();
        doc.insert(0, "a").unwrap();
        doc.undo().unwrap();
        assert!(doc.can_redo());

        doc.insert(0, "z").unwrap();
        assert!(!doc.can_redo());
        assert_eq!(doc.redo().unwrap(), None);
        assert_eq!(lines(&doc), vec!["z"]);
    }

    #[test]
    fn test_rejected_mutation_keeps_redo() {
        let mut doc = Document::new();
        doc.insert(0, "a").unwrap();
        doc.undo().unwrap();
        assert!(doc.insert(5, "x").is_err());
        assert!(doc.can_redo());
    }

    #[test]
    fn test_history_does_not_alias_lines() {
        let mut doc = Document::new();
        doc.insert(0, "first").unwrap();
        doc.update(0, "second").unwrap();
        doc.update(0, "third").unwrap();

        doc.undo().unwrap();
        doc.undo().unwrap();
        assert_eq!(doc.line(0), Some("first"));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut doc = Document::new();
        doc.insert(0, "a").unwrap();
        doc.insert(1, "b").unwrap();
        doc.undo().unwrap();
        doc.clear();

        assert!(doc.is_empty());
        assert!(!doc.can_undo());
        assert!(!doc.can_redo());
    }

    #[test]
    fn test_numbered_string() {
        let mut doc = Document::new();
        doc.insert(0, "x").unwrap();
        doc.insert(1, "").unwrap();
        assert_eq!(doc.to_numbered_string(), "0: x\n1: \n");
    }
}
