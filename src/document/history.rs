//! Undo/redo stacks of edit records.
//!
//! This module provides the linear history used by [`Document`](super::Document):
//! a fresh mutation discards any redo entries, while undo and redo only move
//! records between the two stacks.

use super::EditRecord;

/// Two LIFO stacks of [`EditRecord`]s.
///
/// Uses a `Vec` per stack for O(1) amortized push/pop, most recent at the end.
///
/// # Examples
///
/// ```
/// use lineweave::document::{EditRecord, History};
///
/// let mut history = History::new();
/// history.record(EditRecord::Insert { position: 0, text: "a".into() });
/// assert_eq!(history.undo_depth(), 1);
///
/// let record = history.pop_undo().unwrap();
/// history.push_redo(record);
/// assert!(history.can_redo());
///
/// // Recording a new edit invalidates redo.
/// history.record(EditRecord::Insert { position: 0, text: "b".into() });
/// assert!(!history.can_redo());
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    /// Records that can be undone (most recent at end)
    undo: Vec<EditRecord>,
    /// Records that can be redone (most recent at end)
    redo: Vec<EditRecord>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fresh mutation: push onto undo and clear redo.
    pub fn record(&mut self, record: EditRecord) {
        self.undo.push(record);
        self.redo.clear();
    }

    /// Pop the most recent undoable record.
    pub fn pop_undo(&mut self) -> Option<EditRecord> {
        self.undo.pop()
    }

    /// Pop the most recent redoable record.
    pub fn pop_redo(&mut self) -> Option<EditRecord> {
        self.redo.pop()
    }

    /// Push a record onto the undo stack without touching redo.
    pub fn push_undo(&mut self, record: EditRecord) {
        self.undo.push(record);
    }

    /// Push a record onto the redo stack without touching undo.
    pub fn push_redo(&mut self, record: EditRecord) {
        self.redo.push(record);
    }

    /// Peek at the record the next undo would reverse.
    pub fn peek_undo(&self) -> Option<&EditRecord> {
        self.undo.last()
    }

    /// Peek at the record the next redo would replay.
    pub fn peek_redo(&self) -> Option<&EditRecord> {
        self.redo.last()
    }

    /// Whether an undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undoable records.
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of redoable records.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drop every record from both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
