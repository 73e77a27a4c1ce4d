//! Document editing commands
//!
//! Every successful mutation answers with the full document text, so all
//! participants can re-render from it.

use crate::commands::core::CommandResult;
use crate::document::{Document, DocumentError, EditKind};
use crate::session::Session;

/// `INS <pos> <text>`
pub fn insert(session: &Session, position: usize, text: String) -> CommandResult {
    session.with_document(|doc| {
        let outcome = doc.insert(position, text);
        mutation_result(doc, outcome)
    })
}

/// `DEL <pos>`
pub fn delete(session: &Session, position: usize) -> CommandResult {
    session.with_document(|doc| {
        let outcome = doc.delete(position).map(drop);
        mutation_result(doc, outcome)
    })
}

/// `UPD <pos> <text>`
pub fn update(session: &Session, position: usize, text: String) -> CommandResult {
    session.with_document(|doc| {
        let outcome = doc.update(position, text).map(drop);
        mutation_result(doc, outcome)
    })
}

/// `UNDO`
pub fn undo(session: &Session) -> CommandResult {
    session.with_document(|doc| {
        let outcome = doc.undo();
        history_result(doc, outcome, "Nothing to undo.")
    })
}

/// `REDO`
pub fn redo(session: &Session) -> CommandResult {
    session.with_document(|doc| {
        let outcome = doc.redo();
        history_result(doc, outcome, "Nothing to redo.")
    })
}

/// `SNAP`: drop every line and all history.
pub fn snap(session: &Session) -> CommandResult {
    session.with_document(|doc| {
        doc.clear();
        CommandResult::modified(doc.to_string())
    })
}

fn mutation_result(doc: &Document, outcome: Result<(), DocumentError>) -> CommandResult {
    match outcome {
        Ok(()) => CommandResult::modified(doc.to_string()),
        Err(err) => CommandResult::success(err.to_string()),
    }
}

fn history_result(
    doc: &Document,
    outcome: Result<Option<EditKind>, DocumentError>,
    empty: &str,
) -> CommandResult {
    match outcome {
        Ok(Some(_)) => CommandResult::modified(doc.to_string()),
        Ok(None) => CommandResult::success(empty),
        Err(err) => {
            log::warn!("history entry could not be applied: {}", err);
            CommandResult::success(err.to_string())
        }
    }
}
