//! Command handler implementations

pub mod edit;
pub mod suggest;

use crate::commands::core::{Command, CommandResult, HELP_TEXT};
use crate::session::Session;

/// Run `command` against `session`.
///
/// Document commands lock the document for their whole duration; suggestion
/// commands take a shared lock on the dictionary.
///
/// # Examples
///
/// ```
/// use lineweave::commands::{execute, Command};
/// use lineweave::dictionary::Dictionary;
/// use lineweave::session::Session;
///
/// let session = Session::new(Dictionary::new());
/// let result = execute(Command::parse("INS 0 hello").unwrap(), &session);
/// assert!(result.modified);
/// assert_eq!(result.output, "hello\n");
/// ```
pub fn execute(command: Command, session: &Session) -> CommandResult {
    log::trace!("execute {:?}", command);
    match command {
        Command::Insert { position, text } => edit::insert(session, position, text),
        Command::Delete { position } => edit::delete(session, position),
        Command::Update { position, text } => edit::update(session, position, text),
        Command::Undo => edit::undo(session),
        Command::Redo => edit::redo(session),
        Command::Snap => edit::snap(session),
        Command::Get => CommandResult::success(session.snapshot()),
        Command::Print => {
            CommandResult::success(session.with_document(|doc| doc.to_numbered_string()))
        }
        Command::Correct { word } => suggest::correct(session, &word),
        Command::Text { text } => suggest::complete_last_word(session, &text),
        Command::Help => CommandResult::success(HELP_TEXT),
        Command::Quit => CommandResult::exit("Goodbye!"),
    }
}
