//! Command definitions and parsing

use super::error::{CommandError, Result};

/// One line of console input.
///
/// Keywords are upper case and matched exactly against the first
/// whitespace-separated token. A line whose first token is not a keyword is
/// [`Command::Text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a line: `INS <pos> <text>`
    Insert {
        /// Target position
        position: usize,
        /// Line text (may be empty or contain spaces)
        text: String,
    },
    /// Delete a line: `DEL <pos>`
    Delete {
        /// Target position
        position: usize,
    },
    /// Replace a line: `UPD <pos> <text>`
    Update {
        /// Target position
        position: usize,
        /// New line text
        text: String,
    },
    /// Revert the most recent edit: `UNDO`
    Undo,
    /// Reapply the most recently undone edit: `REDO`
    Redo,
    /// Clear the document and its history: `SNAP`
    Snap,
    /// Show the document text: `GET`
    Get,
    /// Show the numbered listing: `PRINT`
    Print,
    /// Suggest corrections: `COR <word>`
    Correct {
        /// Word to correct
        word: String,
    },
    /// Show the command summary: `HELP`
    Help,
    /// End the session: `QUIT`
    Quit,
    /// Anything else; its last token is offered for completion
    Text {
        /// The raw line
        text: String,
    },
}

const INSERT_USAGE: &str = "INS <pos> <text>";
const DELETE_USAGE: &str = "DEL <pos>";
const UPDATE_USAGE: &str = "UPD <pos> <text>";
const CORRECT_USAGE: &str = "COR <word>";

/// Command summary shown by `HELP` and at console start-up.
pub const HELP_TEXT: &str = "\
INS <pos> <text>   insert line at pos (0-based)
DEL <pos>          delete line at pos
UPD <pos> <text>   update line at pos
UNDO / REDO        revert or reapply the last edit
SNAP               clear the document and its history
GET / PRINT        show the document (PRINT numbers each line)
COR <word>         suggest corrections for word
HELP / QUIT
Any other text is completed from its last word.";

impl Command {
    /// Parse one line of input.
    ///
    /// A trailing newline is ignored; other whitespace inside `<text>` is
    /// preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineweave::commands::Command;
    ///
    /// assert_eq!(
    ///     Command::parse("INS 0 hello world").unwrap(),
    ///     Command::Insert { position: 0, text: "hello world".to_string() }
    /// );
    /// assert_eq!(Command::parse("UNDO").unwrap(), Command::Undo);
    /// assert!(matches!(Command::parse("the qu").unwrap(), Command::Text { .. }));
    /// assert!(Command::parse("DEL x").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let line = input.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Err(CommandError::Empty);
        }

        let (keyword, rest) = split_token(line);
        match keyword {
            "INS" => {
                let (position, text) = parse_positioned(rest, "INS", INSERT_USAGE)?;
                Ok(Self::Insert { position, text })
            }
            "DEL" => {
                let (position, _) = parse_positioned(rest, "DEL", DELETE_USAGE)?;
                Ok(Self::Delete { position })
            }
            "UPD" => {
                let (position, text) = parse_positioned(rest, "UPD", UPDATE_USAGE)?;
                Ok(Self::Update { position, text })
            }
            "UNDO" => Ok(Self::Undo),
            "REDO" => Ok(Self::Redo),
            "SNAP" => Ok(Self::Snap),
            "GET" => Ok(Self::Get),
            "PRINT" => Ok(Self::Print),
            "COR" => match split_token(rest).0 {
                "" => Err(CommandError::MissingArgument {
                    usage: CORRECT_USAGE,
                }),
                word => Ok(Self::Correct {
                    word: word.to_string(),
                }),
            },
            "HELP" => Ok(Self::Help),
            "QUIT" => Ok(Self::Quit),
            _ => Ok(Self::Text {
                text: line.to_string(),
            }),
        }
    }

    /// Whether this command can change the document.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::Insert { .. }
                | Self::Delete { .. }
                | Self::Update { .. }
                | Self::Undo
                | Self::Redo
                | Self::Snap
        )
    }
}

/// Split off the first whitespace-delimited token. The remainder starts
/// after exactly one separator.
fn split_token(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((idx, sep)) => (&input[..idx], &input[idx + sep.len_utf8()..]),
        None => (input, ""),
    }
}

fn parse_positioned(
    rest: &str,
    keyword: &'static str,
    usage: &'static str,
) -> Result<(usize, String)> {
    let (position, text) = split_token(rest);
    if position.is_empty() {
        return Err(CommandError::MissingArgument { usage });
    }
    let position = position
        .parse::<usize>()
        .map_err(|_| CommandError::InvalidPosition {
            keyword,
            value: position.to_string(),
        })?;
    Ok((position, text.to_string()))
}

/// Result of command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Output message to display
    pub output: String,
    /// Whether the document was modified
    pub modified: bool,
    /// Whether to exit
    pub should_exit: bool,
}

impl CommandResult {
    /// Create a successful result with output
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            modified: false,
            should_exit: false,
        }
    }

    /// Create a result indicating modification
    pub fn modified(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            modified: true,
            should_exit: false,
        }
    }

    /// Create a result that signals exit
    pub fn exit(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            modified: false,
            should_exit: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insert_keeps_spaces() {
        assert_eq!(
            Command::parse("INS 2 a  b c\n").unwrap(),
            Command::Insert {
                position: 2,
                text: "a  b c".to_string()
            }
        );
    }

    #[test]
    fn test_parse_insert_empty_text() {
        assert_eq!(
            Command::parse("INS 0").unwrap(),
            Command::Insert {
                position: 0,
                text: String::new()
            }
        );
    }

    #[test]
    fn test_parse_delete_and_update() {
        assert_eq!(
            Command::parse("DEL 4").unwrap(),
            Command::Delete { position: 4 }
        );
        assert_eq!(
            Command::parse("UPD 1 new text").unwrap(),
            Command::Update {
                position: 1,
                text: "new text".to_string()
            }
        );
    }

    #[test]
    fn test_parse_bare_keywords() {
        assert_eq!(Command::parse("UNDO").unwrap(), Command::Undo);
        assert_eq!(Command::parse("REDO\r\n").unwrap(), Command::Redo);
        assert_eq!(Command::parse("SNAP").unwrap(), Command::Snap);
        assert_eq!(Command::parse("GET").unwrap(), Command::Get);
        assert_eq!(Command::parse("PRINT").unwrap(), Command::Print);
        assert_eq!(Command::parse("HELP").unwrap(), Command::Help);
        assert_eq!(Command::parse("QUIT").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_correct() {
        assert_eq!(
            Command::parse("COR wrod extra").unwrap(),
            Command::Correct {
                word: "wrod".to_string()
            }
        );
        assert_eq!(
            Command::parse("COR"),
            Err(CommandError::MissingArgument {
                usage: CORRECT_USAGE
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("   "), Err(CommandError::Empty));
        assert!(matches!(
            Command::parse("INS"),
            Err(CommandError::MissingArgument { .. })
        ));
        assert_eq!(
            Command::parse("DEL -1"),
            Err(CommandError::InvalidPosition {
                keyword: "DEL",
                value: "-1".to_string()
            })
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(
            Command::parse("undo").unwrap(),
            Command::Text {
                text: "undo".to_string()
            }
        );
        assert_eq!(
            Command::parse("DELTA force").unwrap(),
            Command::Text {
                text: "DELTA force".to_string()
            }
        );
    }

    #[test]
    fn test_is_mutation() {
        assert!(Command::Undo.is_mutation());
        assert!(Command::Delete { position: 0 }.is_mutation());
        assert!(!Command::Get.is_mutation());
        assert!(!Command::Quit.is_mutation());
    }
}
