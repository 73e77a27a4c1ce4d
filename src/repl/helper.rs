//! Rustyline helper integration
//!
//! Tab completion offers command keywords while the first word is being
//! typed, and dictionary completions for the word under the cursor
//! everywhere else.

use super::highlighter::CommandHighlighter;
use crate::session::Session;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};
use std::borrow::Cow;
use std::sync::Arc;

/// Command keywords, in the order they are offered.
pub const KEYWORDS: &[&str] = &[
    "INS", "DEL", "UPD", "UNDO", "REDO", "SNAP", "GET", "PRINT", "COR", "HELP", "QUIT",
];

/// REPL helper
pub struct LineweaveHelper {
    session: Arc<Session>,
    highlighter: CommandHighlighter,
    hinter: HistoryHinter,
}

impl LineweaveHelper {
    /// Create a helper completing from `session`'s dictionary
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            highlighter: CommandHighlighter::new(),
            hinter: HistoryHinter::new(),
        }
    }

    /// Completion candidates for the word ending at byte `pos` of `line`.
    ///
    /// Returns the byte offset where the word starts and the candidates.
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let line = &line[..pos];
        let start = line
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let word = &line[start..];

        if line[..start].trim().is_empty() {
            let keywords: Vec<Pair> = KEYWORDS
                .iter()
                .filter(|kw| !word.is_empty() && kw.starts_with(word))
                .map(|kw| Pair {
                    display: kw.to_string(),
                    replacement: format!("{} ", kw),
                })
                .collect();
            if !keywords.is_empty() {
                return (start, keywords);
            }
        }

        let settings = self.session.settings();
        if word.chars().count() < settings.min_prefix_len {
            return (start, Vec::new());
        }

        let words = self
            .session
            .with_dictionary(|dict| dict.autocomplete(word, settings.limit))
            .unwrap_or_default();
        let candidates = words
            .into_iter()
            .map(|s| Pair {
                display: s.word.clone(),
                replacement: s.word,
            })
            .collect();
        (start, candidates)
    }
}

impl Helper for LineweaveHelper {}

impl Completer for LineweaveHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        Ok(self.candidates(line, pos))
    }
}

impl Hinter for LineweaveHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<Self::Hint> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for LineweaveHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize, forced: bool) -> bool {
        self.highlighter.highlight_char(line, pos, forced)
    }
}

impl Validator for LineweaveHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        // Always accept input (validation happens during execution)
        Ok(ValidationResult::Valid(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn helper() -> LineweaveHelper {
        let dict = Dictionary::from_weighted([("hello", 3), ("help", 5), ("world", 1)]);
        LineweaveHelper::new(Arc::new(Session::new(dict)))
    }

    fn displays(pairs: &[Pair]) -> Vec<&str> {
        pairs.iter().map(|p| p.display.as_str()).collect()
    }

    #[test]
    fn test_keyword_completion() {
        let (start, pairs) = helper().candidates("UN", 2);
        assert_eq!(start, 0);
        assert_eq!(displays(&pairs), vec!["UNDO"]);
        assert_eq!(pairs[0].replacement, "UNDO ");
    }

    #[test]
    fn test_word_completion() {
        let line = "INS 0 say hel";
        let (start, pairs) = helper().candidates(line, line.len());
        assert_eq!(start, 10);
        assert_eq!(displays(&pairs), vec!["help", "hello"]);
    }

    #[test]
    fn test_first_word_falls_back_to_dictionary() {
        let (start, pairs) = helper().candidates("wor", 3);
        assert_eq!(start, 0);
        assert_eq!(displays(&pairs), vec!["world"]);
    }

    #[test]
    fn test_short_word_has_no_candidates() {
        let line = "say h";
        let (_, pairs) = helper().candidates(line, line.len());
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_cursor_mid_line() {
        let line = "hel world";
        let (start, pairs) = helper().candidates(line, 3);
        assert_eq!(start, 0);
        assert_eq!(displays(&pairs), vec!["help", "hello"]);
    }
}
