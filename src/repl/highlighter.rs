//! Syntax highlighting for REPL input

use super::helper::KEYWORDS;
use colored::Colorize;
use rustyline::highlight::Highlighter;
use std::borrow::Cow;

/// Command highlighter
///
/// Keywords are shown in bold blue and the line position that follows
/// `INS`/`DEL`/`UPD` in magenta. Free text is left alone.
#[derive(Debug, Default)]
pub struct CommandHighlighter;

impl CommandHighlighter {
    /// Create a highlighter
    pub fn new() -> Self {
        Self
    }

    fn highlight_command(&self, line: &str) -> String {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];
        let keyword_end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let (keyword, rest) = trimmed.split_at(keyword_end);

        if !KEYWORDS.contains(&keyword) {
            return line.to_string();
        }

        let mut out = format!("{}{}", indent, keyword.blue().bold());
        if matches!(keyword, "INS" | "DEL" | "UPD") {
            out.push_str(&highlight_position(rest));
        } else {
            out.push_str(rest);
        }
        out
    }
}

/// Colour the leading number of `rest`, keeping every other byte.
fn highlight_position(rest: &str) -> String {
    let body = rest.trim_start();
    let gap = &rest[..rest.len() - body.len()];
    let digits_end = body
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(body.len());
    if digits_end == 0 {
        return rest.to_string();
    }
    let (digits, tail) = body.split_at(digits_end);
    format!("{}{}{}", gap, digits.magenta(), tail)
}

impl Highlighter for CommandHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        let highlighter = CommandHighlighter::new();
        assert_eq!(highlighter.highlight_command("hello there"), "hello there");
        assert_eq!(highlighter.highlight_command("undo"), "undo");
        assert!(highlighter
            .highlight_command("INS 3 keep  spacing")
            .ends_with(" keep  spacing"));
        assert!(highlighter.highlight_command("DEL x").ends_with(" x"));
    }

    #[test]
    fn test_keyword_is_coloured() {
        colored::control::set_override(true);
        let highlighter = CommandHighlighter::new();
        let out = highlighter.highlight_command("UNDO");
        assert!(out.contains("UNDO"));
        assert_ne!(out, "UNDO");
    }
}
