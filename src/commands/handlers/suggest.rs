//! Suggestion commands

use crate::commands::core::CommandResult;
use crate::session::Session;
use crate::suggest::format_suggestions;

/// `COR <word>`: corrections within the session's distance bound.
pub fn correct(session: &Session, word: &str) -> CommandResult {
    let settings = session.settings();
    let results =
        session.with_dictionary(|dict| dict.autocorrect(word, settings.max_distance, settings.limit));

    match results {
        Ok(results) => CommandResult::success(format!(
            "Autocorrect suggestions for '{}':\n{}",
            word,
            format_suggestions(&results, true)
        )),
        Err(err) => CommandResult::success(err.to_string()),
    }
}

/// Free text: complete its last word once it reaches the minimum length.
///
/// Shorter words produce empty output.
pub fn complete_last_word(session: &Session, text: &str) -> CommandResult {
    let settings = session.settings();
    let Some(prefix) = last_word(text) else {
        return CommandResult::success("");
    };
    if prefix.chars().count() < settings.min_prefix_len {
        return CommandResult::success("");
    }

    match session.with_dictionary(|dict| dict.autocomplete(prefix, settings.limit)) {
        Ok(results) if results.is_empty() => CommandResult::success(""),
        Ok(results) => {
            let words: Vec<&str> = results.iter().map(|s| s.word.as_str()).collect();
            CommandResult::success(format!(
                "Suggestions for '{}': {}",
                prefix,
                words.join(" ")
            ))
        }
        Err(err) => CommandResult::success(err.to_string()),
    }
}

/// Last whitespace-separated token of `text`.
pub fn last_word(text: &str) -> Option<&str> {
    text.split_whitespace().last()
}
