//! Word normalization.
//!
//! Every dictionary operation first reduces its input to the tree alphabet:
//! ASCII letters are kept and lowercased, everything else is dropped.

use super::error::{DictionaryError, Result};

/// Number of edge labels per trie node (`a` through `z`).
pub const ALPHABET_SIZE: usize = 26;

/// Longest normalized word accepted by insert and query operations.
pub const MAX_WORD_LEN: usize = 1023;

/// Normalize `word` into lowercase ASCII letters.
///
/// An empty result is not an error; callers treat it as "nothing to do".
///
/// # Errors
///
/// [`DictionaryError::InputTooLong`] if more than [`MAX_WORD_LEN`] letters
/// remain after normalization.
///
/// # Examples
///
/// ```
/// use lineweave::dictionary::normalize;
///
/// assert_eq!(normalize("Don't!").unwrap(), "dont");
/// assert_eq!(normalize("42 -- ?").unwrap(), "");
/// assert!(normalize(&"a".repeat(2000)).is_err());
/// ```
pub fn normalize(word: &str) -> Result<String> {
    let normalized: String = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_lowercase())
        .collect();

    if normalized.len() > MAX_WORD_LEN {
        return Err(DictionaryError::InputTooLong {
            len: normalized.len(),
            max: MAX_WORD_LEN,
        });
    }

    Ok(normalized)
}

/// Child slot for a normalized letter, or `None` outside `a..=z`.
#[inline]
pub(crate) fn letter_index(letter: u8) -> Option<usize> {
    letter.is_ascii_lowercase().then(|| usize::from(letter - b'a'))
}
