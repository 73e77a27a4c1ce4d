//! Word-list loading.
//!
//! Populates a [`Dictionary`] from plain text, one entry per line:
//!
//! ```text
//! the 23135851162
//! of
//! and	12997637966
//! ```
//!
//! A line is either a bare word (seeded with frequency 1) or a word followed
//! by whitespace and an integer count. Lines that normalize to nothing or
//! exceed the maximum word length are skipped.

use super::{Dictionary, InsertOutcome};
use std::fs::File;
use std::io::{BufRead, BufReader, Result};
use std::path::Path;

/// Summary of a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read
    pub lines: usize,
    /// New words added
    pub inserted: usize,
    /// Lines that updated an existing word
    pub updated: usize,
    /// Lines skipped (empty after normalization, or too long)
    pub skipped: usize,
}

/// Load every line of `reader` into `dict`.
///
/// # Errors
///
/// Returns an error only if reading from `reader` fails.
///
/// # Examples
///
/// ```
/// use lineweave::dictionary::{load_words, Dictionary};
///
/// let mut dict = Dictionary::new();
/// let stats = load_words("apple\nbanana 40\n\n".as_bytes(), &mut dict).unwrap();
/// assert_eq!(stats.inserted, 2);
/// assert_eq!(stats.skipped, 1);
/// assert_eq!(dict.frequency("banana"), Some(40));
/// ```
pub fn load_words<R: BufRead>(reader: R, dict: &mut Dictionary) -> Result<LoadStats> {
    let mut stats = LoadStats::default();

    for line in reader.lines() {
        let line = line?;
        stats.lines += 1;

        let (word, freq) = parse_entry(&line);
        match dict.insert(word, freq) {
            Ok(InsertOutcome::Inserted) => stats.inserted += 1,
            Ok(InsertOutcome::Updated) => stats.updated += 1,
            Ok(InsertOutcome::Ignored) => stats.skipped += 1,
            Err(err) => {
                log::warn!("line {}: {}", stats.lines, err);
                stats.skipped += 1;
            }
        }
    }

    log::debug!(
        "loaded {} lines: {} inserted, {} updated, {} skipped",
        stats.lines,
        stats.inserted,
        stats.updated,
        stats.skipped
    );
    Ok(stats)
}

/// Open `path` and [`load_words`] from it.
pub fn load_words_from_path<P: AsRef<Path>>(path: P, dict: &mut Dictionary) -> Result<LoadStats> {
    let file = File::open(path.as_ref())?;
    log::info!("loading word list {}", path.as_ref().display());
    load_words(BufReader::new(file), dict)
}

/// Split a line into its word and frequency.
fn parse_entry(line: &str) -> (&str, i64) {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some((word, count)) = line.trim().rsplit_once(char::is_whitespace) {
        if let Ok(freq) = count.trim().parse::<i64>() {
            return (word, freq);
        }
    }
    (line, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_entry() {
        assert_eq!(parse_entry("word"), ("word", 1));
        assert_eq!(parse_entry("word 12"), ("word", 12));
        assert_eq!(parse_entry("word\t7\r"), ("word", 7));
        assert_eq!(parse_entry("ice cream"), ("ice cream", 1));
        assert_eq!(parse_entry(""), ("", 1));
    }

    #[test]
    fn test_load_counts() {
        let input = "the 50\nof\nthe 0\n123\n\nand\r\n";
        let mut dict = Dictionary::new();
        let stats = load_words(input.as_bytes(), &mut dict).unwrap();

        assert_eq!(
            stats,
            LoadStats {
                lines: 6,
                inserted: 3,
                updated: 1,
                skipped: 2,
            }
        );
        assert_eq!(dict.frequency("the"), Some(51));
        assert_eq!(dict.frequency("and"), Some(1));
    }

    #[test]
    fn test_load_skips_overlong() {
        let input = format!("{}\nshort\n", "q".repeat(crate::dictionary::MAX_WORD_LEN + 5));
        let mut dict = Dictionary::new();
        let stats = load_words(input.as_bytes(), &mut dict).unwrap();
        assert_eq!(stats.inserted, 1);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat 5").unwrap();
        writeln!(file, "cart").unwrap();

        let mut dict = Dictionary::new();
        let stats = load_words_from_path(file.path(), &mut dict).unwrap();
        assert_eq!(stats.inserted, 2);
        assert_eq!(dict.frequency("cat"), Some(5));
        assert_eq!(dict.frequency("cart"), Some(1));
    }

    #[test]
    fn test_load_missing_file() {
        let mut dict = Dictionary::new();
        assert!(load_words_from_path("/definitely/not/here.txt", &mut dict).is_err());
    }
}
