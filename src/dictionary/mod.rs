//! Prefix-tree dictionary of normalized words with frequencies.
//!
//! The [`Dictionary`] is built once by repeated [`insert`](Dictionary::insert)
//! calls and then queried with [`contains`](Dictionary::contains),
//! [`autocomplete`](Dictionary::autocomplete) and
//! [`autocorrect`](Dictionary::autocorrect).
//!
//! All input is [normalized](normalize()) first: only ASCII letters are kept,
//! lowercased. Input that normalizes to nothing matches nothing.

pub mod error;
pub mod loader;
mod node;
mod normalize;

pub use error::{DictionaryError, Result};
pub use loader::{load_words, load_words_from_path, LoadStats};
pub use node::TrieNode;
pub use normalize::{normalize, ALPHABET_SIZE, MAX_WORD_LEN};

use crate::suggest::{self, Suggestion};

/// What an [`insert`](Dictionary::insert) call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new word was added
    Inserted,
    /// The word already existed; its frequency was updated
    Updated,
    /// The input normalized to nothing, so the dictionary is unchanged
    Ignored,
}

/// A set of words with frequency counters, stored as a 26-ary prefix tree.
///
/// # Thread Safety
///
/// Mutation takes `&mut self` and queries take `&self`, so a shared
/// dictionary needs external synchronization (see
/// [`Session`](crate::session::Session)). Queries may run concurrently with
/// each other once building is done.
///
/// # Examples
///
/// ```
/// use lineweave::dictionary::Dictionary;
///
/// let mut dict = Dictionary::new();
/// dict.insert("Cat", 5).unwrap();
/// dict.insert("cart", 1).unwrap();
///
/// assert!(dict.contains("CAT!"));
/// assert!(!dict.contains("ca"));
///
/// let words: Vec<_> = dict
///     .autocomplete("ca", 5)
///     .unwrap()
///     .into_iter()
///     .map(|s| s.word)
///     .collect();
/// assert_eq!(words, vec!["cat", "cart"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    root: TrieNode,
    term_count: usize,
    node_count: usize,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary, seeding every term with frequency 1.
    ///
    /// Terms that normalize to nothing or are too long are skipped.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_weighted(terms.into_iter().map(|term| (term, 1)))
    }

    /// Build a dictionary from `(term, frequency)` pairs, applied in order
    /// with [`insert`](Self::insert) semantics.
    pub fn from_weighted<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for (term, freq) in terms {
            if let Err(err) = dict.insert(term.as_ref(), freq) {
                log::warn!("skipping term: {}", err);
            }
        }
        dict
    }

    /// Insert `word` with frequency `freq`.
    ///
    /// The word is normalized first; if nothing remains, this is a no-op.
    /// At the word's terminal node a positive `freq` sets the frequency,
    /// while `freq <= 0` increments the existing frequency by one.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::InputTooLong`] if the normalized word exceeds
    /// [`MAX_WORD_LEN`].
    pub fn insert(&mut self, word: &str, freq: i64) -> Result<InsertOutcome> {
        let normalized = normalize(word)?;
        if normalized.is_empty() {
            return Ok(InsertOutcome::Ignored);
        }

        let mut node = &mut self.root;
        for &label in normalized.as_bytes() {
            let Some(idx) = normalize::letter_index(label) else {
                continue;
            };
            let (child, created) = node.child_or_insert(idx);
            if created {
                self.node_count += 1;
            }
            node = child;
        }

        let existed = node.is_terminal();
        node.mark_terminal(&normalized, freq);
        log::trace!("insert {:?} -> frequency {}", normalized, node.frequency());

        if existed {
            Ok(InsertOutcome::Updated)
        } else {
            self.term_count += 1;
            Ok(InsertOutcome::Inserted)
        }
    }

    /// Whether `word`, after normalization, was previously inserted.
    ///
    /// Input that normalizes to nothing or is too long is never contained.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Frequency of `word`, if present.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.lookup(word).map(TrieNode::frequency)
    }

    /// Up to `k` words starting with `prefix`, ordered by frequency
    /// descending then word ascending. Every result has distance 0.
    ///
    /// See [`suggest::autocomplete`].
    pub fn autocomplete(&self, prefix: &str, k: usize) -> Result<Vec<Suggestion>> {
        suggest::autocomplete(&self.root, prefix, k)
    }

    /// Up to `k` words within `max_distance` edits of `word`, ordered by
    /// distance ascending then frequency descending.
    ///
    /// See [`suggest::autocorrect`].
    pub fn autocorrect(
        &self,
        word: &str,
        max_distance: usize,
        k: usize,
    ) -> Result<Vec<Suggestion>> {
        suggest::autocorrect(&self.root, word, max_distance, k)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.term_count
    }

    /// Whether no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.term_count == 0
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// The root of the prefix tree.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Node at the end of an already-normalized path.
    pub(crate) fn find_node(&self, normalized: &str) -> Option<&TrieNode> {
        find_node(&self.root, normalized)
    }

    fn lookup(&self, word: &str) -> Option<&TrieNode> {
        let normalized = normalize(word).ok()?;
        if normalized.is_empty() {
            return None;
        }
        self.find_node(&normalized).filter(|node| node.is_terminal())
    }
}

/// Walk `path` from `root`, returning the node it ends at.
pub(crate) fn find_node<'a>(root: &'a TrieNode, path: &str) -> Option<&'a TrieNode> {
    path.bytes().try_fold(root, |node, label| node.transition(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dictionary() {
        let dict = Dictionary::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
        assert_eq!(dict.node_count(), 0);
        assert!(!dict.contains("anything"));
    }

    #[test]
    fn test_insert_and_contains() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.insert("hello", 1).unwrap(), InsertOutcome::Inserted);
        assert!(dict.contains("hello"));
        assert!(dict.contains("HeLLo"));
        assert!(dict.contains("he-llo!"));
        assert!(!dict.contains("hell"));
        assert!(!dict.contains("helloo"));
    }

    #[test]
    fn test_insert_normalizes() {
        let mut dict = Dictionary::new();
        dict.insert("Rock'n'Roll", 3).unwrap();
        assert!(dict.contains("rocknroll"));
        assert_eq!(dict.frequency("ROCKNROLL"), Some(3));
    }

    #[test]
    fn test_insert_empty_is_ignored() {
        let mut dict = Dictionary::new();
        assert_eq!(dict.insert("1234", 5).unwrap(), InsertOutcome::Ignored);
        assert_eq!(dict.insert("", 5).unwrap(), InsertOutcome::Ignored);
        assert!(dict.is_empty());
        assert_eq!(dict.node_count(), 0);
        assert!(!dict.contains(""));
    }

    #[test]
    fn test_insert_too_long() {
        let mut dict = Dictionary::new();
        let word = "a".repeat(MAX_WORD_LEN + 1);
        assert!(matches!(
            dict.insert(&word, 1),
            Err(DictionaryError::InputTooLong { .. })
        ));
        assert!(dict.is_empty());
        assert!(!dict.contains(&word));
    }

    #[test]
    fn test_frequency_rules() {
        let mut dict = Dictionary::new();
        dict.insert("word", 10).unwrap();
        assert_eq!(dict.frequency("word"), Some(10));

        assert_eq!(dict.insert("word", 0).unwrap(), InsertOutcome::Updated);
        assert_eq!(dict.frequency("word"), Some(11));

        dict.insert("word", 4).unwrap();
        assert_eq!(dict.frequency("word"), Some(4));

        dict.insert("fresh", 0).unwrap();
        assert_eq!(dict.frequency("fresh"), Some(1));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_shared_prefix_nodes() {
        let mut dict = Dictionary::new();
        dict.insert("car", 1).unwrap();
        assert_eq!(dict.node_count(), 3);
        dict.insert("cart", 1).unwrap();
        assert_eq!(dict.node_count(), 4);
        dict.insert("ca", 1).unwrap();
        assert_eq!(dict.node_count(), 4);
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn test_prefix_node_is_not_terminal() {
        let mut dict = Dictionary::new();
        dict.insert("cart", 1).unwrap();
        assert!(!dict.contains("car"));
        assert_eq!(dict.frequency("car"), None);
        assert!(dict.find_node("car").is_some());
    }

    #[test]
    fn test_from_terms() {
        let dict = Dictionary::from_terms(["alpha", "beta", "", "Alpha"]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.frequency("alpha"), Some(1));
    }

    #[test]
    fn test_from_weighted() {
        let dict = Dictionary::from_weighted([("the", 100), ("the", 0), ("a", 7)]);
        assert_eq!(dict.frequency("the"), Some(101));
        assert_eq!(dict.frequency("a"), Some(7));
    }
}
