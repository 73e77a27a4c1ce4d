//! Prefix-tree nodes.

use super::normalize::{letter_index, ALPHABET_SIZE};

/// One node of the dictionary prefix tree.
///
/// Each node exclusively owns up to 26 children, one per lowercase letter.
/// A node is *terminal* when a normalized word ends at it; terminal nodes
/// also store the word itself, so results can be reported without
/// reconstructing the path.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    word: Option<Box<str>>,
    frequency: u64,
}

impl TrieNode {
    /// Create an empty, non-terminal node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a dictionary word ends at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.word.is_some()
    }

    /// The word ending at this node, if terminal.
    #[inline]
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Frequency of the word ending here. Zero on non-terminal nodes.
    #[inline]
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Follow the edge labelled `label` (a lowercase ASCII letter).
    #[inline]
    pub fn transition(&self, label: u8) -> Option<&TrieNode> {
        letter_index(label).and_then(|idx| self.children[idx].as_deref())
    }

    /// Iterate over existing children as `(label, child)` pairs in
    /// alphabetical order.
    pub fn edges(&self) -> impl Iterator<Item = (u8, &TrieNode)> + '_ {
        self.children
            .iter()
            .zip(b'a'..=b'z')
            .filter_map(|(child, label)| child.as_deref().map(|node| (label, node)))
    }

    /// Number of existing children.
    pub fn edge_count(&self) -> usize {
        self.children.iter().filter(|child| child.is_some()).count()
    }

    /// Child at alphabet index `idx` (`0..ALPHABET_SIZE`), created if
    /// missing. Returns the child and whether it was created.
    pub(crate) fn child_or_insert(&mut self, idx: usize) -> (&mut TrieNode, bool) {
        let created = self.children[idx].is_none();
        let child: &mut TrieNode = self.children[idx].get_or_insert_with(Box::default);
        (child, created)
    }

    /// Mark this node terminal for `word` and apply the frequency rule:
    /// a positive `freq` overwrites, anything else bumps by one.
    pub(crate) fn mark_terminal(&mut self, word: &str, freq: i64) {
        self.frequency = match u64::try_from(freq) {
            Ok(seed) if seed > 0 => seed,
            _ => self.frequency.saturating_add(1),
        };
        self.word = Some(word.into());
    }
}
