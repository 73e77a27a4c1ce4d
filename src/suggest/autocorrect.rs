//! Fuzzy correction over the prefix tree.
//!
//! The search walks the tree depth-first, carrying one row of the
//! Levenshtein matrix per level instead of a full matrix. Row `d` holds the
//! distance between the current path (length `d`) and every prefix of the
//! target, so each node costs `O(L)` to evaluate from its parent's row.
//!
//! A subtree is abandoned as soon as every entry of the current row exceeds
//! the distance bound: extending the path can only add edits, so no word
//! below it can come back within range.

use super::{BoundedCollector, Ranking, Suggestion};
use crate::dictionary::{normalize, Result, TrieNode};
use smallvec::SmallVec;

/// One row of the edit-distance matrix. Inline for targets up to 31 letters.
pub(crate) type Row = SmallVec<[usize; 32]>;

/// Up to `k` words under `root` within `max_distance` edits of `word`.
///
/// The word is normalized; an empty result yields no suggestions. Matches
/// are offered to a [`BoundedCollector`] of capacity `k` during the walk and
/// returned sorted by distance ascending, then frequency descending, then
/// word ascending.
///
/// # Errors
///
/// [`DictionaryError::InputTooLong`](crate::dictionary::DictionaryError::InputTooLong)
/// if the normalized word is over-long.
///
/// # Examples
///
/// ```
/// use lineweave::dictionary::Dictionary;
/// use lineweave::suggest::{autocorrect, Suggestion};
///
/// let dict = Dictionary::from_weighted([("cat", 5), ("cart", 1)]);
/// let results = autocorrect(dict.root(), "cats", 1, 5).unwrap();
/// assert_eq!(results, vec![Suggestion::correction("cat", 5, 1)]);
/// ```
pub fn autocorrect(
    root: &TrieNode,
    word: &str,
    max_distance: usize,
    k: usize,
) -> Result<Vec<Suggestion>> {
    let target = normalize(word)?;
    if target.is_empty() || k == 0 {
        return Ok(Vec::new());
    }

    let mut search = FuzzySearch {
        target: target.as_bytes(),
        max_distance,
        collector: BoundedCollector::new(k),
        visited: 0,
    };

    let base_row: Row = (0..=target.len()).collect();
    for (label, child) in root.edges() {
        search.visit(child, label, 1, &base_row);
    }

    log::trace!(
        "autocorrect {:?} (max distance {}): visited {} nodes, kept {}",
        target,
        max_distance,
        search.visited,
        search.collector.len()
    );
    Ok(search.collector.into_sorted(Ranking::Closeness))
}

/// State shared by every frame of one fuzzy walk.
struct FuzzySearch<'a> {
    target: &'a [u8],
    max_distance: usize,
    collector: BoundedCollector,
    visited: usize,
}

impl FuzzySearch<'_> {
    /// Evaluate `node`, reached by `label` at path length `depth`, then
    /// descend unless the whole row is out of range.
    fn visit(&mut self, node: &TrieNode, label: u8, depth: usize, parent_row: &[usize]) {
        self.visited += 1;
        let row = next_row(self.target, label, depth, parent_row);

        if let Some(word) = node.word() {
            let distance = row[self.target.len()];
            if distance <= self.max_distance {
                self.collector.offer(word, node.frequency(), distance);
            }
        }

        let best = row.iter().copied().min().unwrap_or(depth);
        if best > self.max_distance {
            return;
        }

        for (child_label, child) in node.edges() {
            self.visit(child, child_label, depth + 1, &row);
        }
    }
}

/// Compute the row for a path of length `depth` ending in `label`, given
/// the row of its parent path.
pub(crate) fn next_row(target: &[u8], label: u8, depth: usize, parent_row: &[usize]) -> Row {
    let mut row = Row::with_capacity(target.len() + 1);
    row.push(depth);

    for j in 1..=target.len() {
        let insertion = row[j - 1] + 1;
        let deletion = parent_row[j] + 1;
        let substitution = parent_row[j - 1] + usize::from(target[j - 1] != label);
        row.push(insertion.min(deletion).min(substitution));
    }

    row
}
