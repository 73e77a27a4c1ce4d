//! Exact-prefix completion.

use super::{BoundedCollector, Ranking, Suggestion};
use crate::dictionary::{self, normalize, Result, TrieNode};

/// Up to `k` words under `root` that start with `prefix`.
///
/// The prefix is normalized; an empty normalized prefix or a prefix with no
/// path in the tree yields no results. Otherwise every terminal node of the
/// prefix subtree is offered (pre-order, alphabetical children) to a
/// [`BoundedCollector`] of capacity `k`, and the survivors are sorted by
/// frequency descending then word ascending.
///
/// # Errors
///
/// [`DictionaryError::InputTooLong`](crate::dictionary::DictionaryError::InputTooLong)
/// if the normalized prefix is over-long.
///
/// # Examples
///
/// ```
/// use lineweave::dictionary::Dictionary;
/// use lineweave::suggest::autocomplete;
///
/// let dict = Dictionary::from_terms(["car", "cart", "cat", "dog"]);
/// let words: Vec<_> = autocomplete(dict.root(), "Ca", 5)
///     .unwrap()
///     .into_iter()
///     .map(|s| s.word)
///     .collect();
/// assert_eq!(words, vec!["car", "cart", "cat"]);
/// ```
pub fn autocomplete(root: &TrieNode, prefix: &str, k: usize) -> Result<Vec<Suggestion>> {
    let prefix = normalize(prefix)?;
    if prefix.is_empty() || k == 0 {
        return Ok(Vec::new());
    }

    let Some(start) = dictionary::find_node(root, &prefix) else {
        return Ok(Vec::new());
    };

    let mut collector = BoundedCollector::new(k);
    collect_subtree(start, &mut collector);

    log::trace!(
        "autocomplete {:?}: {} results (k = {})",
        prefix,
        collector.len(),
        k
    );
    Ok(collector.into_sorted(Ranking::Popularity))
}

/// Offer every terminal node at or below `node`.
fn collect_subtree(node: &TrieNode, collector: &mut BoundedCollector) {
    if let Some(word) = node.word() {
        collector.offer(word, node.frequency(), 0);
    }
    for (_, child) in node.edges() {
        collect_subtree(child, collector);
    }
}
