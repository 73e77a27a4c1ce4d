//! Reference Levenshtein distance.
//!
//! A direct, space-optimized dynamic-programming implementation (two rows
//! instead of a full matrix). The trie search in
//! [`suggest::autocorrect`](crate::suggest::autocorrect) computes the same
//! recurrence incrementally; this function is the standalone version used to
//! score arbitrary pairs and to cross-check the search.

use smallvec::SmallVec;

/// Compute standard Levenshtein distance between two strings.
///
/// Counts the minimum number of single-character insertions, deletions and
/// substitutions required to transform `source` into `target`. Operates on
/// `char`s, not bytes.
///
/// # Example
///
/// ```rust
/// use lineweave::distance::standard_distance;
///
/// assert_eq!(standard_distance("kitten", "sitting"), 3);
/// assert_eq!(standard_distance("test", "test"), 0);
/// assert_eq!(standard_distance("", "abc"), 3);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row: SmallVec<[usize; 32]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 32]> = SmallVec::from_elem(0, n + 1);

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(source_chars[i - 1] != target_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Whether `source` and `target` are within `max_distance` edits.
///
/// Skips the full computation when the length difference alone exceeds the
/// bound.
pub fn within_distance(source: &str, target: &str, max_distance: usize) -> bool {
    let len_diff = source.chars().count().abs_diff(target.chars().count());
    len_diff <= max_distance && standard_distance(source, target) <= max_distance
}
