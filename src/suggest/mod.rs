//! Word suggestions over a dictionary prefix tree.
//!
//! Two queries are provided, both feeding a [`BoundedCollector`]:
//!
//! - [`autocomplete`]: every word below an exact prefix, ranked by
//!   frequency ([`Ranking::Popularity`])
//! - [`autocorrect`]: every word within an edit-distance bound, found by a
//!   pruned depth-first walk, ranked by distance ([`Ranking::Closeness`])
//!
//! Both are also available as methods on
//! [`Dictionary`](crate::dictionary::Dictionary).

mod autocomplete;
mod autocorrect;
mod collector;
mod suggestion;

pub use autocomplete::autocomplete;
pub use autocorrect::autocorrect;
pub use collector::BoundedCollector;
pub use suggestion::{Ranking, Suggestion};

/// Render results the way the console prints them, one per line.
///
/// ```
/// use lineweave::suggest::{format_suggestions, Suggestion};
///
/// let results = vec![Suggestion::correction("cat", 5, 1)];
/// assert_eq!(format_suggestions(&results, true), "cat (dist=1, freq=5)");
/// assert_eq!(format_suggestions(&results, false), "cat");
/// assert_eq!(format_suggestions(&[], false), "No suggestions");
/// ```
pub fn format_suggestions(results: &[Suggestion], show_details: bool) -> String {
    if results.is_empty() {
        return "No suggestions".to_string();
    }

    results
        .iter()
        .map(|s| {
            if show_details {
                s.to_string()
            } else {
                s.word.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
