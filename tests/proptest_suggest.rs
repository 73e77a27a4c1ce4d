//! Property-based tests for autocomplete and autocorrect
//!
//! Results are checked against brute-force scans over the inserted words.

use lineweave::dictionary::{normalize, Dictionary};
use lineweave::distance::standard_distance;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn word_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,6}"
}

fn dict_strategy() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec((word_strategy(), 1i64..20), 1..25)
}

fn distinct_words(entries: &[(String, i64)]) -> BTreeSet<String> {
    entries.iter().map(|(w, _)| w.clone()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: every completion starts with the prefix, is a member, and
    /// the result respects k and the frequency ordering.
    #[test]
    fn prop_autocomplete_containment(
        entries in dict_strategy(),
        prefix in "[a-e]{1,3}",
        k in 0usize..8,
    ) {
        let dict = Dictionary::from_weighted(entries.iter().map(|(w, f)| (w.as_str(), *f)));
        let results = dict.autocomplete(&prefix, k).unwrap();

        prop_assert!(results.len() <= k);
        for s in &results {
            prop_assert!(s.word.starts_with(&prefix));
            prop_assert!(dict.contains(&s.word));
            prop_assert_eq!(s.distance, 0);
        }
        for pair in results.windows(2) {
            prop_assert!(
                pair[0].frequency > pair[1].frequency
                    || (pair[0].frequency == pair[1].frequency && pair[0].word < pair[1].word)
            );
        }

        // Below capacity the collector keeps everything.
        let expected = distinct_words(&entries)
            .into_iter()
            .filter(|w| w.starts_with(&prefix))
            .count();
        prop_assert_eq!(results.len(), expected.min(k));
    }

    /// Property: corrections are members within the bound, with exact
    /// distances, ordered by distance then frequency.
    #[test]
    fn prop_autocorrect_bound(
        entries in dict_strategy(),
        query in word_strategy(),
        max_distance in 0usize..=3,
        k in 1usize..8,
    ) {
        let dict = Dictionary::from_weighted(entries.iter().map(|(w, f)| (w.as_str(), *f)));
        let results = dict.autocorrect(&query, max_distance, k).unwrap();

        prop_assert!(results.len() <= k);
        for s in &results {
            prop_assert!(dict.contains(&s.word));
            prop_assert_eq!(s.distance, standard_distance(&query, &s.word));
            prop_assert!(s.distance <= max_distance);
        }
        for pair in results.windows(2) {
            prop_assert!(
                pair[0].distance < pair[1].distance
                    || (pair[0].distance == pair[1].distance
                        && pair[0].frequency >= pair[1].frequency)
            );
        }

        let expected = distinct_words(&entries)
            .into_iter()
            .filter(|w| standard_distance(&query, w) <= max_distance)
            .count();
        prop_assert_eq!(results.len(), expected.min(k));
    }

    /// Property: membership is exactly the set of normalized inserted words.
    #[test]
    fn prop_membership(
        entries in prop::collection::vec(("[A-Za-z' -]{0,8}", 1i64..5), 0..20),
        probe in "[A-Za-z]{0,6}",
    ) {
        let dict = Dictionary::from_weighted(entries.iter().map(|(w, f)| (w.as_str(), *f)));
        let inserted: BTreeSet<String> = entries
            .iter()
            .map(|(w, _)| normalize(w).unwrap())
            .filter(|w| !w.is_empty())
            .collect();

        prop_assert_eq!(dict.len(), inserted.len());
        let key = normalize(&probe).unwrap();
        prop_assert_eq!(dict.contains(&probe), inserted.contains(&key));
    }
}
