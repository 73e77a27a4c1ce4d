//! Fixed-capacity result accumulator.

use super::{Ranking, Suggestion};

/// Keeps at most `capacity` suggestions seen during one traversal.
///
/// While below capacity every offer is kept. Once full, the *worst* entry
/// (lowest frequency, ties broken by largest distance) is found by linear
/// scan and replaced only if the candidate is strictly better: higher
/// frequency, or equal frequency and smaller distance.
///
/// This is an approximate best-k: ties are resolved in favour of whatever
/// arrived first, and the retention rule weighs frequency before distance
/// even for fuzzy queries. Results are therefore not guaranteed to equal a
/// global top-k under the final [`Ranking`].
///
/// # Examples
///
/// ```
/// use lineweave::suggest::BoundedCollector;
///
/// let mut collector = BoundedCollector::new(2);
/// collector.offer("a", 1, 0);
/// collector.offer("b", 5, 0);
/// assert!(collector.offer("c", 3, 0)); // evicts "a"
/// assert!(!collector.offer("d", 1, 0)); // worse than everything kept
///
/// let words: Vec<_> = collector.into_vec().into_iter().map(|s| s.word).collect();
/// assert_eq!(words, vec!["c", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct BoundedCollector {
    capacity: usize,
    entries: Vec<Suggestion>,
}

impl BoundedCollector {
    /// Create a collector retaining at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            // k comes from callers and may be arbitrarily large
            entries: Vec::with_capacity(capacity.min(64)),
        }
    }

    /// Offer a candidate. Returns whether it was retained.
    ///
    /// The word is only copied when the candidate is kept.
    pub fn offer(&mut self, word: &str, frequency: u64, distance: usize) -> bool {
        if self.entries.len() < self.capacity {
            self.entries
                .push(Suggestion::new(word, frequency, distance));
            return true;
        }

        let Some(worst) = self.worst_index() else {
            // capacity == 0
            return false;
        };

        if Suggestion::outranks(frequency, distance, &self.entries[worst]) {
            self.entries[worst] = Suggestion::new(word, frequency, distance);
            true
        } else {
            false
        }
    }

    /// Index of the entry to evict next: lowest frequency, ties broken by
    /// largest distance, earliest index on a full tie.
    fn worst_index(&self) -> Option<usize> {
        let mut entries = self.entries.iter().enumerate();
        let (mut worst, mut worst_entry) = entries.next()?;
        for (idx, entry) in entries {
            if entry.frequency < worst_entry.frequency
                || (entry.frequency == worst_entry.frequency
                    && entry.distance > worst_entry.distance)
            {
                worst = idx;
                worst_entry = entry;
            }
        }
        Some(worst)
    }

    /// Maximum number of retained entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether further offers must beat an existing entry.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Retained entries in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Suggestion> {
        self.entries.iter()
    }

    /// Consume the collector, returning entries in slot order.
    pub fn into_vec(self) -> Vec<Suggestion> {
        self.entries
    }

    /// Consume the collector, returning entries sorted under `ranking`.
    pub fn into_sorted(self, ranking: Ranking) -> Vec<Suggestion> {
        let mut entries = self.entries;
        ranking.sort(&mut entries);
        entries
    }
}
