//! Suggestion result type and result orderings.

use std::cmp::Ordering;

/// One autocomplete or autocorrect result.
///
/// # Examples
///
/// ```
/// use lineweave::suggest::Suggestion;
///
/// let completion = Suggestion::completion("cart", 3);
/// assert_eq!(completion.distance, 0);
///
/// let correction = Suggestion::correction("cat", 5, 1);
/// assert_eq!(correction.to_string(), "cat (dist=1, freq=5)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suggestion {
    /// The dictionary word
    pub word: String,
    /// Frequency stored for the word
    pub frequency: u64,
    /// Edit distance from the query (always 0 for completions)
    pub distance: usize,
}

impl Suggestion {
    /// Create a suggestion with explicit distance.
    pub fn new(word: impl Into<String>, frequency: u64, distance: usize) -> Self {
        Self {
            word: word.into(),
            frequency,
            distance,
        }
    }

    /// A prefix completion (distance 0).
    pub fn completion(word: impl Into<String>, frequency: u64) -> Self {
        Self::new(word, frequency, 0)
    }

    /// A fuzzy correction at `distance` edits.
    pub fn correction(word: impl Into<String>, frequency: u64, distance: usize) -> Self {
        Self::new(word, frequency, distance)
    }

    /// Whether this entry would replace `other` in a full collector:
    /// higher frequency, or equal frequency and smaller distance.
    #[inline]
    pub(crate) fn outranks(frequency: u64, distance: usize, other: &Suggestion) -> bool {
        frequency > other.frequency || (frequency == other.frequency && distance < other.distance)
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (dist={}, freq={})",
            self.word, self.distance, self.frequency
        )
    }
}

/// Final ordering applied to a query's results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    /// Frequency descending, then word ascending (autocomplete)
    Popularity,
    /// Distance ascending, then frequency descending, then word ascending
    /// (autocorrect)
    Closeness,
}

impl Ranking {
    /// Compare two suggestions under this ranking.
    pub fn compare(self, a: &Suggestion, b: &Suggestion) -> Ordering {
        match self {
            Ranking::Popularity => b
                .frequency
                .cmp(&a.frequency)
                .then_with(|| a.word.cmp(&b.word)),
            Ranking::Closeness => a
                .distance
                .cmp(&b.distance)
                .then_with(|| b.frequency.cmp(&a.frequency))
                .then_with(|| a.word.cmp(&b.word)),
        }
    }

    /// Sort `suggestions` in place under this ranking.
    pub fn sort(self, suggestions: &mut [Suggestion]) {
        suggestions.sort_by(|a, b| self.compare(a, b));
    }
}
