// crates/domain/src/counter.rs
use indexmap::IndexMap;
use stoplang_shared_kernel::Frequency;

/// Tally of word occurrences.
///
/// Counts only grow. Words remember the order in which they were first
/// seen; that order breaks ties in the frequency queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounter {
    counts: IndexMap<String, Frequency>,
}

impl WordCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`.
    pub fn note(&mut self, word: impl AsRef<str>) {
        self.note_n(word, 1);
    }

    /// Records `n` occurrences of `word`.
    pub fn note_n(&mut self, word: impl AsRef<str>, n: usize) {
        let word = word.as_ref();
        match self.counts.get_mut(word) {
            Some(count) => *count += n,
            None => {
                self.counts.insert(word.to_string(), Frequency::new(n));
            }
        }
    }

    /// Adds every count of `other`. Words new to `self` are appended in
    /// `other`'s first-seen order.
    pub fn merge(&mut self, other: &WordCounter) {
        for (word, count) in &other.counts {
            self.note_n(word, count.value());
        }
    }

    #[must_use]
    pub fn count(&self, word: &str) -> Frequency {
        self.counts.get(word).copied().unwrap_or_default()
    }

    /// Sum of all occurrences.
    #[must_use]
    pub fn total(&self) -> Frequency {
        self.counts.values().sum()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Up to `n` distinct words, most frequent first, ties in first-seen order.
    #[must_use]
    pub fn most_frequent(&self, n: usize) -> Vec<&str> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked.into_iter().map(|(word, _)| word).collect()
    }

    /// Every distinct word, most frequent first, ties in first-seen order.
    #[must_use]
    pub fn all_by_frequency(&self) -> Vec<&str> {
        self.most_frequent(self.len())
    }

    /// Words paired with their counts, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Frequency)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    fn ranked(&self) -> Vec<(&str, Frequency)> {
        let mut ranked: Vec<_> = self.iter().collect();
        // stable: equal counts keep insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordCounter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.extend(iter);
        counter
    }
}

impl<S: AsRef<str>> Extend<S> for WordCounter {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.note(word);
        }
    }
}
