// crates/domain/src/word_set.rs
use rustc_hash::FxHashSet;

use crate::{
    case_fold::fold_case,
    text::{effective_delimiters, normalize, split_on},
};

/// A loaded, case-folded set of stop words for one locale.
///
/// Immutable once built. Lazy loading and sharing live one layer up; this
/// type only answers membership and cleaning questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    locale: Option<&'static str>,
    words: FxHashSet<String>,
}

/// Single characters are treated as stop words in every language.
#[inline]
#[must_use]
pub fn is_single_char(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some() && chars.next().is_none()
}

impl WordSet {
    /// Parses a word list.
    ///
    /// Lines end at `\n`, `\r` or `\r\n`. Everything from the first `|` on a
    /// line is a comment. Remaining text is split on whitespace and every word
    /// is folded with `locale`.
    #[must_use]
    pub fn parse(text: &str, locale: Option<&'static str>) -> Self {
        let words = text
            .split(['\n', '\r'])
            .map(|line| line.split('|').next().unwrap_or_default().trim())
            .filter(|line| !line.is_empty())
            .flat_map(str::split_whitespace)
            .map(|word| fold_case(locale, word))
            .collect();
        Self { locale, words }
    }

    /// Builds a set from already separated words, folding each one.
    #[must_use]
    pub fn from_words<I, S>(words: I, locale: Option<&'static str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| fold_case(locale, w.as_ref().trim()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { locale, words }
    }

    #[must_use]
    pub fn locale(&self) -> Option<&'static str> {
        self.locale
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Membership after folding `word` with this set's locale.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        is_single_char(word) || self.words.contains(&fold_case(self.locale, word))
    }

    /// Membership on the word exactly as given.
    #[must_use]
    pub fn is_stop_word_exact(&self, word: &str) -> bool {
        is_single_char(word) || self.words.contains(word)
    }

    /// Strips stop words from `text` using the default delimiters.
    #[must_use]
    pub fn remove(&self, text: &str) -> String {
        self.remove_with(text, None)
    }

    /// Strips stop words from `text`.
    ///
    /// Punctuation and digits always become spaces first; the result is then
    /// tokenized on `delimiters` only (default set when absent or empty).
    /// Kept tokens are joined by single spaces and the whole is trimmed.
    #[must_use]
    pub fn remove_with(&self, text: &str, delimiters: Option<&str>) -> String {
        if text.is_empty() {
            return String::new();
        }
        let delimiters = effective_delimiters(delimiters);
        let normalized = normalize(text);

        let mut out = String::with_capacity(normalized.len());
        for token in split_on(&normalized, delimiters) {
            if !self.is_stop_word(token) {
                out.push_str(token);
                out.push(' ');
            }
        }
        out.trim().to_string()
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a String;
    type IntoIter = std::collections::hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
