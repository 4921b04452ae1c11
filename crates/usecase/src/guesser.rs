// crates/usecase/src/guesser.rs
use stoplang_domain::{Language, LanguageScore, WordCounter, pick_best};
use stoplang_ports::Tokenizer;
use stoplang_shared_kernel::Result;

use crate::{registry::StopWordRegistry, stop_words::StopWordSet};

/// Guesses a text's language from how many of its most frequent words are
/// stop words in each candidate language.
///
/// Every candidate's list gets loaded on the first guess.
pub struct LanguageGuesser<'a> {
    registry: &'a StopWordRegistry,
    tokenizer: &'a dyn Tokenizer,
}

impl<'a> LanguageGuesser<'a> {
    #[must_use]
    pub fn new(registry: &'a StopWordRegistry, tokenizer: &'a dyn Tokenizer) -> Self {
        Self { registry, tokenizer }
    }

    /// Tokenizes and counts `text`.
    #[must_use]
    pub fn count(&self, text: &str) -> WordCounter {
        self.tokenizer.tokens(text).collect()
    }

    /// Guesses from the most frequent words of `text`.
    pub fn guess_text(&self, text: &str) -> Result<Option<Language>> {
        self.guess_counter(&self.count(text))
    }

    /// Guesses from the most frequent words of an existing tally.
    pub fn guess_counter(&self, counter: &WordCounter) -> Result<Option<Language>> {
        let limit = self.registry.config().candidate_limit;
        self.guess_words(counter.most_frequent(limit))
    }

    /// Guesses from an explicit word list. `Ok(None)` when no language
    /// recognizes any of the words.
    pub fn guess_words<I, S>(&self, words: I) -> Result<Option<Language>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<S> = words.into_iter().collect();
        let scores = self.scores(&words)?;
        Ok(pick_best(scores))
    }

    /// Overlap of `words` with every candidate language, in tie-break order.
    pub fn scores<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<LanguageScore>> {
        let candidates: Vec<&StopWordSet> = self.registry.guess_candidates().collect();
        let words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
        score_all(&candidates, &words)
    }
}

#[cfg(not(feature = "parallel"))]
fn score_all(candidates: &[&StopWordSet], words: &[&str]) -> Result<Vec<LanguageScore>> {
    candidates.iter().map(|set| score(set, words)).collect()
}

// collect keeps candidate order, so ties resolve as in the sequential path
#[cfg(feature = "parallel")]
fn score_all(candidates: &[&StopWordSet], words: &[&str]) -> Result<Vec<LanguageScore>> {
    use rayon::prelude::*;

    candidates.par_iter().map(|set| score(set, words)).collect()
}

fn score(set: &StopWordSet, words: &[&str]) -> Result<LanguageScore> {
    let loaded = set.load()?;
    let hits = words.iter().filter(|word| loaded.is_stop_word(word)).count();
    log::trace!("{}: {hits} of {} candidate words are stop words", set.language(), words.len());
    Ok(LanguageScore::new(set.language(), hits))
}
