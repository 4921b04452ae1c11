// crates/domain/src/scoring.rs
use serde::{Deserialize, Serialize};
use stoplang_shared_kernel::Frequency;

use crate::language::Language;

/// How many candidate words were stop words for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageScore {
    pub language: Language,
    pub hits: Frequency,
}

impl LanguageScore {
    #[must_use]
    pub fn new(language: Language, hits: impl Into<Frequency>) -> Self {
        Self { language, hits: hits.into() }
    }
}

/// Picks the language with the strictly highest score.
///
/// Scores are visited in the given order and a later language only replaces
/// the current winner by exceeding it, so the first to reach the maximum
/// wins ties. `None` when nothing scored above zero.
#[must_use]
pub fn pick_best<I>(scores: I) -> Option<Language>
where
    I: IntoIterator<Item = LanguageScore>,
{
    let mut winner = None;
    let mut max = Frequency::ZERO;
    for score in scores {
        if score.hits > max {
            winner = Some(score.language);
            max = score.hits;
        }
    }
    winner
}
