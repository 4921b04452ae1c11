// crates/domain/src/config.rs
use serde::{Deserialize, Serialize};
use stoplang_shared_kernel::{DomainError, DomainResult, Result};

use crate::{language::Language, text::DEFAULT_DELIMITERS};

/// Number of most frequent words compared against each language.
pub const DEFAULT_CANDIDATE_LIMIT: usize = 50;

/// Tunables for guessing and cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StopWordConfig {
    /// Top-K words taken from a frequency table when guessing.
    pub candidate_limit: usize,
    /// Token boundaries used by `remove` when the caller passes none.
    pub delimiters: String,
    /// Languages considered when guessing. Ties still go to declaration order.
    pub languages: Vec<Language>,
}

impl Default for StopWordConfig {
    fn default() -> Self {
        Self {
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            delimiters: DEFAULT_DELIMITERS.to_string(),
            languages: Language::bundled().collect(),
        }
    }
}

impl StopWordConfig {
    /// Parses and validates a JSON document. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_candidate_limit(mut self, limit: usize) -> Self {
        self.candidate_limit = limit;
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: impl IntoIterator<Item = Language>) -> Self {
        self.languages = languages.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.candidate_limit == 0 {
            return Err(DomainError::RangeValidation {
                field: "candidate_limit".into(),
                min: "1".into(),
                max: usize::MAX.to_string(),
            });
        }
        if self.languages.contains(&Language::Custom) {
            return Err(DomainError::InvalidConfiguration {
                reason: "Custom has no bundled word list and cannot be guessed".into(),
            });
        }
        Ok(())
    }

    /// Languages in declaration order with duplicates removed.
    ///
    /// Guess ties always go to the language declared first, whatever order
    /// the configuration lists them in.
    #[must_use]
    pub fn guess_order(&self) -> Vec<Language> {
        Language::ALL.iter().copied().filter(|lang| self.languages.contains(lang)).collect()
    }
}
