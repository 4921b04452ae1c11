// crates/usecase/src/registry.rs
use std::sync::Arc;

use stoplang_domain::{Language, StopWordConfig};
use stoplang_ports::WordListSource;
use stoplang_shared_kernel::Result;

use crate::stop_words::StopWordSet;

/// One [`StopWordSet`] per language, all reading from the same source.
///
/// Sets are stored in declaration order and loaded independently, each on
/// its own first use.
#[derive(Debug)]
pub struct StopWordRegistry {
    sets: Vec<StopWordSet>,
    config: StopWordConfig,
}

impl StopWordRegistry {
    /// Registry with the default configuration.
    #[must_use]
    pub fn new<S>(source: S) -> Self
    where
        S: WordListSource + 'static,
    {
        Self::build(Arc::new(source), StopWordConfig::default())
    }

    /// Registry with a validated configuration.
    pub fn with_config<S>(source: S, config: StopWordConfig) -> Result<Self>
    where
        S: WordListSource + 'static,
    {
        config.validate()?;
        Ok(Self::build(Arc::new(source), config))
    }

    fn build(source: Arc<dyn WordListSource>, config: StopWordConfig) -> Self {
        let sets = Language::ALL
            .iter()
            .map(|&lang| {
                let set = match lang {
                    Language::Custom => StopWordSet::custom(std::iter::empty::<&str>()),
                    _ => StopWordSet::new(lang, Arc::clone(&source)),
                };
                set.with_default_delimiters(config.delimiters.clone())
            })
            .collect();
        Self { sets, config }
    }

    /// Replaces the [`Language::Custom`] set, empty until then, with the given words.
    #[must_use]
    pub fn with_custom<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let custom =
            StopWordSet::custom(words).with_default_delimiters(self.config.delimiters.clone());
        self.sets[Language::Custom.index()] = custom;
        self
    }

    #[must_use]
    pub fn get(&self, language: Language) -> &StopWordSet {
        &self.sets[language.index()]
    }

    #[must_use]
    pub fn config(&self) -> &StopWordConfig {
        &self.config
    }

    /// All sets, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &StopWordSet> {
        self.sets.iter()
    }

    /// Sets considered when guessing, in tie-break order.
    pub fn guess_candidates(&self) -> impl Iterator<Item = &StopWordSet> {
        self.config.guess_order().into_iter().map(|lang| self.get(lang))
    }

    /// Loads every guessable language now, stopping at the first failure.
    pub fn load_all(&self) -> Result<()> {
        for set in self.guess_candidates() {
            set.load()?;
        }
        Ok(())
    }

    pub fn is_stop_word(&self, language: Language, word: &str) -> Result<bool> {
        self.get(language).is_stop_word(word)
    }

    pub fn is_stop_word_exact(&self, language: Language, word: &str) -> Result<bool> {
        self.get(language).is_stop_word_exact(word)
    }

    pub fn remove(&self, language: Language, text: &str) -> Result<String> {
        self.get(language).remove(text)
    }

    pub fn remove_with(&self, language: Language, text: &str, delimiters: Option<&str>) -> Result<String> {
        self.get(language).remove_with(text, delimiters)
    }
}
