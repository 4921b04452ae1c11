// crates/usecase/src/stop_words.rs
use std::{
    fmt,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use stoplang_domain::{DEFAULT_DELIMITERS, Language, WordSet};
use stoplang_ports::WordListSource;
use stoplang_shared_kernel::{ErrorContext, Result};

/// Stop words of one language, read from a [`WordListSource`] on first use.
///
/// The set starts unloaded. The first query (or [`StopWordSet::load`]) reads
/// and parses the list exactly once, even when several threads race on it;
/// afterwards the words are read without locking and never change.
pub struct StopWordSet {
    language: Language,
    source: Option<Arc<dyn WordListSource>>,
    delimiters: String,
    words: OnceLock<WordSet>,
    load_lock: Mutex<()>,
}

impl StopWordSet {
    /// A set for `language` that will read its list from `source`.
    #[must_use]
    pub fn new(language: Language, source: Arc<dyn WordListSource>) -> Self {
        Self {
            language,
            source: Some(source),
            delimiters: DEFAULT_DELIMITERS.to_string(),
            words: OnceLock::new(),
            load_lock: Mutex::new(()),
        }
    }

    /// A [`Language::Custom`] set over caller-supplied words. Already loaded.
    #[must_use]
    pub fn custom<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let language = Language::Custom;
        Self {
            language,
            source: None,
            delimiters: DEFAULT_DELIMITERS.to_string(),
            words: OnceLock::from(WordSet::from_words(words, language.locale())),
            load_lock: Mutex::new(()),
        }
    }

    /// Delimiters used by [`remove`](Self::remove) when the caller gives none.
    #[must_use]
    pub fn with_default_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        let delimiters = delimiters.into();
        if !delimiters.is_empty() {
            self.delimiters = delimiters;
        }
        self
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn locale(&self) -> Option<&'static str> {
        self.language.locale()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.words.get().is_some()
    }

    /// Loads the list if needed and returns it.
    ///
    /// A source failure is returned as is and leaves the set unloaded; it is
    /// never turned into an empty set.
    pub fn load(&self) -> Result<&WordSet> {
        if let Some(words) = self.words.get() {
            return Ok(words);
        }

        let _guard = self.load_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(words) = self.words.get() {
            return Ok(words);
        }

        let words = self.read_list()?;
        Ok(self.words.get_or_init(|| words))
    }

    fn read_list(&self) -> Result<WordSet> {
        let name = self.language.resource_name();
        let text = match &self.source {
            Some(source) => source
                .read(name)
                .with_context(|| format!("loading {} stop words", self.language))?,
            None => String::new(),
        };

        let words = WordSet::parse(&text, self.locale());
        if words.is_empty() {
            log::warn!("{} word list '{name}' contains no words", self.language);
        } else {
            log::debug!("loaded {} {} stop words from '{name}'", words.len(), self.language);
        }
        Ok(words)
    }

    /// Number of words in the loaded list.
    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.load()?.is_empty())
    }

    /// The loaded words, in no particular order.
    pub fn iter(&self) -> Result<impl Iterator<Item = &str>> {
        Ok(self.load()?.iter())
    }

    /// True for single characters and for words whose locale-folded form is listed.
    pub fn is_stop_word(&self, word: &str) -> Result<bool> {
        Ok(self.load()?.is_stop_word(word))
    }

    /// Like [`is_stop_word`](Self::is_stop_word) but without case folding.
    pub fn is_stop_word_exact(&self, word: &str) -> Result<bool> {
        Ok(self.load()?.is_stop_word_exact(word))
    }

    /// Removes stop words using the default delimiters.
    pub fn remove(&self, text: &str) -> Result<String> {
        self.remove_with(text, None)
    }

    /// Removes stop words, splitting only on `delimiters` (default set when
    /// absent or empty). Empty text comes back empty without loading.
    pub fn remove_with(&self, text: &str, delimiters: Option<&str>) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }
        let delimiters = match delimiters {
            Some(d) if !d.is_empty() => d,
            _ => self.delimiters.as_str(),
        };
        Ok(self.load()?.remove_with(text, Some(delimiters)))
    }

    /// [`remove_with`](Self::remove_with) over optional text: absent in, absent out.
    pub fn remove_opt(&self, text: Option<&str>, delimiters: Option<&str>) -> Result<Option<String>> {
        text.map(|text| self.remove_with(text, delimiters)).transpose()
    }
}

impl fmt::Debug for StopWordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StopWordSet")
            .field("language", &self.language)
            .field("loaded", &self.is_loaded())
            .field("words", &self.words.get().map(WordSet::len))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use stoplang_shared_kernel::{InfraResult, InfrastructureError};

    use super::*;

    /// Serves one fixed list and counts reads; fails while `failures` > 0.
    struct StubSource {
        text: &'static str,
        reads: AtomicUsize,
        failures: AtomicUsize,
    }

    impl StubSource {
        fn new(text: &'static str) -> Arc<Self> {
            Arc::new(Self { text, reads: AtomicUsize::new(0), failures: AtomicUsize::new(0) })
        }

        fn failing_once(text: &'static str) -> Arc<Self> {
            let source = Self::new(text);
            source.failures.store(1, Ordering::SeqCst);
            source
        }
    }

    impl WordListSource for StubSource {
        fn read(&self, name: &str) -> InfraResult<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if self.failures.load(Ordering::SeqCst) > 0 {
                self.failures.fetch_sub(1, Ordering::SeqCst);
                return Err(InfrastructureError::WordListUnavailable { name: name.to_string() });
            }
            Ok(self.text.to_string())
        }
    }

    #[test]
    fn loads_lazily_once() {
        let source = StubSource::new("the | article\nof and");
        let set = StopWordSet::new(Language::English, source.clone());
        assert!(!set.is_loaded());

        assert!(set.is_stop_word("The").unwrap());
        assert!(set.is_stop_word_exact("and").unwrap());
        assert!(!set.is_stop_word("fox").unwrap());
        assert!(set.is_loaded());
        assert_eq!(set.len().unwrap(), 3);
        let mut words: Vec<_> = set.iter().unwrap().collect();
        words.sort_unstable();
        assert_eq!(words, ["and", "of", "the"]);
        assert_eq!(source.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_text_does_not_load() {
        let source = StubSource::new("the");
        let set = StopWordSet::new(Language::English, source.clone());
        assert_eq!(set.remove("").unwrap(), "");
        assert_eq!(set.remove_opt(None, None).unwrap(), None);
        assert_eq!(source.reads.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failed_load_surfaces_and_retries() {
        let source = StubSource::failing_once("the");
        let set = StopWordSet::new(Language::English, source.clone());

        let err = set.is_stop_word("the").unwrap_err();
        assert!(err.is_configuration_defect());
        assert!(err.to_string().contains("loading English stop words"));
        assert!(!set.is_loaded());

        assert!(set.is_stop_word("the").unwrap());
        assert_eq!(source.reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn concurrent_first_use_reads_once() {
        let source = StubSource::new("the of and");
        let set = StopWordSet::new(Language::English, source.clone());

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| assert!(set.is_stop_word("of").unwrap()));
            }
        });
        assert_eq!(source.reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn custom_words_are_preloaded() {
        let set = StopWordSet::custom(["Lorem", "ipsum"]);
        assert!(set.is_loaded());
        assert_eq!(set.locale(), None);
        assert_eq!(set.remove("lorem IPSUM dolor sit amet").unwrap(), "dolor sit amet");
    }

    #[test]
    fn default_delimiters_can_be_narrowed() {
        // tabs are normalized away, so a tab-only break set yields one token
        let set = StopWordSet::custom(["the"]).with_default_delimiters("\t");
        assert_eq!(set.remove("the fox\tthe").unwrap(), "the fox the");
        assert_eq!(set.remove_with("the fox\tthe", Some(" ")).unwrap(), "fox");
    }
}
