//! Stop-word removal and language guessing.
//!
//! Every supported [`Language`] has a bundled stop-word list, loaded the first
//! time that language is used. The free functions here work on a process-wide
//! registry over those lists; build a [`StopWordRegistry`] yourself to read
//! lists from elsewhere or to change the [`StopWordConfig`].
//!
//! ```
//! use stoplang::Language;
//!
//! let cleaned = stoplang::remove(Language::English, "The fox and the dog.").unwrap();
//! assert_eq!(cleaned, "fox dog");
//!
//! let guess = stoplang::guess("Le chat est sur la table et il dort.").unwrap();
//! assert_eq!(guess, Some(Language::French));
//! ```
#![allow(clippy::multiple_crate_versions)]

use std::sync::OnceLock;

pub use stoplang_domain::{
    DEFAULT_CANDIDATE_LIMIT, DEFAULT_DELIMITERS, Language, LanguageScore, StopWordConfig, WordCounter, WordSet,
    fold_case,
};
pub use stoplang_infra::{BundledWordLists, DirectoryWordLists, InMemoryWordLists, UnicodeWordTokenizer};
pub use stoplang_ports::{Tokenizer, WordListSource};
pub use stoplang_shared_kernel::{DomainError, ErrorContext, InfrastructureError, Result, StopLangError};
pub use stoplang_usecase::{LanguageGuesser, StopWordRegistry, StopWordSet};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Registry over the bundled lists, shared by the whole process.
pub fn default_registry() -> &'static StopWordRegistry {
    static REGISTRY: OnceLock<StopWordRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        log::debug!("initializing bundled stop-word registry");
        StopWordRegistry::new(BundledWordLists::new())
    })
}

/// Guesser over [`default_registry`] with Unicode word tokenization.
#[must_use]
pub fn guesser() -> LanguageGuesser<'static> {
    static TOKENIZER: UnicodeWordTokenizer = UnicodeWordTokenizer;
    LanguageGuesser::new(default_registry(), &TOKENIZER)
}

/// The bundled set for `language`.
#[must_use]
pub fn stop_words(language: Language) -> &'static StopWordSet {
    default_registry().get(language)
}

pub fn is_stop_word(language: Language, word: &str) -> Result<bool> {
    stop_words(language).is_stop_word(word)
}

pub fn is_stop_word_exact(language: Language, word: &str) -> Result<bool> {
    stop_words(language).is_stop_word_exact(word)
}

pub fn remove(language: Language, text: &str) -> Result<String> {
    stop_words(language).remove(text)
}

pub fn remove_with(language: Language, text: &str, delimiters: Option<&str>) -> Result<String> {
    stop_words(language).remove_with(text, delimiters)
}

pub fn guess(text: &str) -> Result<Option<Language>> {
    guesser().guess_text(text)
}

pub fn guess_counter(counter: &WordCounter) -> Result<Option<Language>> {
    guesser().guess_counter(counter)
}

pub fn guess_words<I, S>(words: I) -> Result<Option<Language>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    guesser().guess_words(words)
}
