// tests/custom_sources.rs
use std::fs;

use stoplang::{
    DirectoryWordLists, DomainError, InfrastructureError, Language, LanguageGuesser, StopLangError, StopWordConfig,
    StopWordRegistry, UnicodeWordTokenizer,
};
use tempfile::TempDir;

fn word_list_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("english"), "the | article\nof and\n").unwrap();
    fs::write(dir.path().join("dutch"), "de het en\nvan\n").unwrap();
    dir
}

#[test]
fn registry_over_a_directory() {
    let dir = word_list_dir();
    let config = StopWordConfig::from_json_str(
        &serde_json::json!({
            "candidate_limit": 10,
            "languages": ["Dutch", "en"],
        })
        .to_string(),
    )
    .unwrap();
    let registry = StopWordRegistry::with_config(DirectoryWordLists::new(dir.path()), config).unwrap();

    assert_eq!(registry.remove(Language::Dutch, "De kat van het huis").unwrap(), "kat huis");

    let guesser = LanguageGuesser::new(&registry, &UnicodeWordTokenizer);
    assert_eq!(guesser.guess_text("de kat en de hond").unwrap(), Some(Language::Dutch));
    assert_eq!(guesser.guess_text("the cat and the dog").unwrap(), Some(Language::English));
}

#[test]
fn missing_file_is_reported_with_context() {
    let dir = word_list_dir();
    let registry = StopWordRegistry::new(DirectoryWordLists::new(dir.path()));
    let err = registry.is_stop_word(Language::German, "der").unwrap_err();
    assert!(err.is_configuration_defect());
    assert!(err.to_string().contains("German"), "{err}");
}

#[test]
fn custom_words_alongside_bundled_lists() {
    let registry = StopWordRegistry::new(stoplang::BundledWordLists::new()).with_custom(["lorem", "ipsum"]);
    assert_eq!(registry.remove(Language::Custom, "Lorem ipsum dolor").unwrap(), "dolor");
    assert_eq!(registry.remove(Language::English, "Lorem ipsum the dolor").unwrap(), "Lorem ipsum dolor");
}

#[test]
fn malformed_config_is_a_serialization_error() {
    let err = StopWordConfig::from_json_str(r#"{"candidate_limit": 5, "bogus": true}"#).unwrap_err();
    assert!(matches!(err, StopLangError::Infrastructure(InfrastructureError::SerializationError { .. })), "{err}");

    let err = StopWordConfig::from_json_str(r#"{"languages": ["Klingon"]}"#).unwrap_err();
    let StopLangError::Infrastructure(InfrastructureError::SerializationError { format, details }) = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(format, "JSON");
    assert!(details.contains("Unknown language: Klingon"), "{details}");
}

#[test]
fn out_of_range_config_is_a_domain_error() {
    let err = StopWordConfig::from_json_str(r#"{"candidate_limit": 0}"#).unwrap_err();
    assert!(matches!(err, StopLangError::Domain(DomainError::RangeValidation { .. })), "{err}");

    let err = StopWordConfig::from_json_str(r#"{"languages": ["Custom"]}"#).unwrap_err();
    assert!(matches!(err, StopLangError::Domain(DomainError::InvalidConfiguration { .. })), "{err}");
}
