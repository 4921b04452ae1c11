// tests/remove.rs
use proptest::prelude::*;
use stoplang::Language;

#[test]
fn removes_english_stop_words_and_digits() {
    let cleaned = stoplang::remove(Language::English, "The quick brown 42 fox jumps over the lazy dog.").unwrap();
    assert_eq!(cleaned, "quick brown fox jumps lazy dog");
}

#[test]
fn removes_french_stop_words() {
    let cleaned = stoplang::remove(Language::French, "Le chat est sur la table.").unwrap();
    assert_eq!(cleaned, "chat table");
}

#[test]
fn empty_and_absent_text() {
    assert_eq!(stoplang::remove(Language::English, "").unwrap(), "");
    assert_eq!(stoplang::stop_words(Language::English).remove_opt(None, None).unwrap(), None);
    assert_eq!(
        stoplang::stop_words(Language::English).remove_opt(Some("the dog"), None).unwrap(),
        Some("dog".to_string())
    );
}

#[test]
fn only_stop_words_leaves_nothing() {
    assert_eq!(stoplang::remove(Language::English, "and the of it").unwrap(), "");
}

#[test]
fn caller_delimiters_replace_the_default_set() {
    // "-" is normalized to a space before splitting, so only the space splits
    let cleaned = stoplang::remove_with(Language::English, "the fox-the dog", Some(" ")).unwrap();
    assert_eq!(cleaned, "fox dog");
    assert_eq!(stoplang::remove_with(Language::English, "the fox", Some("")).unwrap(), "fox");
    assert_eq!(stoplang::remove_with(Language::English, "the fox", Some("#")).unwrap(), "the fox");
}

proptest! {
    #[test]
    fn removal_is_idempotent(text in "[a-zA-Z0-9 ,.!?]{0,80}") {
        let once = stoplang::remove(Language::English, &text).unwrap();
        let twice = stoplang::remove(Language::English, &once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn no_stop_word_survives(text in "[a-zA-Z ]{0,80}") {
        let cleaned = stoplang::remove(Language::English, &text).unwrap();
        for word in cleaned.split(' ').filter(|w| !w.is_empty()) {
            prop_assert!(!stoplang::is_stop_word(Language::English, word).unwrap(), "{}", word);
        }
    }

    #[test]
    fn output_has_single_spaces(text in "[a-z \t\n]{0,60}") {
        let cleaned = stoplang::remove(Language::English, &text).unwrap();
        prop_assert!(!cleaned.contains("  "));
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }
}
