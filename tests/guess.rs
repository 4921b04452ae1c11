// tests/guess.rs
mod common;

use common::{SAMPLES, twin_registry};
use stoplang::{Language, LanguageGuesser, UnicodeWordTokenizer, WordCounter};

#[test]
fn guesses_english_from_common_words() {
    assert_eq!(stoplang::guess_words(["the", "a", "is", "of", "to"]).unwrap(), Some(Language::English));
}

#[test]
fn guesses_sample_paragraphs() {
    for (language, text) in SAMPLES {
        assert_eq!(stoplang::guess(text).unwrap(), Some(*language), "{text}");
    }
}

#[test]
fn unknown_words_are_undetermined() {
    assert_eq!(stoplang::guess_words(["東京", "北京", "서울"]).unwrap(), None);
    assert_eq!(stoplang::guess_words(["zzzq", "xxyy"]).unwrap(), None);
    assert_eq!(stoplang::guess("").unwrap(), None);
}

#[test]
fn guesses_from_a_prepared_counter() {
    let mut counter = WordCounter::new();
    counter.note_n("der", 4);
    counter.note_n("und", 3);
    counter.note("Haus");
    assert_eq!(stoplang::guess_counter(&counter).unwrap(), Some(Language::German));
}

#[test]
fn ties_go_to_the_earlier_declared_language() {
    let registry = twin_registry(Language::Swedish, Language::Danish, "och det att");
    let guesser = LanguageGuesser::new(&registry, &UnicodeWordTokenizer);
    assert_eq!(guesser.guess_text("och det att vi").unwrap(), Some(Language::Danish));

    let scores = guesser.scores(&["och", "vi"][..]).unwrap();
    let order: Vec<_> = scores.iter().map(|score| score.language).collect();
    assert_eq!(order, vec![Language::Danish, Language::Swedish]);
    assert!(scores.iter().all(|score| score.hits == 1));
}

#[test]
fn guessing_loads_every_candidate() {
    stoplang::guess("the cat").unwrap();
    for set in stoplang::default_registry().guess_candidates() {
        assert!(set.is_loaded(), "{} not loaded", set.language());
    }
}
