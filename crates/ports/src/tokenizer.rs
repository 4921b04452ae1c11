// crates/ports/src/tokenizer.rs

/// Port for splitting text into word tokens, in reading order.
///
/// Only the yielded substrings matter to callers; how contractions, hyphens
/// or numerals are segmented is up to the implementation.
pub trait Tokenizer: Send + Sync {
    fn tokens<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokens<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        (**self).tokens(text)
    }
}
