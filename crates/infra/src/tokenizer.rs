// crates/infra/src/tokenizer.rs
use stoplang_ports::Tokenizer;
use unicode_segmentation::UnicodeSegmentation;

/// Words as delimited by UAX #29 word boundaries.
///
/// Segments made only of punctuation or whitespace are dropped; numbers and
/// contractions (`don't`) come through as single tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokens<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(text.unicode_words())
    }
}
