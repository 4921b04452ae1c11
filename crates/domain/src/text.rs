// crates/domain/src/text.rs
//! Two-phase text cleanup used before stop-word filtering.
//!
//! [`normalize`] always runs and turns punctuation and digits into spaces.
//! [`split_on`] then breaks the result only on the caller's delimiter set.

use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Space, tab, newline, carriage return and form feed.
pub const DEFAULT_DELIMITERS: &str = " \t\n\r\x0c";

/// Replaces every run of non-word characters and digits with one space.
///
/// Word characters are Unicode-aware, so letters from any script are kept.
/// Text whose only separators are single spaces is returned borrowed.
#[must_use]
pub fn normalize(text: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[\W\d]+").unwrap());
    if re.find_iter(text).all(|m| m.as_str() == " ") {
        return Cow::Borrowed(text);
    }
    re.replace_all(text, " ")
}

/// Falls back to [`DEFAULT_DELIMITERS`] when `delimiters` is absent or empty.
#[inline]
#[must_use]
pub fn effective_delimiters(delimiters: Option<&str>) -> &str {
    match delimiters {
        Some(d) if !d.is_empty() => d,
        _ => DEFAULT_DELIMITERS,
    }
}

/// Splits `text` on any character of `delimiters`, skipping empty tokens.
#[must_use]
pub fn split_on<'a>(text: &'a str, delimiters: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    text.split(move |c: char| delimiters.contains(c)).filter(|token| !token.is_empty())
}
