// crates/domain/src/case_fold.rs

/// Lowercases `word` following the rules of `locale`.
///
/// Plain Unicode lowercasing (final sigma included) for every locale except the
/// Turkic ones, where `I` folds to dotless `ı` and `İ` folds to `i`. `None`
/// uses the plain rules.
#[must_use]
pub fn fold_case(locale: Option<&str>, word: &str) -> String {
    match locale {
        Some("tr" | "az") => fold_turkic(word),
        _ => word.to_lowercase(),
    }
}

fn fold_turkic(word: &str) -> String {
    if !word.contains(['I', '\u{130}']) {
        return word.to_lowercase();
    }
    let mapped: String = word
        .chars()
        .map(|c| match c {
            'I' => '\u{131}',
            '\u{130}' => 'i',
            other => other,
        })
        .collect();
    mapped.to_lowercase()
}
