// crates/infra/src/word_lists/bundled.rs
use stoplang_ports::WordListSource;
use stoplang_shared_kernel::{InfraResult, InfrastructureError};

/// Word lists shipped inside the binary, one per language with a bundled list.
static LISTS: &[(&str, &str)] = &[
    ("arabic", include_str!("../../wordlists/arabic")),
    ("armenian", include_str!("../../wordlists/armenian")),
    ("catalan", include_str!("../../wordlists/catalan")),
    ("croatian", include_str!("../../wordlists/croatian")),
    ("czech", include_str!("../../wordlists/czech")),
    ("dutch", include_str!("../../wordlists/dutch")),
    ("danish", include_str!("../../wordlists/danish")),
    ("english", include_str!("../../wordlists/english")),
    ("esperanto", include_str!("../../wordlists/esperanto")),
    ("farsi", include_str!("../../wordlists/farsi")),
    ("finnish", include_str!("../../wordlists/finnish")),
    ("french", include_str!("../../wordlists/french")),
    ("german", include_str!("../../wordlists/german")),
    ("greek", include_str!("../../wordlists/greek")),
    ("hindi", include_str!("../../wordlists/hindi")),
    ("hungarian", include_str!("../../wordlists/hungarian")),
    ("italian", include_str!("../../wordlists/italian")),
    ("latin", include_str!("../../wordlists/latin")),
    ("norwegian", include_str!("../../wordlists/norwegian")),
    ("polish", include_str!("../../wordlists/polish")),
    ("portuguese", include_str!("../../wordlists/portuguese")),
    ("romanian", include_str!("../../wordlists/romanian")),
    ("russian", include_str!("../../wordlists/russian")),
    ("slovenian", include_str!("../../wordlists/slovenian")),
    ("slovak", include_str!("../../wordlists/slovak")),
    ("spanish", include_str!("../../wordlists/spanish")),
    ("swedish", include_str!("../../wordlists/swedish")),
    ("hebrew", include_str!("../../wordlists/hebrew")),
    ("turkish", include_str!("../../wordlists/turkish")),
];

/// Serves the compiled-in lists by resource name.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledWordLists;

impl BundledWordLists {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Resource names available in this build.
    pub fn names() -> impl Iterator<Item = &'static str> {
        LISTS.iter().map(|(name, _)| *name)
    }

    /// Raw text of a bundled list without copying.
    #[must_use]
    pub fn get(name: &str) -> Option<&'static str> {
        LISTS.iter().find(|(candidate, _)| *candidate == name).map(|(_, text)| *text)
    }
}

impl WordListSource for BundledWordLists {
    fn read(&self, name: &str) -> InfraResult<String> {
        Self::get(name)
            .map(str::to_string)
            .ok_or_else(|| InfrastructureError::WordListUnavailable { name: name.to_string() })
    }
}
