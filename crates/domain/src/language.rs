// crates/domain/src/language.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use stoplang_shared_kernel::DomainError;

macro_rules! languages {
    ($( $variant:ident => $locale:expr, $resource:literal ),+ $(,)?) => {
        /// Languages with a stop-word list.
        ///
        /// Declaration order matters: when two languages score the same during
        /// guessing, the one declared first wins.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum Language {
            $( $variant, )+
        }

        impl Language {
            /// Every language, in declaration order.
            pub const ALL: &'static [Language] = &[ $( Language::$variant, )+ ];

            /// Identifier of the language (`English`).
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }

            /// ISO 639-1 tag used for case folding, `None` for [`Language::Custom`].
            #[must_use]
            pub const fn locale(self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => $locale, )+
                }
            }

            /// Name of the bundled word list: the identifier in lowercase.
            #[must_use]
            pub const fn resource_name(self) -> &'static str {
                match self {
                    $( Self::$variant => $resource, )+
                }
            }
        }
    };
}

languages! {
    Arabic => Some("ar"), "arabic",
    Armenian => Some("hy"), "armenian",
    Catalan => Some("ca"), "catalan",
    Croatian => Some("hr"), "croatian",
    Czech => Some("cs"), "czech",
    Dutch => Some("nl"), "dutch",
    Danish => Some("da"), "danish",
    English => Some("en"), "english",
    Esperanto => Some("eo"), "esperanto",
    Farsi => Some("fa"), "farsi",
    Finnish => Some("fi"), "finnish",
    French => Some("fr"), "french",
    German => Some("de"), "german",
    Greek => Some("el"), "greek",
    Hindi => Some("hi"), "hindi",
    Hungarian => Some("hu"), "hungarian",
    Italian => Some("it"), "italian",
    Latin => Some("la"), "latin",
    Norwegian => Some("no"), "norwegian",
    Polish => Some("pl"), "polish",
    Portuguese => Some("pt"), "portuguese",
    Romanian => Some("ro"), "romanian",
    Russian => Some("ru"), "russian",
    Slovenian => Some("sl"), "slovenian",
    Slovak => Some("sk"), "slovak",
    Spanish => Some("es"), "spanish",
    Swedish => Some("sv"), "swedish",
    Hebrew => Some("he"), "hebrew",
    Turkish => Some("tr"), "turkish",
    Custom => None, "custom",
}

impl Language {
    /// Languages that ship a bundled list and take part in guessing.
    pub fn bundled() -> impl Iterator<Item = Language> {
        Self::ALL.iter().copied().filter(|lang| lang.has_bundled_list())
    }

    #[inline]
    #[must_use]
    pub const fn has_bundled_list(self) -> bool {
        !matches!(self, Self::Custom)
    }

    /// Position in declaration order.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the identifier or the locale tag, case-insensitively.
impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|lang| {
                lang.name().eq_ignore_ascii_case(needle)
                    || lang.locale().is_some_and(|tag| tag.eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| DomainError::UnknownLanguage { name: s.to_string() })
    }
}

impl TryFrom<String> for Language {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for &'static str {
    fn from(lang: Language) -> Self {
        lang.name()
    }
}
