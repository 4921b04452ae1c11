#![allow(clippy::multiple_crate_versions)]

pub mod case_fold;
pub mod config;
pub mod counter;
pub mod language;
pub mod scoring;
pub mod text;
pub mod word_set;

pub use case_fold::fold_case;
pub use config::{DEFAULT_CANDIDATE_LIMIT, StopWordConfig};
pub use counter::WordCounter;
pub use language::Language;
pub use scoring::{LanguageScore, pick_best};
pub use text::{DEFAULT_DELIMITERS, effective_delimiters, normalize, split_on};
pub use word_set::{WordSet, is_single_char};
