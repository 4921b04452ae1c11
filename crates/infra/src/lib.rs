// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod tokenizer;
pub mod word_lists;

pub use tokenizer::UnicodeWordTokenizer;
pub use word_lists::{BundledWordLists, DirectoryWordLists, InMemoryWordLists};
