//! # Ports
//!
//! Interface definitions for external collaborators.
//!
//! - [`word_lists`]: Access to per-language stop-word list resources
//! - [`tokenizer`]: Splitting raw text into word tokens
//!
//! These ports keep the domain and use-case layers independent of where
//! word lists live and of the segmentation rules used for guessing.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod tokenizer;
pub mod word_lists;

pub use tokenizer::Tokenizer;
pub use word_lists::WordListSource;
