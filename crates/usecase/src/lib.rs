//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`stop_words`]: per-language stop-word sets loaded on first use
//! - [`registry`]: one set per language over a shared word-list source
//! - [`guesser`]: language guessing by stop-word overlap
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod guesser;
pub mod registry;
pub mod stop_words;

pub use guesser::LanguageGuesser;
pub use registry::StopWordRegistry;
pub use stop_words::StopWordSet;
