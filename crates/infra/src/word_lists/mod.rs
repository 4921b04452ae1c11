//! Adapters for the [`WordListSource`](stoplang_ports::WordListSource) port.
//!
//! - [`BundledWordLists`]: lists compiled into the binary
//! - [`DirectoryWordLists`]: one file per language in a directory
//! - [`InMemoryWordLists`]: caller-provided text keyed by name

pub mod bundled;
pub mod directory;
pub mod memory;

pub use bundled::BundledWordLists;
pub use directory::DirectoryWordLists;
pub use memory::InMemoryWordLists;
