// crates/ports/src/word_lists.rs
use std::sync::Arc;

use stoplang_shared_kernel::InfraResult;

/// Port for reading a stop-word list resource by name.
///
/// `name` is the lowercase language identifier (`english`, `french`, ...).
/// Implementations return the raw UTF-8 text; parsing is done by the caller.
pub trait WordListSource: Send + Sync {
    fn read(&self, name: &str) -> InfraResult<String>;
}

impl<S: WordListSource + ?Sized> WordListSource for Arc<S> {
    fn read(&self, name: &str) -> InfraResult<String> {
        (**self).read(name)
    }
}

impl<S: WordListSource + ?Sized> WordListSource for &S {
    fn read(&self, name: &str) -> InfraResult<String> {
        (**self).read(name)
    }
}
