// crates/infra/src/word_lists/memory.rs
use rustc_hash::FxHashMap;
use stoplang_ports::WordListSource;
use stoplang_shared_kernel::{InfraResult, InfrastructureError};

/// Word lists held in memory, keyed by resource name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWordLists {
    lists: FxHashMap<String, String>,
}

impl InMemoryWordLists {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the list stored under `name`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.lists.insert(name.into(), text.into());
    }
}

impl WordListSource for InMemoryWordLists {
    fn read(&self, name: &str) -> InfraResult<String> {
        self.lists
            .get(name)
            .cloned()
            .ok_or_else(|| InfrastructureError::WordListUnavailable { name: name.to_string() })
    }
}

impl<N, T> FromIterator<(N, T)> for InMemoryWordLists
where
    N: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut lists = Self::new();
        for (name, text) in iter {
            lists.insert(name, text);
        }
        lists
    }
}
