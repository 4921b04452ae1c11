// crates/infra/src/word_lists/directory.rs
use std::path::{Path, PathBuf};

use stoplang_ports::WordListSource;
use stoplang_shared_kernel::InfraResult;

use crate::persistence::FileReader;

/// Reads `<root>/<name>` for each requested list.
#[derive(Debug, Clone)]
pub struct DirectoryWordLists {
    root: PathBuf,
}

impl DirectoryWordLists {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl WordListSource for DirectoryWordLists {
    fn read(&self, name: &str) -> InfraResult<String> {
        let path = self.path_for(name);
        log::debug!("reading word list {name} from {}", path.display());
        FileReader::read_word_list(name, &path)
    }
}
