use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use stoplang_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading word-list files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Read the entire file into memory.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut reader = Self::open_buffered(path)?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Read the word list `name` stored at `path` as UTF-8 text.
    ///
    /// A missing file maps to [`InfrastructureError::WordListUnavailable`];
    /// other I/O failures keep their source.
    pub fn read_word_list(name: &str, path: &Path) -> InfraResult<String> {
        let bytes = Self::read_to_end(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                InfrastructureError::WordListUnavailable { name: name.to_string() }
            } else {
                InfrastructureError::WordListRead {
                    name: name.to_string(),
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        String::from_utf8(bytes)
            .map_err(|source| InfrastructureError::WordListDecode { name: name.to_string(), source })
    }
}
