use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The word list, loaded once at startup and shared read-only with every
/// request handler. Input order is preserved and duplicate lines are kept;
/// each occurrence is matched independently by the scans downstream.
#[derive(Debug, Clone)]
pub struct WordStore {
    words: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WordStore {
    /// Reads one word per line from a UTF-8 text file. An empty file yields
    /// an empty store; an unreadable file is an error.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_lines(&raw))
    }

    /// Strips surrounding whitespace per entry and drops blank lines.
    pub fn from_lines(raw: &str) -> Self {
        let words = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect();
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_trims_entries_and_drops_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "അവൻ\n  ഇവൻ  \n\n   \nഞാൻ\n").unwrap();

        let store = WordStore::load(file.path()).unwrap();
        assert_eq!(store.words(), ["അവൻ", "ഇവൻ", "ഞാൻ"]);
    }

    #[test]
    fn load_keeps_duplicates_in_order() {
        let store = WordStore::from_lines("b\na\nb\n");
        assert_eq!(store.words(), ["b", "a", "b"]);
    }

    #[test]
    fn empty_file_is_an_empty_store_not_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let store = WordStore::load(file.path()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_words.txt");
        let err = WordStore::load(&missing).unwrap_err();
        assert!(err.to_string().contains("no_such_words.txt"));
    }
}
