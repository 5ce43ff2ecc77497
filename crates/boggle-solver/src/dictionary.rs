//! Word list loading.
//!
//! Reads one word per line, normalizes it to uppercase and inserts it into a
//! [`WordTrie`]. Lines that still contain anything outside A-Z after
//! normalization (apostrophes, digits, accented letters) are skipped and
//! counted rather than treated as fatal.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::trie::WordTrie;

/// A populated trie plus loading statistics
#[derive(Debug, Default)]
pub struct LoadedDictionary {
    pub trie: WordTrie,
    /// Lines rejected for containing non A-Z characters
    pub skipped: usize,
}

/// Load a word list from any buffered reader
pub fn load<R: BufRead>(reader: R) -> Result<LoadedDictionary> {
    let mut loaded = LoadedDictionary::default();

    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let word = word.to_uppercase();
        if loaded.trie.insert(&word).is_err() {
            debug!("skipping dictionary entry {:?}", word);
            loaded.skipped += 1;
        }
    }

    debug!(
        "loaded {} words ({} skipped)",
        loaded.trie.len(),
        loaded.skipped
    );
    Ok(loaded)
}

/// Load a word list from a file
pub fn load_file(path: &Path) -> Result<LoadedDictionary> {
    let file = File::open(path)?;
    load(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_load_normalizes_and_skips() {
        let input = "cat\n  Dog \n\nDON'T\nnaïve\nCAT\nquit\n";
        let loaded = load(Cursor::new(input)).unwrap();

        assert_eq!(loaded.trie.len(), 3);
        assert_eq!(loaded.skipped, 2);
        assert!(loaded.trie.contains("CAT"));
        assert!(loaded.trie.contains("DOG"));
        assert!(loaded.trie.contains("QUIT"));
        assert!(!loaded.trie.contains("DONT"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_file(Path::new("/nonexistent/words.txt"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }
}
