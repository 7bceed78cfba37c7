//! `word_list` — loading and normalizing the words that go into a puzzle.
//!
//! The core placement algorithm takes words exactly as given; this module is
//! the collaborator that cleans up real-world input first. Parsing works on
//! an in-memory string so it stays usable where file I/O is unavailable, with
//! a native convenience wrapper for reading from a path.
//!
//! The parsing logic:
//! - One word per line.
//! - Lines are trimmed; empty lines and lines starting with `#` are skipped.
//! - Words are normalized to lowercase.
//! - Duplicates are dropped, keeping the first occurrence so the caller's
//!   ordering survives.

use std::collections::HashSet;

/// A processed, ready-to-place word list.
#[derive(Debug, Clone)]
pub struct WordList {
    /// Lowercase words in first-seen order, deduplicated.
    pub words: Vec<String>,
}

impl WordList {
    /// Parses a raw word list from an in-memory string, one word per line.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let mut seen = HashSet::new();
        let words = contents
            .lines()
            .filter_map(|raw_line| {
                let line = raw_line.trim();
                if line.is_empty() || line.starts_with('#') {
                    None
                } else {
                    Some(line.to_lowercase())
                }
            })
            .filter(|word| seen.insert(word.clone()))
            .collect();
        WordList { words }
    }

    /// Reads a word list from a file path and parses it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e),
            )
        })?;
        Ok(Self::parse_from_str(&data))
    }
}
