//! Known-word set
//!
//! Loaded from a plain text file where each line starts with a word. Anything
//! after the first whitespace-delimited token is a gloss and is ignored.

use rustc_hash::FxHashSet;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Error raised while loading a word list
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to open word list {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read word list {path} at line {line}: {source}")]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Membership-only set of known words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from words already in memory
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::Dictionary;
    ///
    /// let dict = Dictionary::from_words(["cat", "dog"]);
    /// assert!(dict.contains("cat"));
    /// assert_eq!(dict.len(), 2);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a word list file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError` if the file cannot be opened or a line cannot
    /// be read (for example, invalid UTF-8).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_reader(BufReader::new(file)).map_err(|(line, source)| {
            DictionaryError::Read {
                path: path.to_path_buf(),
                line,
                source,
            }
        })?;

        info!(path = %path.display(), words = dictionary.len(), "loaded word list");
        Ok(dictionary)
    }

    /// Replace the whole word set with the contents of another file
    ///
    /// On error the current words are kept.
    ///
    /// # Errors
    ///
    /// See [`Dictionary::load`].
    pub fn reload<P: AsRef<Path>>(&mut self, path: P) -> Result<(), DictionaryError> {
        *self = Self::load(path)?;
        Ok(())
    }

    /// Parse word list lines from any buffered reader
    ///
    /// On failure returns the 1-based line number alongside the I/O error.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, (usize, io::Error)> {
        let mut words = FxHashSet::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| (idx + 1, e))?;
            if let Some(word) = parse_line(&line) {
                words.insert(word.to_string());
            }
        }
        Ok(Self { words })
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Extract the word from one word list line
///
/// Returns `None` for blank lines.
#[must_use]
pub fn parse_line(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}
