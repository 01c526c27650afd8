// WordsDictionary: the French word list.
//
// The list is read once into a set of canonical words. Loading either
// consumes the whole source or fails; a dictionary that exists is complete
// and never changes.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;
use tracing::{debug, warn};
use wordplay_core::{Dictionary, DictionaryError, WordFolder};

use crate::constants::{DEFAULT_LABEL, WORDS_RESOURCE};

/// Options for building a [`WordsDictionary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryOptions {
    /// Folding applied to list entries and to queried words.
    pub folder: WordFolder,
    /// Label returned by [`Dictionary::label`].
    pub label: String,
}

impl Default for DictionaryOptions {
    fn default() -> Self {
        Self {
            folder: WordFolder::default(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

/// Dictionary backed by a plain word list, one word per line.
///
/// Words are validated case-insensitively, ignoring diacritics and hyphens:
/// "amorçât", "AMORCAT" and "amorcat" are the same word, as are "a-t-elle"
/// and "atelle".
#[derive(Debug, Clone)]
pub struct WordsDictionary {
    words: HashSet<String>,
    folder: WordFolder,
    label: String,
}

impl WordsDictionary {
    /// Build a dictionary from a word list with default options.
    ///
    /// Lines may end with `\n`, `\r\n` or a lone `\r`. Lines that are empty after folding
    /// are skipped. A read error, including invalid UTF-8, fails the whole
    /// load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        Self::with_options(reader, DictionaryOptions::default())
    }

    /// Build a dictionary from a word list with the given options.
    pub fn with_options<R: BufRead>(
        reader: R,
        options: DictionaryOptions,
    ) -> Result<Self, DictionaryError> {
        debug!(label = %options.label, "loading word list");
        let words = read_words(reader, &options.folder).map_err(|e| {
            warn!(label = %options.label, error = %e, "failed to read word list");
            DictionaryError::unavailable(e)
        })?;
        Ok(Self::finish(words, options))
    }

    /// Build a dictionary from the word list file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        Self::from_path_with_options(path, DictionaryOptions::default())
    }

    /// Build a dictionary from the word list file at `path` with the given
    /// options.
    ///
    /// The file is closed before this returns, whether loading succeeds or
    /// not.
    pub fn from_path_with_options(
        path: impl AsRef<Path>,
        options: DictionaryOptions,
    ) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        debug!(path = %path.display(), label = %options.label, "loading word list");

        let words = File::open(path)
            .and_then(|file| read_words(BufReader::new(file), &options.folder))
            .map_err(|e| {
                warn!(path = %path.display(), error = %e, "failed to read word list");
                DictionaryError::unavailable_at(path, e)
            })?;
        Ok(Self::finish(words, options))
    }

    /// Build a dictionary from the `words.txt` list inside `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        Self::from_path(dir.as_ref().join(WORDS_RESOURCE))
    }

    /// Build a dictionary from words already in memory, with default
    /// options.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_words_with_options(words, DictionaryOptions::default())
    }

    /// Build a dictionary from words already in memory with the given
    /// options.
    pub fn from_words_with_options<I, S>(words: I, options: DictionaryOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| options.folder.fold_word(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self::finish(words, options)
    }

    fn finish(words: HashSet<String>, options: DictionaryOptions) -> Self {
        debug!(label = %options.label, words = words.len(), "word list loaded");
        Self {
            words,
            folder: options.folder,
            label: options.label,
        }
    }

    /// The folding used for entries and queries.
    pub fn folder(&self) -> &WordFolder {
        &self.folder
    }
}

/// Read and fold every line of a word list.
fn read_words<R: BufRead>(
    mut reader: R,
    folder: &WordFolder,
) -> std::io::Result<HashSet<String>> {
    let mut words = HashSet::new();
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        // A lone '\r' ends a line too.
        for entry in line.split(['\r', '\n']) {
            let word = folder.fold_word(entry);
            if !word.is_empty() {
                words.insert(word);
            }
        }
        line.clear();
    }
    Ok(words)
}

impl Dictionary for WordsDictionary {
    fn is_valid(&self, word: Option<&str>) -> bool {
        match word {
            Some(word) => self.words.contains(self.folder.fold_word(word).as_str()),
            None => false,
        }
    }

    fn words(&self) -> HashSet<String> {
        self.words.clone()
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

impl fmt::Display for WordsDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
