// Canonical forms used for comparison.
//
// Two pipelines live here: `fold_letter` turns one character into the
// uppercase symbol of a tile, `WordFolder::fold_word` turns a whole word
// into the lowercase form stored in a dictionary. Both strip diacritics
// through `character`, so "amorçât" folds to letters A M O R C A T and to
// the dictionary entry "amorcat".

use unicode_normalization::UnicodeNormalization;

use crate::character::{strip_accents, strip_accents_char};

/// Separators removed from words before comparison by default.
///
/// Hyphens join compound forms such as "a-t-elle", which word lists spell
/// with hyphens and players may type without. Apostrophes are kept: elided
/// forms like "aujourd'hui" are distinct entries.
pub const DEFAULT_SEPARATORS: &[char] = &['-'];

/// Compose a string into NFC so that a base letter followed by combining
/// marks counts as a single character.
pub fn compose(s: &str) -> String {
    s.nfc().collect()
}

/// Fold a single character into its canonical uppercase symbol.
///
/// Diacritics are stripped first, then the remainder is uppercased.
/// Returns `None` if nothing or more than one character is left (a lone
/// combining mark, or a letter such as `ß` whose uppercase is `SS`).
pub fn fold_letter(c: char) -> Option<char> {
    let mut folded = strip_accents_char(c).flat_map(char::to_uppercase);
    let symbol = folded.next()?;
    match folded.next() {
        None => Some(symbol),
        Some(_) => None,
    }
}

/// Whole-word normalization for dictionary storage and lookup.
///
/// The same folder must be used to build a dictionary and to query it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFolder {
    /// Characters removed from words before comparison (e.g. the hyphens
    /// of "a-t-elle").
    pub separators: Vec<char>,
}

impl Default for WordFolder {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_vec(),
        }
    }
}

impl WordFolder {
    /// Create a folder that removes the given separators.
    pub fn with_separators(separators: impl IntoIterator<Item = char>) -> Self {
        Self {
            separators: separators.into_iter().collect(),
        }
    }

    /// Check whether a character is removed as a separator.
    pub fn is_separator(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    /// Fold a word into its canonical comparison form: separators removed,
    /// diacritics stripped, lowercased.
    pub fn fold_word(&self, word: &str) -> String {
        let without_separators: String =
            word.chars().filter(|&c| !self.is_separator(c)).collect();
        strip_accents(&without_separators).to_lowercase()
    }
}
