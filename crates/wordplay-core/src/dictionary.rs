// Word validation against a language's lexicon.

use std::fmt::Display;

use hashbrown::HashSet;

/// Trait for dictionaries.
///
/// A dictionary is built once from a word list and is immutable
/// afterwards, so every method is a pure read that may be called from any
/// number of threads.
///
/// Words are compared in canonical form. How a word is folded into that
/// form is up to the implementation, but the same folding must be applied
/// when the dictionary is built and when it is queried.
pub trait Dictionary: Display + Send + Sync {
    /// Check whether a word is in the lexicon.
    ///
    /// `None` is never valid.
    fn is_valid(&self, word: Option<&str>) -> bool;

    /// An owned copy of every word, in canonical form.
    fn words(&self) -> HashSet<String>;

    /// Human-readable name for diagnostics and UI.
    fn label(&self) -> &str;

    /// Number of distinct canonical words.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
