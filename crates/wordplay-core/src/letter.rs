// Letters and the factory that maps raw characters onto them.

use std::collections::BTreeSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::error::LetterError;
use crate::fold::{compose, fold_letter};

/// A canonical symbol of a language's game alphabet.
///
/// Implementations are closed enums. The derived `Ord` must follow the
/// definition order of `ALL`, which makes a `BTreeSet` of letters iterate
/// in alphabet order.
pub trait Letter:
    Copy + Eq + Ord + Hash + Debug + Display + Send + Sync + 'static
{
    /// Every letter of the alphabet, in definition order.
    const ALL: &'static [Self];

    /// The canonical uppercase symbol of this letter.
    fn symbol(self) -> char;

    /// Look up a letter by its exact canonical symbol. No case or
    /// diacritic folding is applied.
    fn from_symbol(symbol: char) -> Option<Self>;
}

/// Converts external text into letters of one alphabet.
///
/// Every method has a default built on the shared folding pipeline, so a
/// language usually only names its `Letter` type.
pub trait LetterFactory: Send + Sync {
    type Letter: Letter;

    /// Convert one character into a letter, ignoring case and diacritics.
    ///
    /// `'a'`, `'A'`, `'â'` and `'à'` all map to the same letter. Characters
    /// that fold to no letter of the alphabet (digits, punctuation, control
    /// characters, letters of other scripts) yield
    /// [`LetterError::InvalidCharacter`].
    fn to_letter(&self, character: char) -> Result<Self::Letter, LetterError> {
        fold_letter(character)
            .and_then(Self::Letter::from_symbol)
            .ok_or_else(|| LetterError::invalid_character(character))
    }

    /// Convert a string holding exactly one character into a letter.
    ///
    /// The input is composed (NFC) before it is measured, so a base letter
    /// followed by combining marks counts as one character. Empty or longer
    /// input yields [`LetterError::InvalidInput`].
    fn to_letter_str(&self, character: &str) -> Result<Self::Letter, LetterError> {
        let composed = compose(character);
        let mut chars = composed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.to_letter(c),
            _ => Err(LetterError::invalid_input(
                character,
                composed.chars().count(),
            )),
        }
    }

    /// Convert every character of a word into a letter, in order.
    ///
    /// `None` and the empty string yield an empty vector. Duplicates are
    /// kept. The first character that cannot be converted fails the whole
    /// call.
    fn to_letters(&self, word: Option<&str>) -> Result<Vec<Self::Letter>, LetterError> {
        let Some(word) = word.filter(|w| !w.is_empty()) else {
            return Ok(Vec::new());
        };
        compose(word).chars().map(|c| self.to_letter(c)).collect()
    }

    /// The whole alphabet, once per letter, in definition order.
    fn letters(&self) -> BTreeSet<Self::Letter> {
        Self::Letter::ALL.iter().copied().collect()
    }
}
