// Error types shared by every language module.

use std::path::PathBuf;

/// Error type for character-to-letter conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LetterError {
    /// The caller passed zero or several characters where exactly one is
    /// required.
    #[error("expected exactly one character, got {chars} in {input:?}")]
    InvalidInput { input: String, chars: usize },

    /// The character is well formed but is not part of the alphabet once
    /// case and diacritics are folded.
    #[error("failed to convert {character:?} to a letter")]
    InvalidCharacter { character: String },
}

impl LetterError {
    pub fn invalid_input(input: &str, chars: usize) -> Self {
        Self::InvalidInput {
            input: input.to_string(),
            chars,
        }
    }

    pub fn invalid_character(character: char) -> Self {
        Self::InvalidCharacter {
            character: character.to_string(),
        }
    }
}

/// Error type for dictionary construction failures.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The word list could not be opened or read. The dictionary is not
    /// usable.
    #[error("word list {} is unavailable: {source}", display_path(.path))]
    Unavailable {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
}

impl DictionaryError {
    /// Create an `Unavailable` error for a word list with no file path.
    pub fn unavailable(source: std::io::Error) -> Self {
        Self::Unavailable { path: None, source }
    }

    /// Create an `Unavailable` error for a word list read from `path`.
    pub fn unavailable_at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unavailable {
            path: Some(path.into()),
            source,
        }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "<reader>".to_string(),
    }
}
