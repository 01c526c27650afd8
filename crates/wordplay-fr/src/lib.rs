//! French language module for wordplay.
//!
//! Provides the French game alphabet and validation of words against the
//! French word list.
//!
//! ```
//! use std::io::Cursor;
//!
//! use wordplay_core::{Dictionary, LetterFactory};
//! use wordplay_fr::{FrenchLetter, FrenchLetterFactory, WordsDictionary};
//!
//! let factory = FrenchLetterFactory::new();
//! assert_eq!(factory.to_letter('\u{00E0}'), Ok(FrenchLetter::A));
//!
//! let dictionary = WordsDictionary::from_reader(Cursor::new("a-t-elle\n")).unwrap();
//! assert!(dictionary.is_valid(Some("atelle")));
//! ```
//!
//! # Architecture
//!
//! - [`letter`] -- `FrenchLetter` and `FrenchLetterFactory`
//! - [`dictionary`] -- `WordsDictionary` built from a word list
//! - [`constants`] -- French language constants

pub mod constants;
pub mod dictionary;
pub mod letter;

pub use dictionary::{DictionaryOptions, WordsDictionary};
pub use letter::{FrenchLetter, FrenchLetterFactory};
