//! Shared types for wordplay language modules.
//!
//! A language module provides two components on top of this crate: a
//! [`LetterFactory`](letter::LetterFactory) that maps raw characters onto the
//! letters of its alphabet, and a [`Dictionary`](dictionary::Dictionary) that
//! decides whether a word belongs to its lexicon.
//!
//! # Architecture
//!
//! - [`character`] -- Diacritic stripping primitives
//! - [`fold`] -- Canonical forms for letters and whole words
//! - [`letter`] -- `Letter` and `LetterFactory` traits
//! - [`dictionary`] -- `Dictionary` trait
//! - [`error`] -- Error types

pub mod character;
pub mod dictionary;
pub mod error;
pub mod fold;
pub mod letter;

pub use dictionary::Dictionary;
pub use error::{DictionaryError, LetterError};
pub use fold::WordFolder;
pub use letter::{Letter, LetterFactory};

pub use hashbrown::HashSet;
