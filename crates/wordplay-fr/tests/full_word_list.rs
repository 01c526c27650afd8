//! Checks against the complete French word list.
//!
//! These tests require the full `words.txt`. Set WORDPLAY_WORDS_PATH to the
//! file (or to the directory containing it); otherwise they are skipped.
//!
//! Run: WORDPLAY_WORDS_PATH=/path/to/words.txt cargo test -p wordplay-fr --test full_word_list

use std::path::PathBuf;

use wordplay_core::{Dictionary, LetterFactory};
use wordplay_fr::constants::WORDS_RESOURCE;
use wordplay_fr::{FrenchLetterFactory, WordsDictionary};

/// Distinct canonical entries in the full list.
const FULL_LIST_WORDS: usize = 323_417;

fn find_words() -> Option<PathBuf> {
    let path = PathBuf::from(std::env::var("WORDPLAY_WORDS_PATH").ok()?);
    if path.is_file() {
        return Some(path);
    }
    let path = path.join(WORDS_RESOURCE);
    path.is_file().then_some(path)
}

/// Load the full list or skip the test if it is not available.
fn load_dictionary() -> Option<WordsDictionary> {
    let Some(path) = find_words() else {
        eprintln!("SKIP: full word list not found. Set WORDPLAY_WORDS_PATH");
        return None;
    };
    Some(
        WordsDictionary::from_path(&path)
            .unwrap_or_else(|e| panic!("failed to load {}: {}", path.display(), e)),
    )
}

#[test]
fn full_list_size() {
    let Some(dict) = load_dictionary() else {
        return;
    };
    assert_eq!(dict.len(), FULL_LIST_WORDS);
    assert_eq!(dict.words().len(), FULL_LIST_WORDS);
}

#[test]
fn full_list_samples() {
    let Some(dict) = load_dictionary() else {
        return;
    };
    let cases: &[(Option<&str>, bool)] = &[
        (None, false),
        (Some(""), false),
        (Some("a"), false),
        (Some("tu"), true),
        (Some("ils"), true),
        (Some("vEuX"), true),
        (Some("VOULEZ"), true),
        (Some("amor\u{00E7}\u{00E2}t"), true),
        (Some("amorcat"), true),
        (Some("a-t-elle"), true),
        (Some("atelle"), true),
    ];
    for &(word, expected) in cases {
        assert_eq!(dict.is_valid(word), expected, "{word:?}");
    }
}

#[test]
fn full_list_is_mostly_spellable() {
    let Some(dict) = load_dictionary() else {
        return;
    };
    let factory = FrenchLetterFactory::new();
    let spellable = dict
        .words()
        .iter()
        .filter(|w| factory.to_letters(Some(w.as_str())).is_ok())
        .count();
    // Entries with apostrophes or ligatures have no tile spelling.
    assert!(
        spellable * 100 >= dict.len() * 90,
        "only {spellable} of {} words are spellable",
        dict.len()
    );
}
