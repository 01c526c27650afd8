// Character-level Unicode utilities: diacritic stripping.
//
// Both normalization pipelines (per-letter and whole-word, see `fold`) are
// built from these primitives, so a change here affects tile identity and
// dictionary lookup alike.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::decompose_canonical;

/// Combining Diacritical Marks block (U+0300..=U+036F).
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Check whether a character is a combining diacritical mark that is
/// removed by accent stripping.
///
/// Only the basic Combining Diacritical Marks block is considered; marks
/// from the extended blocks are left in place.
pub fn is_diacritic(c: char) -> bool {
    COMBINING_MARKS.contains(&c)
}

/// Letters with a stroke have no canonical decomposition, so they are
/// mapped explicitly.
fn strip_stroke(c: char) -> char {
    match c {
        '\u{0141}' => 'L', // Ł
        '\u{0142}' => 'l', // ł
        other => other,
    }
}

/// Strip diacritical marks from a single character.
///
/// The character is canonically decomposed (NFD) and every combining mark
/// is dropped. Most accented letters yield exactly one base character;
/// a lone combining mark yields nothing.
pub fn strip_accents_char(c: char) -> impl Iterator<Item = char> {
    let mut decomposed = Vec::with_capacity(2);
    decompose_canonical(c, |d| {
        if !is_diacritic(d) {
            decomposed.push(strip_stroke(d));
        }
    });
    decomposed.into_iter()
}

/// Strip diacritical marks from a string.
///
/// `"amorçât"` becomes `"amorcat"`, `"Élève"` becomes `"Eleve"`. Case and
/// every non-mark character are preserved.
pub fn strip_accents(s: &str) -> String {
    s.nfd()
        .filter(|&c| !is_diacritic(c))
        .map(strip_stroke)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Diacritics --

    #[test]
    fn diacritic_block_bounds() {
        assert!(is_diacritic('\u{0300}')); // combining grave
        assert!(is_diacritic('\u{0327}')); // combining cedilla
        assert!(is_diacritic('\u{036F}'));
        assert!(!is_diacritic('\u{02FF}'));
        assert!(!is_diacritic('\u{0370}'));
        assert!(!is_diacritic('a'));
    }

    #[test]
    fn strip_accents_char_french_vowels() {
        for c in ['a', '\u{00E0}', '\u{00E2}', '\u{00E4}'] {
            assert_eq!(strip_accents_char(c).collect::<String>(), "a", "{c:?}");
        }
        for c in ['\u{00E9}', '\u{00E8}', '\u{00EA}', '\u{00EB}'] {
            assert_eq!(strip_accents_char(c).collect::<String>(), "e", "{c:?}");
        }
        assert_eq!(strip_accents_char('\u{00CF}').collect::<String>(), "I"); // Ï
        assert_eq!(strip_accents_char('\u{00FB}').collect::<String>(), "u"); // û
        assert_eq!(strip_accents_char('\u{00FF}').collect::<String>(), "y"); // ÿ
    }

    #[test]
    fn strip_accents_char_cedilla() {
        assert_eq!(strip_accents_char('\u{00E7}').collect::<String>(), "c"); // ç
        assert_eq!(strip_accents_char('\u{00C7}').collect::<String>(), "C"); // Ç
    }

    #[test]
    fn strip_accents_char_stroke() {
        assert_eq!(strip_accents_char('\u{0141}').collect::<String>(), "L");
        assert_eq!(strip_accents_char('\u{0142}').collect::<String>(), "l");
    }

    #[test]
    fn strip_accents_char_lone_mark_is_empty() {
        assert_eq!(strip_accents_char('\u{0301}').count(), 0);
    }

    #[test]
    fn strip_accents_char_keeps_ligatures() {
        // Ligatures have no canonical decomposition
        assert_eq!(strip_accents_char('\u{0153}').collect::<String>(), "\u{0153}"); // œ
        assert_eq!(strip_accents_char('\u{00E6}').collect::<String>(), "\u{00E6}"); // æ
    }

    #[test]
    fn strip_accents_string() {
        assert_eq!(strip_accents("amor\u{00E7}\u{00E2}t"), "amorcat");
        assert_eq!(strip_accents("\u{00C9}l\u{00E8}ve"), "Eleve");
        assert_eq!(strip_accents("a-t-elle"), "a-t-elle");
        assert_eq!(strip_accents(""), "");
    }

    #[test]
    fn strip_accents_decomposed_input() {
        // "e" followed by COMBINING ACUTE ACCENT
        assert_eq!(strip_accents("caf\u{0065}\u{0301}"), "cafe");
    }
}
