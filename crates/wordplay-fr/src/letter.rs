// The French game alphabet.

use std::fmt;

use wordplay_core::{Letter, LetterFactory};

/// A letter of the French game alphabet.
///
/// The 26 letters of the Latin alphabet. Accented forms (`é`, `à`, `ç`, ...)
/// are not separate letters; they map onto their base letter. Ligatures
/// (`œ`, `æ`) are not part of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FrenchLetter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter for FrenchLetter {
    const ALL: &'static [Self] = &[
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    fn symbol(self) -> char {
        // Variants are declared in alphabet order starting at 'A'.
        char::from(b'A' + self as u8)
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        let letter = match symbol {
            'A' => Self::A,
            'B' => Self::B,
            'C' => Self::C,
            'D' => Self::D,
            'E' => Self::E,
            'F' => Self::F,
            'G' => Self::G,
            'H' => Self::H,
            'I' => Self::I,
            'J' => Self::J,
            'K' => Self::K,
            'L' => Self::L,
            'M' => Self::M,
            'N' => Self::N,
            'O' => Self::O,
            'P' => Self::P,
            'Q' => Self::Q,
            'R' => Self::R,
            'S' => Self::S,
            'T' => Self::T,
            'U' => Self::U,
            'V' => Self::V,
            'W' => Self::W,
            'X' => Self::X,
            'Y' => Self::Y,
            'Z' => Self::Z,
            _ => return None,
        };
        Some(letter)
    }
}

impl fmt::Display for FrenchLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FrenchLetter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.symbol())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FrenchLetter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = <char as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_symbol(symbol).ok_or_else(|| {
            serde::de::Error::custom(format_args!("unknown French letter {symbol:?}"))
        })
    }
}

/// Converts text into [`FrenchLetter`]s.
///
/// Case and diacritics are folded: `'a'`, `'A'`, `'â'` and `'à'` are all
/// [`FrenchLetter::A`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrenchLetterFactory;

impl FrenchLetterFactory {
    pub fn new() -> Self {
        Self
    }
}

impl LetterFactory for FrenchLetterFactory {
    type Letter = FrenchLetter;
}
