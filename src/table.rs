//! Morse lookup tables
//!
//! Letters and digits are kept in two fixed tables indexed by their offset
//! from `'A'` and `'0'`. Lookups are range-checked before indexing.

use crate::error::UnsupportedCharacter;
use crate::glyph::Glyph;

/// Number of letters in [`LETTERS`]
pub const LETTER_COUNT: usize = 26;
/// Number of digits in [`DIGITS`]
pub const DIGIT_COUNT: usize = 10;

/// Glyphs for `A`-`Z`
pub const LETTERS: [Glyph; LETTER_COUNT] = [
    Glyph::new(".-"),   // A
    Glyph::new("-..."), // B
    Glyph::new("-.-."), // C
    Glyph::new("-.."),  // D
    Glyph::new("."),    // E
    Glyph::new("..-."), // F
    Glyph::new("--."),  // G
    Glyph::new("...."), // H
    Glyph::new(".."),   // I
    Glyph::new(".---"), // J
    Glyph::new("-.-"),  // K
    Glyph::new(".-.."), // L
    Glyph::new("--"),   // M
    Glyph::new("-."),   // N
    Glyph::new("---"),  // O
    Glyph::new(".--."), // P
    Glyph::new("--.-"), // Q
    Glyph::new(".-."),  // R
    Glyph::new("..."),  // S
    Glyph::new("-"),    // T
    Glyph::new("..-"),  // U
    Glyph::new("...-"), // V
    Glyph::new(".--"),  // W
    Glyph::new("-..-"), // X
    Glyph::new("-.--"), // Y
    Glyph::new("--.."), // Z
];

/// Glyphs for `0`-`9`
pub const DIGITS: [Glyph; DIGIT_COUNT] = [
    Glyph::new("-----"), // 0
    Glyph::new(".----"), // 1
    Glyph::new("..---"), // 2
    Glyph::new("...--"), // 3
    Glyph::new("....-"), // 4
    Glyph::new("....."), // 5
    Glyph::new("-...."), // 6
    Glyph::new("--..."), // 7
    Glyph::new("---.."), // 8
    Glyph::new("----."), // 9
];

/// Look up the glyph of an uppercase letter or a digit
#[allow(clippy::cast_possible_truncation)]
pub const fn glyph_for(c: char) -> Result<Glyph, UnsupportedCharacter> {
    match c {
        'A'..='Z' => Ok(LETTERS[(c as u8 - b'A') as usize]),
        '0'..='9' => Ok(DIGITS[(c as u8 - b'0') as usize]),
        _ => Err(UnsupportedCharacter(c)),
    }
}

/// Reverse lookup: find the character a pattern stands for
pub fn char_for(pattern: &str) -> Option<char> {
    supported_characters().find(|&c| matches!(glyph_for(c), Ok(glyph) if glyph.as_str() == pattern))
}

/// All characters with a glyph, letters first
pub fn supported_characters() -> impl Iterator<Item = char> + Clone {
    ('A'..='Z').chain('0'..='9')
}
