//! Morse glyph
//!
//! A glyph is the dot/dash pattern of one character. Patterns are kept as
//! static strings of [`MORSE_DOT`](crate::symbol::MORSE_DOT) and
//! [`MORSE_DASH`](crate::symbol::MORSE_DASH) so they can live in `const`
//! tables.

use core::fmt;
use core::str::Chars;

use crate::symbol::Symbol;

/// Dot/dash pattern of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph(&'static str);

impl Glyph {
    /// Wrap a pattern
    ///
    /// Panics at compile time when used in a `const` with an empty pattern
    /// or a character other than `'.'` and `'-'`.
    pub const fn new(pattern: &'static str) -> Self {
        let bytes = pattern.as_bytes();
        assert!(!bytes.is_empty(), "empty morse pattern");
        let mut i = 0;
        while i < bytes.len() {
            assert!(
                bytes[i] == b'.' || bytes[i] == b'-',
                "morse pattern may only contain '.' and '-'"
            );
            i += 1;
        }
        Self(pattern)
    }

    /// Raw pattern, e.g. `".-"`
    pub const fn as_str(self) -> &'static str {
        self.0
    }

    /// Number of symbols
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(self) -> usize {
        self.0.len()
    }

    /// Iterate over the symbols in transmission order
    pub fn symbols(self) -> Symbols {
        Symbols {
            chars: self.0.chars(),
        }
    }

    /// Total length of the symbols in base units, without gaps
    pub fn units(self) -> u64 {
        self.symbols().map(Symbol::units).sum()
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Iterator over the symbols of a [`Glyph`]
#[derive(Debug, Clone)]
pub struct Symbols {
    chars: Chars<'static>,
}

impl Iterator for Symbols {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        // Patterns are validated in `Glyph::new`
        self.chars.next().and_then(Symbol::from_char)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}
