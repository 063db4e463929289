use core::fmt;

use crate::timing::{DASH_UNITS, DOT_UNITS};

/// Character used for a dot in glyph patterns
pub const MORSE_DOT: char = '.';
/// Character used for a dash in glyph patterns
pub const MORSE_DASH: char = '-';

/// A single Morse signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Short signal, one base unit
    Dot,
    /// Long signal, three base units
    Dash,
}

impl Symbol {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            MORSE_DOT => Some(Self::Dot),
            MORSE_DASH => Some(Self::Dash),
            _ => None,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Dot => MORSE_DOT,
            Self::Dash => MORSE_DASH,
        }
    }

    /// Length of the symbol in base units
    pub const fn units(self) -> u64 {
        match self {
            Self::Dot => DOT_UNITS,
            Self::Dash => DASH_UNITS,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
