use core::fmt;

/// Character that has no Morse glyph
///
/// Only uppercase `A`-`Z` and digits `0`-`9` are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedCharacter(pub char);

impl fmt::Display for UnsupportedCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported character {:?}", self.0)
    }
}

impl core::error::Error for UnsupportedCharacter {}

/// Error returned when encoding a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorseError {
    /// The message contains a character without a glyph
    UnsupportedCharacter(char),
    /// The encoded message does not fit into the buffer
    MessageTooLong { capacity: usize },
}

impl From<UnsupportedCharacter> for MorseError {
    fn from(err: UnsupportedCharacter) -> Self {
        Self::UnsupportedCharacter(err.0)
    }
}

impl fmt::Display for MorseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCharacter(c) => write!(f, "unsupported character {:?}", c),
            Self::MessageTooLong { capacity } => {
                write!(f, "message does not fit into {} tokens", capacity)
            }
        }
    }
}

impl core::error::Error for MorseError {}
