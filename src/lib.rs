//! Morse code data for the stairs LED installation
//!
//! Timing constants derived from one base unit and the glyph tables for
//! `A`-`Z` and `0`-`9`. Turning glyphs into light pulses is left to the
//! renderer that consumes this crate.

#![no_std]

pub mod error;
pub mod glyph;
pub mod message;
pub mod symbol;
pub mod table;
pub mod timing;

pub use error::{MorseError, UnsupportedCharacter};
pub use glyph::Glyph;
pub use message::{Message, Token, encode};
pub use symbol::{MORSE_DASH, MORSE_DOT, Symbol};
pub use table::{DIGITS, LETTERS, char_for, glyph_for, supported_characters};
pub use timing::{BASE, DASH, DOT, MorseTimings, SPACE};

pub use embassy_time::Duration;
