//! Message encoding
//!
//! Converts a short text into a fixed-capacity list of glyphs and word
//! breaks. Runs of spaces collapse into one break; leading and trailing
//! spaces are dropped.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::error::MorseError;
use crate::glyph::Glyph;
use crate::table::glyph_for;

const WORD_SEPARATOR: char = ' ';

/// Element of an encoded message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Glyph of a single character
    Glyph(Glyph),
    /// Gap between two words, lasts one [`SPACE`](crate::timing::SPACE)
    WordBreak,
}

/// Encoded message holding up to N tokens
pub type Message<const N: usize> = Vec<Token, N>;

/// Encode text into at most N tokens
///
/// Returns an error on the first character without a glyph, or if the
/// tokens do not fit.
pub fn encode<const N: usize>(text: &str) -> Result<Message<N>, MorseError> {
    let mut message = Message::<N>::new();
    let mut pending_break = false;

    for c in text.chars() {
        if c == WORD_SEPARATOR {
            pending_break = !message.is_empty();
            continue;
        }

        let glyph = match glyph_for(c) {
            Ok(glyph) => glyph,
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!("[morse.encode] rejected character {:?}", err.0);
                return Err(err.into());
            }
        };

        if pending_break {
            push(&mut message, Token::WordBreak)?;
            pending_break = false;
        }
        push(&mut message, Token::Glyph(glyph))?;
    }

    Ok(message)
}

fn push<const N: usize>(message: &mut Message<N>, token: Token) -> Result<(), MorseError> {
    message.push(token).map_err(|_| {
        #[cfg(feature = "esp32-log")]
        println!("[morse.encode] message exceeds {} tokens", N);
        MorseError::MessageTooLong { capacity: N }
    })
}
