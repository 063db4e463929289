mod tests {
    use stairs_morse::{
        DIGITS, Glyph, LETTERS, UnsupportedCharacter, char_for, glyph_for, supported_characters,
    };

    fn is_morse(glyph: Glyph) -> bool {
        !glyph.as_str().is_empty() && glyph.as_str().chars().all(|c| c == '.' || c == '-')
    }

    #[test]
    fn test_letters_are_morse() {
        for c in 'A'..='Z' {
            let glyph = glyph_for(c).unwrap();
            assert!(is_morse(glyph), "{c} -> {glyph}");
        }
    }

    #[test]
    fn test_digits_are_morse() {
        for c in '0'..='9' {
            let glyph = glyph_for(c).unwrap();
            assert!(is_morse(glyph), "{c} -> {glyph}");
        }
    }

    #[test]
    fn test_known_glyphs() {
        assert_eq!(glyph_for('A').unwrap().as_str(), ".-");
        assert_eq!(glyph_for('E').unwrap().as_str(), ".");
        assert_eq!(glyph_for('S').unwrap().as_str(), "...");
        assert_eq!(glyph_for('O').unwrap().as_str(), "---");
        assert_eq!(glyph_for('Z').unwrap().as_str(), "--..");
        assert_eq!(glyph_for('0').unwrap().as_str(), "-----");
        assert_eq!(glyph_for('5').unwrap().as_str(), ".....");
        assert_eq!(glyph_for('9').unwrap().as_str(), "----.");
    }

    #[test]
    fn test_lookup_matches_table_index() {
        assert_eq!(glyph_for('A'), Ok(LETTERS[0]));
        assert_eq!(glyph_for('Z'), Ok(LETTERS[25]));
        assert_eq!(glyph_for('0'), Ok(DIGITS[0]));
        assert_eq!(glyph_for('9'), Ok(DIGITS[9]));
    }

    #[test]
    fn test_unsupported_characters() {
        for c in [' ', 'a', 'z', '.', '-', '?', '@', '[', '/', '\n', 'É'] {
            assert_eq!(glyph_for(c), Err(UnsupportedCharacter(c)));
        }
    }

    #[test]
    fn test_glyphs_are_unique() {
        let all: Vec<Glyph> = LETTERS.iter().chain(DIGITS.iter()).copied().collect();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_char_for_inverts_glyph_for() {
        for c in supported_characters() {
            let glyph = glyph_for(c).unwrap();
            assert_eq!(char_for(glyph.as_str()), Some(c));
        }
        assert_eq!(char_for(""), None);
        assert_eq!(char_for("......"), None);
        assert_eq!(char_for("abc"), None);
    }

    #[test]
    fn test_supported_characters() {
        assert_eq!(supported_characters().count(), 36);
        assert_eq!(supported_characters().next(), Some('A'));
        assert_eq!(supported_characters().last(), Some('9'));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            UnsupportedCharacter('a').to_string(),
            "unsupported character 'a'"
        );
    }
}
