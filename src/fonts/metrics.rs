//! Helvetica width tables.
//!
//! Standard PostScript/PDF metrics in units of 1/1000 em, sufficient for
//! word-wrap measurement without parsing font files. Accented Latin letters
//! share the width of their base letter, which matches the AFM data for the
//! Helvetica family.

use std::collections::HashMap;

use lazy_static::lazy_static;

use super::FontFace;

lazy_static! {
    static ref HELVETICA: FontMetrics = FontMetrics::build(FontFace::Helvetica);
    static ref HELVETICA_BOLD: FontMetrics = FontMetrics::build(FontFace::HelveticaBold);
}

/// Get the shared metrics instance for a face.
pub fn for_face(face: FontFace) -> &'static FontMetrics {
    match face {
        FontFace::Helvetica => &HELVETICA,
        FontFace::HelveticaBold => &HELVETICA_BOLD,
    }
}

/// Per-character width table for one font face.
#[derive(Debug)]
pub struct FontMetrics {
    widths: HashMap<char, f32>,
}

impl FontMetrics {
    /// Build the width table for a face.
    fn build(face: FontFace) -> Self {
        let mut widths = HashMap::new();
        let bold = face == FontFace::HelveticaBold;

        // Whitespace and punctuation
        widths.insert(' ', 278.0);
        widths.insert('.', 278.0);
        widths.insert(',', 278.0);
        widths.insert('-', 333.0);
        widths.insert(':', if bold { 333.0 } else { 278.0 });
        widths.insert(';', if bold { 333.0 } else { 278.0 });
        widths.insert('!', 333.0);
        widths.insert('?', if bold { 611.0 } else { 556.0 });
        widths.insert('\'', if bold { 278.0 } else { 222.0 });
        widths.insert('"', if bold { 474.0 } else { 355.0 });
        widths.insert('(', 333.0);
        widths.insert(')', 333.0);
        widths.insert('[', 333.0);
        widths.insert(']', 333.0);
        widths.insert('{', if bold { 389.0 } else { 334.0 });
        widths.insert('}', if bold { 389.0 } else { 334.0 });
        widths.insert('/', 278.0);
        widths.insert('\\', 278.0);
        widths.insert('@', if bold { 975.0 } else { 1015.0 });
        widths.insert('#', 556.0);
        widths.insert('$', 556.0);
        widths.insert('%', 889.0);
        widths.insert('^', if bold { 584.0 } else { 469.0 });
        widths.insert('&', if bold { 722.0 } else { 667.0 });
        widths.insert('*', 389.0);
        widths.insert('+', 584.0);
        widths.insert('=', 584.0);
        widths.insert('<', 584.0);
        widths.insert('>', 584.0);
        widths.insert('|', 280.0);
        widths.insert('`', 333.0);
        widths.insert('~', 584.0);
        widths.insert('_', 556.0);

        // Digits are uniform in both weights
        for digit in '0'..='9' {
            widths.insert(digit, 556.0);
        }

        // Uppercase (identical between regular and bold Helvetica)
        for (ch, w) in [
            ('A', 722.0),
            ('B', 722.0),
            ('C', 722.0),
            ('D', 722.0),
            ('E', 667.0),
            ('F', 611.0),
            ('G', 778.0),
            ('H', 722.0),
            ('I', 278.0),
            ('J', 556.0),
            ('K', 722.0),
            ('L', 611.0),
            ('M', 833.0),
            ('N', 722.0),
            ('O', 778.0),
            ('P', 667.0),
            ('Q', 778.0),
            ('R', 722.0),
            ('S', 667.0),
            ('T', 611.0),
            ('U', 722.0),
            ('V', 667.0),
            ('W', 944.0),
            ('X', 667.0),
            ('Y', 667.0),
            ('Z', 611.0),
        ] {
            widths.insert(ch, w);
        }

        // Lowercase (narrow letters widen in the bold face)
        let narrow = if bold { 278.0 } else { 222.0 };
        for (ch, w) in [
            ('a', 556.0),
            ('b', if bold { 611.0 } else { 556.0 }),
            ('c', 556.0),
            ('d', if bold { 611.0 } else { 556.0 }),
            ('e', 556.0),
            ('f', if bold { 333.0 } else { 278.0 }),
            ('g', if bold { 611.0 } else { 556.0 }),
            ('h', if bold { 611.0 } else { 556.0 }),
            ('i', narrow),
            ('j', narrow),
            ('k', if bold { 556.0 } else { 500.0 }),
            ('l', narrow),
            ('m', if bold { 889.0 } else { 833.0 }),
            ('n', if bold { 611.0 } else { 556.0 }),
            ('o', if bold { 611.0 } else { 556.0 }),
            ('p', if bold { 611.0 } else { 556.0 }),
            ('q', if bold { 611.0 } else { 556.0 }),
            ('r', if bold { 389.0 } else { 333.0 }),
            ('s', if bold { 556.0 } else { 500.0 }),
            ('t', if bold { 333.0 } else { 278.0 }),
            ('u', if bold { 611.0 } else { 556.0 }),
            ('v', if bold { 556.0 } else { 500.0 }),
            ('w', if bold { 778.0 } else { 722.0 }),
            ('x', if bold { 556.0 } else { 500.0 }),
            ('y', if bold { 556.0 } else { 500.0 }),
            ('z', 500.0),
        ] {
            widths.insert(ch, w);
        }

        // Typographic characters common in French report text
        widths.insert('’', if bold { 278.0 } else { 222.0 });
        widths.insert('‘', if bold { 278.0 } else { 222.0 });
        widths.insert('“', if bold { 500.0 } else { 333.0 });
        widths.insert('”', if bold { 500.0 } else { 333.0 });
        widths.insert('«', 556.0);
        widths.insert('»', 556.0);
        widths.insert('–', 556.0);
        widths.insert('—', 1000.0);
        widths.insert('…', 1000.0);
        widths.insert('°', 400.0);
        widths.insert('€', 556.0);
        widths.insert('œ', 944.0);
        widths.insert('Œ', 1000.0);

        // Accented letters share their base letter's width in Helvetica
        for (accented, base) in [
            ("àâä", 'a'),
            ("éèêë", 'e'),
            ("îï", 'i'),
            ("ôö", 'o'),
            ("ùûü", 'u'),
            ("ç", 'c'),
            ("ÿ", 'y'),
            ("ñ", 'n'),
            ("ÀÂÄ", 'A'),
            ("ÉÈÊË", 'E'),
            ("ÎÏ", 'I'),
            ("ÔÖ", 'O'),
            ("ÙÛÜ", 'U'),
            ("Ç", 'C'),
            ("Ñ", 'N'),
        ] {
            let width = widths[&base];
            for ch in accented.chars() {
                widths.insert(ch, width);
            }
        }

        Self { widths }
    }

    /// Width of a single character in 1/1000 em units.
    ///
    /// Unknown characters fall back to 500, the conventional default for
    /// proportional faces.
    pub fn char_width(&self, ch: char) -> f32 {
        *self.widths.get(&ch).unwrap_or(&500.0)
    }

    /// Width of a string in points at the given font size.
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let width_units: f32 = text.chars().map(|c| self.char_width(c)).sum();
        width_units * font_size / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_width() {
        let metrics = for_face(FontFace::Helvetica);
        assert_eq!(metrics.char_width(' '), 278.0);
    }

    #[test]
    fn test_bold_wider_than_regular() {
        let regular = FontFace::Helvetica.text_width("information", 11.0);
        let bold = FontFace::HelveticaBold.text_width("information", 11.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_accented_matches_base() {
        let metrics = for_face(FontFace::Helvetica);
        assert_eq!(metrics.char_width('é'), metrics.char_width('e'));
        assert_eq!(metrics.char_width('Ç'), metrics.char_width('C'));
    }

    #[test]
    fn test_known_word_width() {
        // "Âge" = A(722) + g(556) + e(556) = 1834 units
        let metrics = for_face(FontFace::Helvetica);
        let width = metrics.text_width("Âge", 10.0);
        assert!((width - 18.34).abs() < 0.001);
    }

    #[test]
    fn test_unknown_char_default() {
        let metrics = for_face(FontFace::Helvetica);
        assert_eq!(metrics.char_width('中'), 500.0);
    }
}
