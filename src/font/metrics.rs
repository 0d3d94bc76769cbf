//! Advance widths for the standard Helvetica faces.
//!
//! Values are the AFM widths in 1/1000 em for printable ASCII
//! (index = char - 32). Characters outside that range fall back to a
//! short table of WinAnsi punctuation and then to the width of `n`.

/// Width table and vertical metrics for one standard face.
#[derive(Debug)]
pub struct StandardFontMetrics {
    pub widths: &'static [u16; 95],
    /// Width used for characters missing from the tables.
    pub default_width: u16,
    pub ascender: i16,
    pub descender: i16,
    pub bold: bool,
}

impl StandardFontMetrics {
    /// Advance width of one character in points.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        f64::from(self.units(ch)) / 1000.0 * font_size
    }

    /// Width of a string in points.
    pub fn measure_string(&self, text: &str, font_size: f64) -> f64 {
        let units: u32 = text.chars().map(|ch| u32::from(self.units(ch))).sum();
        f64::from(units) / 1000.0 * font_size
    }

    fn units(&self, ch: char) -> u16 {
        let cp = ch as u32;
        if (32..=126).contains(&cp) {
            return self.widths[(cp - 32) as usize];
        }
        match ch {
            '\u{2022}' => 350,                        // bullet
            '\u{2026}' => 1000,                       // ellipsis
            '\u{2013}' => 556,                        // en dash
            '\u{2014}' => 1000,                       // em dash
            '\u{2018}' | '\u{2019}' | '\u{201A}' => if self.bold { 278 } else { 222 },
            '\u{201C}' | '\u{201D}' | '\u{201E}' => if self.bold { 500 } else { 333 },
            '\u{00A0}' => self.widths[0],             // no-break space
            '\u{00B7}' => 278,                        // middle dot
            '\u{00A9}' | '\u{00AE}' => 737,
            '\u{00B0}' => 400,
            '\u{20AC}' => 556,
            '\u{2122}' => 1000,
            _ => self.default_width,
        }
    }
}

pub static HELVETICA: StandardFontMetrics = StandardFontMetrics {
    widths: &HELVETICA_WIDTHS,
    default_width: 556,
    ascender: 718,
    descender: -207,
    bold: false,
};

pub static HELVETICA_BOLD: StandardFontMetrics = StandardFontMetrics {
    widths: &HELVETICA_BOLD_WIDTHS,
    default_width: 611,
    ascender: 718,
    descender: -207,
    bold: true,
};

/// Helvetica-Oblique shares the upright advance widths.
pub static HELVETICA_OBLIQUE: StandardFontMetrics = StandardFontMetrics {
    widths: &HELVETICA_WIDTHS,
    default_width: 556,
    ascender: 718,
    descender: -207,
    bold: false,
};

#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_width_at_12pt() {
        assert!((HELVETICA.char_width(' ', 12.0) - 3.336).abs() < 1e-9);
    }

    #[test]
    fn bold_is_wider() {
        assert!(HELVETICA_BOLD.measure_string("Lovelace", 10.0) > HELVETICA.measure_string("Lovelace", 10.0));
    }

    #[test]
    fn bullet_has_its_own_width() {
        assert!((HELVETICA.char_width('•', 10.0) - 3.5).abs() < 1e-9);
    }

    #[test]
    fn unknown_chars_use_default() {
        assert!((HELVETICA.char_width('漢', 10.0) - 5.56).abs() < 1e-9);
    }
}
