//! # Font Management
//!
//! The résumé is set entirely in the standard Helvetica family, which PDF
//! viewers provide without embedding. This module maps a requested size and
//! weight to one of those faces and measures strings with its AFM widths.

pub mod metrics;

pub use metrics::StandardFontMetrics;

/// Face selection. The layouts only ever ask for these three.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Italic,
}

/// A font size in points plus a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size: f64,
    pub weight: FontWeight,
}

impl FontSpec {
    pub const fn new(size: f64, weight: FontWeight) -> Self {
        Self { size, weight }
    }

    pub const fn normal(size: f64) -> Self {
        Self::new(size, FontWeight::Normal)
    }

    pub const fn bold(size: f64) -> Self {
        Self::new(size, FontWeight::Bold)
    }

    pub const fn italic(size: f64) -> Self {
        Self::new(size, FontWeight::Italic)
    }

    /// Same face at a different size.
    pub fn with_size(self, size: f64) -> Self {
        Self { size, ..self }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::normal(16.0)
    }
}

/// The standard PDF fonts this engine writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl StandardFont {
    pub fn for_weight(weight: FontWeight) -> Self {
        match weight {
            FontWeight::Normal => Self::Helvetica,
            FontWeight::Bold => Self::HelveticaBold,
            FontWeight::Italic => Self::HelveticaOblique,
        }
    }

    /// The PDF name for this font.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
            Self::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    pub fn metrics(&self) -> &'static StandardFontMetrics {
        match self {
            Self::Helvetica => &metrics::HELVETICA,
            Self::HelveticaBold => &metrics::HELVETICA_BOLD,
            Self::HelveticaOblique => &metrics::HELVETICA_OBLIQUE,
        }
    }
}

/// Text measurement shared by layout and PDF serialization.
#[derive(Debug, Default, Clone, Copy)]
pub struct FontContext;

impl FontContext {
    pub fn new() -> Self {
        Self
    }

    /// Get the advance width of a single character in points.
    pub fn char_width(&self, ch: char, font: FontSpec) -> f64 {
        StandardFont::for_weight(font.weight)
            .metrics()
            .char_width(ch, font.size)
    }

    /// Measure the width of a string in points.
    pub fn measure_string(&self, text: &str, font: FontSpec) -> f64 {
        StandardFont::for_weight(font.weight)
            .metrics()
            .measure_string(text, font.size)
    }

    /// Distance from the baseline to the top of the tallest glyphs, in points.
    pub fn ascent(&self, font: FontSpec) -> f64 {
        let m = StandardFont::for_weight(font.weight).metrics();
        f64::from(m.ascender) / 1000.0 * font.size
    }

    /// Distance from the baseline to the bottom of descenders, in points.
    pub fn descent(&self, font: FontSpec) -> f64 {
        let m = StandardFont::for_weight(font.weight).metrics();
        -f64::from(m.descender) / 1000.0 * font.size
    }
}
