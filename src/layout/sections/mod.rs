//! # Section Renderers
//!
//! One module per résumé section. Each exposes `render_flowing` for the
//! single-column template, which checks the cursor before every block, and
//! `render_column` for the two-column template, which does not. Both return
//! a [`SectionOutcome`](super::SectionOutcome); empty data is `Skipped`
//! before anything is drawn.

pub mod certificates;
pub mod education;
pub mod projects;
pub mod skills;
pub mod summary;

use crate::error::VitaeError;
use crate::font::FontSpec;
use crate::surface::Surface;

use super::{PageCursor, Section, LINE_HEIGHT};

/// Heading style: the font it is set in and the gap below it.
#[derive(Debug, Clone, Copy)]
pub struct Heading {
    pub font: FontSpec,
    pub advance: f64,
}

pub const FLOWING_HEADING: Heading = Heading {
    font: FontSpec::bold(11.0),
    advance: 6.0,
};

pub const COLUMN_HEADING: Heading = Heading {
    font: FontSpec::bold(12.0),
    advance: 8.0,
};

/// Body text in both templates unless a section says otherwise.
pub const BODY_FONT: FontSpec = FontSpec::normal(10.0);

pub(crate) fn draw_heading<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    section: Section,
    heading: Heading,
) -> Result<(), VitaeError> {
    surface.set_font(heading.font);
    surface.draw_text(section.title(), cursor.left(), cursor.y())?;
    cursor.advance(heading.advance);
    Ok(())
}

/// Draw `lines` one [`LINE_HEIGHT`] apart starting at the cursor, without
/// moving it.
pub(crate) fn draw_lines<S: Surface>(surface: &mut S, cursor: &PageCursor, lines: &[String]) -> Result<(), VitaeError> {
    let mut y = cursor.y();
    for line in lines {
        surface.draw_text(line, cursor.left(), y)?;
        y += LINE_HEIGHT;
    }
    Ok(())
}

/// Height of `count` body lines.
pub(crate) fn block_height(count: usize) -> f64 {
    count as f64 * LINE_HEIGHT
}

/// A recording surface with fixed-width glyphs, for renderer tests.
#[cfg(test)]
pub(crate) mod testing {
    use crate::error::VitaeError;
    use crate::font::FontSpec;
    use crate::surface::{Measure, Surface};

    /// Each character is `font.size * 0.2` millimetres wide.
    pub struct Recorder {
        pub width: f64,
        pub height: f64,
        pub font: FontSpec,
        pub texts: Vec<(String, f64, f64, FontSpec)>,
        pub lines: Vec<(f64, f64, f64, f64)>,
        pub links: Vec<(String, String)>,
    }

    impl Recorder {
        pub fn a4() -> Self {
            Self {
                width: 210.0,
                height: 297.0,
                font: FontSpec::default(),
                texts: Vec::new(),
                lines: Vec::new(),
                links: Vec::new(),
            }
        }

        pub fn drawn(&self) -> Vec<&str> {
            self.texts.iter().map(|(t, ..)| t.as_str()).collect()
        }

        pub fn find(&self, text: &str) -> Option<&(String, f64, f64, FontSpec)> {
            self.texts.iter().find(|(t, ..)| t == text)
        }
    }

    impl Measure for Recorder {
        fn measure_width(&self, text: &str, font: FontSpec) -> f64 {
            text.chars().count() as f64 * font.size * 0.2
        }

        fn wrap(&self, text: &str, max_width: f64, font: FontSpec) -> Vec<String> {
            let per_line = ((max_width / (font.size * 0.2)).floor() as usize).max(1);
            let mut lines = Vec::new();
            let mut current = String::new();
            for word in text.split_whitespace() {
                let candidate = if current.is_empty() {
                    word.to_string()
                } else {
                    format!("{} {}", current, word)
                };
                if candidate.chars().count() > per_line && !current.is_empty() {
                    lines.push(std::mem::replace(&mut current, word.to_string()));
                } else {
                    current = candidate;
                }
            }
            lines.push(current);
            lines
        }
    }

    impl Surface for Recorder {
        fn page_width(&self) -> f64 {
            self.width
        }

        fn page_height(&self) -> f64 {
            self.height
        }

        fn set_font(&mut self, font: FontSpec) {
            self.font = font;
        }

        fn font(&self) -> FontSpec {
            self.font
        }

        fn draw_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), VitaeError> {
            self.texts.push((text.to_string(), x, y, self.font));
            Ok(())
        }

        fn draw_text_with_link(&mut self, text: &str, x: f64, y: f64, url: &str) -> Result<(), VitaeError> {
            self.draw_text(text, x, y)?;
            self.links.push((text.to_string(), url.to_string()));
            Ok(())
        }

        fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), VitaeError> {
            self.lines.push((x1, y1, x2, y2));
            Ok(())
        }
    }
}
