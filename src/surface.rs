//! # Drawing Surface
//!
//! The contract between the layout engine and whatever draws the page.
//! Layout code only ever talks to these two traits; the PDF backend in
//! [`crate::pdf`] is one implementation.
//!
//! All coordinates and widths are in the page's user unit (millimetres for
//! the PDF backend), with `y` growing downward and text positioned by its
//! baseline. Font sizes are points.

use crate::error::VitaeError;
use crate::font::FontSpec;

/// Text measurement: the part of the backend layout needs before it commits
/// anything to the page.
pub trait Measure {
    /// Rendered width of `text` in the given font.
    fn measure_width(&self, text: &str, font: FontSpec) -> f64;

    /// Greedy word wrap to lines no wider than `max_width`.
    fn wrap(&self, text: &str, max_width: f64, font: FontSpec) -> Vec<String>;

    /// X position that centres `text` across a region `page_width` wide.
    fn center_x(&self, text: &str, font: FontSpec, page_width: f64) -> f64 {
        (page_width - self.measure_width(text, font)) / 2.0
    }
}

/// A single page being drawn. One surface is owned by exactly one render.
pub trait Surface: Measure {
    fn page_width(&self) -> f64;
    fn page_height(&self) -> f64;

    /// Select the font for subsequent text operations.
    fn set_font(&mut self, font: FontSpec);

    /// The font most recently selected.
    fn font(&self) -> FontSpec;

    /// Width of `text` in the current font.
    fn text_width(&self, text: &str) -> f64 {
        self.measure_width(text, self.font())
    }

    /// Wrap `text` using the current font.
    fn split_text(&self, text: &str, max_width: f64) -> Vec<String> {
        self.wrap(text, max_width, self.font())
    }

    /// Draw one run of text with its baseline at `y`.
    fn draw_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), VitaeError>;

    /// Draw text with an invisible clickable region over exactly its glyphs.
    fn draw_text_with_link(&mut self, text: &str, x: f64, y: f64, url: &str) -> Result<(), VitaeError>;

    /// Stroke a straight line.
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), VitaeError>;
}
