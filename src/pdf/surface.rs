//! The PDF drawing surface: records draw operations for one page in
//! millimetres and hands them to [`PdfWriter`] when the render is done.

use crate::error::VitaeError;
use crate::font::{FontContext, FontSpec};
use crate::model::PageConfig;
use crate::surface::{Measure, Surface};
use crate::text::TextLayout;

use super::{Metadata, PdfWriter};

/// Points per millimetre.
pub const PT_PER_MM: f64 = 72.0 / 25.4;

/// One recorded drawing operation. Coordinates are millimetres from the
/// top-left corner of the page; text is positioned by its baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f64,
        y: f64,
        font: FontSpec,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    /// An invisible clickable rectangle; `y` is its top edge.
    Link {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        url: String,
    },
}

/// A drawn page, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPage {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

pub struct PdfSurface {
    page: LayoutPage,
    font: FontSpec,
    font_context: FontContext,
    text_layout: TextLayout,
}

impl PdfSurface {
    pub fn new(config: &PageConfig) -> Self {
        let (width, height) = config.size.dimensions();
        Self {
            page: LayoutPage {
                width,
                height,
                ops: Vec::new(),
            },
            font: FontSpec::default(),
            font_context: FontContext::new(),
            text_layout: TextLayout::new(),
        }
    }

    /// Everything drawn so far, in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.page.ops
    }

    /// Give up the surface, keeping only what was drawn.
    pub fn into_page(self) -> LayoutPage {
        self.page
    }

    /// Serialize the page to PDF bytes.
    pub fn finish(&self, metadata: &Metadata) -> Result<Vec<u8>, VitaeError> {
        PdfWriter::new().write(std::slice::from_ref(&self.page), metadata)
    }

    fn check_point(&self, what: &str, x: f64, y: f64) -> Result<(), VitaeError> {
        if x.is_finite() && y.is_finite() {
            Ok(())
        } else {
            Err(VitaeError::DrawError(format!(
                "{} at non-finite position ({}, {})",
                what, x, y
            )))
        }
    }

    fn check_font(&self) -> Result<(), VitaeError> {
        if self.font.size.is_finite() && self.font.size > 0.0 {
            Ok(())
        } else {
            Err(VitaeError::DrawError(format!(
                "invalid font size {}",
                self.font.size
            )))
        }
    }
}

impl Measure for PdfSurface {
    fn measure_width(&self, text: &str, font: FontSpec) -> f64 {
        self.text_layout.measure_width(&self.font_context, text, font) / PT_PER_MM
    }

    fn wrap(&self, text: &str, max_width: f64, font: FontSpec) -> Vec<String> {
        self.text_layout
            .break_into_lines(&self.font_context, text, max_width * PT_PER_MM, font)
            .into_iter()
            .map(|line| line.text)
            .collect()
    }
}

impl Surface for PdfSurface {
    fn page_width(&self) -> f64 {
        self.page.width
    }

    fn page_height(&self) -> f64 {
        self.page.height
    }

    fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    fn font(&self) -> FontSpec {
        self.font
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), VitaeError> {
        self.check_point("text", x, y)?;
        self.check_font()?;
        self.page.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            font: self.font,
        });
        Ok(())
    }

    fn draw_text_with_link(&mut self, text: &str, x: f64, y: f64, url: &str) -> Result<(), VitaeError> {
        if url.chars().any(char::is_control) {
            return Err(VitaeError::DrawError(format!("invalid link target {:?}", url)));
        }
        self.draw_text(text, x, y)?;
        // The region spans the glyphs from ascender to descender.
        let ascent = self.font_context.ascent(self.font) / PT_PER_MM;
        let descent = self.font_context.descent(self.font) / PT_PER_MM;
        self.page.ops.push(DrawOp::Link {
            x,
            y: y - ascent,
            width: self.text_width(text),
            height: ascent + descent,
            url: url.to_string(),
        });
        Ok(())
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), VitaeError> {
        self.check_point("line start", x1, y1)?;
        self.check_point("line end", x2, y2)?;
        self.page.ops.push(DrawOp::Line { x1, y1, x2, y2 });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> PdfSurface {
        PdfSurface::new(&PageConfig::default())
    }

    #[test]
    fn measures_in_millimetres() {
        let s = surface();
        // 1000 units at 72pt is 72pt, one inch.
        let w = s.measure_width("—", FontSpec::normal(72.0));
        assert!((w - 25.4).abs() < 1e-9);
    }

    #[test]
    fn center_x_centres_on_page() {
        let s = surface();
        let font = FontSpec::bold(16.0);
        let x = s.center_x("Ada Lovelace", font, s.page_width());
        let w = s.measure_width("Ada Lovelace", font);
        assert!((x + w / 2.0 - 105.0).abs() < 1e-9);
    }

    #[test]
    fn text_records_current_font() {
        let mut s = surface();
        s.set_font(FontSpec::bold(11.0));
        s.draw_text("SUMMARY", 15.0, 40.0).unwrap();
        assert_eq!(
            s.ops(),
            &[DrawOp::Text {
                text: "SUMMARY".into(),
                x: 15.0,
                y: 40.0,
                font: FontSpec::bold(11.0),
            }]
        );
    }

    #[test]
    fn link_region_covers_text() {
        let mut s = surface();
        s.set_font(FontSpec::normal(10.0));
        s.draw_text_with_link("AWS", 15.0, 100.0, "https://x").unwrap();
        let width = s.text_width("AWS");
        match &s.ops()[1] {
            DrawOp::Link {
                x,
                y,
                width: w,
                height,
                url,
            } => {
                assert_eq!(*x, 15.0);
                assert!((*w - width).abs() < 1e-12);
                assert!(*y < 100.0 && y + height > 100.0);
                assert_eq!(url, "https://x");
            }
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_finite_positions() {
        let mut s = surface();
        assert!(s.draw_text("x", f64::NAN, 10.0).is_err());
        assert!(s.draw_line(0.0, 0.0, f64::INFINITY, 0.0).is_err());
        assert!(s.ops().is_empty());
    }

    #[test]
    fn rejects_control_characters_in_links() {
        let mut s = surface();
        s.set_font(FontSpec::normal(10.0));
        assert!(s.draw_text_with_link("AWS", 15.0, 100.0, "https://x\n").is_err());
        assert!(s.ops().is_empty());
    }

    #[test]
    fn rejects_zero_font_size() {
        let mut s = surface();
        s.set_font(FontSpec::normal(0.0));
        assert!(s.draw_text("x", 10.0, 10.0).is_err());
    }

    #[test]
    fn finish_writes_pdf() {
        let mut s = surface();
        s.set_font(FontSpec::normal(12.0));
        s.draw_text("hello", 15.0, 15.0).unwrap();
        let bytes = s.finish(&Metadata::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }
}
