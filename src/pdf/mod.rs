//! # PDF Serializer
//!
//! Takes the drawn pages from a [`PdfSurface`] and writes a valid PDF file.
//!
//! This is a from-scratch PDF 1.7 writer. The subset a résumé needs is small:
//! the standard Helvetica faces (no embedding), text runs, stroked lines and
//! URI link annotations. Output is deterministic: no timestamps or ids are
//! written, so the same page always serializes to the same bytes.
//!
//! ## PDF Structure (simplified)
//!
//! ```text
//! %PDF-1.7            <- header
//! 1 0 obj ... endobj  <- objects (fonts, annotations, content, pages)
//! 2 0 obj ... endobj
//! ...
//! xref                <- cross-reference table (byte offsets of each object)
//! trailer             <- points to the root object
//! %%EOF
//! ```

mod surface;

pub use surface::{DrawOp, LayoutPage, PdfSurface, PT_PER_MM};

use std::collections::BTreeSet;
use std::fmt::Write as FmtWrite; // for write! on String
use std::io::Write as IoWrite; // for write! on Vec<u8>

use crate::error::VitaeError;
use crate::font::StandardFont;
use miniz_oxide::deflate::compress_to_vec_zlib;

/// Stroke width for rules: 0.200025 mm, the usual default for A4 résumés.
const LINE_WIDTH_PT: f64 = 0.567;

/// Document metadata written to the Info dictionary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
}

pub struct PdfWriter;

/// Tracks allocated PDF objects during writing.
struct PdfBuilder {
    objects: Vec<PdfObject>,
    /// Font resources in resource-name order: /F0, /F1, ...
    font_objects: Vec<(StandardFont, usize)>,
}

struct PdfObject {
    data: Vec<u8>,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write drawn pages to a PDF byte vector.
    pub fn write(&self, pages: &[LayoutPage], metadata: &Metadata) -> Result<Vec<u8>, VitaeError> {
        let mut builder = PdfBuilder {
            objects: Vec::new(),
            font_objects: Vec::new(),
        };

        // Reserve object IDs:
        // 0 = placeholder (PDF objects are 1-indexed)
        // 1 = Catalog
        // 2 = Pages (page tree root)
        // 3+ = fonts, then per page: annotations, content stream, page
        builder.objects.push(PdfObject { data: vec![] });
        builder.objects.push(PdfObject { data: vec![] });
        builder.objects.push(PdfObject { data: vec![] });

        self.register_fonts(&mut builder, pages);

        let mut page_obj_ids: Vec<usize> = Vec::new();

        for page in pages {
            let annot_ids = self.write_link_annotations(&mut builder, page)?;

            let content = self.build_content_stream(page, &builder.font_objects)?;
            let compressed = compress_to_vec_zlib(content.as_bytes(), 6);

            let content_obj_id = builder.objects.len();
            let mut content_data: Vec<u8> = Vec::new();
            let _ = write!(
                content_data,
                "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                compressed.len()
            );
            content_data.extend_from_slice(&compressed);
            content_data.extend_from_slice(b"\nendstream");
            builder.objects.push(PdfObject { data: content_data });

            let page_obj_id = builder.objects.len();
            let font_resources = self.build_font_resource_dict(&builder.font_objects);
            let annots = if annot_ids.is_empty() {
                String::new()
            } else {
                format!(" /Annots [{}]", Self::references(&annot_ids))
            };
            let page_dict = format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Contents {} 0 R /Resources << /Font << {} >> >>{} >>",
                page.width * PT_PER_MM,
                page.height * PT_PER_MM,
                content_obj_id,
                font_resources,
                annots
            );
            builder.objects.push(PdfObject {
                data: page_dict.into_bytes(),
            });
            page_obj_ids.push(page_obj_id);
        }

        // Write Catalog (object 1)
        builder.objects[1].data = b"<< /Type /Catalog /Pages 2 0 R >>".to_vec();

        // Write Pages tree (object 2)
        builder.objects[2].data = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            Self::references(&page_obj_ids),
            page_obj_ids.len()
        )
        .into_bytes();

        let info_obj_id = self.write_info(&mut builder, metadata);

        Ok(self.serialize(&builder, info_obj_id))
    }

    /// Register each standard face used on any page. A document with no text
    /// still gets Helvetica so every page has a font resource.
    fn register_fonts(&self, builder: &mut PdfBuilder, pages: &[LayoutPage]) {
        let mut used: BTreeSet<StandardFont> = pages
            .iter()
            .flat_map(|p| p.ops.iter())
            .filter_map(|op| match op {
                DrawOp::Text { font, .. } => Some(StandardFont::for_weight(font.weight)),
                _ => None,
            })
            .collect();

        if used.is_empty() {
            used.insert(StandardFont::Helvetica);
        }

        for font in used {
            let obj_id = builder.objects.len();
            let font_dict = format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} \
                 /Encoding /WinAnsiEncoding >>",
                font.pdf_name()
            );
            builder.objects.push(PdfObject {
                data: font_dict.into_bytes(),
            });
            builder.font_objects.push((font, obj_id));
        }
    }

    /// One /Link annotation object per link region on the page.
    fn write_link_annotations(
        &self,
        builder: &mut PdfBuilder,
        page: &LayoutPage,
    ) -> Result<Vec<usize>, VitaeError> {
        let mut ids = Vec::new();
        for op in &page.ops {
            if let DrawOp::Link {
                x,
                y,
                width,
                height,
                url,
            } = op
            {
                let uri = Self::encode_uri(url)?;
                let x1 = x * PT_PER_MM;
                let y1 = (page.height - y - height) * PT_PER_MM;
                let x2 = (x + width) * PT_PER_MM;
                let y2 = (page.height - y) * PT_PER_MM;
                let id = builder.objects.len();
                let annot = format!(
                    "<< /Type /Annot /Subtype /Link /Rect [{:.2} {:.2} {:.2} {:.2}] \
                     /Border [0 0 0] /A << /S /URI /URI ({}) >> >>",
                    x1, y1, x2, y2, uri
                );
                builder.objects.push(PdfObject {
                    data: annot.into_bytes(),
                });
                ids.push(id);
            }
        }
        Ok(ids)
    }

    /// Build the PDF content stream for a single page.
    fn build_content_stream(
        &self,
        page: &LayoutPage,
        font_objects: &[(StandardFont, usize)],
    ) -> Result<String, VitaeError> {
        let mut stream = String::new();
        let _ = write!(stream, "0 g\n0 G\n{:.3} w\n", LINE_WIDTH_PT);

        for op in &page.ops {
            match op {
                DrawOp::Text { text, x, y, font } => {
                    let face = StandardFont::for_weight(font.weight);
                    let idx = font_objects
                        .iter()
                        .position(|(f, _)| *f == face)
                        .ok_or_else(|| {
                            VitaeError::DrawError(format!("font {} was not registered", face.pdf_name()))
                        })?;
                    let _ = write!(
                        stream,
                        "BT\n/F{} {:.2} Tf\n{:.2} {:.2} Td\n({}) Tj\nET\n",
                        idx,
                        font.size,
                        x * PT_PER_MM,
                        (page.height - y) * PT_PER_MM,
                        Self::encode_text(text)
                    );
                }
                DrawOp::Line { x1, y1, x2, y2 } => {
                    let _ = write!(
                        stream,
                        "{:.2} {:.2} m\n{:.2} {:.2} l\nS\n",
                        x1 * PT_PER_MM,
                        (page.height - y1) * PT_PER_MM,
                        x2 * PT_PER_MM,
                        (page.height - y2) * PT_PER_MM
                    );
                }
                // Links are annotations, not page content.
                DrawOp::Link { .. } => {}
            }
        }

        Ok(stream)
    }

    fn build_font_resource_dict(&self, font_objects: &[(StandardFont, usize)]) -> String {
        font_objects
            .iter()
            .enumerate()
            .map(|(idx, (_, obj_id))| format!("/F{} {} 0 R", idx, obj_id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Info dictionary. Omitted entirely when there is nothing to say.
    fn write_info(&self, builder: &mut PdfBuilder, metadata: &Metadata) -> Option<usize> {
        if metadata == &Metadata::default() {
            return None;
        }
        let id = builder.objects.len();
        let mut info = String::from("<< ");
        if let Some(ref title) = metadata.title {
            let _ = write!(info, "/Title ({}) ", Self::encode_text(title));
        }
        if let Some(ref author) = metadata.author {
            let _ = write!(info, "/Author ({}) ", Self::encode_text(author));
        }
        if let Some(ref subject) = metadata.subject {
            let _ = write!(info, "/Subject ({}) ", Self::encode_text(subject));
        }
        let creator = metadata.creator.as_deref().unwrap_or("Vitae");
        let _ = write!(
            info,
            "/Creator ({}) /Producer (Vitae {}) >>",
            Self::encode_text(creator),
            env!("CARGO_PKG_VERSION")
        );
        builder.objects.push(PdfObject {
            data: info.into_bytes(),
        });
        Some(id)
    }

    fn references(ids: &[usize]) -> String {
        ids.iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Escape special characters in a PDF string.
    fn escape_pdf_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('(', "\\(")
            .replace(')', "\\)")
    }

    /// Encode text as a WinAnsi literal string body. Characters the encoding
    /// lacks become `?`.
    fn encode_text(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            let b = Self::unicode_to_winansi(ch).unwrap_or(b'?');
            match b {
                b'\\' => out.push_str("\\\\"),
                b'(' => out.push_str("\\("),
                b')' => out.push_str("\\)"),
                0x20..=0x7E => out.push(b as char),
                _ => {
                    let _ = write!(out, "\\{:03o}", b);
                }
            }
        }
        out
    }

    /// URIs are 7-bit: non-ASCII bytes are percent-encoded. Control
    /// characters make the target unusable and fail the draw.
    fn encode_uri(url: &str) -> Result<String, VitaeError> {
        if url.chars().any(char::is_control) {
            return Err(VitaeError::DrawError(format!(
                "link target {:?} contains control characters",
                url
            )));
        }
        let mut encoded = String::with_capacity(url.len());
        for ch in url.chars() {
            if ch.is_ascii() {
                encoded.push(ch);
            } else {
                let mut buf = [0u8; 4];
                for b in ch.encode_utf8(&mut buf).bytes() {
                    let _ = write!(encoded, "%{:02X}", b);
                }
            }
        }
        Ok(Self::escape_pdf_string(&encoded))
    }

    /// Map a Unicode codepoint to a WinAnsiEncoding byte value.
    ///
    /// WinAnsiEncoding is based on Windows-1252. Most codepoints in
    /// 0x20..=0x7E and 0xA0..=0xFF map directly. The 0x80..=0x9F range
    /// contains special mappings for smart quotes, bullets, dashes, etc.
    fn unicode_to_winansi(ch: char) -> Option<u8> {
        let cp = ch as u32;
        if (0x20..=0x7E).contains(&cp) || (0xA0..=0xFF).contains(&cp) {
            return Some(cp as u8);
        }
        match cp {
            0x20AC => Some(0x80), // Euro sign
            0x201A => Some(0x82), // Single low-9 quotation mark
            0x0192 => Some(0x83), // Latin small letter f with hook
            0x201E => Some(0x84), // Double low-9 quotation mark
            0x2026 => Some(0x85), // Horizontal ellipsis
            0x2020 => Some(0x86), // Dagger
            0x2021 => Some(0x87), // Double dagger
            0x02C6 => Some(0x88), // Modifier letter circumflex accent
            0x2030 => Some(0x89), // Per mille sign
            0x0160 => Some(0x8A), // Latin capital letter S with caron
            0x2039 => Some(0x8B), // Single left-pointing angle quotation
            0x0152 => Some(0x8C), // Latin capital ligature OE
            0x017D => Some(0x8E), // Latin capital letter Z with caron
            0x2018 => Some(0x91), // Left single quotation mark
            0x2019 => Some(0x92), // Right single quotation mark
            0x201C => Some(0x93), // Left double quotation mark
            0x201D => Some(0x94), // Right double quotation mark
            0x2022 => Some(0x95), // Bullet
            0x2013 => Some(0x96), // En dash
            0x2014 => Some(0x97), // Em dash
            0x02DC => Some(0x98), // Small tilde
            0x2122 => Some(0x99), // Trade mark sign
            0x0161 => Some(0x9A), // Latin small letter s with caron
            0x203A => Some(0x9B), // Single right-pointing angle quotation
            0x0153 => Some(0x9C), // Latin small ligature oe
            0x017E => Some(0x9E), // Latin small letter z with caron
            0x0178 => Some(0x9F), // Latin capital letter Y with diaeresis
            _ => None,
        }
    }

    /// Serialize all objects into the final PDF byte stream.
    fn serialize(&self, builder: &PdfBuilder, info_obj_id: Option<usize>) -> Vec<u8> {
        let mut output: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = vec![0; builder.objects.len()];

        // Header
        output.extend_from_slice(b"%PDF-1.7\n");
        output.extend_from_slice(b"%\xe2\xe3\xcf\xd3\n");

        for (i, obj) in builder.objects.iter().enumerate().skip(1) {
            offsets[i] = output.len();
            let header = format!("{} 0 obj\n", i);
            output.extend_from_slice(header.as_bytes());
            output.extend_from_slice(&obj.data);
            output.extend_from_slice(b"\nendobj\n\n");
        }

        let xref_offset = output.len();
        let _ = write!(output, "xref\n0 {}\n", builder.objects.len());
        let _ = write!(output, "0000000000 65535 f \n");
        for offset in offsets.iter().skip(1) {
            let _ = write!(output, "{:010} 00000 n \n", offset);
        }

        let _ = write!(output, "trailer\n<< /Size {} /Root 1 0 R", builder.objects.len());
        if let Some(info_id) = info_obj_id {
            let _ = write!(output, " /Info {} 0 R", info_id);
        }
        let _ = write!(output, " >>\nstartxref\n{}\n%%EOF\n", xref_offset);

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontSpec;

    fn a4(ops: Vec<DrawOp>) -> Vec<LayoutPage> {
        vec![LayoutPage {
            width: 210.0,
            height: 297.0,
            ops,
        }]
    }

    fn text_op(text: &str, font: FontSpec) -> DrawOp {
        DrawOp::Text {
            text: text.to_string(),
            x: 15.0,
            y: 15.0,
            font,
        }
    }

    #[test]
    fn test_escape_pdf_string() {
        assert_eq!(
            PdfWriter::escape_pdf_string("Hello (World)"),
            "Hello \\(World\\)"
        );
        assert_eq!(
            PdfWriter::escape_pdf_string("back\\slash"),
            "back\\\\slash"
        );
    }

    #[test]
    fn test_encode_text_winansi() {
        assert_eq!(PdfWriter::encode_text("C++ • Go"), "C++ \\225 Go");
        assert_eq!(PdfWriter::encode_text("漢"), "?");
    }

    #[test]
    fn test_empty_page_produces_valid_pdf() {
        let bytes = PdfWriter::new().write(&a4(vec![]), &Metadata::default()).unwrap();

        assert!(bytes.starts_with(b"%PDF-1.7"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
        assert!(bytes.windows(4).any(|w| w == b"xref"));
        assert!(bytes.windows(7).any(|w| w == b"trailer"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/BaseFont /Helvetica "));
        assert!(!text.contains("/Info"));
    }

    #[test]
    fn test_media_box_in_points() {
        let bytes = PdfWriter::new().write(&a4(vec![]), &Metadata::default()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/MediaBox [0 0 595.28 841.89]"));
    }

    #[test]
    fn test_metadata_in_pdf() {
        let metadata = Metadata {
            title: Some("Ada (CV)".to_string()),
            author: Some("Ada Lovelace".to_string()),
            subject: None,
            creator: None,
        };
        let bytes = PdfWriter::new().write(&a4(vec![]), &metadata).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("/Title (Ada \\(CV\\))"));
        assert!(text.contains("/Author (Ada Lovelace)"));
        assert!(text.contains("/Info"));
    }

    #[test]
    fn test_each_face_registered_once() {
        let pages = a4(vec![
            text_op("A", FontSpec::normal(10.0)),
            text_op("B", FontSpec::bold(10.0)),
            text_op("C", FontSpec::bold(12.0)),
            text_op("D", FontSpec::italic(9.0)),
        ]);
        let bytes = PdfWriter::new().write(&pages, &Metadata::default()).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        assert_eq!(text.matches("/BaseFont /Helvetica-Bold ").count(), 1);
        assert_eq!(text.matches("/BaseFont /Helvetica-Oblique ").count(), 1);
        assert_eq!(text.matches("/BaseFont /Helvetica ").count(), 1);
    }

    #[test]
    fn test_link_becomes_annotation() {
        let pages = a4(vec![
            text_op("AWS", FontSpec::normal(10.0)),
            DrawOp::Link {
                x: 15.0,
                y: 12.5,
                width: 8.0,
                height: 3.3,
                url: "https://example.com/a(1)".to_string(),
            },
        ]);
        let bytes = PdfWriter::new().write(&pages, &Metadata::default()).unwrap();
        let text = String::from_utf8_lossy(&bytes);

        assert!(text.contains("/Subtype /Link"));
        assert!(text.contains("/URI (https://example.com/a\\(1\\))"));
        assert!(text.contains("/Border [0 0 0]"));
        assert!(text.contains("/Annots ["));
    }

    #[test]
    fn test_no_annots_without_links() {
        let pages = a4(vec![text_op("plain", FontSpec::normal(10.0))]);
        let bytes = PdfWriter::new().write(&pages, &Metadata::default()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(!text.contains("/Annots"));
        assert!(!text.contains("/URI"));
    }

    #[test]
    fn test_uri_encoding() {
        assert_eq!(
            PdfWriter::encode_uri("https://x.org/é").unwrap(),
            "https://x.org/%C3%A9"
        );
        assert!(PdfWriter::encode_uri("https://x.org/\n").is_err());
    }

    #[test]
    fn test_output_is_deterministic() {
        let pages = a4(vec![
            text_op("Ada Lovelace", FontSpec::bold(16.0)),
            DrawOp::Line {
                x1: 15.0,
                y1: 40.0,
                x2: 195.0,
                y2: 40.0,
            },
        ]);
        let metadata = Metadata {
            title: Some("Ada".into()),
            ..Default::default()
        };
        let first = PdfWriter::new().write(&pages, &metadata).unwrap();
        let second = PdfWriter::new().write(&pages, &metadata).unwrap();
        assert_eq!(first, second);
    }
}
