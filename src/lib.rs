//! # Vitae
//!
//! A single-page résumé layout engine.
//!
//! A résumé is one sheet of paper. Vitae never spills onto a second page:
//! every block is measured against the bottom margin before it is drawn,
//! and what does not fit is left out or cut with an ellipsis. Two fixed
//! templates are available, a flowing single column and a two-column split.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON record)
//!       ↓
//!   [model]    — Résumé record, content, page options
//!       ↓
//!   [layout]   — Templates and section renderers over a page cursor
//!       ↓
//!   [surface]  — Drawing contract (measure, wrap, draw)
//!       ↓
//!   [pdf]      — Standard-font PDF serialization
//! ```
//!
//! Records live in a [`store::RecordStore`]; the CLI reads one from a JSON
//! file and exports each selected résumé to disk.

pub mod error;
pub mod font;
pub mod layout;
pub mod model;
pub mod pdf;
pub mod store;
pub mod surface;
pub mod text;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::path::{Path, PathBuf};

use tracing::info;

pub use error::VitaeError;
use layout::LayoutReport;
use model::{LayoutConfig, ResumeRecord};
use pdf::{LayoutPage, Metadata, PdfSurface};

/// A finished résumé document.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Name to save the document under, derived from the record name.
    pub file_name: String,
    /// The PDF file.
    pub bytes: Vec<u8>,
    /// What happened to every section.
    pub report: LayoutReport,
    /// The drawn page, for inspection.
    pub page: LayoutPage,
}

/// Lay out a record on a fresh page, without serializing it.
///
/// The record is only read. Failures come back unwrapped; [`render`]
/// is where they become [`VitaeError::RenderFailed`].
pub fn compose(record: &ResumeRecord, config: &LayoutConfig) -> Result<(LayoutPage, LayoutReport), VitaeError> {
    let (surface, report) = draw(record, config)?;
    Ok((surface.into_page(), report))
}

fn draw(record: &ResumeRecord, config: &LayoutConfig) -> Result<(PdfSurface, LayoutReport), VitaeError> {
    let mut surface = PdfSurface::new(&config.page);
    let report = layout::lay_out(&mut surface, &record.data, config)?;
    Ok((surface, report))
}

/// Render a record to PDF bytes with its selected template.
pub fn render(record: &ResumeRecord, config: &LayoutConfig) -> Result<RenderedDocument, VitaeError> {
    let template = record.data.selected_template;
    info!(id = %record.id, %template, "rendering resume");

    let result = draw(record, config).and_then(|(surface, report)| {
        let bytes = surface.finish(&metadata(record))?;
        Ok((surface.into_page(), report, bytes))
    });

    match result {
        Ok((page, report, bytes)) => {
            info!(id = %record.id, bytes = bytes.len(), sections = ?report.sections, "rendered resume");
            Ok(RenderedDocument {
                file_name: record.file_name(),
                bytes,
                report,
                page,
            })
        }
        Err(e) => {
            tracing::error!(id = %record.id, %template, error = %e, "render failed");
            Err(VitaeError::RenderFailed {
                template,
                source: Box::new(e),
            })
        }
    }
}

/// Render with the default page and caption.
pub fn render_default(record: &ResumeRecord) -> Result<RenderedDocument, VitaeError> {
    render(record, &LayoutConfig::default())
}

/// Render a record described as JSON.
pub fn render_json(json: &str) -> Result<RenderedDocument, VitaeError> {
    let record: ResumeRecord = serde_json::from_str(json)?;
    render_default(&record)
}

/// Render a record and save it in `dir` under its file name. Nothing is
/// written if the render fails.
///
/// Returns where the file went along with the rendered document.
pub fn export(record: &ResumeRecord, config: &LayoutConfig, dir: &Path) -> Result<(PathBuf, RenderedDocument), VitaeError> {
    let document = render(record, config)?;
    let path = dir.join(&document.file_name);
    std::fs::write(&path, &document.bytes)?;
    info!(path = %path.display(), "saved resume");
    Ok((path, document))
}

fn metadata(record: &ResumeRecord) -> Metadata {
    let author = record.data.name.trim();
    Metadata {
        title: Some(record.name.clone()),
        author: (!author.is_empty()).then(|| author.to_string()),
        subject: Some("Resume".to_string()),
        creator: None,
    }
}
