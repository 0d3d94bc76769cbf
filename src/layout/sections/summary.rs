//! The free-text summary paragraph.

use tracing::debug;

use crate::error::VitaeError;
use crate::font::FontSpec;
use crate::surface::Surface;

use super::{block_height, draw_heading, draw_lines, BODY_FONT, COLUMN_HEADING, FLOWING_HEADING};
use crate::layout::{PageCursor, Section, SectionOutcome};

const MIN_BLOCK: f64 = 30.0;
const FLOWING_BODY: FontSpec = FontSpec::normal(11.0);

/// Heading and paragraph, or nothing: a summary is never cut.
pub fn render_flowing<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    summary: &str,
) -> Result<SectionOutcome, VitaeError> {
    if summary.trim().is_empty() {
        return Ok(SectionOutcome::Skipped);
    }
    if !cursor.has_space(MIN_BLOCK) {
        debug!(remaining = cursor.remaining_vertical(), "summary skipped");
        return Ok(SectionOutcome::Skipped);
    }

    let lines = surface.wrap(summary, cursor.width(), FLOWING_BODY);
    let body = block_height(lines.len());
    if !cursor.has_space(FLOWING_HEADING.advance + body) {
        debug!(lines = lines.len(), "summary does not fit, skipped");
        return Ok(SectionOutcome::Skipped);
    }

    draw_heading(surface, cursor, Section::Summary, FLOWING_HEADING)?;
    surface.set_font(FLOWING_BODY);
    draw_lines(surface, cursor, &lines)?;
    cursor.advance(body + 5.0);
    Ok(SectionOutcome::Full)
}

pub fn render_column<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    summary: &str,
) -> Result<SectionOutcome, VitaeError> {
    if summary.trim().is_empty() {
        return Ok(SectionOutcome::Skipped);
    }

    draw_heading(surface, cursor, Section::Summary, COLUMN_HEADING)?;
    surface.set_font(BODY_FONT);
    let lines = surface.split_text(summary, cursor.width());
    draw_lines(surface, cursor, &lines)?;
    cursor.advance(block_height(lines.len()) + 15.0);
    Ok(SectionOutcome::Full)
}
