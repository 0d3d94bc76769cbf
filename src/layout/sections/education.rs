//! Schools and colleges.

use tracing::debug;

use crate::error::VitaeError;
use crate::font::FontSpec;
use crate::layout::dates::education_range;
use crate::layout::fit::fit_font;
use crate::layout::{PageCursor, Section, SectionOutcome, LINE_HEIGHT};
use crate::model::{EducationEntry, EducationKind};
use crate::surface::Surface;

use super::{block_height, draw_heading, draw_lines, BODY_FONT, COLUMN_HEADING, FLOWING_HEADING};

pub const INSTITUTION_PLACEHOLDER: &str = "Unknown Institution";

const MIN_BLOCK: f64 = 40.0;
const ENTRY_BLOCK: f64 = 20.0;
const DETAIL_FONT: FontSpec = FontSpec::normal(9.0);
const DETAIL_STEP: f64 = 4.0;

fn institution_label(entry: &EducationEntry) -> &str {
    if entry.institution.trim().is_empty() {
        INSTITUTION_PLACEHOLDER
    } else {
        &entry.institution
    }
}

/// One row per entry: institution left, score centred, dates right, with
/// small detail lines underneath. Entries that do not fit are dropped.
pub fn render_flowing<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    entries: &[EducationEntry],
) -> Result<SectionOutcome, VitaeError> {
    if entries.is_empty() {
        return Ok(SectionOutcome::Skipped);
    }
    if !cursor.has_space(MIN_BLOCK) {
        debug!(remaining = cursor.remaining_vertical(), "education skipped");
        return Ok(SectionOutcome::Skipped);
    }

    draw_heading(surface, cursor, Section::Education, FLOWING_HEADING)?;

    let mut outcome = SectionOutcome::Full;
    for (index, entry) in entries.iter().enumerate() {
        if !cursor.has_space(ENTRY_BLOCK) {
            debug!(index, "education entry dropped");
            outcome = SectionOutcome::Partial;
            continue;
        }
        if !draw_flowing_entry(surface, cursor, entry)? {
            outcome = SectionOutcome::Partial;
        }
    }
    Ok(outcome)
}

/// Returns false if any detail line was dropped.
fn draw_flowing_entry<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    entry: &EducationEntry,
) -> Result<bool, VitaeError> {
    let y = cursor.y();

    let institution = institution_label(entry);
    let font = fit_font(&*surface, institution, FontSpec::bold(10.0), cursor.page_width() / 3.0);
    surface.set_font(font);
    surface.draw_text(institution, cursor.left(), y)?;

    surface.set_font(BODY_FONT);
    if let Some(score) = entry.kind.score() {
        let x = (cursor.page_width() - surface.text_width(&score)) / 2.0;
        surface.draw_text(&score, x, y)?;
    }
    if let Some(dates) = education_range(entry) {
        let x = cursor.right() - surface.text_width(&dates);
        surface.draw_text(&dates, x, y)?;
    }
    cursor.advance(5.0);

    let mut complete = true;
    surface.set_font(DETAIL_FONT);
    for line in flowing_details(&entry.kind) {
        if !cursor.has_space(DETAIL_STEP) {
            complete = false;
            continue;
        }
        surface.draw_text(&line, cursor.left(), cursor.y())?;
        cursor.advance(DETAIL_STEP);
    }
    cursor.advance(DETAIL_STEP);
    Ok(complete)
}

fn flowing_details(kind: &EducationKind) -> Vec<String> {
    match kind {
        EducationKind::School { board, .. } => board.iter().map(|b| format!("Board: {}", b)).collect(),
        EducationKind::College { degree, course, .. } => degree
            .iter()
            .map(|d| format!("Degree: {}", d))
            .chain(course.iter().map(|c| format!("Course: {}", c)))
            .collect(),
    }
}

fn column_details(kind: &EducationKind) -> Vec<String> {
    let mut lines = Vec::new();
    match kind {
        EducationKind::School { board, percentage } => {
            if let Some(board) = board {
                lines.push(format!("Board: {}", board));
            }
            if let Some(percentage) = percentage {
                lines.push(format!("Percentage: {}%", percentage));
            }
        }
        EducationKind::College {
            degree,
            course,
            cgpa,
        } => {
            if let Some(degree) = degree {
                lines.push(format!("Degree: {}", degree));
            }
            if let Some(course) = course {
                lines.push(format!("Course: {}", course));
            }
            if let Some(cgpa) = cgpa {
                lines.push(format!("CGPA: {}", cgpa));
            }
        }
    }
    lines
}

/// Stacked entries separated by short rules. Draws everything.
pub fn render_column<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    entries: &[EducationEntry],
) -> Result<SectionOutcome, VitaeError> {
    if entries.is_empty() {
        return Ok(SectionOutcome::Skipped);
    }

    draw_heading(surface, cursor, Section::Education, COLUMN_HEADING)?;

    for (index, entry) in entries.iter().enumerate() {
        surface.set_font(FontSpec::bold(10.0));
        let institution = surface.split_text(institution_label(entry), cursor.width());
        draw_lines(surface, cursor, &institution)?;
        cursor.advance(block_height(institution.len()) + 2.0);

        surface.set_font(BODY_FONT);
        for line in column_details(&entry.kind) {
            surface.draw_text(&line, cursor.left(), cursor.y())?;
            cursor.advance(LINE_HEIGHT);
        }
        if let Some(dates) = education_range(entry) {
            surface.draw_text(&dates, cursor.left(), cursor.y())?;
            cursor.advance(LINE_HEIGHT);
        }

        if index + 1 < entries.len() {
            surface.draw_line(cursor.left(), cursor.y(), cursor.right(), cursor.y())?;
            cursor.advance(8.0);
        }
    }
    cursor.advance(10.0);
    Ok(SectionOutcome::Full)
}
