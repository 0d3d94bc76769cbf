//! Projects, the only section whose body can be cut mid-paragraph.

use tracing::debug;

use crate::error::VitaeError;
use crate::font::FontSpec;
use crate::layout::dates::project_range;
use crate::layout::fit::fit_font;
use crate::layout::page_break::{decide_break, BreakDecision};
use crate::layout::{PageCursor, Section, SectionOutcome, LINE_HEIGHT};
use crate::model::ProjectEntry;
use crate::surface::Surface;

use super::{block_height, draw_heading, draw_lines, BODY_FONT, COLUMN_HEADING, FLOWING_HEADING};

pub const PROJECT_PLACEHOLDER: &str = "Untitled Project";

/// Drawn on the line after the last detail line that fit.
pub const ELLIPSIS: &str = "...";

const MIN_BLOCK: f64 = 30.0;
const ENTRY_BLOCK: f64 = 15.0;
const DETAILS_BLOCK: f64 = 12.0;
/// Kept free below truncated details.
const DETAILS_RESERVE: f64 = 10.0;

fn project_label(project: &ProjectEntry) -> &str {
    if project.name.trim().is_empty() {
        PROJECT_PLACEHOLDER
    } else {
        &project.name
    }
}

pub fn render_flowing<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    projects: &[ProjectEntry],
) -> Result<SectionOutcome, VitaeError> {
    if projects.is_empty() {
        return Ok(SectionOutcome::Skipped);
    }
    if !cursor.has_space(MIN_BLOCK) {
        debug!(remaining = cursor.remaining_vertical(), "projects skipped");
        return Ok(SectionOutcome::Skipped);
    }

    draw_heading(surface, cursor, Section::Projects, FLOWING_HEADING)?;

    let mut outcome = SectionOutcome::Full;
    for (index, project) in projects.iter().enumerate() {
        if !cursor.has_space(ENTRY_BLOCK) {
            debug!(index, "project dropped");
            outcome = SectionOutcome::Partial;
            continue;
        }
        if !draw_flowing_entry(surface, cursor, project)? {
            outcome = SectionOutcome::Partial;
        }
    }
    Ok(outcome)
}

/// Returns false if the details were cut or left out.
fn draw_flowing_entry<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    project: &ProjectEntry,
) -> Result<bool, VitaeError> {
    let y = cursor.y();

    let name = project_label(project);
    let font = fit_font(&*surface, name, FontSpec::bold(10.0), cursor.page_width() / 2.0);
    surface.set_font(font);
    surface.draw_text(name, cursor.left(), y)?;

    surface.set_font(BODY_FONT);
    if let Some(dates) = project_range(project) {
        let x = cursor.right() - surface.text_width(&dates);
        surface.draw_text(&dates, x, y)?;
    }
    cursor.advance(4.0);

    let mut complete = true;
    if !project.details.trim().is_empty() {
        if cursor.has_space(DETAILS_BLOCK) {
            let lines = surface.split_text(&project.details, cursor.width());
            complete = draw_details(surface, cursor, &lines)?;
        } else {
            debug!(project = name, "project details left out");
            complete = false;
        }
    }
    cursor.advance(4.0);
    Ok(complete)
}

/// Draw as many detail lines as the page allows. When some do not fit,
/// exactly `floor(budget / LINE_HEIGHT)` lines are drawn followed by
/// [`ELLIPSIS`]. Returns false in that case.
pub fn draw_details<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    lines: &[String],
) -> Result<bool, VitaeError> {
    let budget = cursor.remaining_vertical() - DETAILS_RESERVE;
    match decide_break(budget, lines.len(), LINE_HEIGHT) {
        BreakDecision::Place => {
            draw_lines(surface, cursor, lines)?;
            cursor.advance(block_height(lines.len()));
            Ok(true)
        }
        BreakDecision::Truncate { lines_that_fit } => {
            debug!(kept = lines_that_fit, total = lines.len(), "project details truncated");
            draw_lines(surface, cursor, &lines[..lines_that_fit])?;
            let kept = block_height(lines_that_fit);
            surface.draw_text(ELLIPSIS, cursor.left(), cursor.y() + kept)?;
            cursor.advance(kept + LINE_HEIGHT);
            Ok(false)
        }
    }
}

pub fn render_column<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    projects: &[ProjectEntry],
) -> Result<SectionOutcome, VitaeError> {
    if projects.is_empty() {
        return Ok(SectionOutcome::Skipped);
    }

    draw_heading(surface, cursor, Section::Projects, COLUMN_HEADING)?;

    for project in projects {
        surface.set_font(FontSpec::bold(10.0));
        surface.draw_text(project_label(project), cursor.left(), cursor.y())?;
        cursor.advance(6.0);

        surface.set_font(BODY_FONT);
        if let Some(dates) = project_range(project) {
            surface.draw_text(&dates, cursor.left(), cursor.y())?;
            cursor.advance(LINE_HEIGHT);
        }
        if !project.details.trim().is_empty() {
            let lines = surface.split_text(&project.details, cursor.width());
            draw_lines(surface, cursor, &lines)?;
            cursor.advance(block_height(lines.len()));
        }
        cursor.advance(8.0);
    }
    Ok(SectionOutcome::Full)
}
