//! Skills: an inline list in the flowing template, bullets in the column.

use tracing::debug;

use crate::error::VitaeError;
use crate::layout::fit::fit_font;
use crate::layout::{PageCursor, Section, SectionOutcome};
use crate::surface::Surface;

use super::{block_height, draw_heading, draw_lines, BODY_FONT, COLUMN_HEADING, FLOWING_HEADING};

pub const SKILL_SEPARATOR: &str = " • ";

const MIN_BLOCK: f64 = 15.0;

/// `skills` must already be filtered of blanks.
pub fn render_flowing<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    skills: &[&str],
) -> Result<SectionOutcome, VitaeError> {
    if skills.is_empty() {
        return Ok(SectionOutcome::Skipped);
    }
    if !cursor.has_space(MIN_BLOCK) {
        debug!(remaining = cursor.remaining_vertical(), "skills skipped");
        return Ok(SectionOutcome::Skipped);
    }

    let text = skills.join(SKILL_SEPARATOR);
    let font = fit_font(&*surface, &text, BODY_FONT, cursor.width());
    let lines = surface.wrap(&text, cursor.width(), font);
    let body = block_height(lines.len());
    if !cursor.has_space(FLOWING_HEADING.advance + body) {
        debug!(lines = lines.len(), "skills do not fit, skipped");
        return Ok(SectionOutcome::Skipped);
    }

    draw_heading(surface, cursor, Section::Skills, FLOWING_HEADING)?;
    surface.set_font(font);
    draw_lines(surface, cursor, &lines)?;
    cursor.advance(body + 8.0);
    Ok(SectionOutcome::Full)
}

/// One bullet per skill, shrunk or wrapped to the column width.
pub fn render_column<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    skills: &[&str],
) -> Result<SectionOutcome, VitaeError> {
    if skills.is_empty() {
        return Ok(SectionOutcome::Skipped);
    }

    draw_heading(surface, cursor, Section::Skills, COLUMN_HEADING)?;

    for skill in skills {
        let bullet = format!("• {}", skill);
        let font = fit_font(&*surface, &bullet, BODY_FONT, cursor.width());
        let lines = surface.wrap(&bullet, cursor.width(), font);
        surface.set_font(font);
        draw_lines(surface, cursor, &lines)?;
        cursor.advance(block_height(lines.len()));
    }
    Ok(SectionOutcome::Full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontSpec;
    use crate::layout::sections::testing::Recorder;

    #[test]
    fn flowing_skills_are_joined_in_order() {
        let mut surface = Recorder::a4();
        let mut cursor = PageCursor::new(210.0, 297.0, 15.0);
        let outcome = render_flowing(&mut surface, &mut cursor, &["Rust", "C++", "SQL"]).unwrap();
        assert_eq!(outcome, SectionOutcome::Full);
        assert_eq!(surface.drawn(), vec!["SKILLS", "Rust • C++ • SQL"]);
        assert_eq!(cursor.y(), 15.0 + 6.0 + 5.0 + 8.0);
    }

    #[test]
    fn no_skills_no_heading() {
        let mut surface = Recorder::a4();
        let mut cursor = PageCursor::new(210.0, 297.0, 15.0);
        let outcome = render_flowing(&mut surface, &mut cursor, &[]).unwrap();
        assert_eq!(outcome, SectionOutcome::Skipped);
        assert!(surface.texts.is_empty());
    }

    #[test]
    fn long_list_shrinks_before_wrapping() {
        let mut surface = Recorder::a4();
        let mut cursor = PageCursor::new(210.0, 297.0, 15.0);
        let skills = ["Distributed Systems"; 12];
        render_flowing(&mut surface, &mut cursor, &skills).unwrap();
        let (_, _, _, font) = &surface.texts[1];
        assert_eq!(*font, FontSpec::normal(8.0));
    }

    #[test]
    fn column_skills_are_bulleted() {
        let mut surface = Recorder::a4();
        let mut cursor = PageCursor::new(210.0, 297.0, 15.0).column(15.0, 63.5);
        render_column(&mut surface, &mut cursor, &["Rust", "C++"]).unwrap();
        assert_eq!(surface.drawn(), vec!["SKILLS", "• Rust", "• C++"]);
        assert_eq!(cursor.y(), 15.0 + 8.0 + 10.0);
    }
}
