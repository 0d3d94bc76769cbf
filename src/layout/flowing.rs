//! Template A: one column, top to bottom, ruled between sections.

use tracing::debug;

use crate::error::VitaeError;
use crate::font::FontSpec;
use crate::model::{CertificateEntry, LayoutConfig, ResumeContent, Template};
use crate::surface::Surface;

use super::sections::{certificates, education, projects, skills, summary};
use super::{header, LayoutReport, PageCursor, Section, SectionOutcome, SECTION_SPACING};

const RULE_GUARD: f64 = 5.0;
const FOOTER_GUARD: f64 = 10.0;
const FOOTER_FONT: FontSpec = FontSpec::italic(9.0);

pub fn render<S: Surface>(
    surface: &mut S,
    content: &ResumeContent,
    config: &LayoutConfig,
) -> Result<LayoutReport, VitaeError> {
    let mut cursor = PageCursor::new(surface.page_width(), surface.page_height(), config.page.margin);
    let mut report = LayoutReport::new(Template::Template1);

    header::draw(surface, &mut cursor, content)?;
    cursor.advance(10.0);

    let outcome = summary::render_flowing(surface, &mut cursor, &content.summary)?;
    finish_section(surface, &mut cursor, &mut report, Section::Summary, outcome)?;

    let outcome = education::render_flowing(surface, &mut cursor, &content.education)?;
    finish_section(surface, &mut cursor, &mut report, Section::Education, outcome)?;

    let outcome = projects::render_flowing(surface, &mut cursor, &content.projects)?;
    finish_section(surface, &mut cursor, &mut report, Section::Projects, outcome)?;

    let visible: Vec<&str> = content.visible_skills().collect();
    let outcome = skills::render_flowing(surface, &mut cursor, &visible)?;
    finish_section(surface, &mut cursor, &mut report, Section::Skills, outcome)?;

    let visible: Vec<&CertificateEntry> = content.visible_certificates().collect();
    let outcome = certificates::render_flowing(surface, &mut cursor, &visible)?;
    finish_section(surface, &mut cursor, &mut report, Section::Certifications, outcome)?;

    if let Some(caption) = config.footer_caption.as_deref() {
        if cursor.has_space(FOOTER_GUARD) {
            surface.set_font(FOOTER_FONT);
            surface.draw_text(caption, cursor.left(), cursor.max_y() - 5.0)?;
        } else {
            debug!("footer caption left out");
        }
    }

    Ok(report)
}

/// Record the outcome and rule off a section that drew anything.
fn finish_section<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    report: &mut LayoutReport,
    section: Section,
    outcome: SectionOutcome,
) -> Result<(), VitaeError> {
    report.record(section, outcome);
    if outcome != SectionOutcome::Skipped && cursor.has_space(RULE_GUARD) {
        surface.draw_line(cursor.left(), cursor.y(), cursor.right(), cursor.y())?;
        cursor.advance(SECTION_SPACING);
    }
    Ok(())
}
