//! Template B: education and skills on the left, everything else on the
//! right, split by a vertical divider.
//!
//! Neither column checks the page bound. Long content runs past the bottom
//! margin and off the page.

use crate::error::VitaeError;
use crate::model::{CertificateEntry, LayoutConfig, ResumeContent, Template};
use crate::surface::Surface;

use super::sections::{certificates, education, projects, skills, summary};
use super::{header, LayoutReport, PageCursor, Section};

/// Divider position as a share of the page width.
pub const DIVIDER_RATIO: f64 = 0.35;

/// Space between the divider and the text on either side.
pub const GUTTER: f64 = 10.0;

pub fn render<S: Surface>(
    surface: &mut S,
    content: &ResumeContent,
    config: &LayoutConfig,
) -> Result<LayoutReport, VitaeError> {
    let mut cursor = PageCursor::new(surface.page_width(), surface.page_height(), config.page.margin);
    let mut report = LayoutReport::new(Template::Template2);

    header::draw(surface, &mut cursor, content)?;
    cursor.advance(15.0);

    let divider = cursor.page_width() * DIVIDER_RATIO;
    surface.draw_line(divider, cursor.y(), divider, cursor.max_y())?;

    let mut left = cursor.column(cursor.margin(), divider - GUTTER);
    let mut right = cursor.column(divider + GUTTER, cursor.right());

    let outcome = education::render_column(surface, &mut left, &content.education)?;
    report.record(Section::Education, outcome);

    let visible: Vec<&str> = content.visible_skills().collect();
    let outcome = skills::render_column(surface, &mut left, &visible)?;
    report.record(Section::Skills, outcome);

    let outcome = summary::render_column(surface, &mut right, &content.summary)?;
    report.record(Section::Summary, outcome);

    let outcome = projects::render_column(surface, &mut right, &content.projects)?;
    report.record(Section::Projects, outcome);

    let visible: Vec<&CertificateEntry> = content.visible_certificates().collect();
    let outcome = certificates::render_column(surface, &mut right, &visible)?;
    report.record(Section::Certifications, outcome);

    Ok(report)
}
