//! # Layout Engine
//!
//! Places a résumé on a single page. There is no reflow to a second page:
//! the flowing template checks the remaining height before every block and
//! skips or truncates what does not fit, the column template draws
//! unconditionally.
//!
//! The engine draws through the [`Surface`] trait and reports what it did
//! with every section in a [`LayoutReport`].

pub mod columns;
pub mod cursor;
pub mod dates;
pub mod fit;
pub mod flowing;
pub mod header;
pub mod page_break;
pub mod sections;

use std::fmt;

use crate::error::VitaeError;
use crate::model::{LayoutConfig, ResumeContent, Template};
use crate::surface::Surface;

pub use cursor::PageCursor;

/// Baseline-to-baseline distance of body text, in millimetres.
pub const LINE_HEIGHT: f64 = 5.0;

/// Space a horizontal rule takes between flowing sections.
pub const SECTION_SPACING: f64 = 8.0;

/// What happened to one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionOutcome {
    /// Everything was drawn.
    Full,
    /// The heading was drawn but some content was dropped or cut.
    Partial,
    /// Nothing was drawn, because the data was empty or there was no room.
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Summary,
    Education,
    Projects,
    Skills,
    Certifications,
}

impl Section {
    /// The heading text drawn above the section.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Summary => "SUMMARY",
            Section::Education => "EDUCATION",
            Section::Projects => "PROJECTS",
            Section::Skills => "SKILLS",
            Section::Certifications => "CERTIFICATIONS",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Section outcomes in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutReport {
    pub template: Template,
    pub sections: Vec<(Section, SectionOutcome)>,
}

impl LayoutReport {
    pub fn new(template: Template) -> Self {
        Self {
            template,
            sections: Vec::with_capacity(5),
        }
    }

    pub fn record(&mut self, section: Section, outcome: SectionOutcome) {
        self.sections.push((section, outcome));
    }

    pub fn outcome(&self, section: Section) -> Option<SectionOutcome> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, outcome)| *outcome)
    }
}

/// Draw `content` with the template it selects.
pub fn lay_out<S: Surface>(
    surface: &mut S,
    content: &ResumeContent,
    config: &LayoutConfig,
) -> Result<LayoutReport, VitaeError> {
    match content.selected_template {
        Template::Template1 => flowing::render(surface, content, config),
        Template::Template2 => columns::render(surface, content, config),
    }
}
