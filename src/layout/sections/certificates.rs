//! Certifications, with an invisible link over each name that has one.

use tracing::debug;

use crate::error::VitaeError;
use crate::layout::{PageCursor, Section, SectionOutcome};
use crate::model::CertificateEntry;
use crate::surface::Surface;

use super::{draw_heading, BODY_FONT, COLUMN_HEADING, FLOWING_HEADING};

const MIN_BLOCK: f64 = 20.0;
const FLOWING_STEP: f64 = 8.0;
const COLUMN_STEP: f64 = 6.0;

fn draw_certificate<S: Surface>(surface: &mut S, cursor: &PageCursor, certificate: &CertificateEntry) -> Result<(), VitaeError> {
    match certificate.link.as_deref() {
        Some(url) => surface.draw_text_with_link(&certificate.name, cursor.left(), cursor.y(), url),
        None => surface.draw_text(&certificate.name, cursor.left(), cursor.y()),
    }
}

/// `certificates` must already be filtered of unnamed entries.
pub fn render_flowing<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    certificates: &[&CertificateEntry],
) -> Result<SectionOutcome, VitaeError> {
    if certificates.is_empty() {
        return Ok(SectionOutcome::Skipped);
    }
    if !cursor.has_space(MIN_BLOCK) {
        debug!(remaining = cursor.remaining_vertical(), "certifications skipped");
        return Ok(SectionOutcome::Skipped);
    }

    draw_heading(surface, cursor, Section::Certifications, FLOWING_HEADING)?;
    surface.set_font(BODY_FONT);

    let mut outcome = SectionOutcome::Full;
    for certificate in certificates {
        if !cursor.has_space(FLOWING_STEP) {
            debug!(name = %certificate.name, "certificate dropped");
            outcome = SectionOutcome::Partial;
            continue;
        }
        draw_certificate(surface, cursor, certificate)?;
        cursor.advance(FLOWING_STEP);
    }
    Ok(outcome)
}

pub fn render_column<S: Surface>(
    surface: &mut S,
    cursor: &mut PageCursor,
    certificates: &[&CertificateEntry],
) -> Result<SectionOutcome, VitaeError> {
    if certificates.is_empty() {
        return Ok(SectionOutcome::Skipped);
    }

    draw_heading(surface, cursor, Section::Certifications, COLUMN_HEADING)?;
    surface.set_font(BODY_FONT);
    for certificate in certificates {
        draw_certificate(surface, cursor, certificate)?;
        cursor.advance(COLUMN_STEP);
    }
    Ok(SectionOutcome::Full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::sections::testing::Recorder;

    fn cert(name: &str, link: Option<&str>) -> CertificateEntry {
        CertificateEntry {
            name: name.into(),
            link: link.map(String::from),
        }
    }

    #[test]
    fn linked_certificates_get_a_link() {
        let aws = cert("AWS", Some("https://aws.example/cert"));
        let plain = cert("First Aid", None);
        let mut surface = Recorder::a4();
        let mut cursor = PageCursor::new(210.0, 297.0, 15.0);
        let outcome = render_flowing(&mut surface, &mut cursor, &[&aws, &plain]).unwrap();
        assert_eq!(outcome, SectionOutcome::Full);
        assert_eq!(surface.drawn(), vec!["CERTIFICATIONS", "AWS", "First Aid"]);
        assert_eq!(
            surface.links,
            vec![("AWS".to_string(), "https://aws.example/cert".to_string())]
        );
        assert_eq!(cursor.y(), 15.0 + 6.0 + 16.0);
    }

    #[test]
    fn entries_below_the_bottom_are_dropped() {
        let certs: Vec<CertificateEntry> = (0..6).map(|i| cert(&format!("Cert {}", i), None)).collect();
        let refs: Vec<&CertificateEntry> = certs.iter().collect();
        let mut surface = Recorder::a4();
        let mut cursor = PageCursor::new(210.0, 297.0, 15.0);
        cursor.advance(240.0);
        // 27mm left, heading 6, then 21mm: room for two 8mm entries.
        let outcome = render_flowing(&mut surface, &mut cursor, &refs).unwrap();
        assert_eq!(outcome, SectionOutcome::Partial);
        assert_eq!(surface.drawn(), vec!["CERTIFICATIONS", "Cert 0", "Cert 1"]);
    }

    #[test]
    fn column_certificates_step_six() {
        let aws = cert("AWS", Some("https://aws.example/cert"));
        let mut surface = Recorder::a4();
        let mut cursor = PageCursor::new(210.0, 297.0, 15.0).column(83.5, 195.0);
        render_column(&mut surface, &mut cursor, &[&aws, &aws]).unwrap();
        assert_eq!(surface.links.len(), 2);
        assert_eq!(cursor.y(), 15.0 + 8.0 + 12.0);
    }
}
