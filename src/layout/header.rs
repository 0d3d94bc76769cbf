//! The centred name and contact block both templates open with.

use crate::error::VitaeError;
use crate::font::FontSpec;
use crate::model::ResumeContent;
use crate::surface::Surface;

use super::PageCursor;

pub const NAME_PLACEHOLDER: &str = "Your Name";

const NAME_FONT: FontSpec = FontSpec::bold(16.0);
const CONTACT_FONT: FontSpec = FontSpec::normal(12.0);

/// Draw name, contact line, country and the rule under them. The cursor is
/// left on the rule; each template adds its own gap below it.
pub fn draw<S: Surface>(surface: &mut S, cursor: &mut PageCursor, content: &ResumeContent) -> Result<(), VitaeError> {
    let page_width = cursor.page_width();

    let name = if content.name.trim().is_empty() {
        NAME_PLACEHOLDER
    } else {
        content.name.as_str()
    };
    surface.set_font(NAME_FONT);
    let x = surface.center_x(name, NAME_FONT, page_width);
    surface.draw_text(name, x, cursor.y())?;
    cursor.advance(10.0);

    surface.set_font(CONTACT_FONT);
    let contact = contact_line(&content.email, &content.phone);
    if !contact.is_empty() {
        let x = surface.center_x(&contact, CONTACT_FONT, page_width);
        surface.draw_text(&contact, x, cursor.y())?;
        cursor.advance(8.0);
    }

    let country = content.country.trim();
    if !country.is_empty() {
        let x = surface.center_x(country, CONTACT_FONT, page_width);
        surface.draw_text(country, x, cursor.y())?;
        cursor.advance(8.0);
    }

    cursor.advance(5.0);
    surface.draw_line(cursor.left(), cursor.y(), cursor.right(), cursor.y())?;
    Ok(())
}

/// `email | phone`, with either side optional.
pub fn contact_line(email: &str, phone: &str) -> String {
    [email.trim(), phone.trim()]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" | ")
}
