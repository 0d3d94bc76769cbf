//! Structured error types for the Vitae layout engine.
//!
//! Overflow is not an error: content that does not fit is skipped or
//! truncated silently. Errors cover record parsing, the drawing backend,
//! the record store and the filesystem.

use thiserror::Error;

use crate::model::Template;

/// The notice shown to a user when a résumé could not be produced.
pub const RENDER_FAILED_NOTICE: &str = "Error generating PDF. Please try again.";

/// The unified error type returned by all public Vitae API functions.
#[derive(Debug, Error)]
pub enum VitaeError {
    /// JSON input failed to parse as a résumé record or store.
    #[error("Failed to parse resume data: {source}{}", format_hint(.hint))]
    ParseError {
        #[source]
        source: serde_json::Error,
        hint: String,
    },

    /// The drawing backend rejected an operation.
    #[error("Draw error: {0}")]
    DrawError(String),

    /// A render was abandoned. The partially drawn document is discarded.
    #[error("Failed to render {template} layout: {source}")]
    RenderFailed {
        template: Template,
        #[source]
        source: Box<VitaeError>,
    },

    /// No record with the given id exists in the store.
    #[error("No resume with id {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl VitaeError {
    /// The single user-facing message for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            VitaeError::RenderFailed { .. } | VitaeError::DrawError(_) => RENDER_FAILED_NOTICE,
            VitaeError::ParseError { .. } => "Error: Resume data is corrupted",
            VitaeError::NotFound(_) => "Resume not found",
            VitaeError::Io(_) => "Could not access resume storage",
        }
    }
}

fn format_hint(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for VitaeError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the resume record schema. Check field names and types.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        VitaeError::ParseError { source: e, hint }
    }
}
