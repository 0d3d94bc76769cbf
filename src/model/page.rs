//! Page geometry and layout options.
//!
//! Lengths are millimetres, the user unit every layout decision is made in.
//! The PDF writer converts to points when it serializes.

use serde::{Deserialize, Serialize};

/// Default footer caption drawn by the flowing template.
pub const DEFAULT_FOOTER_CAPTION: &str = "Resume generated by ResumeBuilder";

/// Options for one render. Every field has a default, so an empty JSON
/// object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    #[serde(default)]
    pub page: PageConfig,

    /// Caption in the bottom margin area of the flowing template.
    /// `null` disables it.
    #[serde(default = "default_footer_caption")]
    pub footer_caption: Option<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page: PageConfig::default(),
            footer_caption: default_footer_caption(),
        }
    }
}

fn default_footer_caption() -> Option<String> {
    Some(DEFAULT_FOOTER_CAPTION.to_string())
}

/// Configuration for the single page: size and uniform margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Page size. Defaults to A4.
    #[serde(default)]
    pub size: PageSize,

    /// Margin on every side, in millimetres.
    #[serde(default = "default_margin")]
    pub margin: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            size: PageSize::A4,
            margin: default_margin(),
        }
    }
}

fn default_margin() -> f64 {
    15.0
}

/// Standard page sizes in millimetres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Custom {
        width: f64,
        height: f64,
    },
}

impl PageSize {
    /// Returns (width, height) in millimetres.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}
