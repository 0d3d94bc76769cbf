//! # Résumé Model
//!
//! The input representation for the layout engine: one stored résumé record
//! with its renderable payload. The shape mirrors the JSON the browser editor
//! keeps in local storage (camelCase keys, lenient about `null` and numbers),
//! with one deliberate change: education entries are a tagged variant rather
//! than a bag of mutually exclusive optional fields.
//!
//! The engine only ever reads these types.

pub mod de;
pub mod page;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use page::{LayoutConfig, PageConfig, PageSize};

/// Label used for records saved without a name.
pub const UNTITLED_RESUME: &str = "Untitled Resume";

/// A stored résumé: identity, timestamps and content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    #[serde(default = "RecordId::generate")]
    pub id: RecordId,

    /// Display label, also the base of the exported file name.
    #[serde(default = "default_record_name", deserialize_with = "record_name")]
    pub name: String,

    #[serde(default = "Utc::now", deserialize_with = "de::timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now", deserialize_with = "de::timestamp")]
    pub updated_at: DateTime<Utc>,

    #[serde(default, deserialize_with = "de::or_default")]
    pub data: ResumeContent,
}

impl ResumeRecord {
    /// A fresh record with a generated id and both timestamps set to now.
    pub fn new(name: impl Into<String>, data: ResumeContent) -> Self {
        let now = Utc::now();
        let name = name.into();
        Self {
            id: RecordId::generate(),
            name: if name.trim().is_empty() {
                default_record_name()
            } else {
                name
            },
            created_at: now,
            updated_at: now,
            data,
        }
    }

    /// A new record named after the editor's file name field, or
    /// "<name>'s Resume" when that is blank.
    pub fn from_content(data: ResumeContent) -> Self {
        let name = if data.file_name.trim().is_empty() {
            format!("{}'s Resume", data.name)
        } else {
            data.file_name.clone()
        };
        Self::new(name, data)
    }

    /// File name of the exported document for the selected template.
    pub fn file_name(&self) -> String {
        self.data.selected_template.file_name(&self.name)
    }
}

fn default_record_name() -> String {
    UNTITLED_RESUME.to_string()
}

fn record_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let name = de::text(deserializer)?;
    Ok(if name.is_empty() {
        default_record_name()
    } else {
        name
    })
}

/// Record identity. The editor assigns `Date.now()` (a number); imported
/// records sometimes carry string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl RecordId {
    /// A millisecond timestamp id, the way the editor creates them.
    pub fn generate() -> Self {
        RecordId::Number(Utc::now().timestamp_millis().max(0) as u64)
    }

    /// Parse an id typed on the command line.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(n) => RecordId::Number(n),
            Err(_) => RecordId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// The renderable payload of a résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeContent {
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    #[serde(default, deserialize_with = "de::text")]
    pub email: String,
    #[serde(default, deserialize_with = "de::text")]
    pub phone: String,
    #[serde(default, deserialize_with = "de::text")]
    pub country: String,
    /// Free text. The editor caps it at 500 characters; the engine does not
    /// rely on that.
    #[serde(default, deserialize_with = "de::text")]
    pub summary: String,

    #[serde(default, deserialize_with = "de::entries")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "de::entries")]
    pub projects: Vec<ProjectEntry>,
    #[serde(default, deserialize_with = "de::text_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "de::entries")]
    pub certificates: Vec<CertificateEntry>,

    #[serde(default, deserialize_with = "de::or_default")]
    pub selected_template: Template,

    /// Editor-only field, kept so records round-trip through the store.
    #[serde(default, deserialize_with = "de::text", skip_serializing_if = "String::is_empty")]
    pub file_name: String,
}

impl ResumeContent {
    /// Skills that are not blank, in their original order.
    pub fn visible_skills(&self) -> impl Iterator<Item = &str> {
        self.skills
            .iter()
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Certificates with a non-blank name, in their original order.
    pub fn visible_certificates(&self) -> impl Iterator<Item = &CertificateEntry> {
        self.certificates
            .iter()
            .filter(|c| !c.name.trim().is_empty())
    }
}

/// The two fixed layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Template {
    /// Single flowing column with space guards before every block.
    #[default]
    #[serde(rename = "template1")]
    Template1,
    /// Two independent columns split at 35% of the page width.
    #[serde(rename = "template2")]
    Template2,
}

impl Template {
    /// File name for a document exported with this template: whitespace runs
    /// in the record name collapse to a single underscore.
    pub fn file_name(&self, record_name: &str) -> String {
        let base = sanitize_file_stem(record_name);
        match self {
            Template::Template1 => format!("{}.pdf", base),
            Template::Template2 => format!("{}_template2.pdf", base),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Template1 => f.write_str("template1"),
            Template::Template2 => f.write_str("template2"),
        }
    }
}

/// Replace each run of whitespace with one underscore.
pub fn sanitize_file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// One education entry. Only the field group matching `kind` exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEducationEntry", into = "RawEducationEntry")]
pub struct EducationEntry {
    pub kind: EducationKind,
    pub institution: String,
    pub from_year: String,
    pub to_year: String,
    /// Still studying: `to_year` is never shown, "Present" is.
    pub pursuing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EducationKind {
    School {
        board: Option<String>,
        percentage: Option<String>,
    },
    College {
        degree: Option<String>,
        course: Option<String>,
        cgpa: Option<String>,
    },
}

impl EducationKind {
    /// The score shown in the centre of a flowing education row.
    pub fn score(&self) -> Option<String> {
        match self {
            EducationKind::School {
                percentage: Some(p),
                ..
            } => Some(format!("{}%", p)),
            EducationKind::College { cgpa: Some(c), .. } => Some(format!("CGPA: {}", c)),
            _ => None,
        }
    }
}

/// The flat object the editor stores: a `type` discriminator plus every
/// field of both variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEducationEntry {
    #[serde(rename = "type", default, deserialize_with = "de::or_default")]
    kind: RawEducationKind,
    #[serde(default, deserialize_with = "de::text")]
    institution: String,
    #[serde(default, deserialize_with = "de::text")]
    board: String,
    #[serde(default, deserialize_with = "de::text")]
    percentage: String,
    #[serde(default, deserialize_with = "de::text")]
    degree: String,
    #[serde(default, deserialize_with = "de::text")]
    course: String,
    #[serde(default, deserialize_with = "de::text")]
    cgpa: String,
    #[serde(default, deserialize_with = "de::text")]
    from_year: String,
    #[serde(default, deserialize_with = "de::text")]
    to_year: String,
    #[serde(default, deserialize_with = "de::flag")]
    pursuing: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawEducationKind {
    #[default]
    School,
    College,
}

impl From<RawEducationEntry> for EducationEntry {
    fn from(raw: RawEducationEntry) -> Self {
        let kind = match raw.kind {
            RawEducationKind::School => EducationKind::School {
                board: de::non_blank(raw.board),
                percentage: de::non_blank(raw.percentage),
            },
            RawEducationKind::College => EducationKind::College {
                degree: de::non_blank(raw.degree),
                course: de::non_blank(raw.course),
                cgpa: de::non_blank(raw.cgpa),
            },
        };
        EducationEntry {
            kind,
            institution: raw.institution,
            from_year: raw.from_year,
            to_year: raw.to_year,
            pursuing: raw.pursuing,
        }
    }
}

impl From<EducationEntry> for RawEducationEntry {
    fn from(entry: EducationEntry) -> Self {
        let mut raw = RawEducationEntry {
            institution: entry.institution,
            from_year: entry.from_year,
            to_year: entry.to_year,
            pursuing: entry.pursuing,
            ..Default::default()
        };
        match entry.kind {
            EducationKind::School { board, percentage } => {
                raw.kind = RawEducationKind::School;
                raw.board = board.unwrap_or_default();
                raw.percentage = percentage.unwrap_or_default();
            }
            EducationKind::College {
                degree,
                course,
                cgpa,
            } => {
                raw.kind = RawEducationKind::College;
                raw.degree = degree.unwrap_or_default();
                raw.course = course.unwrap_or_default();
                raw.cgpa = cgpa.unwrap_or_default();
            }
        }
        raw
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    /// `YYYY-MM` from the editor's month picker, or free text.
    #[serde(default, deserialize_with = "de::text")]
    pub from_date: String,
    /// Absent means the project is ongoing.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub to_date: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateEntry {
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    /// Becomes an invisible link over the certificate name.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub link: Option<String>,
}
