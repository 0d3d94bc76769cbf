//! Date range labels for education and project entries.
//!
//! Dates arrive as whatever the editor stored: a bare year for education,
//! `YYYY-MM` from a month picker for projects, or free text from imports.
//! Anything that does not parse is shown exactly as typed.

use chrono::NaiveDate;

use crate::model::{EducationEntry, ProjectEntry};

pub const PRESENT: &str = "Present";

/// `"2019"` becomes `"January 2019"`; anything else is echoed.
pub fn format_year(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .parse::<i32>()
        .ok()
        .filter(|year| (1000..=9999).contains(year))
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .map(|date| date.format("%B %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `"2023-05"` or `"2023-05-14"` becomes `"May 2023"`.
pub fn format_month(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .ok()
        .map(|date| date.format("%b %Y").to_string())
}

/// The date label of an education entry, or `None` when there is nothing
/// to show.
pub fn education_range(entry: &EducationEntry) -> Option<String> {
    let from = entry.from_year.trim();
    let to = entry.to_year.trim();
    match (from.is_empty(), entry.pursuing) {
        (true, true) => Some(PRESENT.to_string()),
        (true, false) => None,
        (false, true) => Some(format!("{} - {}", format_year(from), PRESENT)),
        (false, false) if !to.is_empty() => {
            Some(format!("{} - {}", format_year(from), format_year(to)))
        }
        (false, false) => Some(format_year(from)),
    }
}

/// The date label of a project. A missing end date means "Present". If
/// either end fails to parse, both are shown raw.
pub fn project_range(project: &ProjectEntry) -> Option<String> {
    let from = project.from_date.trim();
    if from.is_empty() {
        return None;
    }
    let to = project.to_date.as_deref().map(str::trim);

    let parsed_from = format_month(from);
    let parsed_to = match to {
        Some(to) => format_month(to),
        None => Some(PRESENT.to_string()),
    };

    Some(match (parsed_from, parsed_to) {
        (Some(f), Some(t)) => format!("{} - {}", f, t),
        _ => format!("{} - {}", from, to.unwrap_or(PRESENT)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EducationKind;

    fn school(from: &str, to: &str, pursuing: bool) -> EducationEntry {
        EducationEntry {
            kind: EducationKind::School {
                board: None,
                percentage: None,
            },
            institution: "Springfield High".into(),
            from_year: from.into(),
            to_year: to.into(),
            pursuing,
        }
    }

    fn project(from: &str, to: Option<&str>) -> ProjectEntry {
        ProjectEntry {
            name: "Engine".into(),
            from_date: from.into(),
            to_date: to.map(String::from),
            details: String::new(),
        }
    }

    #[test]
    fn years_render_as_january() {
        assert_eq!(format_year("2019"), "January 2019");
        assert_eq!(format_year(" 2021 "), "January 2021");
        assert_eq!(format_year("sometime"), "sometime");
    }

    #[test]
    fn pursuing_shows_present() {
        assert_eq!(
            education_range(&school("2019", "2023", true)).as_deref(),
            Some("January 2019 - Present")
        );
        assert_eq!(education_range(&school("", "", true)).as_deref(), Some("Present"));
    }

    #[test]
    fn education_range_variants() {
        assert_eq!(
            education_range(&school("2015", "2019", false)).as_deref(),
            Some("January 2015 - January 2019")
        );
        assert_eq!(
            education_range(&school("2015", "", false)).as_deref(),
            Some("January 2015")
        );
        assert_eq!(education_range(&school("", "2019", false)), None);
    }

    #[test]
    fn month_inputs_parse() {
        assert_eq!(format_month("2023-05").as_deref(), Some("May 2023"));
        assert_eq!(format_month("2023-12-31").as_deref(), Some("Dec 2023"));
        assert_eq!(format_month("2023-13"), None);
        assert_eq!(format_month("spring"), None);
    }

    #[test]
    fn ongoing_project_is_present() {
        assert_eq!(
            project_range(&project("2023-01", None)).as_deref(),
            Some("Jan 2023 - Present")
        );
        assert_eq!(
            project_range(&project("2022-03", Some("2022-11"))).as_deref(),
            Some("Mar 2022 - Nov 2022")
        );
    }

    #[test]
    fn unparsable_pair_is_echoed() {
        assert_eq!(
            project_range(&project("Spring 2021", Some("2021-06"))).as_deref(),
            Some("Spring 2021 - 2021-06")
        );
        assert_eq!(
            project_range(&project("soon", None)).as_deref(),
            Some("soon - Present")
        );
    }

    #[test]
    fn no_start_no_label() {
        assert_eq!(project_range(&project("", Some("2021-06"))), None);
    }
}
