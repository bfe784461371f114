//! Normalization of tracked field values.
//!
//! Both sides of every diff go through these functions, so representational
//! differences (`"ARCHIEVE"` vs `"archieve"`, a timestamp vs a bare date)
//! never register as changes.

use chrono::{DateTime, NaiveDate};

use crate::enums::{Priority, TaskStatus};

/// Legacy spelling folded into [`TaskStatus::Archieve`].
const ARCHIVED_ALIAS: &str = "archived";

/// Lower-case a status and fold `"archived"` into `"archieve"`.
///
/// Values outside the known set pass through lower-cased.
#[must_use]
pub fn normalize_status(raw: Option<&str>) -> String {
    let lowered = raw.unwrap_or_default().trim().to_lowercase();
    if lowered == ARCHIVED_ALIAS {
        TaskStatus::Archieve.as_str().to_string()
    } else {
        lowered
    }
}

/// Whether a raw status denotes an archived task.
#[must_use]
pub fn is_archived(raw: Option<&str>) -> bool {
    normalize_status(raw) == TaskStatus::Archieve.as_str()
}

/// Lower-case a priority; anything outside `low|medium|high` is `"low"`.
#[must_use]
pub fn normalize_priority(raw: Option<&str>) -> String {
    raw.and_then(Priority::parse)
        .unwrap_or_default()
        .as_str()
        .to_string()
}

/// Reduce a deadline to `YYYY-MM-DD`, or `""` when missing or unparseable.
///
/// A leading calendar date is taken verbatim (so `2024-05-01T23:30:00-05:00`
/// stays on May 1st); other timestamps are reduced to the date in their own
/// offset.
#[must_use]
pub fn normalize_deadline(raw: Option<&str>) -> String {
    parse_deadline(raw).map_or_else(String::new, |date| date.format("%Y-%m-%d").to_string())
}

/// Parse a deadline into a calendar date.
#[must_use]
pub fn parse_deadline(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw.map(str::trim).filter(|value| !value.is_empty())?;

    if let Some(date) = raw
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|dt| dt.date_naive())
        .ok()
}

/// Stringify a free-form field; null becomes `""`.
#[must_use]
pub fn normalize_text(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("ARCHIEVE"), "archieve")]
    #[case(Some("archieve"), "archieve")]
    #[case(Some("Archived"), "archieve")]
    #[case(Some("In Progress"), "in progress")]
    #[case(Some("Blocked"), "blocked")]
    #[case(None, "")]
    fn status_normalization(#[case] raw: Option<&str>, #[case] expected: &str) {
        assert_eq!(normalize_status(raw), expected);
    }

    #[rstest]
    #[case(Some("HIGH"), "high")]
    #[case(Some("medium"), "medium")]
    #[case(Some("critical"), "low")]
    #[case(Some(" high "), "low")]
    #[case(Some(""), "low")]
    #[case(None, "low")]
    fn priority_normalization(#[case] raw: Option<&str>, #[case] expected: &str) {
        assert_eq!(normalize_priority(raw), expected);
    }

    #[rstest]
    #[case(Some("2024-05-01T00:00:00Z"), "2024-05-01")]
    #[case(Some("2024-05-01"), "2024-05-01")]
    #[case(Some("2024-05-01 09:15:00"), "2024-05-01")]
    #[case(Some("2024-05-01T23:30:00-05:00"), "2024-05-01")]
    #[case(Some("Wed, 01 May 2024 10:00:00 +0000"), "2024-05-01")]
    #[case(Some("next tuesday"), "")]
    #[case(Some("2024-13-45"), "")]
    #[case(Some("   "), "")]
    #[case(None, "")]
    fn deadline_normalization(#[case] raw: Option<&str>, #[case] expected: &str) {
        assert_eq!(normalize_deadline(raw), expected);
    }

    #[test]
    fn text_is_stringified_as_is() {
        assert_eq!(normalize_text(Some("  Keep Case ")), "  Keep Case ");
        assert_eq!(normalize_text(None), "");
    }

    #[test]
    fn archived_detection_covers_both_spellings() {
        assert!(is_archived(Some("archieve")));
        assert!(is_archived(Some(" ARCHIVED ")));
        assert!(!is_archived(Some("done")));
        assert!(!is_archived(None));
    }
}
