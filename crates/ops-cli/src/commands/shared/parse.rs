use chrono::{Datelike, NaiveDate};
use ops_core::enums::{Priority, TaskStatus};
use ops_core::tracking::{normalize_status, parse_deadline};
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Normalize a task status, accepting `in-progress` and `archived` spellings.
pub fn parse_status(raw: &str) -> anyhow::Result<String> {
    let normalized = normalize_status(Some(&raw.replace('-', " ")));
    TaskStatus::from_normalized(&normalized)
        .map(|status| status.as_str().to_string())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "invalid status '{raw}': expected pending, in progress, review, done, or archieve"
            )
        })
}

/// Parse a priority case-insensitively, ignoring surrounding whitespace.
pub fn parse_priority(raw: &str) -> anyhow::Result<Priority> {
    Priority::parse(raw.trim())
        .ok_or_else(|| anyhow::anyhow!("invalid priority '{raw}': expected low, medium, or high"))
}

/// Reduce a deadline argument to `YYYY-MM-DD`. Blank clears the deadline.
pub fn parse_deadline_arg(raw: &str) -> anyhow::Result<Option<String>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_deadline(Some(raw))
        .map(|date| Some(date.format("%Y-%m-%d").to_string()))
        .ok_or_else(|| anyhow::anyhow!("invalid deadline '{raw}' (expected YYYY-MM-DD)"))
}

/// Parse `YYYY-MM` into a year and month.
pub fn parse_month(raw: &str) -> anyhow::Result<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid month '{raw}' (expected YYYY-MM): {error}"))?;
    Ok((date.year(), date.month()))
}

/// An explicitly empty CLI value clears the field.
pub fn blank_to_none(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
