use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A unit of work assigned to an employee.
///
/// `status`, `urgent_level`, and `deadline` hold the raw persisted strings;
/// legacy rows may carry spellings such as `"ARCHIEVE"` or full timestamps.
/// Read them through [`crate::tracking::snapshot`] to compare values.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub task_id: String,
    pub task_title: String,
    pub task_content: Option<String>,
    pub status: String,
    pub urgent_level: String,
    pub assignee_id: Option<String>,
    pub deadline: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
