use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TrackedField;

/// One field-level change to a task, attributed to the actor who saved it.
///
/// Append-only: records are never updated or merged.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditRecord {
    pub task_id: String,
    pub actor_id: Option<String>,
    pub field: TrackedField,
    pub old_value: String,
    pub new_value: String,
    pub created_at: DateTime<Utc>,
}

/// A persisted audit record with its store-assigned sequence number.
///
/// `id` increases monotonically and breaks ties between records sharing a
/// `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditEntry {
    pub id: i64,
    #[serde(flatten)]
    pub record: AuditRecord,
}
