//! Collaborator contracts for the commit pipeline.
//!
//! The change-tracking core never talks to a database directly. It writes
//! through these traits, which `ops-db` implements for its libSQL service and
//! tests implement with recording doubles.

use serde::Serialize;

use crate::entities::{AuditRecord, Task};
use crate::enums::TrackedField;
use crate::tracking::FieldChange;

/// The table of task records.
#[allow(async_fn_in_trait)]
pub trait TaskStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch a task by id.
    async fn select(&self, task_id: &str) -> Result<Task, Self::Error>;

    /// Persist the patched columns and bump `updated_at`.
    ///
    /// Returns the record as stored, so callers can reconcile values the
    /// store may have rewritten.
    async fn update(&self, task_id: &str, patch: &TaskPatch) -> Result<Task, Self::Error>;
}

/// The append-only table of field-level change records.
#[allow(async_fn_in_trait)]
pub trait AuditSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert all rows as one batch.
    async fn insert_many(&self, rows: &[AuditRecord]) -> Result<(), Self::Error>;
}

/// Employee lookups needed by the assignee authorization guard.
#[allow(async_fn_in_trait)]
pub trait EmployeeDirectory {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Department of an employee. `Ok(None)` when the employee is unknown or
    /// has no department.
    async fn department_of(&self, employee_id: &str) -> Result<Option<String>, Self::Error>;
}

/// Column updates for a task. Only `Some` fields are written.
///
/// Nullable columns use `Option<Option<String>>`: `Some(None)` writes NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_content: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgent_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_title: Option<String>,
}

impl TaskPatch {
    /// Build a patch writing the new value of every change.
    ///
    /// Empty assignee and deadline values are written as NULL.
    #[must_use]
    pub fn from_changes(changes: &[FieldChange]) -> Self {
        let mut patch = Self::default();
        for change in changes {
            patch.set(change.field, &change.new_value);
        }
        patch
    }

    /// Set one tracked column from its normalized string value.
    pub fn set(&mut self, field: TrackedField, value: &str) {
        let nullable = || (!value.is_empty()).then(|| value.to_string());
        match field {
            TrackedField::Status => self.status = Some(value.to_string()),
            TrackedField::TaskContent => self.task_content = Some(Some(value.to_string())),
            TrackedField::UrgentLevel => self.urgent_level = Some(value.to_string()),
            TrackedField::AssigneeId => self.assignee_id = Some(nullable()),
            TrackedField::Deadline => self.deadline = Some(nullable()),
            TrackedField::TaskTitle => self.task_title = Some(value.to_string()),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.task_content.is_none()
            && self.urgent_level.is_none()
            && self.assignee_id.is_none()
            && self.deadline.is_none()
            && self.task_title.is_none()
    }
}
