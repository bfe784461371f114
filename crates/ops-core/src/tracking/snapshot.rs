//! Tracked-field snapshots.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::normalize::{normalize_deadline, normalize_priority, normalize_status, normalize_text};
use crate::entities::Task;
use crate::enums::TrackedField;

/// Anything exposing the six tracked task fields.
///
/// Fields outside this set are invisible to the change tracker.
pub trait TrackedSource {
    fn status(&self) -> Option<&str>;
    fn task_content(&self) -> Option<&str>;
    fn urgent_level(&self) -> Option<&str>;
    fn assignee_id(&self) -> Option<&str>;
    fn deadline(&self) -> Option<&str>;
    fn task_title(&self) -> Option<&str>;

    /// Raw value of one tracked field.
    fn tracked(&self, field: TrackedField) -> Option<&str> {
        match field {
            TrackedField::Status => self.status(),
            TrackedField::TaskContent => self.task_content(),
            TrackedField::UrgentLevel => self.urgent_level(),
            TrackedField::AssigneeId => self.assignee_id(),
            TrackedField::Deadline => self.deadline(),
            TrackedField::TaskTitle => self.task_title(),
        }
    }
}

/// Normalized string values of a task's tracked fields at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TrackedSnapshot {
    pub status: String,
    pub task_content: String,
    pub urgent_level: String,
    pub assignee_id: String,
    pub deadline: String,
    pub task_title: String,
}

impl TrackedSnapshot {
    #[must_use]
    pub fn get(&self, field: TrackedField) -> &str {
        match field {
            TrackedField::Status => &self.status,
            TrackedField::TaskContent => &self.task_content,
            TrackedField::UrgentLevel => &self.urgent_level,
            TrackedField::AssigneeId => &self.assignee_id,
            TrackedField::Deadline => &self.deadline,
            TrackedField::TaskTitle => &self.task_title,
        }
    }

    pub(crate) fn set(&mut self, field: TrackedField, value: String) {
        match field {
            TrackedField::Status => self.status = value,
            TrackedField::TaskContent => self.task_content = value,
            TrackedField::UrgentLevel => self.urgent_level = value,
            TrackedField::AssigneeId => self.assignee_id = value,
            TrackedField::Deadline => self.deadline = value,
            TrackedField::TaskTitle => self.task_title = value,
        }
    }
}

/// Normalize a task-like value into a snapshot. Pure and infallible.
#[must_use]
pub fn snapshot<T: TrackedSource + ?Sized>(source: &T) -> TrackedSnapshot {
    TrackedSnapshot {
        status: normalize_status(source.status()),
        task_content: normalize_text(source.task_content()),
        urgent_level: normalize_priority(source.urgent_level()),
        assignee_id: normalize_text(source.assignee_id()),
        deadline: normalize_deadline(source.deadline()),
        task_title: normalize_text(source.task_title()),
    }
}

impl TrackedSource for Task {
    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }
    fn task_content(&self) -> Option<&str> {
        self.task_content.as_deref()
    }
    fn urgent_level(&self) -> Option<&str> {
        Some(&self.urgent_level)
    }
    fn assignee_id(&self) -> Option<&str> {
        self.assignee_id.as_deref()
    }
    fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }
    fn task_title(&self) -> Option<&str> {
        Some(&self.task_title)
    }
}

impl TrackedSource for TrackedSnapshot {
    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }
    fn task_content(&self) -> Option<&str> {
        Some(&self.task_content)
    }
    fn urgent_level(&self) -> Option<&str> {
        Some(&self.urgent_level)
    }
    fn assignee_id(&self) -> Option<&str> {
        Some(&self.assignee_id)
    }
    fn deadline(&self) -> Option<&str> {
        Some(&self.deadline)
    }
    fn task_title(&self) -> Option<&str> {
        Some(&self.task_title)
    }
}
