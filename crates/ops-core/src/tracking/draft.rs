use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::snapshot::{TrackedSnapshot, TrackedSource};
use crate::entities::Task;

/// In-memory edited state of a task's tracked fields.
///
/// Values are kept raw; normalization happens when the draft is snapshotted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaskDraft {
    pub status: Option<String>,
    pub task_content: Option<String>,
    pub urgent_level: Option<String>,
    pub assignee_id: Option<String>,
    pub deadline: Option<String>,
    pub task_title: Option<String>,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            status: Some(task.status.clone()),
            task_content: task.task_content.clone(),
            urgent_level: Some(task.urgent_level.clone()),
            assignee_id: task.assignee_id.clone(),
            deadline: task.deadline.clone(),
            task_title: Some(task.task_title.clone()),
        }
    }
}

impl From<&TrackedSnapshot> for TaskDraft {
    fn from(snap: &TrackedSnapshot) -> Self {
        let nullable = |value: &str| (!value.is_empty()).then(|| value.to_string());
        Self {
            status: Some(snap.status.clone()),
            task_content: Some(snap.task_content.clone()),
            urgent_level: Some(snap.urgent_level.clone()),
            assignee_id: nullable(&snap.assignee_id),
            deadline: nullable(&snap.deadline),
            task_title: Some(snap.task_title.clone()),
        }
    }
}

impl TaskDraft {
    /// Take the stored value of every field that still holds its `started`
    /// value. Fields edited since `started` was captured keep their edits.
    pub(crate) fn adopt_stored(&mut self, started: &Self, stored: &Task) {
        let stored = Self::from(stored);
        adopt(&mut self.status, started.status.as_deref(), stored.status);
        adopt(&mut self.task_content, started.task_content.as_deref(), stored.task_content);
        adopt(&mut self.urgent_level, started.urgent_level.as_deref(), stored.urgent_level);
        adopt(&mut self.assignee_id, started.assignee_id.as_deref(), stored.assignee_id);
        adopt(&mut self.deadline, started.deadline.as_deref(), stored.deadline);
        adopt(&mut self.task_title, started.task_title.as_deref(), stored.task_title);
    }
}

fn adopt(field: &mut Option<String>, started: Option<&str>, stored: Option<String>) {
    if field.as_deref() == started {
        *field = stored;
    }
}

impl TrackedSource for TaskDraft {
    fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
    fn task_content(&self) -> Option<&str> {
        self.task_content.as_deref()
    }
    fn urgent_level(&self) -> Option<&str> {
        self.urgent_level.as_deref()
    }
    fn assignee_id(&self) -> Option<&str> {
        self.assignee_id.as_deref()
    }
    fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }
    fn task_title(&self) -> Option<&str> {
        self.task_title.as_deref()
    }
}
