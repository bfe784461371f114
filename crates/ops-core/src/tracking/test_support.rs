//! Recording test doubles for the commit pipeline.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use tokio::sync::Notify;

use crate::entities::{AuditRecord, Task};
use crate::enums::Role;
use crate::identity::Actor;
use crate::store::{AuditSink, EmployeeDirectory, TaskPatch, TaskStore};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct FakeError(pub &'static str);

pub fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

pub fn sample_task() -> Task {
    Task {
        task_id: "tsk-00000001".into(),
        task_title: "Quarterly report".into(),
        task_content: Some("Collect figures".into()),
        status: "pending".into(),
        urgent_level: "low".into(),
        assignee_id: Some("emp-staff001".into()),
        deadline: Some("2024-01-01".into()),
        created_by: Some("emp-boss0001".into()),
        created_at: created_at(),
        updated_at: created_at(),
    }
}

pub fn actor(role: Role, department: Option<&str>) -> Actor {
    Actor {
        employee_id: format!("emp-{role}"),
        role,
        department_id: department.map(String::from),
    }
}

/// One double standing in for all three collaborators.
///
/// Updates are applied to an in-memory task and every call is recorded.
#[derive(Default)]
pub struct RecordingStore {
    pub task: Mutex<Option<Task>>,
    pub departments: HashMap<String, String>,
    pub fail_update: bool,
    pub fail_audit: bool,
    pub fail_lookup: bool,
    pub gate: Option<Arc<Notify>>,
    pub updates: Mutex<Vec<TaskPatch>>,
    pub audits: Mutex<Vec<AuditRecord>>,
    pub lookups: AtomicUsize,
}

impl RecordingStore {
    pub fn with_task(task: Task) -> Self {
        Self {
            task: Mutex::new(Some(task)),
            ..Self::default()
        }
    }

    pub fn department(mut self, employee_id: &str, department: &str) -> Self {
        self.departments
            .insert(employee_id.to_string(), department.to_string());
        self
    }

    /// Block every update until the gate is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn updates(&self) -> Vec<TaskPatch> {
        self.updates.lock().unwrap().clone()
    }

    pub fn audits(&self) -> Vec<AuditRecord> {
        self.audits.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl TaskStore for RecordingStore {
    type Error = FakeError;

    async fn select(&self, task_id: &str) -> Result<Task, FakeError> {
        self.task
            .lock()
            .unwrap()
            .clone()
            .filter(|task| task.task_id == task_id)
            .ok_or(FakeError("task not found"))
    }

    async fn update(&self, task_id: &str, patch: &TaskPatch) -> Result<Task, FakeError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.updates.lock().unwrap().push(patch.clone());
        if self.fail_update {
            return Err(FakeError("connection reset"));
        }

        let mut guard = self.task.lock().unwrap();
        let task = guard
            .as_mut()
            .filter(|task| task.task_id == task_id)
            .ok_or(FakeError("task not found"))?;
        if let Some(status) = &patch.status {
            task.status.clone_from(status);
        }
        if let Some(content) = &patch.task_content {
            task.task_content.clone_from(content);
        }
        if let Some(level) = &patch.urgent_level {
            task.urgent_level.clone_from(level);
        }
        if let Some(assignee) = &patch.assignee_id {
            task.assignee_id.clone_from(assignee);
        }
        if let Some(deadline) = &patch.deadline {
            task.deadline.clone_from(deadline);
        }
        if let Some(title) = &patch.task_title {
            task.task_title.clone_from(title);
        }
        task.updated_at += Duration::hours(1);
        Ok(task.clone())
    }
}

impl AuditSink for RecordingStore {
    type Error = FakeError;

    async fn insert_many(&self, rows: &[AuditRecord]) -> Result<(), FakeError> {
        if self.fail_audit {
            return Err(FakeError("audit table locked"));
        }
        self.audits.lock().unwrap().extend_from_slice(rows);
        Ok(())
    }
}

impl EmployeeDirectory for RecordingStore {
    type Error = FakeError;

    async fn department_of(&self, employee_id: &str) -> Result<Option<String>, FakeError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookup {
            return Err(FakeError("directory unavailable"));
        }
        Ok(self.departments.get(employee_id).cloned())
    }
}
