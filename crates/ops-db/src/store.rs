//! `ops-core` store traits backed by the libSQL service.

use ops_core::entities::{AuditRecord, Task};
use ops_core::store::{AuditSink, EmployeeDirectory, TaskPatch, TaskStore};

use crate::error::DatabaseError;
use crate::service::OpsService;

impl TaskStore for OpsService {
    type Error = DatabaseError;

    async fn select(&self, task_id: &str) -> Result<Task, DatabaseError> {
        self.get_task(task_id).await
    }

    async fn update(&self, task_id: &str, patch: &TaskPatch) -> Result<Task, DatabaseError> {
        self.update_task(task_id, patch).await
    }
}

impl AuditSink for OpsService {
    type Error = DatabaseError;

    async fn insert_many(&self, rows: &[AuditRecord]) -> Result<(), DatabaseError> {
        self.insert_audit_batch(rows).await
    }
}

impl EmployeeDirectory for OpsService {
    type Error = DatabaseError;

    async fn department_of(&self, employee_id: &str) -> Result<Option<String>, DatabaseError> {
        Self::department_of(self, employee_id).await
    }
}
