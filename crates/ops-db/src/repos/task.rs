//! Task repository: CRUD, listing, and the archive operations.

use ops_core::entities::{AuditRecord, Task};
use ops_core::enums::{TaskStatus, TrackedField};
use ops_core::identity::Actor;
use ops_core::ids::PREFIX_TASK;
use ops_core::store::TaskPatch;
use ops_core::tracking::{is_archived, normalize_deadline, normalize_priority};
use serde::Serialize;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, now, nullable, parse_datetime};
use crate::service::OpsService;

const SELECT_COLS: &str = "task_id, task_title, task_content, status, urgent_level, assignee_id, \
     deadline, created_by, created_at, updated_at";

/// SQL expression folding a stored status to its normalized spelling.
const NORMALIZED_STATUS: &str =
    "CASE lower(trim(status)) WHEN 'archived' THEN 'archieve' ELSE lower(trim(status)) END";

/// Status a restored task returns to.
pub const RESTORED_STATUS: TaskStatus = TaskStatus::InProgress;

/// Input for [`OpsService::create_task`].
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub task_title: String,
    pub task_content: Option<String>,
    pub urgent_level: Option<String>,
    pub assignee_id: Option<String>,
    pub deadline: Option<String>,
    pub created_by: Option<String>,
}

/// Filter criteria for task listings.
#[derive(Debug, Default)]
pub struct TaskFilter {
    /// Normalized status to match; legacy spellings match too.
    pub status: Option<String>,
    pub assignee_id: Option<String>,
    pub limit: Option<u32>,
}

/// Result of [`OpsService::restore_task`].
#[derive(Debug, Clone, Serialize)]
pub struct RestoreOutcome {
    pub task: Task,
    /// Set when the task was restored but its audit row was not written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_failure: Option<String>,
}

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        task_id: row.get(0)?,
        task_title: row.get(1)?,
        task_content: row.get::<Option<String>>(2)?,
        status: row.get(3)?,
        urgent_level: row.get(4)?,
        assignee_id: get_opt_string(row, 5)?,
        deadline: get_opt_string(row, 6)?,
        created_by: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

fn empty_to_none(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl OpsService {
    /// Create a task in `pending` status.
    ///
    /// The priority is normalized (unknown values become `low`) and the
    /// deadline reduced to `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for a blank title, or a libSQL
    /// error if the assignee or creator does not exist.
    pub async fn create_task(&self, new: &NewTask) -> Result<Task, DatabaseError> {
        let title = new.task_title.trim();
        if title.is_empty() {
            return Err(DatabaseError::InvalidState("task title is required".into()));
        }

        let id = self.db().generate_id(PREFIX_TASK).await?;
        let created_at = now();
        let urgent_level = normalize_priority(new.urgent_level.as_deref());
        let deadline = normalize_deadline(new.deadline.as_deref());
        let deadline = empty_to_none(Some(deadline.as_str())).map(String::from);
        let assignee_id = empty_to_none(new.assignee_id.as_deref()).map(String::from);
        let created_by = empty_to_none(new.created_by.as_deref()).map(String::from);

        self.db()
            .conn()
            .execute(
                &format!(
                    "INSERT INTO tasks ({SELECT_COLS})
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
                ),
                libsql::params![
                    id.as_str(),
                    title,
                    new.task_content.as_deref(),
                    TaskStatus::Pending.as_str(),
                    urgent_level.as_str(),
                    assignee_id.as_deref(),
                    deadline.as_deref(),
                    created_by.as_deref(),
                    format_datetime(&created_at),
                    format_datetime(&created_at)
                ],
            )
            .await?;

        tracing::info!(task_id = %id, "task created");

        Ok(Task {
            task_id: id,
            task_title: title.to_string(),
            task_content: new.task_content.clone(),
            status: TaskStatus::Pending.as_str().to_string(),
            urgent_level,
            assignee_id,
            deadline,
            created_by,
            created_at,
            updated_at: created_at,
        })
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no task has this id.
    pub async fn get_task(&self, task_id: &str) -> Result<Task, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE task_id = ?1"),
                [task_id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_task(&row)
    }

    /// Tasks matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref status) = filter.status {
            params.push(libsql::Value::Text(ops_core::tracking::normalize_status(
                Some(status),
            )));
            conditions.push(format!("{NORMALIZED_STATUS} = ?{}", params.len()));
        }
        if let Some(ref assignee) = filter.assignee_id {
            params.push(libsql::Value::Text(assignee.clone()));
            conditions.push(format!("assignee_id = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(100);
        let sql = format!(
            "SELECT {SELECT_COLS} FROM tasks {where_clause}
             ORDER BY created_at DESC, task_id LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Tasks in `archieve` (or legacy `archived`) status, most recently
    /// touched first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_archived_tasks(&self) -> Result<Vec<Task>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks WHERE {NORMALIZED_STATUS} = ?1
                     ORDER BY updated_at DESC, task_id"
                ),
                [TaskStatus::Archieve.as_str()],
            )
            .await?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next().await? {
            tasks.push(row_to_task(&row)?);
        }
        Ok(tasks)
    }

    /// Write the patched columns, bump `updated_at`, and return the stored
    /// record. An empty patch writes nothing and returns the current record.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no task has this id.
    pub async fn update_task(&self, task_id: &str, patch: &TaskPatch) -> Result<Task, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref status) = patch.status {
            sets.push(format!("{} = ?{idx}", TrackedField::Status));
            params.push(status.clone().into());
            idx += 1;
        }
        if let Some(ref content) = patch.task_content {
            sets.push(format!("{} = ?{idx}", TrackedField::TaskContent));
            params.push(nullable(content.as_deref()));
            idx += 1;
        }
        if let Some(ref level) = patch.urgent_level {
            sets.push(format!("{} = ?{idx}", TrackedField::UrgentLevel));
            params.push(level.clone().into());
            idx += 1;
        }
        if let Some(ref assignee) = patch.assignee_id {
            sets.push(format!("{} = ?{idx}", TrackedField::AssigneeId));
            params.push(nullable(assignee.as_deref()));
            idx += 1;
        }
        if let Some(ref deadline) = patch.deadline {
            sets.push(format!("{} = ?{idx}", TrackedField::Deadline));
            params.push(nullable(deadline.as_deref()));
            idx += 1;
        }
        if let Some(ref title) = patch.task_title {
            sets.push(format!("{} = ?{idx}", TrackedField::TaskTitle));
            params.push(title.clone().into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_task(task_id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(format_datetime(&now()).into());
        idx += 1;

        params.push(task_id.into());
        let sql = format!("UPDATE tasks SET {} WHERE task_id = ?{idx}", sets.join(", "));
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }

        self.get_task(task_id).await
    }

    /// Permanently delete a task. Its audit rows are kept.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no task has this id.
    pub async fn delete_task(&self, task_id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute("DELETE FROM tasks WHERE task_id = ?1", [task_id])
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::info!(task_id, "task deleted");
        Ok(())
    }

    /// Bring an archived task back to `in progress`.
    ///
    /// Appends one `status` audit row attributed to `actor`. A failed audit
    /// insert is logged and reported on the outcome; the restore stands.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the task is not archived, or
    /// `DatabaseError::NoResult` if it does not exist.
    pub async fn restore_task(
        &self,
        task_id: &str,
        actor: Option<&Actor>,
    ) -> Result<RestoreOutcome, DatabaseError> {
        let current = self.get_task(task_id).await?;
        if !is_archived(Some(&current.status)) {
            return Err(DatabaseError::InvalidState(format!(
                "task {task_id} is not archived (status '{}')",
                current.status
            )));
        }

        let patch = TaskPatch {
            status: Some(RESTORED_STATUS.as_str().to_string()),
            ..TaskPatch::default()
        };
        let task = self.update_task(task_id, &patch).await?;

        let row = AuditRecord {
            task_id: task_id.to_string(),
            actor_id: actor.map(|a| a.employee_id.clone()),
            field: TrackedField::Status,
            old_value: TaskStatus::Archieve.as_str().to_string(),
            new_value: RESTORED_STATUS.as_str().to_string(),
            created_at: task.updated_at,
        };
        let audit_failure = match self.insert_audit_batch(std::slice::from_ref(&row)).await {
            Ok(()) => None,
            Err(error) => {
                tracing::error!(task_id, %error, "restore audit insert failed; restore kept");
                Some(error.to_string())
            }
        };

        tracing::info!(task_id, "task restored");
        Ok(RestoreOutcome {
            task,
            audit_failure,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::repos::audit::AuditFilter;
    use crate::test_support::helpers::{create, register, set_raw_status, test_service};
    use ops_core::enums::Role;

    #[tokio::test]
    async fn create_task_applies_defaults() {
        let svc = test_service().await;

        let task = svc
            .create_task(&NewTask {
                task_title: "Order toner".into(),
                urgent_level: Some("URGENT".into()),
                deadline: Some("2024-05-01T23:30:00-05:00".into()),
                ..NewTask::default()
            })
            .await
            .unwrap();

        assert!(task.task_id.starts_with("tsk-"));
        assert_eq!(task.status, "pending");
        assert_eq!(task.urgent_level, "low");
        assert_eq!(task.deadline.as_deref(), Some("2024-05-01"));

        let fetched = svc.get_task(&task.task_id).await.unwrap();
        assert_eq!(fetched, task);
    }

    #[tokio::test]
    async fn blank_title_is_rejected() {
        let svc = test_service().await;
        let result = svc
            .create_task(&NewTask {
                task_title: "  ".into(),
                ..NewTask::default()
            })
            .await;
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
    }

    #[tokio::test]
    async fn unknown_assignee_violates_foreign_key() {
        let svc = test_service().await;
        let result = svc
            .create_task(&NewTask {
                task_title: "Ghost work".into(),
                assignee_id: Some("emp-nobody00".into()),
                ..NewTask::default()
            })
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn update_task_writes_only_patched_columns() {
        let svc = test_service().await;
        let task = create(&svc, "Original").await;

        let patch = TaskPatch {
            task_title: Some("Renamed".into()),
            deadline: Some(Some("2024-02-02".into())),
            ..TaskPatch::default()
        };
        let updated = svc.update_task(&task.task_id, &patch).await.unwrap();

        assert_eq!(updated.task_title, "Renamed");
        assert_eq!(updated.deadline.as_deref(), Some("2024-02-02"));
        assert_eq!(updated.status, task.status);
        assert!(updated.updated_at >= task.updated_at);

        let cleared = svc
            .update_task(
                &task.task_id,
                &TaskPatch {
                    deadline: Some(None),
                    ..TaskPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(cleared.deadline, None);
    }

    #[tokio::test]
    async fn update_missing_task_is_no_result() {
        let svc = test_service().await;
        let patch = TaskPatch {
            task_title: Some("x".into()),
            ..TaskPatch::default()
        };
        let result = svc.update_task("tsk-missing0", &patch).await;
        assert!(matches!(result, Err(DatabaseError::NoResult)));
    }

    #[tokio::test]
    async fn list_tasks_filters_by_normalized_status() {
        let svc = test_service().await;
        let a = create(&svc, "A").await;
        let b = create(&svc, "B").await;
        create(&svc, "C").await;
        set_raw_status(&svc, &a.task_id, "In Progress").await;
        set_raw_status(&svc, &b.task_id, "in progress").await;

        let filter = TaskFilter {
            status: Some("IN PROGRESS".into()),
            ..TaskFilter::default()
        };
        let tasks = svc.list_tasks(&filter).await.unwrap();
        assert_eq!(tasks.len(), 2);

        let all = svc
            .list_tasks(&TaskFilter {
                limit: Some(2),
                ..TaskFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn list_tasks_by_assignee() {
        let svc = test_service().await;
        let emp = register(&svc, "Dana", "dana@example.com", None, Role::Staff).await;
        svc.create_task(&NewTask {
            task_title: "Mine".into(),
            assignee_id: Some(emp.employee_id.clone()),
            ..NewTask::default()
        })
        .await
        .unwrap();
        create(&svc, "Unassigned").await;

        let tasks = svc
            .list_tasks(&TaskFilter {
                assignee_id: Some(emp.employee_id),
                ..TaskFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_title, "Mine");
    }

    #[tokio::test]
    async fn archived_listing_includes_legacy_spellings() {
        let svc = test_service().await;
        let a = create(&svc, "A").await;
        let b = create(&svc, "B").await;
        create(&svc, "C").await;
        set_raw_status(&svc, &a.task_id, "ARCHIEVE").await;
        set_raw_status(&svc, &b.task_id, "archived").await;

        let archived = svc.list_archived_tasks().await.unwrap();
        let mut ids: Vec<String> = archived.into_iter().map(|t| t.task_id).collect();
        ids.sort();
        let mut expected = vec![a.task_id, b.task_id];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn restore_returns_task_to_in_progress_with_audit() {
        let svc = test_service().await;
        let boss = register(&svc, "Ann", "ann@example.com", None, Role::Boss).await;
        let task = create(&svc, "Old work").await;
        set_raw_status(&svc, &task.task_id, "archieve").await;

        let outcome = svc
            .restore_task(&task.task_id, Some(&Actor::from(&boss)))
            .await
            .unwrap();

        assert_eq!(outcome.task.status, "in progress");
        assert_eq!(outcome.audit_failure, None);
        let rows = svc
            .query_audit(&AuditFilter {
                task_id: Some(task.task_id.clone()),
                ..AuditFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].record.field, TrackedField::Status);
        assert_eq!(rows[0].record.old_value, "archieve");
        assert_eq!(rows[0].record.new_value, "in progress");
        assert_eq!(rows[0].record.actor_id.as_deref(), Some(boss.employee_id.as_str()));
        assert_eq!(rows[0].record.created_at, outcome.task.updated_at);
    }

    #[tokio::test]
    async fn restore_rejects_live_task() {
        let svc = test_service().await;
        let task = create(&svc, "Still going").await;

        let result = svc.restore_task(&task.task_id, None).await;
        assert!(matches!(result, Err(DatabaseError::InvalidState(_))));
        assert_eq!(svc.get_task(&task.task_id).await.unwrap().status, "pending");
    }

    #[tokio::test]
    async fn delete_keeps_audit_history() {
        let svc = test_service().await;
        let task = create(&svc, "Doomed").await;
        set_raw_status(&svc, &task.task_id, "archieve").await;
        svc.restore_task(&task.task_id, None).await.unwrap();

        svc.delete_task(&task.task_id).await.unwrap();

        assert!(matches!(
            svc.get_task(&task.task_id).await,
            Err(DatabaseError::NoResult)
        ));
        assert!(matches!(
            svc.delete_task(&task.task_id).await,
            Err(DatabaseError::NoResult)
        ));
        let rows = svc
            .query_audit(&AuditFilter {
                task_id: Some(task.task_id),
                ..AuditFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }
}
