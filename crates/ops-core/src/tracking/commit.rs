//! The commit pipeline: diff, guard, write the task, then audit.

use serde::Serialize;

use super::diff::{FieldChange, diff};
use super::guard::{AssigneeDecision, RevertReason, authorize_assignee_change};
use super::snapshot::{TrackedSnapshot, TrackedSource, snapshot};
use crate::entities::{AuditRecord, Task};
use crate::enums::{Role, TrackedField};
use crate::errors::CommitError;
use crate::identity::Actor;
use crate::store::{AuditSink, EmployeeDirectory, TaskPatch, TaskStore};

/// The stores a commit writes through.
pub struct Collaborators<'a, S, A, D> {
    pub tasks: &'a S,
    pub audit: &'a A,
    pub directory: &'a D,
}

impl<'a, S, A, D> Collaborators<'a, S, A, D> {
    pub const fn new(tasks: &'a S, audit: &'a A, directory: &'a D) -> Self {
        Self {
            tasks,
            audit,
            directory,
        }
    }
}

/// Outcome of a commit that did not fail outright.
#[derive(Debug, Clone, Serialize)]
pub struct CommitResult {
    /// Whether anything was written to the task store.
    pub applied: bool,
    /// Changes written (after the assignee guard), in field order.
    pub changes: Vec<FieldChange>,
    /// The new last-committed snapshot. Equal to the baseline when not applied.
    pub after: TrackedSnapshot,
    /// The record the task store echoed back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_record: Option<Task>,
    /// Set when a requested assignee change was dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_reverted: Option<RevertReason>,
    /// Set when the task was written but its audit rows were not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_failure: Option<String>,
}

impl CommitResult {
    fn not_applied(after: TrackedSnapshot, assignee_reverted: Option<RevertReason>) -> Self {
        Self {
            applied: false,
            changes: Vec::new(),
            after,
            updated_record: None,
            assignee_reverted,
            audit_failure: None,
        }
    }
}

/// Commit the edited state of a task against its last committed snapshot.
///
/// 1. Diff `before` against `after_raw`; nothing changed means no store is
///    contacted.
/// 2. Revert an unauthorized assignee change, keeping the other changes.
/// 3. Write the changed columns to the task store.
/// 4. Append one audit record per change, all sharing the store's
///    `updated_at` as `created_at`, in one batch.
///
/// A failed audit insert is logged and reported on the result; the task
/// write stands.
///
/// # Errors
///
/// Returns `CommitError::StoreWriteFailed` if the task store update fails.
/// Nothing is audited in that case.
pub async fn commit<S, A, D, T>(
    task_id: &str,
    before: &TrackedSnapshot,
    after_raw: &T,
    actor: Option<&Actor>,
    stores: &Collaborators<'_, S, A, D>,
) -> Result<CommitResult, CommitError>
where
    S: TaskStore,
    A: AuditSink,
    D: EmployeeDirectory,
    T: TrackedSource + ?Sized,
{
    let mut pending = diff(before, after_raw);
    if pending.is_empty() {
        tracing::debug!(task_id, "no tracked changes; skipping save");
        return Ok(CommitResult::not_applied(pending.after, None));
    }

    let mut assignee_reverted = None;
    if let Some(change) = pending.change_for(TrackedField::AssigneeId) {
        let decision = assignee_decision(actor, &change.new_value, stores.directory).await;
        if let AssigneeDecision::Reverted(reason) = decision {
            tracing::warn!(
                task_id,
                actor = actor.map(|a| a.employee_id.as_str()),
                from = %change.old_value,
                to = %change.new_value,
                ?reason,
                "assignee change reverted"
            );
            pending.revert(TrackedField::AssigneeId);
            assignee_reverted = Some(reason);
        }
    }

    if pending.is_empty() {
        return Ok(CommitResult::not_applied(pending.after, assignee_reverted));
    }

    let patch = TaskPatch::from_changes(&pending.changes);
    let updated = stores
        .tasks
        .update(task_id, &patch)
        .await
        .map_err(|error| CommitError::store_write_failed(task_id, error))?;

    let actor_id = actor.map(|a| a.employee_id.clone());
    let rows: Vec<AuditRecord> = pending
        .changes
        .iter()
        .map(|change| AuditRecord {
            task_id: task_id.to_string(),
            actor_id: actor_id.clone(),
            field: change.field,
            old_value: change.old_value.clone(),
            new_value: change.new_value.clone(),
            created_at: updated.updated_at,
        })
        .collect();

    let audit_failure = match stores.audit.insert_many(&rows).await {
        Ok(()) => None,
        Err(error) => {
            tracing::error!(
                task_id,
                %error,
                rows = rows.len(),
                "audit insert failed; task update kept"
            );
            Some(error.to_string())
        }
    };

    tracing::info!(task_id, changes = rows.len(), "task committed");

    Ok(CommitResult {
        applied: true,
        changes: pending.changes,
        after: snapshot(&updated),
        updated_record: Some(updated),
        assignee_reverted,
        audit_failure,
    })
}

async fn assignee_decision<D: EmployeeDirectory>(
    actor: Option<&Actor>,
    target: &str,
    directory: &D,
) -> AssigneeDecision {
    // Only a manager's decision depends on where the target sits.
    if !matches!(actor.map(|a| a.role), Some(Role::Manager)) || target.is_empty() {
        return authorize_assignee_change(actor, None);
    }

    match directory.department_of(target).await {
        Ok(department) => authorize_assignee_change(actor, department.as_deref()),
        Err(error) => {
            tracing::warn!(assignee = target, %error, "department lookup failed");
            AssigneeDecision::Reverted(RevertReason::LookupFailed)
        }
    }
}
