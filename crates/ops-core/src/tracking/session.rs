//! Editing session for one open task.
//!
//! The session owns the last committed snapshot and the in-memory draft as
//! explicit state, so a save never depends on ambient UI state. Saves are
//! non-reentrant: a save requested while another is in flight is dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use super::commit::{Collaborators, CommitResult, commit};
use super::diff::{FieldChange, diff};
use super::draft::TaskDraft;
use super::guard::check_status_transition;
use super::normalize::normalize_status;
use super::snapshot::{TrackedSnapshot, snapshot};
use crate::entities::Task;
use crate::errors::{CommitError, TransitionRejected};
use crate::identity::Actor;
use crate::store::{AuditSink, EmployeeDirectory, TaskStore};

/// What happened to a save request.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaveOutcome {
    /// The commit pipeline ran (it may still have been a no-op).
    Committed(CommitResult),
    /// Another save on this session was already in flight.
    Dropped,
}

#[derive(Debug)]
struct SessionState {
    committed: TrackedSnapshot,
    draft: TaskDraft,
}

/// An open task being edited by one actor.
#[derive(Debug)]
pub struct EditSession {
    task_id: String,
    state: Mutex<SessionState>,
    saving: AtomicBool,
}

impl EditSession {
    /// Open a task for editing, snapshotting its tracked fields.
    #[must_use]
    pub fn open(task: &Task) -> Self {
        Self {
            task_id: task.task_id.clone(),
            state: Mutex::new(SessionState {
                committed: snapshot(task),
                draft: TaskDraft::from(task),
            }),
            saving: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// The last committed snapshot.
    #[must_use]
    pub fn committed(&self) -> TrackedSnapshot {
        self.state().committed.clone()
    }

    /// The current in-memory edits.
    #[must_use]
    pub fn draft(&self) -> TaskDraft {
        self.state().draft.clone()
    }

    /// Whether a save is in flight.
    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.state().draft.task_title = Some(title.into());
    }

    pub fn set_content(&self, content: Option<String>) {
        self.state().draft.task_content = content;
    }

    pub fn set_priority(&self, priority: impl Into<String>) {
        self.state().draft.urgent_level = Some(priority.into());
    }

    pub fn set_assignee(&self, assignee_id: Option<String>) {
        self.state().draft.assignee_id = assignee_id;
    }

    pub fn set_deadline(&self, deadline: Option<String>) {
        self.state().draft.deadline = deadline;
    }

    /// Propose a new status.
    ///
    /// Illegal transitions (archiving a task that is not done, leaving
    /// `archieve`, unknown statuses) are discarded and the draft keeps its
    /// current status.
    ///
    /// # Errors
    ///
    /// Returns `TransitionRejected` describing the discarded proposal. It is
    /// informational; the session is left consistent either way.
    pub fn set_status(&self, status: &str) -> Result<(), TransitionRejected> {
        let mut state = self.state();
        let current = normalize_status(state.draft.status.as_deref());
        let proposed = normalize_status(Some(status));
        check_status_transition(&current, &proposed)?;
        state.draft.status = Some(proposed);
        Ok(())
    }

    /// Preview the changes a save would commit, before authorization.
    #[must_use]
    pub fn pending_changes(&self) -> Vec<FieldChange> {
        let state = self.state();
        diff(&state.committed, &state.draft).changes
    }

    /// Save the draft.
    ///
    /// On success the committed snapshot is replaced with the stored values,
    /// and draft fields left untouched while the save ran take the stored
    /// value too. A reverted assignee change is rolled back in the draft
    /// unless the assignee was set again in the meantime. On failure the
    /// snapshot is kept so the save can be retried.
    ///
    /// # Errors
    ///
    /// Returns `CommitError::StoreWriteFailed` if the task store update fails.
    pub async fn save<S, A, D>(
        &self,
        stores: &Collaborators<'_, S, A, D>,
        actor: Option<&Actor>,
    ) -> Result<SaveOutcome, CommitError>
    where
        S: TaskStore,
        A: AuditSink,
        D: EmployeeDirectory,
    {
        let Some(_in_flight) = SaveGuard::acquire(&self.saving) else {
            tracing::debug!(task_id = %self.task_id, "save already in flight; dropping request");
            return Ok(SaveOutcome::Dropped);
        };

        let (before, draft) = {
            let state = self.state();
            (state.committed.clone(), state.draft.clone())
        };

        let result = commit(&self.task_id, &before, &draft, actor, stores).await?;

        {
            let mut state = self.state();
            if result.applied {
                state.committed = result.after.clone();
                if let Some(stored) = &result.updated_record {
                    state.draft.adopt_stored(&draft, stored);
                }
            }
            if result.assignee_reverted.is_some() && state.draft.assignee_id == draft.assignee_id {
                state.draft.assignee_id = draft_value(&before.assignee_id);
            }
        }

        Ok(SaveOutcome::Committed(result))
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn draft_value(normalized: &str) -> Option<String> {
    (!normalized.is_empty()).then(|| normalized.to_string())
}

/// Holds the session's in-flight flag; released on drop, including when a
/// save future is cancelled.
struct SaveGuard<'a>(&'a AtomicBool);

impl<'a> SaveGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for SaveGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
