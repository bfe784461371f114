//! Error types raised by the change-tracking core.
//!
//! Storage errors (`DatabaseError`) are defined in `ops-db`; both converge
//! in `ops-cli` through `anyhow`.

use thiserror::Error;

use crate::enums::TaskStatus;

/// A status change refused by the edit-session setter.
///
/// The proposed value has already been discarded when this is returned;
/// callers are free to ignore it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("status transition from '{from}' to '{to}' is not allowed")]
pub struct TransitionRejected {
    /// Current normalized status.
    pub from: String,
    /// Proposed normalized status.
    pub to: String,
}

impl TransitionRejected {
    /// Whether the rejection was an attempt to archive an unfinished task.
    #[must_use]
    pub fn is_premature_archive(&self) -> bool {
        self.to == TaskStatus::Archieve.as_str()
    }
}

/// Boxed collaborator error carried through the commit pipeline.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Fatal outcome of a commit.
#[derive(Debug, Error)]
pub enum CommitError {
    /// The task store rejected or failed the update. Nothing was audited and
    /// the last committed snapshot is unchanged, so the save can be retried.
    #[error("failed to write task {task_id}: {source}")]
    StoreWriteFailed {
        task_id: String,
        #[source]
        source: BoxError,
    },
}

impl CommitError {
    pub(crate) fn store_write_failed<E>(task_id: &str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::StoreWriteFailed {
            task_id: task_id.to_string(),
            source: Box::new(source),
        }
    }
}
