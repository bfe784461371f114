//! Task change tracking.
//!
//! Opening a task snapshots its six tracked fields. On save the snapshot is
//! diffed against the edited state; the resulting field changes are written
//! to the task store and then appended to the audit sink, one record per
//! field. Status edits pass through the transition guard at the setter, and
//! assignee edits through the role/department guard at commit time.

mod commit;
mod diff;
mod draft;
mod guard;
mod normalize;
mod session;
mod snapshot;

#[cfg(test)]
mod test_support;

pub use commit::{Collaborators, CommitResult, commit};
pub use diff::{FieldChange, SnapshotDiff, diff};
pub use draft::TaskDraft;
pub use guard::{AssigneeDecision, RevertReason, authorize_assignee_change, check_status_transition};
pub use normalize::{
    is_archived, normalize_deadline, normalize_priority, normalize_status, normalize_text,
    parse_deadline,
};
pub use session::{EditSession, SaveOutcome};
pub use snapshot::{TrackedSnapshot, TrackedSource, snapshot};
