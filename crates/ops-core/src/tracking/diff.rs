//! Field-level diffing between a committed snapshot and an edited state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::snapshot::{TrackedSnapshot, TrackedSource, snapshot};
use crate::enums::TrackedField;

/// One tracked field whose normalized value changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldChange {
    pub field: TrackedField,
    pub old_value: String,
    pub new_value: String,
}

/// Result of [`diff`]: the changes in declaration order plus the normalized
/// edited state they lead to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotDiff {
    pub changes: Vec<FieldChange>,
    pub after: TrackedSnapshot,
}

impl SnapshotDiff {
    /// No tracked field differs; nothing should be written anywhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    #[must_use]
    pub fn change_for(&self, field: TrackedField) -> Option<&FieldChange> {
        self.changes.iter().find(|change| change.field == field)
    }

    /// Drop the change to `field` and restore its committed value in `after`.
    ///
    /// Returns the dropped change, if there was one.
    pub fn revert(&mut self, field: TrackedField) -> Option<FieldChange> {
        let index = self.changes.iter().position(|change| change.field == field)?;
        let change = self.changes.remove(index);
        self.after.set(field, change.old_value.clone());
        Some(change)
    }
}

/// Compare a committed snapshot against an edited state.
///
/// A change is emitted for every tracked field whose normalized strings are
/// unequal, in [`TrackedField::ALL`] order.
#[must_use]
pub fn diff<T: TrackedSource + ?Sized>(before: &TrackedSnapshot, after_raw: &T) -> SnapshotDiff {
    let after = snapshot(after_raw);
    let changes = TrackedField::ALL
        .into_iter()
        .filter(|field| before.get(*field) != after.get(*field))
        .map(|field| FieldChange {
            field,
            old_value: before.get(field).to_string(),
            new_value: after.get(field).to_string(),
        })
        .collect();
    SnapshotDiff { changes, after }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::TaskDraft;
    use pretty_assertions::assert_eq;

    fn base_draft() -> TaskDraft {
        TaskDraft {
            status: Some("pending".into()),
            task_content: Some(String::new()),
            urgent_level: Some("low".into()),
            assignee_id: Some("7".into()),
            deadline: Some("2024-01-01".into()),
            task_title: Some("A".into()),
        }
    }

    fn change(field: TrackedField, old: &str, new: &str) -> FieldChange {
        FieldChange {
            field,
            old_value: old.into(),
            new_value: new.into(),
        }
    }

    #[test]
    fn end_to_end_scenario_orders_changes_by_field() {
        let before = snapshot(&base_draft());
        let after_raw = TaskDraft {
            status: Some("in progress".into()),
            urgent_level: Some("high".into()),
            deadline: Some("2024-01-02".into()),
            ..base_draft()
        };

        let result = diff(&before, &after_raw);
        assert_eq!(
            result.changes,
            vec![
                change(TrackedField::Status, "pending", "in progress"),
                change(TrackedField::UrgentLevel, "low", "high"),
                change(TrackedField::Deadline, "2024-01-01", "2024-01-02"),
            ]
        );
        assert_eq!(result.after, snapshot(&after_raw));
    }

    #[test]
    fn diff_is_idempotent() {
        let draft = base_draft();
        let before = snapshot(&draft);
        assert!(diff(&before, &draft).is_empty());
        assert!(diff(&before, &draft).is_empty());
        assert_eq!(before, snapshot(&draft));
    }

    #[test]
    fn representational_differences_are_not_changes() {
        let before = snapshot(&TaskDraft {
            status: Some("archieve".into()),
            deadline: Some("2024-05-01".into()),
            urgent_level: Some("low".into()),
            ..base_draft()
        });
        let after_raw = TaskDraft {
            status: Some("ARCHIEVE".into()),
            deadline: Some("2024-05-01T00:00:00Z".into()),
            urgent_level: Some("bogus".into()),
            ..base_draft()
        };
        assert!(diff(&before, &after_raw).is_empty());
    }

    #[test]
    fn each_field_changed_alone_yields_one_change() {
        let base = base_draft();
        let before = snapshot(&base);
        for field in TrackedField::ALL {
            let mut edited = base.clone();
            let slot = match field {
                TrackedField::Status => &mut edited.status,
                TrackedField::TaskContent => &mut edited.task_content,
                TrackedField::UrgentLevel => &mut edited.urgent_level,
                TrackedField::AssigneeId => &mut edited.assignee_id,
                TrackedField::Deadline => &mut edited.deadline,
                TrackedField::TaskTitle => &mut edited.task_title,
            };
            *slot = Some(match field {
                TrackedField::Status => "review".to_string(),
                TrackedField::UrgentLevel => "medium".to_string(),
                TrackedField::Deadline => "2030-12-31".to_string(),
                _ => "changed".to_string(),
            });

            let result = diff(&before, &edited);
            assert_eq!(result.changes.len(), 1, "field {field}");
            assert_eq!(result.changes[0].field, field);
        }
    }

    #[test]
    fn clearing_a_nullable_field_is_a_change_to_empty() {
        let before = snapshot(&base_draft());
        let result = diff(
            &before,
            &TaskDraft {
                assignee_id: None,
                ..base_draft()
            },
        );
        assert_eq!(result.changes, vec![change(TrackedField::AssigneeId, "7", "")]);
    }

    #[test]
    fn revert_restores_committed_value() {
        let before = snapshot(&base_draft());
        let mut result = diff(
            &before,
            &TaskDraft {
                assignee_id: Some("9".into()),
                task_title: Some("B".into()),
                ..base_draft()
            },
        );

        let dropped = result.revert(TrackedField::AssigneeId);
        assert_eq!(dropped, Some(change(TrackedField::AssigneeId, "7", "9")));
        assert_eq!(result.after.assignee_id, "7");
        assert_eq!(result.changes, vec![change(TrackedField::TaskTitle, "A", "B")]);
        assert!(result.revert(TrackedField::AssigneeId).is_none());
    }
}
