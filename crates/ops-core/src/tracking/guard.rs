//! Edit guards: the status state machine and assignee authorization.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Role, TaskStatus};
use crate::errors::TransitionRejected;
use crate::identity::Actor;

/// Check a status change between two normalized values.
///
/// Re-selecting the current status is always accepted. Targets outside the
/// known status set are rejected. A current status the state machine does not
/// know (legacy data) may move anywhere except `archieve`.
///
/// # Errors
///
/// Returns `TransitionRejected` when the transition is not allowed.
pub fn check_status_transition(current: &str, proposed: &str) -> Result<(), TransitionRejected> {
    if current == proposed {
        return Ok(());
    }

    let rejected = || TransitionRejected {
        from: current.to_string(),
        to: proposed.to_string(),
    };

    let next = TaskStatus::from_normalized(proposed).ok_or_else(rejected)?;
    let allowed = TaskStatus::from_normalized(current).map_or(next != TaskStatus::Archieve, |from| {
        from.can_transition_to(next)
    });

    if allowed { Ok(()) } else { Err(rejected()) }
}

/// Why an assignee change was reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RevertReason {
    /// The save had no attributed actor.
    NoActor,
    /// The actor's role may not reassign tasks.
    RoleNotAllowed,
    /// A manager tried to assign outside their department.
    OutsideDepartment,
    /// The target's department could not be looked up.
    LookupFailed,
}

/// Outcome of the assignee authorization guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssigneeDecision {
    Permitted,
    Reverted(RevertReason),
}

/// Decide whether `actor` may assign a task to someone in `target_department`.
///
/// A boss may assign anyone. A manager may assign only within their own
/// department; a missing department on either side does not match. Every
/// other role, and an anonymous save, is reverted.
#[must_use]
pub fn authorize_assignee_change(
    actor: Option<&Actor>,
    target_department: Option<&str>,
) -> AssigneeDecision {
    let Some(actor) = actor else {
        return AssigneeDecision::Reverted(RevertReason::NoActor);
    };

    match actor.role {
        Role::Boss => AssigneeDecision::Permitted,
        Role::Manager => match (actor.department_id.as_deref(), target_department) {
            (Some(own), Some(target)) if own == target => AssigneeDecision::Permitted,
            _ => AssigneeDecision::Reverted(RevertReason::OutsideDepartment),
        },
        Role::Staff => AssigneeDecision::Reverted(RevertReason::RoleNotAllowed),
    }
}
