//! Archive view scoping.

use std::collections::HashMap;

use crate::entities::{Employee, Task};
use crate::enums::ArchiveScope;
use crate::identity::Actor;
use crate::tracking::is_archived;

/// Archived tasks visible to `actor` under `scope`.
///
/// `Mine` keeps tasks assigned to the actor, `Department` keeps tasks whose
/// assignee sits in the actor's department, and `All` keeps everything.
/// Without an actor every archived task is shown. Tasks that are not
/// archived are never returned.
#[must_use]
pub fn filter_archived<'t>(
    tasks: &'t [Task],
    employees: &[Employee],
    actor: Option<&Actor>,
    scope: ArchiveScope,
) -> Vec<&'t Task> {
    let departments: HashMap<&str, &str> = employees
        .iter()
        .filter_map(|e| Some((e.employee_id.as_str(), e.department_id.as_deref()?)))
        .collect();

    let visible = |task: &Task| -> bool {
        let Some(actor) = actor else {
            return true;
        };
        let assignee = task.assignee_id.as_deref();
        match scope {
            ArchiveScope::All => true,
            ArchiveScope::Mine => assignee == Some(actor.employee_id.as_str()),
            ArchiveScope::Department => {
                match (actor.department_id.as_deref(), assignee.and_then(|a| departments.get(a))) {
                    (Some(own), Some(theirs)) => own == *theirs,
                    _ => false,
                }
            }
        }
    };

    tasks
        .iter()
        .filter(|task| is_archived(Some(&task.status)) && visible(task))
        .collect()
}
