use ops_core::identity::Actor;
use ops_core::store::TaskStore;
use ops_core::tracking::{Collaborators, EditSession, SaveOutcome};
use ops_db::service::OpsService;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::actor::resolve_actor;
use crate::commands::shared::parse::{
    blank_to_none, parse_deadline_arg, parse_priority, parse_status,
};
use crate::context::AppContext;
use crate::output::output;

/// Requested field edits. `None` leaves a field alone.
#[derive(Debug, Default)]
pub struct Edits<'a> {
    pub title: Option<&'a str>,
    pub content: Option<&'a str>,
    pub status: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub assignee: Option<&'a str>,
    pub deadline: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct EditReport {
    task_id: String,
    /// Set when the requested status change was not allowed and was dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    status_rejected: Option<String>,
    save: SaveOutcome,
}

pub async fn run(
    id: &str,
    edits: &Edits<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let actor = resolve_actor(ctx, flags).await?;
    let report = save_edits(&ctx.service, id, edits, actor.as_ref()).await?;
    output(&report, flags.format)
}

/// Open an edit session on the task, apply the edits, and save once.
async fn save_edits(
    service: &OpsService,
    id: &str,
    edits: &Edits<'_>,
    actor: Option<&Actor>,
) -> anyhow::Result<EditReport> {
    let task = TaskStore::select(service, id).await?;
    let session = EditSession::open(&task);
    let status_rejected = apply_edits(&session, edits)?;

    let stores = Collaborators::new(service, service, service);
    let save = session.save(&stores, actor).await?;

    Ok(EditReport {
        task_id: session.task_id().to_string(),
        status_rejected,
        save,
    })
}

/// Write the edits into the session draft.
///
/// Returns the rejection message when the status change is not allowed.
fn apply_edits(session: &EditSession, edits: &Edits<'_>) -> anyhow::Result<Option<String>> {
    if let Some(title) = edits.title {
        let title = title.trim();
        anyhow::ensure!(!title.is_empty(), "task title cannot be empty");
        session.set_title(title);
    }
    if let Some(content) = edits.content {
        session.set_content(blank_to_none(content));
    }
    if let Some(priority) = edits.priority {
        session.set_priority(parse_priority(priority)?.as_str());
    }
    if let Some(assignee) = edits.assignee {
        session.set_assignee(blank_to_none(assignee));
    }
    if let Some(deadline) = edits.deadline {
        session.set_deadline(parse_deadline_arg(deadline)?);
    }

    let Some(status) = edits.status else {
        return Ok(None);
    };
    match session.set_status(&parse_status(status)?) {
        Ok(()) => Ok(None),
        Err(rejection) => {
            tracing::warn!(task_id = session.task_id(), %rejection, "status change dropped");
            Ok(Some(rejection.to_string()))
        }
    }
}
