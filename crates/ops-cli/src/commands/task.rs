#[path = "task/create.rs"]
mod create;
#[path = "task/edit.rs"]
mod edit;
#[path = "task/get.rs"]
mod get;
#[path = "task/history.rs"]
mod history;
#[path = "task/list.rs"]
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `opsdesk task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Create {
            title,
            content,
            priority,
            assignee,
            deadline,
        } => {
            let args = create::CreateArgs {
                title,
                content: content.as_deref(),
                priority: priority.as_deref(),
                assignee: assignee.as_deref(),
                deadline: deadline.as_deref(),
            };
            create::run(&args, ctx, flags).await
        }
        TaskCommands::List {
            status,
            assignee,
            limit,
        } => list::run(status.as_deref(), assignee.as_deref(), *limit, ctx, flags).await,
        TaskCommands::Get { id } => get::run(id, ctx, flags).await,
        TaskCommands::Edit {
            id,
            title,
            content,
            status,
            priority,
            assignee,
            deadline,
        } => {
            let edits = edit::Edits {
                title: title.as_deref(),
                content: content.as_deref(),
                status: status.as_deref(),
                priority: priority.as_deref(),
                assignee: assignee.as_deref(),
                deadline: deadline.as_deref(),
            };
            edit::run(id, &edits, ctx, flags).await
        }
        TaskCommands::History { id, field, limit } => {
            history::run(id, field.as_deref(), *limit, ctx, flags).await
        }
    }
}
