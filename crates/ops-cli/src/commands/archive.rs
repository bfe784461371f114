#[path = "archive/delete.rs"]
mod delete;
#[path = "archive/list.rs"]
mod list;
#[path = "archive/restore.rs"]
mod restore;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ArchiveCommands;
use crate::context::AppContext;

/// Handle `opsdesk archive`.
pub async fn handle(
    action: &ArchiveCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ArchiveCommands::List { scope } => list::run(scope.as_deref(), ctx, flags).await,
        ArchiveCommands::Restore { id } => restore::run(id, ctx, flags).await,
        ArchiveCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
