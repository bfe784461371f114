use ops_core::archive::filter_archived;
use ops_core::enums::ArchiveScope;

use crate::cli::GlobalFlags;
use crate::commands::shared::actor::resolve_actor;
use crate::commands::shared::limit::configured_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(scope: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = resolve_actor(ctx, flags).await?;
    let scope = match scope {
        Some(raw) => parse_enum::<ArchiveScope>(raw, "scope")?,
        None => actor
            .as_ref()
            .map_or(ArchiveScope::All, |actor| ArchiveScope::default_for(actor.role)),
    };

    let tasks = ctx.service.list_archived_tasks().await?;
    let employees = if scope == ArchiveScope::Department {
        ctx.service.list_employees().await?
    } else {
        Vec::new()
    };

    let mut visible = filter_archived(&tasks, &employees, actor.as_ref(), scope);
    visible.truncate(usize::try_from(configured_limit(None, flags.limit, ctx))?);
    tracing::debug!(%scope, shown = visible.len(), total = tasks.len(), "archive listed");

    output(&visible, flags.format)
}
