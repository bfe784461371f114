use crate::cli::GlobalFlags;
use crate::commands::shared::actor::resolve_actor;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = resolve_actor(ctx, flags).await?;
    let outcome = ctx.service.restore_task(id, actor.as_ref()).await?;
    output(&outcome, flags.format)
}
