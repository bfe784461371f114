use crate::cli::GlobalFlags;
use crate::commands::shared::actor::resolve_employee;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let employee = resolve_employee(ctx, flags).await?.ok_or_else(|| {
        anyhow::anyhow!("no acting employee: pass --as <email> or set general.actor_email")
    })?;
    output(&employee, flags.format)
}
