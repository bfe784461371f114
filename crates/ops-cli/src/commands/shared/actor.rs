use ops_core::entities::Employee;
use ops_core::identity::Actor;

use crate::cli::GlobalFlags;
use crate::context::AppContext;

/// Email of the acting employee: `--as` wins over `general.actor_email`.
fn actor_email<'a>(ctx: &'a AppContext, flags: &'a GlobalFlags) -> Option<&'a str> {
    flags
        .actor_email
        .as_deref()
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .or_else(|| ctx.config.general.actor_email())
}

/// Look up the acting employee, if one is configured.
///
/// A configured email that matches nobody is an error rather than an
/// anonymous edit.
pub async fn resolve_employee(
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<Option<Employee>> {
    let Some(email) = actor_email(ctx, flags) else {
        return Ok(None);
    };

    let employee = ctx
        .service
        .find_employee_by_email(email)
        .await?
        .ok_or_else(|| anyhow::anyhow!("no employee is registered with email '{email}'"))?;
    tracing::debug!(employee_id = %employee.employee_id, "resolved acting employee");
    Ok(Some(employee))
}

/// Resolve the acting employee as an [`Actor`].
pub async fn resolve_actor(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<Option<Actor>> {
    Ok(resolve_employee(ctx, flags).await?.as_ref().map(Actor::from))
}
