#[path = "employee/list.rs"]
mod list;
#[path = "employee/register.rs"]
mod register;
#[path = "employee/whoami.rs"]
mod whoami;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EmployeeCommands;
use crate::context::AppContext;

/// Handle `opsdesk employee`.
pub async fn handle(
    action: &EmployeeCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EmployeeCommands::Register {
            name,
            email,
            department,
            role,
        } => register::run(name, email, department.as_deref(), role, ctx, flags).await,
        EmployeeCommands::List => list::run(ctx, flags).await,
        EmployeeCommands::Whoami => whoami::run(ctx, flags).await,
    }
}
