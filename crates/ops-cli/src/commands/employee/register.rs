use ops_core::enums::Role;
use ops_db::repos::employee::NewEmployee;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{blank_to_none, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    email: &str,
    department: Option<&str>,
    role: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let new = NewEmployee {
        employee_name: name.to_string(),
        email: email.to_string(),
        department_id: department.and_then(blank_to_none),
        role: parse_enum::<Role>(role, "role")?,
    };
    let employee = ctx.service.register_employee(&new).await?;
    output(&employee, flags.format)
}
