use ops_core::enums::TrackedField;
use ops_db::repos::audit::AuditFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Audit rows of a task, oldest first. History outlives a deleted task.
pub async fn run(
    id: &str,
    field: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = AuditFilter {
        task_id: Some(id.to_string()),
        field: field
            .map(|value| parse_enum::<TrackedField>(value, "field"))
            .transpose()?,
        actor_id: None,
        limit: limit.or(flags.limit),
    };

    let entries = ctx.service.query_audit(&filter).await?;
    output(&entries, flags.format)
}
