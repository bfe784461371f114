use ops_db::repos::task::TaskFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::configured_limit;
use crate::commands::shared::parse::{blank_to_none, parse_status};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: Option<&str>,
    assignee: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = TaskFilter {
        status: status.map(parse_status).transpose()?,
        assignee_id: assignee.and_then(blank_to_none),
        limit: Some(configured_limit(limit, flags.limit, ctx)),
    };

    let tasks = ctx.service.list_tasks(&filter).await?;
    output(&tasks, flags.format)
}
