use ops_core::tracking::is_archived;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct Deleted<'a> {
    task_id: &'a str,
    deleted: bool,
}

/// Only archived tasks can be deleted; their audit history is kept.
pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = ctx.service.get_task(id).await?;
    if !is_archived(Some(&task.status)) {
        anyhow::bail!(
            "task {id} is not archived (status '{}'); archive it before deleting",
            task.status
        );
    }

    ctx.service.delete_task(id).await?;
    output(
        &Deleted {
            task_id: id,
            deleted: true,
        },
        flags.format,
    )
}
