use ops_db::repos::task::NewTask;

use crate::cli::GlobalFlags;
use crate::commands::shared::actor::resolve_actor;
use crate::commands::shared::parse::{blank_to_none, parse_deadline_arg, parse_priority};
use crate::context::AppContext;
use crate::output::output;

pub struct CreateArgs<'a> {
    pub title: &'a str,
    pub content: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub assignee: Option<&'a str>,
    pub deadline: Option<&'a str>,
}

pub async fn run(args: &CreateArgs<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = resolve_actor(ctx, flags).await?;

    let new = NewTask {
        task_title: args.title.trim().to_string(),
        task_content: args.content.and_then(blank_to_none),
        urgent_level: args
            .priority
            .map(parse_priority)
            .transpose()?
            .map(|priority| priority.as_str().to_string()),
        assignee_id: args.assignee.and_then(blank_to_none),
        deadline: args.deadline.map(parse_deadline_arg).transpose()?.flatten(),
        created_by: actor.map(|actor| actor.employee_id),
    };

    let task = ctx.service.create_task(&new).await?;
    output(&task, flags.format)
}
