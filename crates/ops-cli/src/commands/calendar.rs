use anyhow::Context;
use chrono::{Datelike, NaiveDate, Utc};
use ops_core::calendar::{agenda_by_day, month_grid};
use ops_core::entities::Task;
use ops_db::repos::task::TaskFilter;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CalendarArgs;
use crate::commands::shared::parse::parse_month;
use crate::context::AppContext;
use crate::output::output;

/// Upper bound on tasks loaded for one month view.
const CALENDAR_FETCH_LIMIT: u32 = 10_000;

#[derive(Debug, Serialize)]
struct CalendarCell {
    date: NaiveDate,
    in_month: bool,
    tasks: Vec<AgendaItem>,
}

#[derive(Debug, Serialize)]
struct AgendaItem {
    task_id: String,
    task_title: String,
    urgent_level: String,
    status: String,
}

/// Handle `opsdesk calendar`.
pub async fn handle(args: &CalendarArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (year, month) = match args.month.as_deref() {
        Some(raw) => parse_month(raw)?,
        None => {
            let today = Utc::now().date_naive();
            (today.year(), today.month())
        }
    };

    let tasks = ctx
        .service
        .list_tasks(&TaskFilter {
            limit: Some(CALENDAR_FETCH_LIMIT),
            ..TaskFilter::default()
        })
        .await?;

    let cells = build_cells(year, month, &tasks)
        .with_context(|| format!("invalid month {year}-{month:02}"))?;
    output(&cells, flags.format)
}

/// Lay out the six-week grid for a month with each day's agenda.
fn build_cells(year: i32, month: u32, tasks: &[Task]) -> Option<Vec<CalendarCell>> {
    let grid = month_grid(year, month)?;
    let agenda = agenda_by_day(tasks);

    let cells = grid
        .iter()
        .map(|date| CalendarCell {
            date: *date,
            in_month: date.month() == month,
            tasks: agenda
                .get(date)
                .map(|day| {
                    day.iter()
                        .map(|task| AgendaItem {
                            task_id: task.task_id.clone(),
                            task_title: task.task_title.clone(),
                            urgent_level: task.urgent_level.clone(),
                            status: task.status.clone(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();
    Some(cells)
}
