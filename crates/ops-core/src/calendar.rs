//! Month calendar layout and per-day task agendas.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::entities::Task;
use crate::enums::Priority;
use crate::tracking::{is_archived, parse_deadline};

/// Number of cells in a month grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;

/// The 42 dates shown for a month, starting on the Sunday on or before the
/// first of the month.
///
/// Returns `None` for an invalid year/month.
#[must_use]
pub fn month_grid(year: i32, month: u32) -> Option<[NaiveDate; GRID_CELLS]> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let lead = u64::from(first.weekday().num_days_from_sunday());
    let start = first.checked_sub_days(Days::new(lead))?;

    let mut grid = [start; GRID_CELLS];
    for (offset, cell) in (0u64..).zip(grid.iter_mut()) {
        *cell = start.checked_add_days(Days::new(offset))?;
    }
    Some(grid)
}

/// Sort rank of a raw priority: `high`, `medium`, `low`, then anything else.
#[must_use]
pub fn priority_rank(raw: &str) -> u8 {
    Priority::parse(raw).map_or(3, Priority::rank)
}

/// Group live tasks by deadline date.
///
/// Archived tasks and tasks without a parseable deadline are skipped. Within
/// a day tasks are ordered by priority rank, then title.
#[must_use]
pub fn agenda_by_day(tasks: &[Task]) -> BTreeMap<NaiveDate, Vec<&Task>> {
    let mut days: BTreeMap<NaiveDate, Vec<&Task>> = BTreeMap::new();
    for task in tasks {
        if is_archived(Some(&task.status)) {
            continue;
        }
        if let Some(date) = parse_deadline(task.deadline.as_deref()) {
            days.entry(date).or_default().push(task);
        }
    }
    for agenda in days.values_mut() {
        agenda.sort_by(|a, b| {
            priority_rank(&a.urgent_level)
                .cmp(&priority_rank(&b.urgent_level))
                .then_with(|| a.task_title.cmp(&b.task_title))
        });
    }
    days
}
