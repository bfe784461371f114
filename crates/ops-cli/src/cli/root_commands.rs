use clap::{Args, Subcommand};

use crate::cli::subcommands::{ArchiveCommands, EmployeeCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize opsdesk for a project.
    Init(InitArgs),
    /// Employees.
    Employee {
        #[command(subcommand)]
        action: EmployeeCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Archived tasks.
    Archive {
        #[command(subcommand)]
        action: ArchiveCommands,
    },
    /// Month calendar of task deadlines.
    Calendar(CalendarArgs),
}

/// Arguments for `opsdesk init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Default acting employee written to the project config.
    #[arg(long)]
    pub actor_email: Option<String>,
    /// Overwrite an existing project config.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `opsdesk calendar`.
#[derive(Clone, Debug, Args)]
pub struct CalendarArgs {
    /// Month to show as YYYY-MM (defaults to the current month).
    #[arg(long)]
    pub month: Option<String>,
}
