use clap::Subcommand;

/// Task entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: Option<String>,
        /// low, medium, or high
        #[arg(long)]
        priority: Option<String>,
        /// Employee id of the assignee
        #[arg(long)]
        assignee: Option<String>,
        /// Due date as YYYY-MM-DD
        #[arg(long)]
        deadline: Option<String>,
    },
    /// List tasks, newest first.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        assignee: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a task by ID.
    Get { id: String },
    /// Edit a task and save once. Pass an empty value to clear a field.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        assignee: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Show the field-level change history of a task.
    History {
        id: String,
        /// Only changes to this field (e.g. status, task-title)
        #[arg(long)]
        field: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
