use clap::Subcommand;

/// Archived task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ArchiveCommands {
    /// List archived tasks, most recently archived first.
    List {
        /// mine, department, or all (defaults by role)
        #[arg(long)]
        scope: Option<String>,
    },
    /// Restore an archived task to in progress.
    Restore { id: String },
    /// Permanently delete an archived task.
    Delete { id: String },
}
