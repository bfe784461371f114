use clap::Subcommand;

/// Employee directory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EmployeeCommands {
    /// Register an employee.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        department: Option<String>,
        /// boss, manager, or staff
        #[arg(long, default_value = "staff")]
        role: String,
    },
    /// List employees.
    List,
    /// Show the acting employee.
    Whoami,
}
