use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `opsdesk` binary.
#[derive(Debug, Parser)]
#[command(
    name = "opsdesk",
    version,
    about = "opsdesk - task tracking with field-level audit history"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .opsdesk)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Act as the employee with this email
    #[arg(long = "as", global = true, value_name = "EMAIL")]
    pub as_email: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            project: self.project.clone(),
            actor_email: self.as_email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{ArchiveCommands, EmployeeCommands, TaskCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "opsdesk",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "calendar",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Calendar(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["opsdesk", "task", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Task {
                action: TaskCommands::List { .. }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["opsdesk", "--format", "xml", "calendar"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn as_flag_sets_actor_email() {
        let cli = Cli::try_parse_from([
            "opsdesk",
            "task",
            "edit",
            "tsk-00000001",
            "--status",
            "in progress",
            "--as",
            "kim@example.com",
        ])
        .expect("cli should parse");

        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.actor_email.as_deref(), Some("kim@example.com"));
        let Commands::Task {
            action: TaskCommands::Edit { id, status, .. },
        } = cli.command
        else {
            panic!("expected task edit");
        };
        assert_eq!(id, "tsk-00000001");
        assert_eq!(status.as_deref(), Some("in progress"));
    }

    #[test]
    fn employee_register_defaults_role_to_staff() {
        let cli = Cli::try_parse_from([
            "opsdesk",
            "employee",
            "register",
            "--name",
            "Kim",
            "--email",
            "kim@example.com",
        ])
        .expect("cli should parse");

        let Commands::Employee {
            action: EmployeeCommands::Register { role, department, .. },
        } = cli.command
        else {
            panic!("expected employee register");
        };
        assert_eq!(role, "staff");
        assert!(department.is_none());
    }

    #[test]
    fn archive_list_accepts_scope() {
        let cli = Cli::try_parse_from(["opsdesk", "archive", "list", "--scope", "department"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Archive {
                action: ArchiveCommands::List { scope: Some(ref scope) }
            } if scope == "department"
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["opsdesk", "--project", "/tmp/demo", "calendar"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.project.as_deref(), Some("/tmp/demo"));
        assert!(flags.actor_email.is_none());
    }
}
