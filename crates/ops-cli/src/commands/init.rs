use std::path::{Path, PathBuf};

use anyhow::Context;
use ops_config::{OpsConfig, PROJECT_DIR};
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitReport {
    project_root: String,
    config_path: String,
    config_written: bool,
    database: String,
}

/// Handle `opsdesk init`.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let project_root = match flags.project.as_deref() {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    let report = initialize(&project_root, args).await?;
    tracing::info!(root = %report.project_root, "opsdesk project initialized");
    output(&report, flags.format)
}

async fn initialize(project_root: &Path, args: &InitArgs) -> anyhow::Result<InitReport> {
    let project_dir = project_root.join(PROJECT_DIR);
    std::fs::create_dir_all(&project_dir)
        .with_context(|| format!("failed to create {}", project_dir.display()))?;

    let config_path = OpsConfig::project_config_path(project_root);
    let config_written = if config_path.exists() && !args.force {
        false
    } else {
        write_project_config(&config_path, args)?;
        true
    };

    let config = bootstrap::load_config(project_root)?;
    let database = crate::context::database_location(project_root, &config)?;
    AppContext::init(project_root, config)
        .await
        .context("failed to create the opsdesk database")?;

    Ok(InitReport {
        project_root: project_root.display().to_string(),
        config_path: config_path.display().to_string(),
        config_written,
        database,
    })
}

fn write_project_config(path: &Path, args: &InitArgs) -> anyhow::Result<()> {
    let mut config = OpsConfig::default();
    if let Some(email) = args.actor_email.as_deref() {
        config.general.actor_email = email.trim().to_string();
    }

    let rendered = toml::to_string_pretty(&config).context("failed to render project config")?;
    std::fs::write(path, rendered)
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::initialize;
    use crate::cli::root_commands::InitArgs;

    fn args(actor_email: Option<&str>, force: bool) -> InitArgs {
        InitArgs {
            actor_email: actor_email.map(str::to_string),
            force,
        }
    }

    #[tokio::test]
    async fn creates_project_dir_config_and_database() {
        let temp = TempDir::new().expect("tempdir should create");
        let report = initialize(temp.path(), &args(Some("kim@example.com"), false))
            .await
            .expect("init should succeed");

        assert!(report.config_written);
        assert!(temp.path().join(".opsdesk/opsdesk.db").exists());
        let written = std::fs::read_to_string(temp.path().join(".opsdesk/config.toml"))
            .expect("config should exist");
        assert!(written.contains("kim@example.com"));
    }

    #[tokio::test]
    async fn existing_config_is_kept_without_force() {
        let temp = TempDir::new().expect("tempdir should create");
        initialize(temp.path(), &args(Some("kim@example.com"), false))
            .await
            .expect("first init should succeed");

        let report = initialize(temp.path(), &args(Some("lee@example.com"), false))
            .await
            .expect("second init should succeed");
        assert!(!report.config_written);
        let written = std::fs::read_to_string(temp.path().join(".opsdesk/config.toml"))
            .expect("config should exist");
        assert!(written.contains("kim@example.com"));

        let report = initialize(temp.path(), &args(Some("lee@example.com"), true))
            .await
            .expect("forced init should succeed");
        assert!(report.config_written);
    }
}
