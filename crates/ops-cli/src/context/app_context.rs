use std::path::Path;

use anyhow::Context;
use ops_config::{IN_MEMORY, OpsConfig};
use ops_db::service::OpsService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: OpsService,
    pub config: OpsConfig,
}

impl AppContext {
    /// Open the project database and keep the loaded config alongside it.
    pub async fn init(project_root: &Path, config: OpsConfig) -> anyhow::Result<Self> {
        let db_path = database_location(project_root, &config)?;
        tracing::debug!(%db_path, "opening opsdesk database");

        let service = OpsService::new_local(&db_path)
            .await
            .with_context(|| format!("failed to open database at {db_path}"))?;

        Ok(Self { service, config })
    }
}

/// Database path handed to libSQL. Creates the parent directory of a file
/// database if needed.
pub fn database_location(project_root: &Path, config: &OpsConfig) -> anyhow::Result<String> {
    if config.database.is_in_memory() {
        return Ok(IN_MEMORY.to_string());
    }

    let path = config.database.resolve(project_root);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(path.to_string_lossy().into_owned())
}
