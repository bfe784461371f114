use std::path::Path;

use anyhow::Context;
use ops_config::OpsConfig;

/// Load `.env` for the project, then the layered config rooted at it.
pub fn load_config(project_root: &Path) -> anyhow::Result<OpsConfig> {
    load_project_dotenv(project_root)?;
    OpsConfig::load_from(project_root).context("failed to load opsdesk configuration")
}

fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
