//! Local libSQL database configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Database file used when none is configured, relative to the project root.
pub const DEFAULT_DATABASE_PATH: &str = ".opsdesk/opsdesk.db";

/// Path value that selects a throwaway in-memory database.
pub const IN_MEMORY: &str = ":memory:";

fn default_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file. Relative paths are resolved against the project root.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }

    /// Absolute location of the database file for a project.
    #[must_use]
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        let path = Path::new(&self.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            project_root.join(path)
        }
    }
}
