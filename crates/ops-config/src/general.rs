//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Email of the employee edits are attributed to when `--as` is not given.
    #[serde(default)]
    pub actor_email: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            actor_email: String::new(),
        }
    }
}

impl GeneralConfig {
    /// The configured acting email, if any.
    #[must_use]
    pub fn actor_email(&self) -> Option<&str> {
        let email = self.actor_email.trim();
        (!email.is_empty()).then_some(email)
    }
}
