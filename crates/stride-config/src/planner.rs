//! Study-plan configuration.

use serde::{Deserialize, Serialize};

fn default_timezone() -> String {
    "UTC".to_string()
}

const fn default_prune_on_load() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlannerConfig {
    /// IANA zone that defines day boundaries (e.g., `America/Chicago`).
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Drop overrides for deleted assignments or vanished chunks before planning.
    #[serde(default = "default_prune_on_load")]
    pub prune_on_load: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            prune_on_load: default_prune_on_load(),
        }
    }
}
