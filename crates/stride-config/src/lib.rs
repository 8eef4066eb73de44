//! # stride-config
//!
//! Layered configuration loading for Stride using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`STRIDE_*` prefix, `__` as separator)
//! 2. Project-level `.stride/config.toml`
//! 3. User-level `~/.config/stride/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `STRIDE_PLANNER__TIMEZONE` -> `planner.timezone`,
//! `STRIDE_STORAGE__DIR` -> `storage.dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use stride_config::StrideConfig;
//!
//! let config = StrideConfig::load_for_project(Path::new(".")).expect("config");
//! println!("planning in {}", config.planner.timezone);
//! ```

mod error;
mod general;
mod planner;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use planner::PlannerConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project directory that holds config and data.
pub const PROJECT_DIR: &str = ".stride";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StrideConfig {
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl StrideConfig {
    /// Load configuration for an explicit project root.
    ///
    /// Does not read `.env`; the binary loads that before calling in so the
    /// env provider sees its values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain for a project root.
    #[must_use]
    pub fn figment_for(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("STRIDE_").split("__"))
    }

    /// Path of the project-local config file under `project_root`.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join("config.toml")
    }

    /// Reject values that would only fail later and less clearly.
    ///
    /// The timezone name is checked by the planner, which owns the zone database.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.planner.timezone.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "planner.timezone".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.storage.dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.dir".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stride").join("config.toml"))
    }
}
