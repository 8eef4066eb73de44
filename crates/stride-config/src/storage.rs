//! Local blob storage configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    ".stride".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the JSON blobs. Relative paths resolve against the
    /// project root.
    #[serde(default = "default_dir")]
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { dir: default_dir() }
    }
}

impl StorageConfig {
    /// Resolve the blob directory for a given project root.
    #[must_use]
    pub fn resolve(&self, project_root: &Path) -> PathBuf {
        let dir = PathBuf::from(&self.dir);
        if dir.is_absolute() {
            dir
        } else {
            project_root.join(dir)
        }
    }
}
