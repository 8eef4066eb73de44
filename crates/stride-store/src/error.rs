//! Store error types for stride-store.

use std::path::PathBuf;

use stride_core::errors::CoreError;
use thiserror::Error;

/// Errors from blob persistence and the typed repositories.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a blob file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A blob exists but does not hold the expected document.
    #[error("Stored '{key}' data is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    /// Storage keys are restricted to `[a-z0-9_-]`.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// Serializing a document failed.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Domain-level failure (not found, validation).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::Core(CoreError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        })
    }

    /// Whether this error means the requested entity does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }
}
