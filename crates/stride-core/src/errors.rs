//! Cross-cutting error types for Stride.
//!
//! Domain-specific errors (`StoreError`, `PlanError`) are defined in their
//! respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Stride crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// An assignment carries a due timestamp that is not RFC 3339.
    #[error("Invalid due date '{raw}' on assignment {id}: {reason}")]
    InvalidDue {
        id: String,
        raw: String,
        reason: String,
    },

    /// A chunk key string does not have the `<assignment>|<index>` shape.
    #[error("Invalid chunk key '{0}': expected '<assignment-id>|<index>'")]
    InvalidChunkKey(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Random ID generation failed.
    #[error("ID generation failed: {0}")]
    IdGeneration(String),
}
