//! Errors raised while loading or checking a [`StrideConfig`](crate::StrideConfig).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source failed to parse or a value has the wrong type.
    #[error("cannot read stride config: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is unusable.
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
