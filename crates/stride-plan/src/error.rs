//! Planner error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    /// The configured zone is not in the IANA database.
    #[error("Unknown timezone '{name}': {reason}")]
    InvalidTimezone { name: String, reason: String },

    /// A calendar date or local time could not be resolved.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
