//! Listing enums for Stride.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! so the CLI can parse them from user input with the same spelling.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// AssignmentSort
// ---------------------------------------------------------------------------

/// Ordering applied to assignment listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentSort {
    /// Earliest due first. Unparseable due dates sort last.
    #[default]
    Due,
    Course,
    Title,
    Created,
}

impl AssignmentSort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Due => "due",
            Self::Course => "course",
            Self::Title => "title",
            Self::Created => "created",
        }
    }
}

impl fmt::Display for AssignmentSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DueFilter
// ---------------------------------------------------------------------------

/// Restrict a listing relative to the current instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DueFilter {
    #[default]
    All,
    /// Due at or after now.
    Upcoming,
    /// Due before now.
    Overdue,
}

impl DueFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Upcoming => "upcoming",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for DueFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
