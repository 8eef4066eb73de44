use chrono::{DateTime, FixedOffset, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Largest accepted effort estimate: one week of minutes.
pub const MAX_ESTIMATE_MINUTES: u32 = 7 * 24 * 60;

/// A piece of coursework with a due instant and an optional effort estimate.
///
/// `due` is kept as the raw RFC 3339 string it was stored with. It is parsed
/// on demand so one malformed record cannot poison a whole listing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Assignment {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    pub title: String,
    pub due: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Estimated effort in minutes. The planner assumes 60 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate_minutes: Option<u32>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl Assignment {
    /// Parse the stored due timestamp.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDue` when `due` is not RFC 3339.
    pub fn due_at(&self) -> Result<DateTime<FixedOffset>, CoreError> {
        DateTime::parse_from_rfc3339(self.due.trim()).map_err(|e| CoreError::InvalidDue {
            id: self.id.clone(),
            raw: self.due.clone(),
            reason: e.to_string(),
        })
    }

    /// Check field constraints before the record is written.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for an empty title or an estimate
    /// outside `1..=MAX_ESTIMATE_MINUTES`, and `CoreError::InvalidDue` for an
    /// unparseable due date.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        if self.estimate_minutes == Some(0) {
            return Err(CoreError::Validation(
                "estimate_minutes must be positive".into(),
            ));
        }
        if let Some(minutes) = self.estimate_minutes.filter(|m| *m > MAX_ESTIMATE_MINUTES) {
            return Err(CoreError::Validation(format!(
                "estimate_minutes must be at most {MAX_ESTIMATE_MINUTES} (got {minutes})"
            )));
        }
        self.due_at().map(|_| ())
    }

    /// Case-insensitive substring match over title, course and notes.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        [
            Some(self.title.as_str()),
            self.course.as_deref(),
            self.notes.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}
