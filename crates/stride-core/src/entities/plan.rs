use chrono::{DateTime, FixedOffset, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::ChunkKey;

/// One slice of an assignment's work placed on a single day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PlanChunk {
    pub key: ChunkKey,
    pub assignment_id: String,
    pub index: u32,
    pub course: Option<String>,
    pub title: String,
    pub due: DateTime<FixedOffset>,
    pub day: NaiveDate,
    pub minutes: u32,
    pub done: bool,
    /// The day came from a user override rather than the default spread.
    pub moved: bool,
}

/// All chunks scheduled on one day of the planning window.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DayGroup {
    pub date: NaiveDate,
    /// `"Today"`, `"Tomorrow"`, or a weekday-and-date label like `"Wed, Oct 21"`.
    pub label: String,
    pub total_minutes: u32,
    pub done_minutes: u32,
    pub chunks: Vec<PlanChunk>,
}

/// An assignment the planner left out because its data could not be used.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkippedAssignment {
    pub assignment_id: String,
    pub title: String,
    pub reason: String,
}

/// A seven-day study plan computed from the live assignment list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StudyPlan {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    /// IANA name of the zone the day boundaries were computed in.
    pub timezone: String,
    pub days: Vec<DayGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedAssignment>,
}

impl StudyPlan {
    /// Iterate every chunk in display order.
    pub fn chunks(&self) -> impl Iterator<Item = &PlanChunk> {
        self.days.iter().flat_map(|day| day.chunks.iter())
    }

    #[must_use]
    pub fn find_chunk(&self, key: &ChunkKey) -> Option<&PlanChunk> {
        self.chunks().find(|chunk| &chunk.key == key)
    }

    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.days.iter().map(|day| day.total_minutes).sum()
    }

    #[must_use]
    pub fn done_minutes(&self) -> u32 {
        self.days.iter().map(|day| day.done_minutes).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|day| day.chunks.is_empty())
    }
}
