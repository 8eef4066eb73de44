//! Entity structs for all Stride domain objects.
//!
//! `Assignment` is persisted; the plan types are derived on every read and
//! never stored. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON output and schema dumps.

mod assignment;
mod plan;

pub use assignment::{Assignment, MAX_ESTIMATE_MINUTES};
pub use plan::{DayGroup, PlanChunk, SkippedAssignment, StudyPlan};
