//! # stride-plan
//!
//! Turns the assignment list into a seven-day study plan.
//!
//! Each assignment's estimate is split into 30-minute chunks which are spread
//! evenly from today through its due day (or the end of the window). Users can
//! pin a chunk to another day or mark it done; those overrides are keyed by
//! assignment ID and chunk index and are applied on every recomputation.
//!
//! Everything here is a pure function of its inputs. "Now" and the timezone
//! come in through [`PlanClock`]; overrides come in as an
//! [`OverrideMap`](stride_core::overrides::OverrideMap) value.

pub mod chunking;
pub mod clock;
pub mod error;
pub mod prune;
pub mod scheduler;

pub use clock::PlanClock;
pub use error::PlanError;
pub use prune::prune_overrides;
pub use scheduler::{PlanWindow, build_plan};
