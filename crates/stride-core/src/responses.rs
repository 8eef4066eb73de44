//! CLI response types returned as JSON by `stride` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Assignment, PlanChunk};
use crate::ids::ChunkKey;
use crate::overrides::ChunkOverride;

/// Response from `stride init`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InitResponse {
    pub root: String,
    pub created: bool,
}

/// Response from `stride assignment delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AssignmentDeleteResponse {
    pub deleted: Assignment,
    pub overrides_removed: u32,
}

/// Response from `stride plan done|toggle|move|reset`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChunkUpdateResponse {
    pub key: ChunkKey,
    /// What is now stored for the key. `None` once nothing is overridden.
    #[serde(rename = "override")]
    pub stored: Option<ChunkOverride>,
    /// The chunk as it appears in the recomputed plan.
    pub chunk: Option<PlanChunk>,
}

/// Response from `stride plan prune`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PruneResponse {
    pub removed: Vec<ChunkKey>,
    pub remaining: u32,
}
