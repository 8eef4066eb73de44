//! Sparse per-chunk user overrides.
//!
//! An override only records what the user changed: a completion flag, a
//! replacement day, or both. A key with no recorded change is removed so the
//! persisted blob never accumulates empty entries.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::ChunkKey;

/// User exception to the computed placement or completion of one chunk.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChunkOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<NaiveDate>,
}

impl ChunkOverride {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.done.is_none() && self.day.is_none()
    }
}

/// Overrides keyed by [`ChunkKey`], serialized as a flat JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct OverrideMap(BTreeMap<ChunkKey, ChunkOverride>);

impl OverrideMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &ChunkKey) -> Option<&ChunkOverride> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChunkKey, &ChunkOverride)> {
        self.0.iter()
    }

    /// Record an explicit completion state.
    pub fn set_done(&mut self, key: ChunkKey, done: bool) {
        self.update(key, |o| o.done = Some(done));
    }

    /// Flip the completion state and return the new value.
    pub fn toggle_done(&mut self, key: ChunkKey) -> bool {
        let next = !self.get(&key).and_then(|o| o.done).unwrap_or(false);
        self.set_done(key, next);
        next
    }

    /// Pin the chunk to `day`. Clamping into the plan window happens at
    /// planning time, so the stored value is exactly what the user asked for.
    pub fn move_to(&mut self, key: ChunkKey, day: NaiveDate) {
        self.update(key, |o| o.day = Some(day));
    }

    /// Drop a day override, keeping any completion flag.
    pub fn reset_day(&mut self, key: ChunkKey) {
        self.update(key, |o| o.day = None);
    }

    /// Remove every override for `key`.
    pub fn clear(&mut self, key: &ChunkKey) -> Option<ChunkOverride> {
        self.0.remove(key)
    }

    /// Remove all overrides belonging to one assignment. Returns how many went.
    pub fn remove_assignment(&mut self, assignment_id: &str) -> usize {
        let before = self.0.len();
        self.0.retain(|key, _| key.assignment_id() != assignment_id);
        before - self.0.len()
    }

    /// Keep only the keys for which `keep` returns true; return the removed keys.
    pub fn prune<F>(&mut self, mut keep: F) -> Vec<ChunkKey>
    where
        F: FnMut(&ChunkKey) -> bool,
    {
        let removed: Vec<ChunkKey> = self.0.keys().filter(|k| !keep(k)).cloned().collect();
        for key in &removed {
            self.0.remove(key);
        }
        removed
    }

    fn update<F>(&mut self, key: ChunkKey, apply: F)
    where
        F: FnOnce(&mut ChunkOverride),
    {
        let mut entry = self.0.get(&key).copied().unwrap_or_default();
        apply(&mut entry);
        if entry.is_empty() {
            self.0.remove(&key);
        } else {
            self.0.insert(key, entry);
        }
    }
}

impl FromIterator<(ChunkKey, ChunkOverride)> for OverrideMap {
    fn from_iter<I: IntoIterator<Item = (ChunkKey, ChunkOverride)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter(|(_, o)| !o.is_empty())
                .collect(),
        )
    }
}
