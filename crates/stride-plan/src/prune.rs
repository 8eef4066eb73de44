//! Garbage collection of overrides that no longer match any chunk.

use std::collections::HashMap;

use stride_core::entities::Assignment;
use stride_core::ids::ChunkKey;
use stride_core::overrides::OverrideMap;

use crate::chunking::chunk_count;

/// Remove overrides whose assignment is gone or whose chunk index no longer
/// exists after the estimate changed. Returns the removed keys.
pub fn prune_overrides(overrides: &mut OverrideMap, assignments: &[Assignment]) -> Vec<ChunkKey> {
    let counts: HashMap<&str, u32> = assignments
        .iter()
        .map(|a| (a.id.as_str(), chunk_count(a.estimate_minutes)))
        .collect();

    let removed = overrides.prune(|key| {
        counts
            .get(key.assignment_id())
            .is_some_and(|count| key.index() < *count)
    });

    if !removed.is_empty() {
        tracing::debug!(removed = removed.len(), "pruned orphaned chunk overrides");
    }
    removed
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn assignment(id: &str, estimate: Option<u32>) -> Assignment {
        Assignment {
            id: id.into(),
            course: None,
            title: "Reading".into(),
            due: "2026-10-21T09:00:00Z".into(),
            notes: None,
            estimate_minutes: estimate,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn removes_deleted_assignments_and_vanished_indices() {
        let mut overrides = OverrideMap::new();
        overrides.set_done(ChunkKey::new("kept", 0), true);
        overrides.set_done(ChunkKey::new("kept", 1), true);
        overrides.set_done(ChunkKey::new("kept", 2), true);
        overrides.set_done(ChunkKey::new("gone", 0), true);

        // 60 minutes -> two chunks, so index 2 is stale.
        let removed = prune_overrides(&mut overrides, &[assignment("kept", None)]);

        assert_eq!(
            removed,
            vec![ChunkKey::new("gone", 0), ChunkKey::new("kept", 2)]
        );
        assert_eq!(overrides.len(), 2);
    }

    #[test]
    fn nothing_to_prune() {
        let mut overrides = OverrideMap::new();
        overrides.set_done(ChunkKey::new("a", 0), true);
        assert!(prune_overrides(&mut overrides, &[assignment("a", Some(30))]).is_empty());
        assert_eq!(overrides.len(), 1);
    }
}
