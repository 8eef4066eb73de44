use std::path::Path;

use anyhow::Context;
use stride_config::StrideConfig;
use stride_core::entities::Assignment;
use stride_core::overrides::OverrideMap;
use stride_plan::{PlanClock, prune_overrides};
use stride_store::{FileBlobStore, StrideStore};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub store: StrideStore<FileBlobStore>,
    pub config: StrideConfig,
    pub clock: PlanClock,
}

impl AppContext {
    /// Open the blob store under the project root and build the plan clock.
    pub fn init(project_root: &Path, config: StrideConfig) -> anyhow::Result<Self> {
        let data_dir = config.storage.resolve(project_root);
        let blobs = FileBlobStore::open(&data_dir)
            .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
        let clock =
            PlanClock::from_config(&config.planner).context("invalid [planner] configuration")?;

        tracing::debug!(
            root = %project_root.display(),
            data = %data_dir.display(),
            timezone = %clock.timezone(),
            "stride context ready"
        );

        Ok(Self {
            store: StrideStore::new(blobs),
            config,
            clock,
        })
    }

    /// Load assignments and overrides for planning.
    ///
    /// When `planner.prune_on_load` is set, overrides that no longer match a
    /// chunk are dropped and the document is rewritten if anything changed.
    pub fn plan_inputs(&self) -> anyhow::Result<(Vec<Assignment>, OverrideMap)> {
        let assignments = self.store.list_assignments()?;
        let overrides = if self.config.planner.prune_on_load {
            self.store.modify_overrides(|overrides| {
                prune_overrides(overrides, &assignments);
                overrides.clone()
            })?
        } else {
            self.store.load_overrides()?
        };
        Ok((assignments, overrides))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use stride_config::StrideConfig;
    use stride_core::ids::ChunkKey;
    use stride_store::updates::NewAssignment;
    use tempfile::TempDir;

    use super::AppContext;

    fn context(prune_on_load: bool) -> (TempDir, AppContext) {
        let temp = TempDir::new().expect("tempdir should create");
        let mut config = StrideConfig::default();
        config.planner.prune_on_load = prune_on_load;
        let ctx = AppContext::init(temp.path(), config).expect("context should init");
        (temp, ctx)
    }

    fn seed(ctx: &AppContext) -> String {
        let assignment = ctx
            .store
            .create_assignment(NewAssignment {
                title: "Essay".into(),
                due: "2026-10-22T23:59:00Z".into(),
                ..NewAssignment::default()
            })
            .expect("assignment should create");
        ctx.store
            .modify_overrides(|overrides| {
                overrides.set_done(ChunkKey::new(assignment.id.clone(), 0), true);
                overrides.set_done(ChunkKey::new(assignment.id.clone(), 9), true);
                overrides.move_to(
                    ChunkKey::new("asg-gone", 0),
                    NaiveDate::from_ymd_opt(2026, 10, 20).expect("valid date"),
                );
            })
            .expect("overrides should save");
        assignment.id
    }

    #[test]
    fn init_creates_data_directory() {
        let (temp, _ctx) = context(true);
        assert!(temp.path().join(".stride").is_dir());
    }

    #[test]
    fn plan_inputs_prunes_when_enabled() {
        let (_temp, ctx) = context(true);
        let id = seed(&ctx);

        let (_, overrides) = ctx.plan_inputs().expect("inputs should load");
        assert_eq!(overrides.len(), 1);
        assert!(overrides.get(&ChunkKey::new(id, 0)).is_some());
        assert_eq!(ctx.store.load_overrides().expect("reload").len(), 1);
    }

    #[test]
    fn plan_inputs_keeps_orphans_when_disabled() {
        let (temp, ctx) = context(false);
        seed(&ctx);
        let before = fs::read_to_string(temp.path().join(".stride/plan_overrides.json"))
            .expect("overrides file should exist");

        let (_, overrides) = ctx.plan_inputs().expect("inputs should load");
        assert_eq!(overrides.len(), 3);
        let after = fs::read_to_string(temp.path().join(".stride/plan_overrides.json"))
            .expect("overrides file should exist");
        assert_eq!(before, after);
    }
}
