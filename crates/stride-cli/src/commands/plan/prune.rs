use stride_core::responses::PruneResponse;
use stride_plan::prune_overrides;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// `stride plan prune`, regardless of `planner.prune_on_load`.
pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let assignments = ctx.store.list_assignments()?;
    let response = ctx.store.modify_overrides(|overrides| {
        let removed = prune_overrides(overrides, &assignments);
        PruneResponse {
            removed,
            remaining: u32::try_from(overrides.len()).unwrap_or(u32::MAX),
        }
    })?;
    output(&response, flags.format)
}
