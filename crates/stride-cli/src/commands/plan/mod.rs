pub mod mark;
pub mod prune;
pub mod relocate;
pub mod show;

use stride_core::ids::ChunkKey;
use stride_core::overrides::OverrideMap;
use stride_core::responses::ChunkUpdateResponse;
use stride_plan::build_plan;
use stride_plan::chunking::chunk_count;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PlanCommands;
use crate::commands::shared::input::chunk_key_input;
use crate::context::AppContext;
use crate::output::output;

/// Handle `stride plan <action>`.
pub fn handle(action: &PlanCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        PlanCommands::Show { now } => show::run(now.as_deref(), ctx, flags),
        PlanCommands::Done { key, undo } => mark::run_done(key, !*undo, ctx, flags),
        PlanCommands::Toggle { key } => mark::run_toggle(key, ctx, flags),
        PlanCommands::Move { key, date } => relocate::run_move(key, date, ctx, flags),
        PlanCommands::Reset { key, day_only } => relocate::run_reset(key, *day_only, ctx, flags),
        PlanCommands::Prune => prune::run(ctx, flags),
    }
}

/// Parse `raw` and check that it names a chunk of an existing assignment.
fn existing_chunk(raw: &str, ctx: &AppContext) -> anyhow::Result<ChunkKey> {
    let key = chunk_key_input(raw)?;
    let assignment = ctx.store.get_assignment(key.assignment_id())?;
    let count = chunk_count(assignment.estimate_minutes);
    if key.index() >= count {
        anyhow::bail!(
            "chunk '{key}' does not exist: '{}' has {count} chunk(s)",
            assignment.id
        );
    }
    Ok(key)
}

/// Apply `edit` to the stored overrides for `raw` and report the result
/// against the recomputed plan.
fn update_chunk<F>(raw: &str, ctx: &AppContext, flags: &GlobalFlags, edit: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut OverrideMap, ChunkKey),
{
    let key = existing_chunk(raw, ctx)?;
    let stored = ctx.store.modify_overrides(|overrides| {
        edit(overrides, key.clone());
        overrides.get(&key).copied()
    })?;

    let (assignments, overrides) = ctx.plan_inputs()?;
    let plan = build_plan(&assignments, &overrides, &ctx.clock);
    let chunk = plan.find_chunk(&key).cloned();
    if chunk.is_none() {
        tracing::info!(%key, "chunk is outside the current plan window");
    }

    output(&ChunkUpdateResponse { key, stored, chunk }, flags.format)
}
