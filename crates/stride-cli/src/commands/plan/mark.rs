use crate::cli::GlobalFlags;
use crate::context::AppContext;

use super::update_chunk;

/// `stride plan done <key> [--undo]`.
pub fn run_done(key: &str, done: bool, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    update_chunk(key, ctx, flags, |overrides, key| overrides.set_done(key, done))
}

/// `stride plan toggle <key>`.
pub fn run_toggle(key: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    update_chunk(key, ctx, flags, |overrides, key| {
        let done = overrides.toggle_done(key);
        tracing::debug!(done, "toggled chunk");
    })
}
