use stride_plan::PlanWindow;

use crate::cli::GlobalFlags;
use crate::commands::shared::input::date_input;
use crate::context::AppContext;

use super::update_chunk;

/// `stride plan move <key> <date>`. Days outside the window are stored as
/// given and clamped when the plan is computed.
pub fn run_move(
    key: &str,
    date: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let day = date_input(date)?;
    let window = PlanWindow::starting(ctx.clock.today());
    if !window.contains(day) {
        tracing::warn!(
            %day,
            start = %window.start,
            end = %window.end,
            "day is outside the plan window; the chunk will show on {}",
            window.clamp(day)
        );
    }
    update_chunk(key, ctx, flags, |overrides, key| overrides.move_to(key, day))
}

/// `stride plan reset <key> [--day-only]`.
pub fn run_reset(
    key: &str,
    day_only: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    update_chunk(key, ctx, flags, |overrides, key| {
        if day_only {
            overrides.reset_day(key);
        } else {
            overrides.clear(&key);
        }
    })
}
