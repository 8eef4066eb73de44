use stride_plan::build_plan;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::input::instant_input;
use crate::context::AppContext;
use crate::output::{output, plan::render_plan, table_options};

/// `stride plan show [--now <instant>]`.
pub fn run(now: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let clock = match now {
        Some(raw) => ctx.clock.at(instant_input(raw)?),
        None => ctx.clock,
    };
    let (assignments, overrides) = ctx.plan_inputs()?;
    let plan = build_plan(&assignments, &overrides, &clock);

    if flags.format == OutputFormat::Table {
        println!("{}", render_plan(&plan, table_options()));
        return Ok(());
    }
    output(&plan, flags.format)
}
