use stride_store::updates::NewAssignment;

use crate::cli::GlobalFlags;
use crate::commands::shared::input::due_input;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    title: &str,
    due: &str,
    course: Option<&str>,
    notes: Option<&str>,
    estimate: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let course = course.or_else(|| ctx.config.general.default_course());
    let assignment = ctx.store.create_assignment(NewAssignment {
        course: course.map(ToString::to_string),
        title: title.to_string(),
        due: due_input(due, &ctx.clock)?,
        notes: notes.map(ToString::to_string),
        estimate_minutes: estimate,
    })?;
    output(&assignment, flags.format)
}
