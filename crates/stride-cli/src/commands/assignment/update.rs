use stride_store::updates::AssignmentUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::input::due_input;
use crate::context::AppContext;
use crate::output::output;

pub struct UpdateParams<'a> {
    pub title: Option<&'a str>,
    pub due: Option<&'a str>,
    pub course: Option<&'a str>,
    pub notes: Option<&'a str>,
    pub estimate: Option<u32>,
    pub clear_estimate: bool,
}

pub fn run(
    id: &str,
    params: &UpdateParams<'_>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = AssignmentUpdateBuilder::new();
    if let Some(title) = params.title {
        builder = builder.title(title);
    }
    if let Some(due) = params.due {
        builder = builder.due(due_input(due, &ctx.clock)?);
    }
    // The store treats a blank string as "clear".
    if let Some(course) = params.course {
        builder = builder.course(Some(course.to_string()));
    }
    if let Some(notes) = params.notes {
        builder = builder.notes(Some(notes.to_string()));
    }
    if params.clear_estimate {
        builder = builder.estimate_minutes(None);
    } else if let Some(estimate) = params.estimate {
        builder = builder.estimate_minutes(Some(estimate));
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!("assignment update: nothing to change for '{id}'");
    }
    let assignment = ctx.store.update_assignment(id, update)?;
    output(&assignment, flags.format)
}
