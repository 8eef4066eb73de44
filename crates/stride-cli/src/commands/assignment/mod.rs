pub mod add;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AssignmentCommands;
use crate::context::AppContext;

/// Handle `stride assignment <action>`.
pub fn handle(
    action: &AssignmentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AssignmentCommands::Add {
            title,
            due,
            course,
            notes,
            estimate,
        } => add::run(
            title,
            due,
            course.as_deref(),
            notes.as_deref(),
            *estimate,
            ctx,
            flags,
        ),
        AssignmentCommands::Update {
            id,
            title,
            due,
            course,
            notes,
            estimate,
            clear_estimate,
        } => update::run(
            id,
            &update::UpdateParams {
                title: title.as_deref(),
                due: due.as_deref(),
                course: course.as_deref(),
                notes: notes.as_deref(),
                estimate: *estimate,
                clear_estimate: *clear_estimate,
            },
            ctx,
            flags,
        ),
        AssignmentCommands::Get { id } => get::run(id, ctx, flags),
        AssignmentCommands::Delete { id } => delete::run(id, ctx, flags),
        AssignmentCommands::List {
            course,
            search,
            sort,
            overdue,
            upcoming,
            limit,
        } => list::run(
            &list::ListParams {
                course: course.as_deref(),
                search: search.as_deref(),
                sort: sort.as_deref(),
                overdue: *overdue,
                upcoming: *upcoming,
                limit: *limit,
            },
            ctx,
            flags,
        ),
    }
}
