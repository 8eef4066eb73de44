use stride_core::responses::AssignmentDeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (deleted, overrides_removed) = ctx.store.delete_assignment(id)?;
    output(
        &AssignmentDeleteResponse {
            deleted,
            overrides_removed,
        },
        flags.format,
    )
}
