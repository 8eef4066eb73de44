use schemars::{Schema, schema_for};
use stride_core::entities::{Assignment, StudyPlan};
use stride_core::overrides::OverrideMap;

use crate::cli::root_commands::{SchemaArgs, SchemaKind};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `stride schema`. Schemas are JSON documents, so table format
/// falls back to pretty JSON.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&schema(args.kind), format)
}

fn schema(kind: SchemaKind) -> Schema {
    match kind {
        SchemaKind::Assignment => schema_for!(Assignment),
        SchemaKind::Overrides => schema_for!(OverrideMap),
        SchemaKind::Plan => schema_for!(StudyPlan),
    }
}
