use std::path::PathBuf;

use anyhow::Context;
use stride_config::{PROJECT_DIR, StrideConfig};
use stride_core::responses::InitResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::output;

const CONFIG_TEMPLATE: &str = r#"# Stride project configuration.
# Environment variables override these values (example: STRIDE_PLANNER__TIMEZONE).

[planner]
# IANA zone used for day boundaries.
timezone = "UTC"
prune_on_load = true

[general]
default_limit = 20
"#;

/// Handle `stride init`: create `.stride/` with a starter config. Running it
/// again leaves an existing project untouched.
pub fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = match args.path.as_deref().or(flags.project.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let project_dir = root.join(PROJECT_DIR);
    let created = !project_dir.is_dir();

    std::fs::create_dir_all(&project_dir)
        .with_context(|| format!("failed to create {}", project_dir.display()))?;
    let config_path = StrideConfig::project_config_path(&root);
    if !config_path.exists() {
        std::fs::write(&config_path, CONFIG_TEMPLATE)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
    }
    tracing::info!(root = %root.display(), created, "initialized stride project");

    output(
        &InitResponse {
            root: root.display().to_string(),
            created,
        },
        flags.format,
    )
}
