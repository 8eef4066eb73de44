use std::path::Path;

use anyhow::Context;

/// Load `<root>/.env` into the process environment when the file exists.
///
/// A missing file is not an error; a file that fails to parse is.
pub fn load_project_env(root: &Path) -> anyhow::Result<bool> {
    let env_path = root.join(".env");
    if !env_path.exists() {
        return Ok(false);
    }

    dotenvy::from_path(&env_path)
        .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    tracing::debug!(path = %env_path.display(), "loaded project dotenv file");
    Ok(true)
}
