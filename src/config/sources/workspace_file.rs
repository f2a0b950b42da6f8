//! Workspace config source: `<workspace>/config/config.toml`

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::{Path, PathBuf};

/// Location of the workspace config file under `workspace_root`
pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join("config").join("config.toml")
}

/// Layer the workspace file over `builder` when it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_config_path(workspace_root);
    if !path.is_file() {
        return Ok(builder);
    }
    Ok(builder.add_source(File::from(path.as_path()).required(false)))
}
