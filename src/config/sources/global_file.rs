//! Global config file source: $XDG_CONFIG_HOME/profile-shell/config.toml
//! (or the platform equivalent).

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "profile-shell").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Add the global config file source to the builder if it exists.
pub fn add_to_builder(
    mut builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    if let Some(global_path) = global_config_path() {
        if global_path.exists() {
            debug!(config_path = %global_path.display(), "Loading global configuration");
            builder = builder.add_source(File::from(global_path.as_path()).required(false));
        } else {
            debug!(
                config_path = %global_path.display(),
                "No global configuration file"
            );
        }
    }
    Ok(builder)
}
