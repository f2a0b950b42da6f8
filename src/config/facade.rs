//! Config loader: assembles sources and deserializes `AppConfig`.

use crate::config::sources::{global_file, workspace_file};
use crate::config::AppConfig;
use crate::error::ShellError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use std::path::Path;
use tracing::debug;

/// Prefix for environment overrides, e.g. `PROFILE_SHELL__SHELL__TITLE`
pub const ENV_PREFIX: &str = "PROFILE_SHELL";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// file, environment.
    pub fn load(workspace_root: &Path) -> Result<AppConfig, ShellError> {
        let builder = Self::defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        Self::finish(builder.add_source(Self::environment()))
    }

    /// Load from one explicit file, skipping the global and workspace files.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, ShellError> {
        if !path.exists() {
            return Err(ShellError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = Self::defaults()?
            .add_source(File::from(path).required(true))
            .add_source(Self::environment());
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ShellError> {
        Ok(Config::builder().add_source(Config::try_from(&AppConfig::default())?))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ShellError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        debug!(
            title = %config.shell.title,
            start_route = %config.shell.start_route,
            "Configuration loaded"
        );
        Ok(config)
    }
}
