//! Configuration System
//!
//! Layered configuration for the shell: built-in defaults, a user-level file,
//! a workspace file, then `PROFILE_SHELL__*` environment variables.

use crate::error::ShellError;
use crate::logging::LoggingConfig;
use crate::profile::ProfileRecord;
use crate::shell::resolve;
use serde::{Deserialize, Serialize};

mod facade;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shell presentation and navigation
    #[serde(default)]
    pub shell: ShellConfig,

    /// Profile the user screen starts with
    #[serde(default)]
    pub profile: ProfileRecord,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shell settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Header title
    #[serde(default = "default_title")]
    pub title: String,

    /// Route shown at startup
    #[serde(default = "default_start_route")]
    pub start_route: String,

    /// Colored screen output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_title() -> String {
    "MyApp".to_string()
}

fn default_start_route() -> String {
    "/".to_string()
}

fn default_color() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            start_route: default_start_route(),
            color: default_color(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    Shell(String),
    Logging(String),
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValidationError::Shell(msg) => write!(f, "Shell: {}", msg),
            ConfigValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ConfigValidationError {}

impl ShellConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }
        resolve(&self.start_route).map_err(|e| format!("start_route: {}", e))?;
        Ok(())
    }
}

impl AppConfig {
    /// Validate the entire configuration.
    ///
    /// The initial profile is deliberately not checked: it is the committed
    /// record the user starts from, valid or not.
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.shell.validate() {
            errors.push(ConfigValidationError::Shell(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ConfigValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and collapse all problems into one error
    pub fn ensure_valid(&self) -> Result<(), ShellError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ShellError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }
}
