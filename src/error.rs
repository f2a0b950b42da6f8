//! Error types for the profile shell.
//!
//! Field validation failures are not errors here: they are returned as data
//! (`ValidationErrors`). These types cover protocol misuse and shell plumbing.

use crate::profile::Mode;
use thiserror::Error;

/// Profile workflow errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Invalid state transition: cannot {operation} while {mode}")]
    InvalidStateTransition { operation: &'static str, mode: Mode },

    #[error("Unknown profile field: {0} (expected name, email, password, or bio)")]
    UnknownField(String),
}

/// Shell-level errors
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("No profile view mounted (current route: {0}). Run `goto /user` first.")]
    NoProfileView(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("line {line}: {source}")]
    ScriptLine {
        line: usize,
        #[source]
        source: Box<ShellError>,
    },

    #[error("{failed} of {total} events failed")]
    ScriptFailed { failed: usize, total: usize },

    #[error("Failed to read input: {0}")]
    Input(String),

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ShellError {
    fn from(err: config::ConfigError) -> Self {
        ShellError::ConfigError(err.to_string())
    }
}
