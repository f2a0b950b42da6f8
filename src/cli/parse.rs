//! CLI parse: clap types for the profile shell. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Profile shell - header, home screen, and a validated profile editor in the terminal
#[derive(Parser)]
#[command(name = "profile-shell")]
#[command(about = "Terminal application shell with a validated profile editor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where config/config.toml is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colored screen output
    #[arg(long, default_value = "false")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a script of shell events and print each resulting screen
    Run {
        /// Event script (one event per line); reads stdin when omitted
        #[arg(long)]
        script: Option<PathBuf>,
        /// Continue past failing events instead of stopping at the first
        #[arg(long)]
        keep_going: bool,
    },
    /// Read events interactively until `quit`
    Interactive,
    /// Validate a profile record
    Validate {
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        name: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        email: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        password: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        bio: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show which password requirements a password satisfies
    Checklist {
        #[arg(allow_hyphen_values = true)]
        password: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the route table
    Routes {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
