//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; a single route table dispatches to the shell.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_checklist, format_routes, format_submit_outcome, format_validation_result,
};
pub use route::{CommandOutput, RunContext, ScriptSummary};
