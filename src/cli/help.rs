//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string used in log fields (e.g. "run", "validate").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Run { .. } => "run",
        Commands::Interactive => "interactive",
        Commands::Validate { .. } => "validate",
        Commands::Checklist { .. } => "checklist",
        Commands::Routes { .. } => "routes",
    }
}
