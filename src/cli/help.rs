//! CLI command-name contract for logging.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "options", "select").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Catalog { .. } => "catalog",
        Commands::Options { .. } => "options",
        Commands::Select { .. } => "select",
        Commands::View { .. } => "view",
        Commands::Frame { .. } => "frame",
        Commands::Config { .. } => "config",
    }
}
