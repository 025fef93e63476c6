//! CLI parse: clap types for infinity-format. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// infinity-format CLI - result format selection for data-source queries
#[derive(Parser)]
#[command(name = "infinity-format")]
#[command(about = "Result format selection for data-source query editors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
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
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every known result format
    Catalog {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        output: String,
    },
    /// Show the formats offered for a query type
    Options {
        /// Query type (json, csv, uql, ...)
        #[arg(long = "type")]
        query_type: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        output: String,
    },
    /// Apply a format selection to a query and print the updated query
    Select {
        /// Query JSON file, or "-" for stdin
        #[arg(long)]
        query: PathBuf,
        /// Format to select
        #[arg(long)]
        value: String,
    },
    /// Print the dropdown view model for a query
    View {
        /// Query JSON file, or "-" for stdin
        #[arg(long)]
        query: PathBuf,
    },
    /// Print the placeholder frame and metadata for a query
    Frame {
        /// Query JSON file, or "-" for stdin
        #[arg(long)]
        query: PathBuf,
    },
    /// Show the effective configuration
    Config {
        /// Validate only; print problems instead of the configuration
        #[arg(long)]
        validate: bool,
    },
}
