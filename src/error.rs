//! Error types for the format selector.
//!
//! The policy and selection flow never fail; these errors come from the
//! layers around them: configuration, query decoding, and CLI input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(serde_json::Error),

    #[error("Failed to encode output: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown format: {0} (expected one of: table, logs, trace, node-graph-nodes, node-graph-edges, timeseries, dataframe, as-is)")]
    UnknownFormat(String),

    #[error("Format selector is not shown for query type '{0}'")]
    SelectorHidden(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
