//! CLI route: single route table and run context. Dispatches to the policy,
//! selector and frame services, then to presentation.

use crate::catalog::RESULT_FORMATS;
use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_catalog_json, format_catalog_text, format_config_toml, format_json,
    format_options_json, format_options_text, format_validation_result, format_view_json,
};
use crate::config::{AppConfig, ConfigLoader};
use crate::error::ApiError;
use crate::frame::dummy_frame;
use crate::policy;
use crate::query::{Query, QueryFormat, QueryType};
use crate::selector::FormatSelector;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Runtime context for CLI execution: workspace and resolved configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: AppConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self::with_config(workspace_root, config))
    }

    pub fn with_config(workspace_root: PathBuf, config: AppConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Catalog { output } => {
                if output == "json" {
                    format_catalog_json(RESULT_FORMATS)
                } else {
                    Ok(format_catalog_text(RESULT_FORMATS))
                }
            }
            Commands::Options { query_type, output } => {
                let query_type = QueryType::from(query_type.as_str());
                let availability = policy::availability(&Query::new(
                    query_type.clone(),
                    QueryFormat::default(),
                ));
                if output == "json" {
                    format_options_json(&query_type, availability)
                } else {
                    Ok(format_options_text(&query_type, availability))
                }
            }
            Commands::Select { query, value } => self.handle_select(query, value),
            Commands::View { query } => {
                let query = self.load_query(query)?;
                let selector = FormatSelector::new(&query, |_q: Query| {}, || {});
                format_view_json(selector.view(&self.config.editor).as_ref())
            }
            Commands::Frame { query } => {
                let query = self.load_query(query)?;
                format_json(&dummy_frame(&query))
            }
            Commands::Config { validate } => {
                if *validate {
                    Ok(format_validation_result(&self.config.validate()))
                } else {
                    format_config_toml(&self.config)
                }
            }
        }
    }

    fn handle_select(&self, query_path: &Path, value: &str) -> Result<String, ApiError> {
        let query = self.load_query(query_path)?;
        let format: QueryFormat = value.parse()?;

        if !policy::is_visible(&query) {
            return Err(ApiError::SelectorHidden(query.query_type.to_string()));
        }
        if !policy::is_format_allowed(&query.query_type, query.format) {
            warn!(
                query_type = %query.query_type,
                format = %query.format,
                "Stored format is not offered for this query type"
            );
        }
        if !policy::is_format_allowed(&query.query_type, format) {
            warn!(
                query_type = %query.query_type,
                format = %format,
                "Selected format is not offered for this query type"
            );
        }

        // The selector always reports a change before asking for a run
        let mut updated = query.clone();
        let mut run_requested = false;
        let mut selector = FormatSelector::new(
            &query,
            |q: Query| updated = q,
            || run_requested = true,
        );
        selector.select(format);
        drop(selector);

        if run_requested {
            info!(ref_id = %query.ref_id(), "Query re-run requested");
        }
        format_json(&updated)
    }

    /// Read a query from a file relative to the workspace, or from stdin for "-".
    fn load_query(&self, path: &Path) -> Result<Query, ApiError> {
        let raw = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            let resolved = if path.is_absolute() {
                path.to_path_buf()
            } else {
                self.workspace_root.join(path)
            };
            std::fs::read_to_string(&resolved)?
        };
        Query::from_json(&raw)
    }
}
