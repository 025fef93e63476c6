//! Configuration System
//!
//! Layered configuration for the format selector: editor presentation
//! settings and logging. Defaults, a user-level file, workspace files and
//! environment variables are merged in that order.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Format selector presentation
    #[serde(default)]
    pub editor: EditorConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Presentation settings for the format dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Width of the inline "Format" label, in grid units
    #[serde(default = "default_label_width")]
    pub label_width: u8,

    /// CSS classes applied to the select box
    #[serde(default = "default_select_class")]
    pub select_class: String,

    /// Render the option menu in a portal
    #[serde(default = "default_true")]
    pub menu_portal: bool,
}

fn default_label_width() -> u8 {
    4
}

fn default_select_class() -> String {
    "min-width-12 width-12".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            label_width: default_label_width(),
            select_class: default_select_class(),
            menu_portal: default_true(),
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.label_width == 0 {
            return Err("Label width must be at least 1".to_string());
        }
        if self.select_class.trim().is_empty() {
            return Err("Select class cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Editor(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Editor(msg) => write!(f, "Editor: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl AppConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.editor.validate() {
            errors.push(ValidationError::Editor(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
