//! CLI presentation: text and json rendering of command results.

use crate::catalog::FormatOption;
use crate::config::{AppConfig, ValidationError};
use crate::error::ApiError;
use crate::policy::Availability;
use crate::query::QueryType;
use crate::selector::SelectorView;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::Serialize;
use serde_json::json;

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn options_table(options: &[FormatOption]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Value", "Label"]);
    for option in options {
        table.add_row(vec![option.value.as_str(), option.label]);
    }
    table.to_string()
}

pub fn format_catalog_text(options: &[FormatOption]) -> String {
    format!(
        "{}\n\nTotal: {} format(s)",
        options_table(options),
        options.len()
    )
}

pub fn format_catalog_json(options: &[FormatOption]) -> Result<String, ApiError> {
    to_pretty_json(&json!({ "formats": options, "total": options.len() }))
}

pub fn format_options_text(query_type: &QueryType, availability: Availability) -> String {
    match availability {
        Availability::Hidden => format!(
            "Format selector is hidden for query type '{}'.",
            query_type
        ),
        Availability::Options(options) => format!(
            "Formats for query type '{}':\n{}",
            query_type,
            options_table(options)
        ),
    }
}

pub fn format_options_json(
    query_type: &QueryType,
    availability: Availability,
) -> Result<String, ApiError> {
    let out = match availability {
        Availability::Hidden => json!({
            "type": query_type,
            "visible": false,
            "formats": [],
        }),
        Availability::Options(options) => json!({
            "type": query_type,
            "visible": true,
            "formats": options,
        }),
    };
    to_pretty_json(&out)
}

pub fn format_view_json(view: Option<&SelectorView>) -> Result<String, ApiError> {
    match view {
        Some(view) => to_pretty_json(view),
        None => to_pretty_json(&json!({ "visible": false })),
    }
}

pub fn format_json<T: Serialize>(value: &T) -> Result<String, ApiError> {
    to_pretty_json(value)
}

pub fn format_config_toml(config: &AppConfig) -> Result<String, ApiError> {
    toml::to_string_pretty(config)
        .map_err(|e| ApiError::ConfigError(format!("Failed to render configuration: {}", e)))
}

pub fn format_validation_result(result: &Result<(), Vec<ValidationError>>) -> String {
    match result {
        Ok(()) => "Configuration is valid.".to_string(),
        Err(errors) => {
            let mut output = format!("Configuration has {} problem(s):\n", errors.len());
            for error in errors {
                output.push_str(&format!("  - {}\n", error));
            }
            output
        }
    }
}
