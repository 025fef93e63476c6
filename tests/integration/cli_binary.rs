//! Integration tests that drive the infinity-format binary end to end.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(workspace: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_infinity-format");
    Command::new(bin)
        .arg("--workspace")
        .arg(workspace)
        .arg("--quiet")
        .args(args)
        .env("XDG_CONFIG_HOME", workspace.join("xdg"))
        .env_remove("INFINITY_FORMAT_ENV")
        .env_remove("INFINITY_FORMAT__EDITOR__LABEL_WIDTH")
        .output()
        .expect("failed to run infinity-format")
}

#[test]
fn test_options_json_for_uql() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["options", "--type", "uql", "--output", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["visible"], true);
    let offered: Vec<&str> = value["formats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["value"].as_str().unwrap())
        .collect();
    assert_eq!(offered, vec!["table", "timeseries", "dataframe"]);
}

#[test]
fn test_select_writes_updated_query_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("query.json"),
        r#"{"refId":"A","type":"json","format":"table"}"#,
    )
    .unwrap();

    let output = run(
        temp_dir.path(),
        &["select", "--query", "query.json", "--value", "as-is"],
    );
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["format"], "as-is");
    assert_eq!(value["refId"], "A");
}

#[test]
fn test_select_rejects_unknown_format() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("query.json"), r#"{"type":"csv"}"#).unwrap();

    let output = run(
        temp_dir.path(),
        &["select", "--query", "query.json", "--value", "pivot"],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown format: pivot"));
}

#[test]
fn test_invalid_log_level_flag_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(
        temp_dir.path(),
        &["--log-level", "WARNING", "options", "--type", "json"],
    );
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid logging configuration: Invalid log level: WARNING"));
}

#[test]
fn test_invalid_log_output_flag_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["--log-output", "both", "catalog"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid log output: both"));
}

#[test]
fn test_select_keeps_explicit_nulls() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("query.json"),
        r#"{"type":"json","format":"table","source":null}"#,
    )
    .unwrap();

    let output = run(
        temp_dir.path(),
        &["select", "--query", "query.json", "--value", "as-is"],
    );
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "type": "json", "format": "as-is", "source": null })
    );
}
