//! Integration tests for layered configuration loading

use infinity_format::config::{global_config_path, ConfigLoader};
use std::fs;
use tempfile::TempDir;

use crate::integration::with_config_env;

#[test]
fn test_defaults_without_any_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(&workspace).unwrap();

    let config = with_config_env(&test_dir, || ConfigLoader::load(&workspace).unwrap());
    assert_eq!(config.editor.label_width, 4);
    assert_eq!(config.editor.select_class, "min-width-12 width-12");
    assert!(config.editor.menu_portal);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_global_config_path_uses_xdg_config_home() {
    let test_dir = TempDir::new().unwrap();
    let path = with_config_env(&test_dir, || global_config_path().unwrap());
    assert_eq!(
        path,
        test_dir
            .path()
            .join("xdg")
            .join("infinity-format")
            .join("config.toml")
    );
}

#[test]
fn test_workspace_overrides_global() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(workspace.join("config")).unwrap();

    let global_dir = test_dir.path().join("xdg").join("infinity-format");
    fs::create_dir_all(&global_dir).unwrap();
    fs::write(
        global_dir.join("config.toml"),
        r#"
[editor]
label_width = 6
select_class = "width-16"
"#,
    )
    .unwrap();
    fs::write(
        workspace.join("config").join("config.toml"),
        r#"
[editor]
label_width = 10
"#,
    )
    .unwrap();

    let config = with_config_env(&test_dir, || ConfigLoader::load(&workspace).unwrap());
    assert_eq!(config.editor.label_width, 10);
    assert_eq!(config.editor.select_class, "width-16");
}

#[test]
fn test_env_specific_workspace_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(workspace.join("config")).unwrap();
    fs::write(
        workspace.join("config").join("config.toml"),
        "[editor]\nmenu_portal = true\n",
    )
    .unwrap();
    fs::write(
        workspace.join("config").join("staging.toml"),
        "[editor]\nmenu_portal = false\n",
    )
    .unwrap();

    let config = with_config_env(&test_dir, || {
        std::env::set_var("INFINITY_FORMAT_ENV", "staging");
        ConfigLoader::load(&workspace).unwrap()
    });
    assert!(!config.editor.menu_portal);
}

#[test]
fn test_environment_overrides_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path().join("ws");
    fs::create_dir_all(workspace.join("config")).unwrap();
    fs::write(
        workspace.join("config").join("config.toml"),
        "[editor]\nlabel_width = 10\n",
    )
    .unwrap();

    let config = with_config_env(&test_dir, || {
        std::env::set_var("INFINITY_FORMAT__EDITOR__LABEL_WIDTH", "12");
        ConfigLoader::load(&workspace).unwrap()
    });
    assert_eq!(config.editor.label_width, 12);
}

#[test]
fn test_invalid_values_surface_in_validation() {
    let test_dir = TempDir::new().unwrap();
    let config_file = test_dir.path().join("bad.toml");
    fs::write(
        &config_file,
        r#"
[editor]
label_width = 0

[logging]
output = "syslog"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_file).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
}
