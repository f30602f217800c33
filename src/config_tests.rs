//! Tests for config loading

use super::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let dir = TempDir::new().unwrap();
    let result = load_config_from(&dir.path().join("config.toml"));
    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let file = write_config("[toast]\nwarning_ms = 1234\n");
    let result = load_config_from(file.path());
    assert_eq!(result.config.toast.warning_ms, 1234);
    assert!(result.warning.is_none());
}

#[test]
fn test_malformed_file_falls_back_with_warning() {
    let file = write_config("[toast\nwarning_ms = 1234\n");
    let result = load_config_from(file.path());
    assert_eq!(result.config, Config::default());
    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Invalid config"), "got: {}", warning);
}

#[test]
fn test_unreadable_path_falls_back_with_warning() {
    // A directory exists but cannot be read as a file
    let dir = TempDir::new().unwrap();
    let result = load_config_from(dir.path());
    assert_eq!(result.config, Config::default());
    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Failed to read config"), "got: {}", warning);
}

#[test]
fn test_read_config_reports_parse_error() {
    let file = write_config("[toast]\nsuccess_ms = \"x\"\n");
    assert!(matches!(
        read_config(file.path()),
        Err(ToastError::ConfigParse(_))
    ));
}

#[test]
fn test_config_path_is_stable() {
    let path = get_config_path();
    assert_eq!(path, get_config_path());
    let path_str = path.to_string_lossy();
    assert!(
        path_str.ends_with("toastkit/config.toml") || path_str.ends_with("toastkit\\config.toml"),
        "unexpected config path: {}",
        path_str
    );
}
