//! Unit tests for configuration and graceful degradation
//!
//! Tests cover:
//! - Root folder priority: CLI argument, environment, TOML, default
//! - Missing or broken config files falling back to defaults
//!
//! Note: Uses serial_test to prevent environment variable races. Tests that
//! touch BRCMS_ROOT_FOLDER are marked with #[serial].

use brcms_common::config::{
    default_root_folder, load_bootstrap, locate_config_file, resolve_root_folder, LoggingConfig,
    TomlConfig, ROOT_FOLDER_ENV,
};
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn config_with_root(root: &str) -> TomlConfig {
    TomlConfig {
        root_folder: Some(PathBuf::from(root)),
        logging: LoggingConfig::default(),
    }
}

#[test]
#[serial]
fn test_cli_argument_wins() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/brcms-env");

    let root = resolve_root_folder(Some(Path::new("/tmp/brcms-cli")), &config_with_root("/tmp/brcms-toml"));
    assert_eq!(root, PathBuf::from("/tmp/brcms-cli"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_env_beats_toml() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/brcms-env");

    let root = resolve_root_folder(None, &config_with_root("/tmp/brcms-toml"));
    assert_eq!(root, PathBuf::from("/tmp/brcms-env"));

    env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_toml_beats_default() {
    env::remove_var(ROOT_FOLDER_ENV);

    let root = resolve_root_folder(None, &config_with_root("/tmp/brcms-toml"));
    assert_eq!(root, PathBuf::from("/tmp/brcms-toml"));
}

#[test]
#[serial]
fn test_default_when_nothing_configured() {
    env::remove_var(ROOT_FOLDER_ENV);

    let root = resolve_root_folder(None, &TomlConfig::default());
    assert_eq!(root, default_root_folder());
}

#[test]
fn test_explicit_config_path_is_used_as_given() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.toml");

    assert_eq!(locate_config_file(Some(&path)), Some(path.clone()));
    assert!(load_bootstrap(Some(&path)).is_err(), "named file must exist");
}

#[test]
fn test_broken_config_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "root_folder = [unterminated").unwrap();

    let err = load_bootstrap(Some(&path)).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_load_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "root_folder = \"/srv/band\"\n[logging]\nlevel = \"warn\"\n").unwrap();

    let config = load_bootstrap(Some(&path)).unwrap();

    assert_eq!(config.root_folder, Some(PathBuf::from("/srv/band")));
    assert_eq!(config.logging.level, "warn");
}
