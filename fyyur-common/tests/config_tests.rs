//! Tests for configuration loading and root folder resolution
//!
//! Tests that touch FYYUR_* environment variables are marked #[serial] so
//! they never run concurrently.

use fyyur_common::config::{
    config_file_path, default_root_folder, resolve_root_folder, RootFolderInitializer,
    TomlConfig, CONFIG_FILE_ENV, ROOT_FOLDER_ENV,
};
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
#[serial]
fn test_resolver_with_no_overrides_uses_default() {
    env::remove_var(ROOT_FOLDER_ENV);

    let root_folder = resolve_root_folder(None, &TomlConfig::default());

    assert!(!root_folder.as_os_str().is_empty());
    assert_eq!(root_folder, default_root_folder());
}

#[test]
#[serial]
fn test_env_var_beats_toml() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/fyyur-test-env-folder");

    let config = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/fyyur-test-toml-folder")),
        ..Default::default()
    };
    let root_folder = resolve_root_folder(None, &config);

    env::remove_var(ROOT_FOLDER_ENV);
    assert_eq!(root_folder, PathBuf::from("/tmp/fyyur-test-env-folder"));
}

#[test]
#[serial]
fn test_cli_beats_env_var() {
    env::set_var(ROOT_FOLDER_ENV, "/tmp/fyyur-test-env-folder");

    let root_folder = resolve_root_folder(
        Some(Path::new("/tmp/fyyur-test-cli-folder")),
        &TomlConfig::default(),
    );

    env::remove_var(ROOT_FOLDER_ENV);
    assert_eq!(root_folder, PathBuf::from("/tmp/fyyur-test-cli-folder"));
}

#[test]
#[serial]
fn test_toml_used_when_no_cli_or_env() {
    env::remove_var(ROOT_FOLDER_ENV);

    let config = TomlConfig {
        root_folder: Some(PathBuf::from("/tmp/fyyur-test-toml-folder")),
        ..Default::default()
    };

    assert_eq!(
        resolve_root_folder(None, &config),
        PathBuf::from("/tmp/fyyur-test-toml-folder")
    );
}

#[test]
#[serial]
fn test_config_file_path_from_env() {
    env::set_var(CONFIG_FILE_ENV, "/tmp/fyyur-test-config.toml");
    let path = config_file_path(None);
    env::remove_var(CONFIG_FILE_ENV);

    assert_eq!(path, Some(PathBuf::from("/tmp/fyyur-test-config.toml")));
}

#[test]
fn test_missing_config_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = TomlConfig::load_optional(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(config, TomlConfig::default());
    assert_eq!(TomlConfig::load_optional(None).unwrap(), TomlConfig::default());
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = \"not a number").unwrap();

    assert!(TomlConfig::load(&path).is_err());
    assert!(TomlConfig::load_optional(Some(&path)).is_err());
}

#[test]
fn test_config_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 8081\n[logging]\nlevel = \"warn\"\n").unwrap();

    let config = TomlConfig::load_optional(Some(&path)).unwrap();
    assert_eq!(config.port(), 8081);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_initializer_creates_directory() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("a").join("b");

    let initializer = RootFolderInitializer::new(root.clone());
    initializer.ensure_directory_exists().unwrap();

    assert!(root.is_dir());
    assert_eq!(initializer.database_path(), root.join("fyyur.db"));
}

#[test]
fn test_initializer_rejects_file_as_root() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("not-a-dir");
    std::fs::write(&file, "x").unwrap();

    let initializer = RootFolderInitializer::new(file);
    assert!(initializer.ensure_directory_exists().is_err());
}
