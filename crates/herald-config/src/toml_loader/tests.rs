//! Tests for TOML config loading, creation, and path resolution.

use super::paths::resolve_config_path;
use super::*;
use herald_common::ConfigError;
use std::path::{Path, PathBuf};

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_herald_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[completion]
model = "gpt-4o-mini"

[email]
sender_name = "Dana"
style = "Friendly"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.completion.model, "gpt-4o-mini");
    assert_eq!(config.email.sender_name, "Dana");
    assert_eq!(config.email.style, "Friendly");
    // Defaults preserved
    assert_eq!(config.news.count, 5);
    assert_eq!(config.completion.base_url, "https://api.openai.com/v1");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[news]\ncount = 40\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.news.count, 40);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("herald").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.completion.model, "gpt-3.5-turbo");
    assert_eq!(config.news.country, "United States");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::HeraldConfig;

    let config: HeraldConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(config.email.style, "Business Formal");
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("herald"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn override_dir_wins_over_platform_dir() {
    let path = resolve_config_path(
        Some(PathBuf::from("/srv/herald-conf")),
        Some(PathBuf::from("/home/u/.config")),
    )
    .unwrap();
    assert_eq!(path, PathBuf::from("/srv/herald-conf/config.toml"));
}

#[test]
fn platform_dir_gets_herald_subdir() {
    let path = resolve_config_path(Some(PathBuf::new()), Some(PathBuf::from("/home/u/.config")))
        .unwrap();
    assert_eq!(path, PathBuf::from("/home/u/.config/herald/config.toml"));
}

#[test]
fn no_directory_at_all_is_an_error() {
    let err = resolve_config_path(None, None).unwrap_err();
    assert!(err.to_string().contains(CONFIG_DIR_ENV));
}

#[test]
fn create_default_config_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[news]\ncount = 8\n").unwrap();

    create_default_config(&path).unwrap();

    assert_eq!(load_from_path(&path).unwrap().news.count, 8);
}
