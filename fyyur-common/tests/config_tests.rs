//! Tests for configuration loading and resolution
//!
//! Tests that touch FYYUR_DATABASE are marked #[serial] so they do not race
//! on the process environment.

use fyyur_common::config::{
    load_toml_config, parse_toml_config, resolve_database_path, CliOverrides, CompiledDefaults,
    ResolvedConfig, TomlConfig, DATABASE_ENV_VAR, DEFAULT_PORT,
};
use serial_test::serial;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[test]
fn test_compiled_defaults_for_current_platform() {
    let defaults = CompiledDefaults::for_current_platform();

    assert!(defaults.database_path.ends_with("fyyur.db"));
    assert_eq!(defaults.port, DEFAULT_PORT);
    assert_eq!(defaults.bind, "127.0.0.1");
    assert_eq!(defaults.log_level, "info");
}

#[test]
fn test_parse_full_toml() {
    let config = parse_toml_config(
        r#"
        database_path = "/srv/fyyur/fyyur.db"
        bind = "0.0.0.0"
        port = 8080
        log_level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(config.database_path, Some(PathBuf::from("/srv/fyyur/fyyur.db")));
    assert_eq!(config.bind.as_deref(), Some("0.0.0.0"));
    assert_eq!(config.port, Some(8080));
    assert_eq!(config.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_parse_empty_toml_is_default() {
    assert_eq!(parse_toml_config("").unwrap(), TomlConfig::default());
}

#[test]
fn test_parse_malformed_toml_is_config_error() {
    let err = parse_toml_config("port = \"not a number\"").unwrap_err();
    assert!(matches!(err, fyyur_common::Error::Config(_)));
}

#[test]
fn test_missing_explicit_config_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_toml_config(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(config, TomlConfig::default());
}

#[test]
fn test_load_config_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "port = 5050\n").unwrap();

    let config = load_toml_config(Some(&path)).unwrap();
    assert_eq!(config.port, Some(5050));
}

#[test]
#[serial]
fn test_cli_database_beats_env_and_toml() {
    env::set_var(DATABASE_ENV_VAR, "/from/env.db");
    let toml_config = TomlConfig {
        database_path: Some(PathBuf::from("/from/toml.db")),
        ..Default::default()
    };

    let resolved = resolve_database_path(Some(Path::new("/from/cli.db")), &toml_config);
    env::remove_var(DATABASE_ENV_VAR);

    assert_eq!(resolved, Some(PathBuf::from("/from/cli.db")));
}

#[test]
#[serial]
fn test_env_database_beats_toml() {
    env::set_var(DATABASE_ENV_VAR, "/from/env.db");
    let toml_config = TomlConfig {
        database_path: Some(PathBuf::from("/from/toml.db")),
        ..Default::default()
    };

    let resolved = resolve_database_path(None, &toml_config);
    env::remove_var(DATABASE_ENV_VAR);

    assert_eq!(resolved, Some(PathBuf::from("/from/env.db")));
}

#[test]
#[serial]
fn test_resolve_falls_back_to_toml_then_defaults() {
    env::remove_var(DATABASE_ENV_VAR);
    let toml_config = TomlConfig {
        database_path: Some(PathBuf::from("/from/toml.db")),
        port: Some(7000),
        ..Default::default()
    };

    let resolved = ResolvedConfig::resolve(CliOverrides::default(), &toml_config);

    assert_eq!(resolved.database_path, PathBuf::from("/from/toml.db"));
    assert_eq!(resolved.port, 7000);
    assert_eq!(resolved.bind, "127.0.0.1");
    assert_eq!(resolved.log_level, "info");
}

#[test]
#[serial]
fn test_resolve_cli_overrides_everything() {
    env::remove_var(DATABASE_ENV_VAR);
    let toml_config = TomlConfig {
        bind: Some("10.0.0.1".to_string()),
        port: Some(7000),
        log_level: Some("warn".to_string()),
        ..Default::default()
    };
    let cli = CliOverrides {
        database: Some(PathBuf::from("cli.db")),
        bind: Some("0.0.0.0".to_string()),
        port: Some(9000),
        log_level: Some("debug".to_string()),
    };

    let resolved = ResolvedConfig::resolve(cli, &toml_config);

    assert_eq!(resolved.database_path, PathBuf::from("cli.db"));
    assert_eq!(resolved.bind, "0.0.0.0");
    assert_eq!(resolved.port, 9000);
    assert_eq!(resolved.log_level, "debug");
}
