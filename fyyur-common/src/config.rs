//! Configuration loading and resolution
//!
//! Every setting resolves in the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing config file is never fatal: it is logged and defaults apply.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming the database file
pub const DATABASE_ENV_VAR: &str = "FYYUR_DATABASE";

/// Default HTTP port (the classic Flask development port)
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Contents of `config.toml`; every key is optional
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TomlConfig {
    /// SQLite database file
    pub database_path: Option<PathBuf>,
    /// Address to bind the HTTP listener to
    pub bind: Option<String>,
    /// HTTP port
    pub port: Option<u16>,
    /// Tracing filter directive, e.g. `info` or `fyyur_web=debug`
    pub log_level: Option<String>,
}

/// Compiled defaults for the current platform
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub database_path: PathBuf,
    pub bind: String,
    pub port: u16,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            database_path: default_data_dir().join("fyyur.db"),
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}

/// Fully resolved settings used to start the web service
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub database_path: PathBuf,
    pub bind: String,
    pub port: u16,
    pub log_level: String,
}

/// Values supplied on the command line (clap also folds in `FYYUR_PORT`,
/// `FYYUR_BIND` and `FYYUR_CONFIG` before they get here)
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database: Option<PathBuf>,
    pub bind: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

impl ResolvedConfig {
    /// Merge CLI overrides, environment, TOML and compiled defaults
    pub fn resolve(cli: CliOverrides, toml_config: &TomlConfig) -> Self {
        let defaults = CompiledDefaults::for_current_platform();

        let database_path = resolve_database_path(cli.database.as_deref(), toml_config)
            .unwrap_or(defaults.database_path);

        Self {
            database_path,
            bind: cli
                .bind
                .or_else(|| toml_config.bind.clone())
                .unwrap_or(defaults.bind),
            port: cli.port.or(toml_config.port).unwrap_or(defaults.port),
            log_level: cli
                .log_level
                .or_else(|| toml_config.log_level.clone())
                .unwrap_or(defaults.log_level),
        }
    }
}

/// Resolve the database path from CLI, then `FYYUR_DATABASE`, then TOML
///
/// Returns `None` when none of them name a path.
pub fn resolve_database_path(cli_arg: Option<&Path>, toml_config: &TomlConfig) -> Option<PathBuf> {
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(DATABASE_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    toml_config.database_path.clone()
}

/// Load the TOML config file
///
/// With `explicit_path` unset the platform default location is tried.
/// A missing file yields the default (empty) config; a malformed file is an error.
pub fn load_toml_config(explicit_path: Option<&Path>) -> Result<TomlConfig> {
    let path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => match default_config_file() {
            Some(path) => path,
            None => {
                warn!("Could not determine config directory, using defaults");
                return Ok(TomlConfig::default());
            }
        },
    };

    if !path.exists() {
        if explicit_path.is_some() {
            warn!("Config file not found: {} (using defaults)", path.display());
        } else {
            info!("No config file at {}, using defaults", path.display());
        }
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config = parse_toml_config(&content)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

    info!("Loaded config file: {}", path.display());
    Ok(config)
}

/// Parse TOML text into a [`TomlConfig`]
pub fn parse_toml_config(content: &str) -> Result<TomlConfig> {
    toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
}

/// `<config_dir>/fyyur/config.toml`
fn default_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fyyur").join("config.toml"))
}

/// Get OS-dependent default data folder
fn default_data_dir() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/fyyur (or /var/lib/fyyur for system-wide)
        dirs::data_local_dir()
            .map(|d| d.join("fyyur"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/fyyur"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("fyyur"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/fyyur"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("fyyur"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\fyyur"))
    } else {
        PathBuf::from("./fyyur_data")
    }
}
