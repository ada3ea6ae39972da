//! Application configuration.
//!
//! Loaded from an optional YAML file and environment variable overrides.
//! With nothing present every value takes its default, so a bare smoke run
//! needs no configuration at all.

mod server;

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use server::ServerConfig;

/// Default configuration file name, resolved against the base directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "APP_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "APP";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "APP_SMOKE_LOG";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server module configuration.
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration rooted at `base_dir`.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `config.yaml` in `base_dir` (if exists)
    /// 2. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 3. Environment variables with `CONFIG_ENV_PREFIX` prefix
    pub fn load_from(base_dir: &Path) -> Result<Self, ::config::ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let default_file = base_dir.join(DEFAULT_CONFIG_FILE);
        let mut builder = ConfigLib::builder().add_source(
            File::new(&default_file.to_string_lossy(), FileFormat::Yaml).required(false),
        );

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

/// Get the base directory for resolving file references.
///
/// Returns the parent directory of CONFIG_ENV_VAR if set, otherwise current directory.
pub fn config_base_dir() -> PathBuf {
    if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
        Path::new(&config_path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    } else {
        PathBuf::from(".")
    }
}
