use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::Config;

/// Default project configuration file
pub const DEFAULT_CONFIG_PATH: &str = ".keycheck/config.yaml";

/// Prefix for environment overrides, e.g. `KEYCHECK_LOGGING__LEVEL`
pub const ENV_PREFIX: &str = "KEYCHECK_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("env_file is enabled but no paths are configured")]
    NoEnvFilePaths,

    #[error("Config file not found: {0}")]
    FileNotFound(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `.keycheck/config.yaml`, or `path` when given
    /// 3. Environment variables (`KEYCHECK_*` prefix, `__` separates sections)
    ///
    /// A missing default file is ignored; a missing explicit `path` is an error.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let file = match path {
            Some(p) if !p.exists() => {
                return Err(ConfigError::FileNotFound(p.display().to_string()).into());
            }
            Some(p) => p.to_path_buf(),
            None => DEFAULT_CONFIG_PATH.into(),
        };

        let config: Config = Self::figment(&file)
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", file.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if config.env_file.enabled && config.env_file.paths.is_empty() {
            return Err(ConfigError::NoEnvFilePaths);
        }

        Ok(())
    }
}
