use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for keycheck
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// `.env` file loading
    #[serde(default)]
    pub env_file: EnvFileConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default)]
    pub format: LogFormat,
}

/// Output format for log lines written to stderr
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Which `.env`-style files are merged into the process environment
/// before credentials are checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EnvFileConfig {
    /// Whether any file is loaded at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Candidate files, earlier entries take precedence
    #[serde(default = "default_env_paths")]
    pub paths: Vec<PathBuf>,
}

const fn default_true() -> bool {
    true
}

fn default_env_paths() -> Vec<PathBuf> {
    vec![PathBuf::from(".env.local"), PathBuf::from(".env")]
}

impl Default for EnvFileConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            paths: default_env_paths(),
        }
    }
}
