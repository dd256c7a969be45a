use anyhow::Result;
use std::io;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::models::{LogFormat, LoggingConfig};
use crate::domain::StartupError;

/// Logger implementation using tracing
///
/// Everything is written to stderr; stdout is reserved for the report.
#[derive(Debug)]
pub struct LoggerImpl;

impl LoggerImpl {
    /// Install the global subscriber.
    ///
    /// `verbose` raises the default level to `debug`. `RUST_LOG`, when set,
    /// takes precedence over both.
    pub fn init(config: &LoggingConfig, verbose: bool) -> Result<Self> {
        let level = if verbose {
            Level::DEBUG
        } else {
            parse_log_level(&config.level)?
        };

        let env_filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        let stderr_layer = match config.format {
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_current_span(true)
                .with_target(true)
                .with_filter(env_filter)
                .boxed(),
            LogFormat::Pretty => tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_filter(env_filter)
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(stderr_layer)
            .try_init()
            .map_err(|e| StartupError::Logging(e.to_string()))?;

        tracing::debug!(
            level = %level,
            format = ?config.format,
            "logger initialized"
        );

        Ok(Self)
    }
}

/// Parse log level string to Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert!(matches!(parse_log_level("trace"), Ok(Level::TRACE)));
        assert!(matches!(parse_log_level("debug"), Ok(Level::DEBUG)));
        assert!(matches!(parse_log_level("info"), Ok(Level::INFO)));
        assert!(matches!(parse_log_level("warn"), Ok(Level::WARN)));
        assert!(matches!(parse_log_level("error"), Ok(Level::ERROR)));
        assert!(matches!(parse_log_level("TRACE"), Ok(Level::TRACE)));
        assert!(parse_log_level("invalid").is_err());
    }

    #[test]
    fn test_logger_init_once() {
        // Installs the global subscriber; a second install must fail cleanly
        let config = LoggingConfig::default();
        assert!(LoggerImpl::init(&config, true).is_ok());

        assert!(LoggerImpl::init(&config, false).is_err());
    }
}
