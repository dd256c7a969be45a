//! Implementation of the default `keycheck` run: the startup credential check.

use anyhow::Result;
use tracing::{debug, warn};

use crate::cli::display::{apply_color_preference, colorize_status, section_header};
use crate::cli::output::{output, CommandOutput};
use crate::cli::Cli;
use crate::domain::models::Config;
use crate::infrastructure::config::{ConfigError, ConfigLoader};
use crate::infrastructure::env::{EnvFileLoader, EnvSnapshot};
use crate::infrastructure::logging::{LoggerImpl, SecretScrubber};
use crate::infrastructure::runtime::RuntimeInfo;
use crate::services::{StartupReport, StartupReporter};

impl CommandOutput for StartupReport {
    fn to_human(&self) -> String {
        let mut lines = vec![
            "Project is ready!".to_string(),
            format!("Runtime: {}", self.runtime),
        ];
        if !self.env_files.is_empty() {
            let files: Vec<_> = self
                .env_files
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            lines.push(format!("Env files: {}", files.join(", ")));
        }
        lines.push(String::new());
        lines.push(section_header("API Keys Status:"));
        for service in &self.services {
            lines.push(format!(
                "  {}: {}",
                service.service,
                colorize_status(service.status)
            ));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Pick the env file loader from the command line, falling back to config.
pub fn env_file_loader(cli: &Cli, config: &Config) -> EnvFileLoader {
    if cli.no_env_file {
        EnvFileLoader::disabled()
    } else if let Some(path) = &cli.env_file {
        EnvFileLoader::with_path(path)
    } else {
        EnvFileLoader::from_config(&config.env_file)
    }
}

/// Load keycheck's own configuration.
///
/// Only a missing explicit `--config` file is fatal. Any other problem
/// falls back to defaults and is returned alongside them so it can be
/// logged once the logger exists.
pub fn load_config(cli: &Cli) -> Result<(Config, Option<anyhow::Error>)> {
    match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => Ok((config, None)),
        Err(err)
            if matches!(
                err.downcast_ref::<ConfigError>(),
                Some(ConfigError::FileNotFound(_))
            ) =>
        {
            Err(err.context("Failed to load keycheck configuration"))
        }
        Err(err) => Ok((Config::default(), Some(err))),
    }
}

pub fn execute(cli: &Cli) -> Result<()> {
    let (config, config_error) = load_config(cli)?;
    LoggerImpl::init(&config.logging, cli.verbose)?;

    if let Some(err) = config_error {
        let scrubber = SecretScrubber::new();
        warn!(
            error = %scrubber.scrub_message(&format!("{err:#}")),
            "invalid keycheck configuration, using defaults"
        );
    }

    let loader = env_file_loader(cli, &config);
    debug!(candidates = ?loader.candidates(), "loading env files");
    let env_files = loader.load();
    let snapshot = EnvSnapshot::capture();
    apply_color_preference(&snapshot);

    let report = StartupReporter::new(RuntimeInfo::current())
        .with_env_files(env_files)
        .check(&snapshot);

    output(&report, cli.json);
    Ok(())
}
