//! CLI type definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Report which external API credentials are configured.
///
/// Running with no arguments loads `.env.local` / `.env` from the current
/// directory and checks every known provider.
#[derive(Parser, Debug)]
#[command(name = "keycheck", version, about, long_about = None)]
pub struct Cli {
    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Load this env file instead of the configured defaults
    #[arg(long, value_name = "PATH", conflicts_with = "no_env_file")]
    pub env_file: Option<PathBuf>,

    /// Do not load any env file
    #[arg(long)]
    pub no_env_file: bool,

    /// Configuration file (defaults to .keycheck/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
