//! Command-line interface
//!
//! Argument parsing, output rendering and the check command.

pub mod commands;
pub mod display;
pub mod output;
pub mod types;

pub use types::Cli;

/// Run the CLI.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    commands::check::execute(cli)
}

/// Print an error and exit with status 1.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "success": false, "error": format!("{err:#}") });
        eprintln!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1)
}
