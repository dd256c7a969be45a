//! keycheck CLI entry point.

use clap::Parser;

use keycheck::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = keycheck::cli::run(&cli) {
        keycheck::cli::handle_error(&err, cli.json);
    }
}
