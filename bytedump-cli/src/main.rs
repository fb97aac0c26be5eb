//! Main entry point for the bytedump CLI.
//!
//! This is the command-line interface for the bytedump tool. It takes a
//! single path argument, reads the file's raw bytes, and prints each
//! byte's decimal value to stdout.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::dump::DumpCommand;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments; clap reports missing/unknown arguments itself
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let command = DumpCommand { path: cli.path };

    match command.execute(&global) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
