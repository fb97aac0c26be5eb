//! CLI structure definition.
//!
//! This module defines the CLI surface using clap's derive macros. There is
//! a single operation, so the path is a required positional argument rather
//! than a subcommand.

use clap::Parser;
use std::path::PathBuf;

/// Command-line tool for printing a file's bytes as decimal values.
#[derive(Parser)]
#[command(name = "bytedump")]
#[command(version, about = "Print a file's bytes as space-separated decimal values", long_about = None)]
pub struct Cli {
    /// File to dump (absolute, or relative to the current directory)
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,
}
