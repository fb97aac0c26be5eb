//! Shared option types for CLI commands.

/// Global CLI options shared across commands.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}
