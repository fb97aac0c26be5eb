//! Command to dump a file's bytes to stdout.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Dump a file's bytes as space-separated decimal values.
pub struct DumpCommand {
    /// File to dump.
    pub path: PathBuf,
}

impl DumpCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = bytedump::init_logger(global.verbose, global.quiet);

        // Pure resolution against the CWD; existence is checked at read time
        let resolved = bytedump::resolve(&self.path)?;
        logger.info(&format!("reading {resolved}"));

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let count = bytedump::dump_file(&resolved, &mut out)?;
        out.flush().map_err(CliError::Io)?;

        logger.info(&format!("dumped {count} byte(s)"));
        Ok(())
    }
}
