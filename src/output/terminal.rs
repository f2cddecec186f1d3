//! Standard output sink.

use super::Output;
use std::io::{self, Write};

/// Writes every line to stdout, one `writeln!` per record, with no extra buffering.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        writeln!(io::stdout().lock(), "{line}")?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }
}
