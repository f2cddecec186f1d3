//! Emit a single log line, the way shell scripts share the application's log format.

use crate::cli::util::verbosity_or_exit;
use crate::logger::Logger;
use std::process::ExitCode;

/// Logs `message` at the named level; an unknown level name ends the process.
#[must_use]
pub fn cmd_log(level: &str, message: &[String], logger: &Logger) -> ExitCode {
    let level = verbosity_or_exit(level);
    crate::log_to!(logger, level, message.join(" "));
    if logger.flush().is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
