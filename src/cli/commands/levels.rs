//! Lists the level table so users can see the threshold order at a glance.

use crate::fmt::colorize;
use crate::level::Verbosity;
use crate::logger::Logger;
use std::process::ExitCode;

/// One line per level: ordinal, name, and a marker on the active threshold.
#[must_use]
pub fn cmd_levels(logger: &Logger) -> ExitCode {
    let options = logger.options();
    for level in Verbosity::all() {
        let name = if options.colors_enabled() {
            colorize(level.as_str(), options.color_for(level))
        } else {
            level.as_str().to_string()
        };
        let marker = if level == logger.verbosity() {
            "  (threshold)"
        } else {
            ""
        };
        println!("{}  {name}{marker}", level.ordinal());
    }
    ExitCode::SUCCESS
}
