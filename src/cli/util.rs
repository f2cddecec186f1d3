//! Utility functions for the CLI.

use crate::config::Config;
use crate::level::Verbosity;
use crate::logger::Logger;
use std::path::PathBuf;

/// Resolves a level name or terminates the process.
///
/// A misspelled level at startup would otherwise silently log at the wrong
/// threshold, so this prints `Unknown log verbosity <name>` and exits with status 1.
#[must_use]
pub fn verbosity_or_exit(name: &str) -> Verbosity {
    Verbosity::from_name(name).unwrap_or_else(|_| {
        eprintln!("Unknown log verbosity {name}");
        std::process::exit(1)
    })
}

/// Expands a leading `~` to the user's home directory.
#[must_use]
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// Loads `path` if given, otherwise the default config location.
///
/// # Errors
/// Config I/O or parse failures.
pub fn load_config(path: Option<&str>) -> Result<Config, crate::Error> {
    path.map_or_else(Config::load, |path| Config::load_from(&expand_path(path)))
}

/// Builds the CLI's logger, applying command-line overrides on top of `config`.
///
/// Unknown level names are fatal, whether they come from `--level` or the file.
///
/// # Errors
/// Unknown color names in the config.
pub fn build_logger(
    config: &Config,
    level_override: Option<&str>,
    no_color: bool,
) -> Result<Logger, crate::Error> {
    let mut config = config.clone();
    let level = verbosity_or_exit(level_override.unwrap_or(&config.general.level));
    config.general.level = level.as_str().to_string();
    if no_color {
        config.terminal.colors = false;
    }
    Logger::from_config(&config)
}
