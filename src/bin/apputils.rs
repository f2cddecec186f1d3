//! `apputils` command-line entry point.
//!
//! Usage:
//!   apputils log <level> <msg>...                     Log a message
//!   apputils levels                                   List levels and the active threshold
//!   apputils sql columns <cols>... [--exclude|--include a,b]
//!   apputils sql batch <params> <rows>
//!   apputils sql update <cols>...
//!
//! Global flags: --config <path>, --level <name>, --no-color

use apputils::cli::commands::{cmd_levels, cmd_log, cmd_sql};
use apputils::cli::util::{build_logger, load_config};
use apputils::cli::{Cli, Command};
use apputils::global;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config drives the threshold and line format, so it must load before any logger is created
    let config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let logger = match build_logger(&config, cli.level.as_deref(), cli.no_color) {
        Ok(logger) => Arc::new(logger),
        Err(e) => {
            eprintln!("Error building logger: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Library code reached from here logs through the process-wide logger
    global::install_shared(Arc::clone(&logger));

    match &cli.command {
        Command::Log { level, message } => cmd_log(level, message, &logger),
        Command::Levels => cmd_levels(&logger),
        Command::Sql(command) => cmd_sql(command),
    }
}
