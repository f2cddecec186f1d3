//! CLI module for apputils.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use clap::{Parser, Subcommand};

/// apputils - Log lines and build SQL fragments from the command line.
#[derive(Debug, Parser)]
#[command(
    name = "apputils",
    version,
    about = "Log lines and build SQL fragments from the command line"
)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,
    /// Override the configured verbosity threshold
    #[arg(long, global = true, value_name = "NAME")]
    pub level: Option<String>,
    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log a message at the given level.
    Log {
        /// Level name (debug, info, warning, error, trace)
        #[arg(id = "log_level", value_name = "LEVEL")]
        level: String,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// List levels with their ordinals and colors.
    Levels,
    /// Build SQL fragments.
    #[command(subcommand)]
    Sql(SqlCommand),
}

/// SQL fragment subcommands.
#[derive(Debug, Subcommand)]
pub enum SqlCommand {
    /// Comma-joined column list.
    Columns {
        /// Columns in table order
        #[arg(required = true)]
        columns: Vec<String>,
        /// Columns to leave out
        #[arg(long, value_delimiter = ',', conflicts_with = "include")]
        exclude: Vec<String>,
        /// Only keep these columns
        #[arg(long, value_delimiter = ',')]
        include: Option<Vec<String>>,
    },
    /// Placeholder groups for a multi-row INSERT.
    Batch {
        /// Placeholders per row
        params: usize,
        /// Number of rows
        rows: usize,
    },
    /// `column = ?` assignments for an UPDATE.
    Update {
        /// Columns to assign
        #[arg(required = true)]
        columns: Vec<String>,
    },
}
