//! Prints SQL fragments, handy when hand-writing migrations or batch inserts.

use crate::cli::SqlCommand;
use crate::sql::{ColumnSelection, batch_placeholders, column_list, update_assignments};
use std::process::ExitCode;

#[must_use]
pub fn cmd_sql(command: &SqlCommand) -> ExitCode {
    let fragment = match command {
        SqlCommand::Columns {
            columns,
            exclude,
            include,
        } => {
            let exclude: Vec<&str> = exclude.iter().map(String::as_str).collect();
            let include: Option<Vec<&str>> = include
                .as_ref()
                .map(|names| names.iter().map(String::as_str).collect());
            let selection = include.as_deref().map_or(
                ColumnSelection::Exclude(&exclude),
                ColumnSelection::Include,
            );
            column_list(columns, selection)
        }
        SqlCommand::Batch { params, rows } => batch_placeholders(*params, *rows),
        SqlCommand::Update { columns } => update_assignments(columns),
    };
    println!("{fragment}");
    ExitCode::SUCCESS
}
