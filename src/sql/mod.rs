//! SQL fragment builders for statements assembled from a table's column list.
//!
//! These only produce text for `?`-placeholder drivers; they never validate
//! identifiers, and degenerate input (no columns, zero rows) yields empty or
//! degenerate fragments rather than an error.

pub mod slice;

pub use slice::{keep_included, remove_excluded};

/// A table description: its name and its columns in declaration order.
pub trait Model {
    fn table_name(&self) -> &str;
    fn table_columns(&self) -> &[&str];
}

/// Which columns to keep when rendering a column list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSelection<'a> {
    /// Every column except these.
    Exclude(&'a [&'a str]),
    /// Only these columns, in table order.
    Include(&'a [&'a str]),
}

impl ColumnSelection<'_> {
    /// Keeps every column.
    pub const ALL: ColumnSelection<'static> = ColumnSelection::Exclude(&[]);
}

/// Comma-joined column names (no spaces) after applying `selection`.
///
/// ```
/// use apputils::sql::{ColumnSelection, column_list};
///
/// assert_eq!(column_list(&["a", "b", "c"], ColumnSelection::Exclude(&["b"])), "a,c");
/// ```
#[must_use]
pub fn column_list<S: AsRef<str>>(columns: &[S], selection: ColumnSelection<'_>) -> String {
    let kept = match selection {
        ColumnSelection::Exclude(exclude) => remove_excluded(columns, exclude),
        ColumnSelection::Include(include) => keep_included(columns, include),
    };
    kept.join(",")
}

/// The model's columns minus `exclude`, e.g. for an `INSERT` that skips an auto-increment id.
#[must_use]
pub fn column_names_exclusive(model: &impl Model, exclude: &[&str]) -> String {
    column_list(model.table_columns(), ColumnSelection::Exclude(exclude))
}

/// Only the model's columns named in `include`, in table order.
#[must_use]
pub fn column_names_inclusive(model: &impl Model, include: &[&str]) -> String {
    column_list(model.table_columns(), ColumnSelection::Include(include))
}

/// `rows` parenthesized groups of `params` placeholders, joined by `", "`.
///
/// `batch_placeholders(2, 2)` is `"(?,?), (?,?)"`; zero params still yields `"()"`
/// per row, and zero rows yields an empty string.
#[must_use]
pub fn batch_placeholders(params: usize, rows: usize) -> String {
    let group = format!("({})", vec!["?"; params].join(","));
    vec![group.as_str(); rows].join(", ")
}

/// `"<column> = ?"` for each column, joined by `","` (no space).
#[must_use]
pub fn update_assignments<S: AsRef<str>>(columns: &[S]) -> String {
    columns
        .iter()
        .map(|column| format!("{} = ?", column.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selection_keeps_everything() {
        assert_eq!(column_list(&["id", "name"], ColumnSelection::ALL), "id,name");
    }

    #[test]
    fn owned_strings_are_accepted() {
        let columns = vec!["id".to_string(), "name".to_string()];
        assert_eq!(update_assignments(&columns), "id = ?,name = ?");
    }
}
