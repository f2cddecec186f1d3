//! Each subcommand lives in its own file. Keeps the match arm in main thin
//! and lets each handler own its argument validation and error reporting.

mod levels;
mod log;
mod sql;

pub use levels::cmd_levels;
pub use log::cmd_log;
pub use sql::cmd_sql;
