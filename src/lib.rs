#![forbid(unsafe_code)]

//! `apputils` - SQL fragment helpers and a leveled, caller-aware console logger.
//!
//! - [`sql`]: column lists, batched `?` placeholders and `SET` assignments built
//!   from a table's column names.
//! - [`Logger`]: verbosity-filtered, colorized, timestamped console lines naming
//!   the function that logged, plus an optional callback that sees every call.
//! - [`global`]: a process-wide logger with a lazy default, used by the
//!   [`log!`] family of macros.
//!
//! # Example
//!
//! ```
//! use apputils::{Logger, Verbosity};
//!
//! let logger = Logger::builder()
//!     .verbosity(Verbosity::Info)
//!     .date_format("%Y-%m-%d %H:%M:%S")
//!     .callback(|message, level, extra| {
//!         let _ = (message.to_string(), level, extra.len());
//!     })
//!     .build();
//!
//! apputils::log_to!(logger, Verbosity::Info, "service started");
//! apputils::log_to!(logger, Verbosity::Debug, "hidden on the console", "seen by the callback");
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `apputils` command-line binary

pub mod caller;
pub mod config;
pub mod error;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
mod macros;
pub mod output;
pub mod sql;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use caller::CallSite;
pub use config::Config;
pub use error::Error;
pub use fmt::{Color, DateFormat};
pub use level::{ParseLevelError, Verbosity};
pub use logger::{LogCallback, Logger, LoggerBuilder, LoggerOptions};
pub use output::{MemoryOutput, Output, TerminalOutput};
pub use sql::{ColumnSelection, Model};
