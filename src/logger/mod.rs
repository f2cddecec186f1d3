//! The configured logger: verbosity threshold, optional callback, formatting
//! options and a console sink, bundled into one immutable value that the
//! application owns and hands to whatever needs to log.

mod builder;
mod callback;
mod from_config;
mod options;

pub use builder::LoggerBuilder;
pub use callback::LogCallback;
pub use options::LoggerOptions;

use crate::caller::CallSite;
use crate::fmt::colorize;
use crate::level::Verbosity;
use crate::output::{Output, TerminalOutput};
use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Width of the level column, escape codes included.
pub const LEVEL_WIDTH: usize = 16;

/// Immutable after build, so concurrent logging needs no locks.
pub struct Logger {
    verbosity: Verbosity,
    callback: Option<Arc<dyn LogCallback>>,
    options: LoggerOptions,
    output: Box<dyn Output>,
}

impl Default for Logger {
    /// Threshold `Error`, no callback, RFC 3339 dates, colored stdout.
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("verbosity", &self.verbosity)
            .field("callback", &self.callback.is_some())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Stdout logger from the three configuration inputs.
    #[must_use]
    pub fn new(
        verbosity: Verbosity,
        callback: Option<Arc<dyn LogCallback>>,
        options: LoggerOptions,
    ) -> Self {
        Self {
            verbosity,
            callback,
            options,
            output: Box::new(TerminalOutput::new()),
        }
    }

    /// Core dispatch.
    ///
    /// The callback always runs first and sees every call; only then is the
    /// threshold applied to the console line. Nothing here reports failure back
    /// to the caller.
    pub fn log_at(
        &self,
        message: &dyn fmt::Display,
        level: Verbosity,
        caller: &CallSite,
        extra: &[&dyn fmt::Debug],
    ) {
        if let Some(callback) = &self.callback {
            callback.on_log(message, level, extra);
        }

        let now = Local::now();

        if self.enabled(level) {
            let line = self.format_line(&now, level, message, caller);
            let _ = self.output.write_line(&line);
        }
    }

    /// Function form for call sites that can't use the macros. No function name
    /// is available here, so the caller renders as its `file:line`; use
    /// [`log!`](crate::log) or [`log_to!`](crate::log_to) to report the function.
    #[track_caller]
    pub fn log(&self, message: &dyn fmt::Display, level: Verbosity, extra: &[&dyn fmt::Debug]) {
        let caller = CallSite::from_location(Location::caller());
        self.log_at(message, level, &caller, extra);
    }

    /// `<timestamp> | <level padded to 16> | <message> (<caller>)`.
    ///
    /// Padding is applied after coloring, so the escape codes count toward the
    /// column width; names are never truncated.
    #[must_use]
    pub fn format_line<Tz>(
        &self,
        timestamp: &DateTime<Tz>,
        level: Verbosity,
        message: &dyn fmt::Display,
        caller: &CallSite,
    ) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let date = self.options.format().render(timestamp);
        let name = if self.options.colors_enabled() {
            colorize(level.as_str(), self.options.color_for(level))
        } else {
            level.as_str().to_string()
        };
        format!(
            "{date} | {name:<width$} | {message} ({caller})",
            width = LEVEL_WIDTH
        )
    }

    /// Whether a `level` message would reach the console.
    #[must_use]
    pub const fn enabled(&self, level: Verbosity) -> bool {
        level.passes(self.verbosity)
    }

    #[must_use]
    pub const fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    #[must_use]
    pub const fn options(&self) -> &LoggerOptions {
        &self.options
    }

    #[must_use]
    pub const fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// # Errors
    /// Returns the sink's I/O error, if any.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.output.flush()
    }
}
