//! Stepwise construction so callers only name the settings they care about.

use super::{LogCallback, Logger, LoggerOptions};
use crate::fmt::Color;
use crate::level::Verbosity;
use crate::output::{Output, TerminalOutput};
use std::fmt;
use std::sync::Arc;

/// Starts from the same defaults as the lazily created process-wide logger.
pub struct LoggerBuilder {
    verbosity: Verbosity,
    callback: Option<Arc<dyn LogCallback>>,
    options: LoggerOptions,
    output: Option<Box<dyn Output>>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Threshold `Error`: only `Error` and `Trace` reach the console until configured otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self {
            verbosity: Verbosity::Error,
            callback: None,
            options: LoggerOptions::default(),
            output: None,
        }
    }

    #[must_use]
    pub const fn verbosity(mut self, level: Verbosity) -> Self {
        self.verbosity = level;
        self
    }

    /// Closure receiving every log call, whatever the threshold.
    #[must_use]
    pub fn callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&dyn fmt::Display, Verbosity, &[&dyn fmt::Debug]) + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }

    /// Shared handler, for callbacks that outlive one logger (reconfiguration keeps the same sink).
    #[must_use]
    pub fn callback_handler(mut self, handler: Arc<dyn LogCallback>) -> Self {
        self.callback = Some(handler);
        self
    }

    #[must_use]
    pub fn options(mut self, options: LoggerOptions) -> Self {
        self.options = options;
        self
    }

    /// `rfc3339` or a strftime pattern.
    #[must_use]
    pub fn date_format(mut self, pattern: &str) -> Self {
        self.options = self.options.date_format(pattern);
        self
    }

    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.options = self.options.colors(enabled);
        self
    }

    #[must_use]
    pub fn level_color(mut self, level: Verbosity, color: Color) -> Self {
        self.options = self.options.level_color(level, color);
        self
    }

    /// Replaces stdout as the console sink.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            verbosity: self.verbosity,
            callback: self.callback,
            options: self.options,
            output: self
                .output
                .unwrap_or_else(|| Box::new(TerminalOutput::new())),
        }
    }
}
