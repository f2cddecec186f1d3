//! Fan-out hook for forwarding log events to other sinks.

use crate::level::Verbosity;
use std::fmt;

/// Receives every log call, whatever the console threshold says.
///
/// `extra` is passed through exactly as the caller supplied it; the console line
/// never shows it. Any `Fn(&dyn Display, Verbosity, &[&dyn Debug]) + Send + Sync`
/// closure implements this trait.
pub trait LogCallback: Send + Sync {
    fn on_log(&self, message: &dyn fmt::Display, level: Verbosity, extra: &[&dyn fmt::Debug]);
}

impl<F> LogCallback for F
where
    F: Fn(&dyn fmt::Display, Verbosity, &[&dyn fmt::Debug]) + Send + Sync,
{
    fn on_log(&self, message: &dyn fmt::Display, level: Verbosity, extra: &[&dyn fmt::Debug]) {
        self(message, level, extra);
    }
}
