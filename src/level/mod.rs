//! Verbosity levels that gate which messages reach the console.

use crate::fmt::Color;
use std::fmt;
use std::str::FromStr;

/// Ordered by declaration: `Debug < Info < Warning < Error < Trace`.
///
/// `Trace` sits above `Error` even though it is conventionally the quietest level,
/// so a threshold of `Error` still shows `Trace` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
    /// Development-time diagnostics.
    Debug = 0,
    /// Normal operational milestones.
    Info = 1,
    /// Non-fatal anomalies that may need attention.
    Warning = 2,
    /// Failures that prevent an operation from completing. Default threshold.
    #[default]
    Error = 3,
    /// Instrumentation lines; numerically the highest level.
    Trace = 4,
}

impl Verbosity {
    /// Name printed in the level column of a console line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Trace => "Trace",
        }
    }

    /// Position in the declared order; filtering compares these.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Display attribute used for the level column when colors are enabled.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Debug => Color::Magenta,
            Self::Info => Color::Blue,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
            Self::Trace => Color::Green,
        }
    }

    /// Whether a message at `self` passes a console threshold of `threshold`.
    #[must_use]
    pub const fn passes(self, threshold: Self) -> bool {
        self.ordinal() >= threshold.ordinal()
    }

    /// Case-insensitive lookup used by config loaders and the CLI.
    ///
    /// # Errors
    /// Returns [`ParseLevelError`] for anything outside
    /// `debug`, `info`, `warning`, `error`, `trace`.
    pub fn from_name(name: &str) -> Result<Self, ParseLevelError> {
        name.parse()
    }

    /// All levels in ordinal order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Trace,
        ]
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can decide whether an unknown name is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The name that failed to match.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log verbosity: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Verbosity {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
