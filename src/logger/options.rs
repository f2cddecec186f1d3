//! Formatting knobs for the console line.

use crate::fmt::{Color, DateFormat, RFC3339};
use crate::level::Verbosity;
use std::collections::HashMap;

/// Date format, color toggle, and optional per-level color overrides.
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    date_format: DateFormat,
    colors: bool,
    level_colors: HashMap<Verbosity, Color>,
}

/// RFC 3339 dates, colors on, no overrides.
impl Default for LoggerOptions {
    fn default() -> Self {
        Self::new(RFC3339)
    }
}

impl LoggerOptions {
    /// Options with the given date pattern (`rfc3339` or strftime) and colors on.
    #[must_use]
    pub fn new(date_format: &str) -> Self {
        Self {
            date_format: DateFormat::new(date_format),
            colors: true,
            level_colors: HashMap::new(),
        }
    }

    #[must_use]
    pub fn date_format(mut self, pattern: &str) -> Self {
        self.date_format = DateFormat::new(pattern);
        self
    }

    /// Piped output and CI logs can't render ANSI escape codes.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Default level colors may clash with the user's terminal theme.
    #[must_use]
    pub fn level_color(mut self, level: Verbosity, color: Color) -> Self {
        self.level_colors.insert(level, color);
        self
    }

    #[must_use]
    pub const fn format(&self) -> &DateFormat {
        &self.date_format
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Override if one was set, otherwise the level's own color.
    #[must_use]
    pub fn color_for(&self, level: Verbosity) -> Color {
        self.level_colors
            .get(&level)
            .copied()
            .unwrap_or_else(|| level.color())
    }
}
