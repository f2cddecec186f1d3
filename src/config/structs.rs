//! Configuration struct definitions.

use crate::fmt::RFC3339;
use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Console verbosity threshold (debug, info, warning, error, trace).
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "error".to_string(),
        }
    }
}

/// Line format configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// `rfc3339` or a strftime pattern.
    pub date_format: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date_format: RFC3339.to_string(),
        }
    }
}

/// Terminal output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Enable colors.
    pub colors: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { colors: true }
    }
}
