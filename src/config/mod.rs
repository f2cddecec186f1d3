//! TOML configuration loading.
//!
//! Separated from struct definitions so that the loading logic (file I/O,
//! name resolution) stays independent of the serde schema.

mod structs;

pub use structs::{FormatConfig, GeneralConfig, TerminalConfig};

use crate::fmt::Color;
use crate::level::Verbosity;
use crate::logger::LoggerOptions;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "apputils";
const CONFIG_FILE: &str = "apputils.toml";

/// A completely empty config file must still produce a working logger; `#[serde(default)]`
/// on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Threshold applies to every console line.
    pub general: GeneralConfig,
    /// Timestamp rendering.
    pub format: FormatConfig,
    /// Color toggle for the level column.
    pub terminal: TerminalConfig,
    /// Per-level color overrides, keyed by level name.
    pub colors: HashMap<String, String>,
}

impl Config {
    /// Loads the user's config from the platform config directory.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, the file can't be read,
    /// or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses TOML text.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on malformed TOML.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config_dir>/apputils/apputils.toml`, e.g. `~/.config/apputils/apputils.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores level as a string for TOML ergonomics; this converts to the typed enum.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidLevel`] for an unknown level name.
    pub fn parse_level(&self) -> Result<Verbosity, crate::Error> {
        Ok(Verbosity::from_name(&self.general.level)?)
    }

    /// Resolves the `[colors]` table.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidLevel`] or [`crate::Error::InvalidColor`] for unknown names.
    pub fn parse_level_colors(&self) -> Result<HashMap<Verbosity, Color>, crate::Error> {
        self.colors
            .iter()
            .map(|(level, color)| -> Result<(Verbosity, Color), crate::Error> {
                Ok((Verbosity::from_name(level)?, color.parse()?))
            })
            .collect()
    }

    /// Formatting options described by this config.
    ///
    /// # Errors
    /// Propagates [`Self::parse_level_colors`] failures.
    pub fn logger_options(&self) -> Result<LoggerOptions, crate::Error> {
        let options = LoggerOptions::new(&self.format.date_format).colors(self.terminal.colors);
        Ok(self
            .parse_level_colors()?
            .into_iter()
            .fold(options, |options, (level, color)| {
                options.level_color(level, color)
            }))
    }
}
