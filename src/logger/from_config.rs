//! Logger construction from a loaded config file.

use super::{Logger, LoggerBuilder};
use crate::config::Config;

impl Logger {
    /// Builds a stdout logger from the default config file.
    ///
    /// # Errors
    /// Config I/O or parse failures, and unknown level or color names.
    pub fn from_default_config() -> Result<Self, crate::Error> {
        Self::from_config(&Config::load()?)
    }

    /// Builds a stdout logger from `config`.
    ///
    /// # Errors
    /// Unknown level or color names.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        Ok(LoggerBuilder::from_config(config)?.build())
    }
}

impl LoggerBuilder {
    /// Pre-populated builder, so callers can still attach a callback or sink.
    ///
    /// # Errors
    /// Unknown level or color names.
    pub fn from_config(config: &Config) -> Result<Self, crate::Error> {
        Ok(Self::new()
            .verbosity(config.parse_level()?)
            .options(config.logger_options()?))
    }
}
