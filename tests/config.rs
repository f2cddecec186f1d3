//! Tests for TOML config loading and logger construction from it.

use apputils::{Color, Config, DateFormat, Error, Logger, Verbosity};
use std::fs;
use tempfile::TempDir;

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.parse_level().unwrap(), Verbosity::Error);
    assert_eq!(config.format.date_format, "rfc3339");
    assert!(config.terminal.colors);
    assert!(config.colors.is_empty());
}

#[test]
fn missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.general.level, "error");
}

#[test]
fn load_from_file() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("apputils.toml");
    fs::write(
        &path,
        r#"
[general]
level = "Warning"

[format]
date_format = "%Y-%m-%d"

[terminal]
colors = false

[colors]
debug = "cyan"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.parse_level().unwrap(), Verbosity::Warning);

    let options = config.logger_options().unwrap();
    assert!(!options.colors_enabled());
    assert_eq!(options.format(), &DateFormat::Strftime("%Y-%m-%d".to_string()));
    assert_eq!(options.color_for(Verbosity::Debug), Color::Cyan);
    assert_eq!(options.color_for(Verbosity::Info), Color::Blue);

    let logger = Logger::from_config(&config).unwrap();
    assert_eq!(logger.verbosity(), Verbosity::Warning);
}

#[test]
fn unknown_level_is_an_error() {
    let config = Config::parse("[general]\nlevel = \"loud\"\n").unwrap();
    assert!(matches!(config.parse_level(), Err(Error::InvalidLevel(ref name)) if name == "loud"));
    assert!(Logger::from_config(&config).is_err());
}

#[test]
fn unknown_color_is_an_error() {
    let config = Config::parse("[colors]\nerror = \"mauve\"\n").unwrap();
    assert!(matches!(
        config.logger_options(),
        Err(Error::InvalidColor(ref name)) if name == "mauve"
    ));
}

#[test]
fn color_override_for_unknown_level_is_an_error() {
    let config = Config::parse("[colors]\nfatal = \"red\"\n").unwrap();
    assert!(matches!(
        config.parse_level_colors(),
        Err(Error::InvalidLevel(_))
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    assert!(matches!(
        Config::parse("[general\nlevel ="),
        Err(Error::ConfigParse(_))
    ));
}
