//! Tests for ANSI color attributes.

use apputils::Color;
use apputils::fmt::colorize;

#[test]
fn fg_ansi_codes() {
    assert_eq!(Color::Red.fg_ansi(), "\x1b[31m");
    assert_eq!(Color::Green.fg_ansi(), "\x1b[32m");
    assert_eq!(Color::Magenta.fg_ansi(), "\x1b[35m");
}

#[test]
fn colorize_wraps_with_reset() {
    assert_eq!(colorize("Info", Color::Blue), "\x1b[34mInfo\x1b[0m");
}

#[test]
fn parse_names() {
    assert_eq!("cyan".parse::<Color>().unwrap(), Color::Cyan);
    assert_eq!(" YELLOW ".parse::<Color>().unwrap(), Color::Yellow);
    assert_eq!("purple".parse::<Color>().unwrap(), Color::Magenta);
}

#[test]
fn parse_unknown_name_fails() {
    let err = "mauve".parse::<Color>().unwrap_err();
    assert!(matches!(err, apputils::Error::InvalidColor(ref name) if name == "mauve"));
}
