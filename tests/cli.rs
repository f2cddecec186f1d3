//! Tests for the `apputils` binary, run against a config path that doesn't exist.

use std::process::Command;
use tempfile::TempDir;

fn run(args: &[&str]) -> std::process::Output {
    // Point at a file that doesn't exist so the user's real config never leaks in.
    let tmp_dir = TempDir::new().unwrap();
    let config = tmp_dir.path().join("none.toml");
    Command::new(env!("CARGO_BIN_EXE_apputils"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .expect("failed to run apputils")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn log_prints_line_with_caller() {
    let output = run(&["--no-color", "--level", "debug", "log", "info", "hello", "world"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains(" | Info             | hello world (apputils::cli::commands::log::cmd_log)\n"));
}

#[test]
fn default_threshold_filters_debug_but_not_trace() {
    let output = run(&["--no-color", "log", "debug", "quiet"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let output = run(&["--no-color", "log", "TRACE", "loud"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("| Trace "));
}

#[test]
fn message_level_does_not_become_threshold() {
    let output = run(&["--no-color", "log", "info", "x"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let output = run(&["--no-color", "--level", "error", "log", "warning", "x"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn level_flag_after_subcommand_sets_threshold() {
    let output = run(&["--no-color", "log", "info", "x", "--level", "info"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("| Info             | x ("));
}

#[test]
fn unknown_level_is_fatal() {
    let output = run(&["log", "bogus", "hi"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown log verbosity bogus"));
}

#[test]
fn unknown_level_flag_is_fatal() {
    let output = run(&["--level", "loud", "levels"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn levels_lists_threshold() {
    let output = run(&["--no-color", "levels"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("0  Debug\n"));
    assert!(out.contains("3  Error  (threshold)\n"));
    assert!(out.contains("4  Trace\n"));
}

#[test]
fn sql_batch() {
    let output = run(&["sql", "batch", "2", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(?,?), (?,?)\n");
}

#[test]
fn sql_columns_exclude_and_include() {
    let output = run(&["sql", "columns", "a", "b", "c", "--exclude", "b"]);
    assert_eq!(stdout(&output), "a,c\n");

    let output = run(&["sql", "columns", "a", "b", "c", "--include", "c,b"]);
    assert_eq!(stdout(&output), "b,c\n");
}

#[test]
fn sql_update() {
    let output = run(&["sql", "update", "x", "y"]);
    assert_eq!(stdout(&output), "x = ?,y = ?\n");
}
