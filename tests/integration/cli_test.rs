//! Integration tests for general CLI behavior

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{fixture, run_ansiart};

fn ansiart() -> Command {
    let mut cmd = Command::cargo_bin("ansiart").expect("binary should build");
    cmd.env_remove("ANSIART_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    ansiart()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("decode"))
        .stdout(predicate::str::contains("width"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    ansiart().arg("frobnicate").assert().code(2);
}

#[test]
fn bad_overlay_argument_is_usage_error() {
    ansiart()
        .args(["render", "art.ans", "--overlay", "nocoords.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("FILE:ROW:COL"));
}

#[test]
fn width_ignores_escape_sequences() {
    let (stdout, _stderr, exit_code) = run_ansiart(&["width", "\x1b[1;31mab\x1b[0mc"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "3");
}

#[test]
fn config_show_prints_effective_config() {
    let (stdout, _stderr, exit_code) = run_ansiart(&["config", "show"]);
    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[art]"));
    assert!(stdout.contains("width = 10"));
    assert!(stdout.contains("strip_sauce = true"));
    assert!(stdout.contains("border_cols = 2"));
}

#[test]
fn invalid_config_is_runtime_error_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[screen]\nwidth = -4\n").unwrap();

    ansiart()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(path.display().to_string()));
}

#[test]
fn missing_config_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    ansiart()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("width = 80"));
}

#[test]
fn completions_generate_for_bash() {
    ansiart()
        .args(["--config", &fixture("small.toml"), "completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ansiart"));
}
