//! Integration tests for the decode command

use crate::helpers::{fixture, plain_lines, run_ansiart};

#[test]
fn decode_prints_configured_grid() {
    let (stdout, stderr, exit_code) = run_ansiart(&["decode", &fixture("sample.ans")]);
    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "\x1b[0m\x1b[1;33mHi██\x1b[0m      \x1b[0m\n\
         \x1b[0m\x1b[1;33;44mok        \x1b[0m\n          \x1b[0m\n"
    );
}

#[test]
fn decode_strips_sauce_record() {
    let (stdout, _stderr, _exit_code) = run_ansiart(&["decode", &fixture("sample.ans")]);
    assert!(!stdout.contains("SAUCE"));
    assert_eq!(plain_lines(&stdout), vec!["Hi██      ", "ok        ", "          "]);
}

#[test]
fn decode_missing_file_fails() {
    let (stdout, stderr, exit_code) = run_ansiart(&["decode", "/nonexistent/art.ans"]);
    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Failed to read art file /nonexistent/art.ans"));
}
