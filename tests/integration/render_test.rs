//! Integration tests for the render command

use crate::helpers::{fixture, plain_lines, run_ansiart};

fn render(extra: &[&str]) -> (String, String, i32) {
    let art = fixture("sample.ans");
    let mut args = vec!["render", art.as_str(), "--width", "12", "--height", "3"];
    args.extend_from_slice(extra);
    run_ansiart(&args)
}

#[test]
fn render_art_only() {
    let (stdout, stderr, exit_code) = render(&[]);
    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert_eq!(
        plain_lines(&stdout),
        vec!["Hi██        ", "ok          ", "            "]
    );
}

#[test]
fn every_row_ends_in_reset() {
    let (stdout, _stderr, _exit_code) = render(&[]);
    for line in stdout.lines() {
        assert!(line.ends_with("\x1b[0m"), "{line:?}");
    }
}

#[test]
fn render_layers_overlay_and_centered_block() {
    let label = format!("{}:2:4", fixture("label.txt"));
    let center = fixture("center.txt");
    let (stdout, stderr, exit_code) = render(&[
        "--overlay",
        &label,
        "--center",
        &center,
        "--no-border-clear",
    ]);
    assert_eq!(exit_code, 0, "stderr: {stderr}");
    assert_eq!(
        plain_lines(&stdout),
        vec!["Hi██        ", "ok   !      ", "    XY      "]
    );
}

#[test]
fn centered_border_clear_wins_over_content() {
    let label = format!("{}:2:4", fixture("label.txt"));
    let center = fixture("center.txt");
    let (stdout, _stderr, exit_code) = render(&["--overlay", &label, "--center", &center]);
    assert_eq!(exit_code, 0);
    assert_eq!(
        plain_lines(&stdout),
        vec!["Hi█         ", "ok   !      ", "            "]
    );
}

#[test]
fn invalid_size_is_runtime_error() {
    let art = fixture("sample.ans");
    let (stdout, stderr, exit_code) =
        run_ansiart(&["render", &art, "--width", "0", "--height", "3"]);
    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid screen size 0x3"));
}

#[test]
fn missing_art_renders_without_background() {
    let (stdout, stderr, exit_code) =
        run_ansiart(&["render", "/nonexistent/art.ans", "--width", "4", "--height", "2"]);
    assert_eq!(exit_code, 0);
    assert_eq!(plain_lines(&stdout), vec!["    ", "    "]);
    assert!(stderr.contains("rendering without art background"));
}

#[test]
fn missing_overlay_file_fails() {
    let (_stdout, stderr, exit_code) = render(&["--overlay", "/nonexistent/block.txt:0:0"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to read text block /nonexistent/block.txt"));
}
