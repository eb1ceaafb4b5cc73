//! Shared helpers for integration tests

use std::path::PathBuf;
use std::process::Command;

use ansiart::render::strip_tokens;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture(name: &str) -> String {
    fixtures_dir().join(name).display().to_string()
}

/// Run ansiart against the small test config and capture output.
pub fn run_ansiart(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_ansiart"))
        .arg("--config")
        .arg(fixture("small.toml"))
        .args(args)
        .env_remove("ANSIART_LOG")
        .output()
        .expect("Failed to execute ansiart");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Visible text of each output line.
pub fn plain_lines(stdout: &str) -> Vec<String> {
    stdout.lines().map(strip_tokens).collect()
}
