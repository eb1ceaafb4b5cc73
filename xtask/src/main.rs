//! Developer tasks: `cargo run -p xtask -- man [OUT_DIR]`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use ansiart::cli::Cli;

#[derive(Parser)]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for ansiart and its subcommands
    Man {
        /// Output directory
        #[arg(default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man(&out_dir),
    }
}

fn generate_man(out_dir: &std::path::Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;
    let cmd = Cli::command();
    clap_mangen::generate_to(cmd, out_dir).context("Failed to write man pages")?;
    println!("Man pages written to {}", out_dir.display());
    Ok(())
}
