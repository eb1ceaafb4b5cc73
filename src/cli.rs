//! Command-line interface definitions.
//!
//! Kept in the library so `xtask` can build man pages from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Render legacy ANSI art and styled text blocks to the terminal
#[derive(Debug, Parser)]
#[command(name = "ansiart", version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Composite an art background and text blocks into one frame
    Render(RenderArgs),

    /// Rasterize an art file and print its styled grid
    Decode {
        /// CP437 art file
        file: PathBuf,
    },

    /// Print the visible column width of a styled line
    Width {
        /// Text, possibly containing escape sequences
        text: String,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// CP437 art file used as the background
    pub art: PathBuf,

    /// Screen width (defaults to the terminal width)
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i32>,

    /// Screen height (defaults to the terminal height)
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i32>,

    /// Text file to place at ROW,COL (repeatable, drawn in order)
    #[arg(long = "overlay", value_name = "FILE:ROW:COL", value_parser = parse_overlay)]
    pub overlays: Vec<OverlayArg>,

    /// Text file to center on top of everything else
    #[arg(long, value_name = "FILE")]
    pub center: Option<PathBuf>,

    /// Do not clear a border around the centered block
    #[arg(long)]
    pub no_border_clear: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
}

/// An `--overlay FILE:ROW:COL` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayArg {
    pub file: PathBuf,
    pub row: i32,
    pub col: i32,
}

/// Parse `FILE:ROW:COL`. The file part may itself contain colons.
pub fn parse_overlay(s: &str) -> Result<OverlayArg, String> {
    let mut parts = s.rsplitn(3, ':');
    let col = parts.next();
    let row = parts.next();
    let file = parts.next();
    match (file, row, col) {
        (Some(file), Some(row), Some(col)) if !file.is_empty() => {
            let row = row
                .trim()
                .parse()
                .map_err(|_| format!("invalid row '{row}' in '{s}'"))?;
            let col = col
                .trim()
                .parse()
                .map_err(|_| format!("invalid column '{col}' in '{s}'"))?;
            Ok(OverlayArg {
                file: PathBuf::from(file),
                row,
                col,
            })
        }
        _ => Err(format!("expected FILE:ROW:COL, got '{s}'")),
    }
}
