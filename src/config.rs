//! Configuration loading and parsing.
//!
//! Reads `config.toml` from the platform config directory (or an explicit
//! path). A missing file yields the defaults; unknown keys are ignored so
//! older binaries accept newer files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::canvas::CenterBorder;

/// Art rasterization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtConfig {
    /// Grid width the art was drawn for
    pub width: usize,
    /// Grid height the art was drawn for
    pub height: usize,
    /// Drop everything after the DOS EOF marker (SAUCE metadata)
    pub strip_sauce: bool,
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 25,
            strip_sauce: true,
        }
    }
}

/// Screen size used when stdout is not a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u16,
    pub height: u16,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 25,
        }
    }
}

/// Border cleared around centered blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub border_rows: u16,
    pub border_cols: u16,
    pub trailing_rows: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let border = CenterBorder::default();
        Self {
            border_rows: border.rows,
            border_cols: border.cols,
            trailing_rows: border.trailing_rows,
        }
    }
}

impl From<LayoutConfig> for CenterBorder {
    fn from(layout: LayoutConfig) -> Self {
        Self {
            rows: layout.border_rows,
            cols: layout.border_cols,
            trailing_rows: layout.trailing_rows,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub art: ArtConfig,
    pub screen: ScreenConfig,
    pub layout: LayoutConfig,
}

impl Config {
    /// Default config file location: `<config_dir>/ansiart/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("ansiart").join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(target: "ansiart::config", path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
