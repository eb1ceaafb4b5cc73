//! `decode` and `width` handlers

use std::path::Path;

use anyhow::Result;

use ansiart::config::ArtConfig;
use ansiart::render::visual_width;
use ansiart::ArtBackground;

/// Print the rasterized grid of an art file, one styled line per row.
#[cfg(not(tarpaulin_include))]
pub fn handle_decode(path: &Path, config: &ArtConfig) -> Result<()> {
    let art = ArtBackground::load(path, config)?;
    println!("{}", art.lines().join("\n"));
    Ok(())
}

/// Print the visible width of `text`.
#[cfg(not(tarpaulin_include))]
pub fn handle_width(text: &str) {
    println!("{}", visual_width(text));
}
