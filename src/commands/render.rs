//! `render` handler

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use ansiart::cli::RenderArgs;
use ansiart::{compose, ArtCache, Config, FrameSpec, Overlay};

/// Composite the art and text blocks and write the frame to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &RenderArgs, config: &Config) -> Result<()> {
    let (width, height) = screen_size(args, config);

    let overlays = args
        .overlays
        .iter()
        .map(|o| Ok(Overlay::new(read_block(&o.file)?, o.row, o.col)))
        .collect::<Result<Vec<_>>>()?;
    let centered = args.center.as_deref().map(read_block).transpose()?;

    let spec = FrameSpec {
        overlays,
        centered,
        clear_center_border: !args.no_border_clear,
        center_border: config.layout.into(),
        ..Default::default()
    };

    let art = ArtCache::new(&args.art, config.art.clone());
    let frame = compose(width, height, art.get(), &spec)?;
    println!("{frame}");
    Ok(())
}

/// Explicit flags win, then the attached terminal, then the config.
fn screen_size(args: &RenderArgs, config: &Config) -> (i32, i32) {
    let detected = terminal_size::terminal_size()
        .map(|(w, h)| (i32::from(w.0), i32::from(h.0)))
        .unwrap_or((i32::from(config.screen.width), i32::from(config.screen.height)));
    tracing::debug!(target: "ansiart::render", width = detected.0, height = detected.1, "screen size");
    (
        args.width.unwrap_or(detected.0),
        args.height.unwrap_or(detected.1),
    )
}

fn read_block(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read text block {}", path.display()))
}
