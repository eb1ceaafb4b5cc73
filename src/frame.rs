//! Frame composition.
//!
//! A [`FrameSpec`] lists what goes on screen for one frame. [`compose`]
//! builds a fresh canvas and layers it in a fixed order: art background,
//! then content overlays in list order, then the centered block on top.

use crate::art::ArtBackground;
use crate::canvas::{Canvas, CanvasError, CenterBorder};

/// A styled text block placed at a fixed position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub text: String,
    pub row: i32,
    pub col: i32,
    /// Clear this many cells around the block before drawing it
    pub border: Option<i32>,
}

impl Overlay {
    pub fn new(text: impl Into<String>, row: i32, col: i32) -> Self {
        Self {
            text: text.into(),
            row,
            col,
            border: None,
        }
    }

    pub fn with_border(mut self, border: i32) -> Self {
        self.border = Some(border);
        self
    }
}

/// Everything drawn in one frame, besides the art itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameSpec {
    /// Row of the art background's top-left corner
    pub art_row: i32,
    /// Column of the art background's top-left corner
    pub art_col: i32,
    /// Content layers, drawn in order
    pub overlays: Vec<Overlay>,
    /// Chrome drawn last, centered on screen
    pub centered: Option<String>,
    /// Clear a border around the centered block
    pub clear_center_border: bool,
    pub center_border: CenterBorder,
}

/// Composite one frame into the string to write to the terminal.
///
/// # Errors
/// Returns [`CanvasError::InvalidSize`] for a zero or negative screen size.
pub fn compose(
    width: i32,
    height: i32,
    art: Option<&ArtBackground>,
    spec: &FrameSpec,
) -> Result<String, CanvasError> {
    let mut canvas = Canvas::new(width, height)?.with_border(spec.center_border);

    if let Some(art) = art {
        canvas.place_art_block(art.lines(), spec.art_row, spec.art_col, art.width());
    }

    for overlay in &spec.overlays {
        match overlay.border {
            Some(border) => {
                canvas.place_with_border_clear(&overlay.text, overlay.row, overlay.col, border);
            }
            None => canvas.place_block(&overlay.text, overlay.row, overlay.col),
        }
    }

    if let Some(text) = &spec.centered {
        canvas.place_centered(text, spec.clear_center_border);
    }

    Ok(canvas.render())
}
