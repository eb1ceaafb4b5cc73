//! SGR (Select Graphic Rendition) handler.
//!
//! Handles CSI m sequence for text styling:
//! - Reset (0), bold on (1), bold off (22)
//! - Standard foreground/background colors (30-37, 40-47)
//! - Default foreground/background (39, 49)
//! - Bright foreground/background colors (90-97, 100-107)
//!
//! Extended colors (38;5;n, 38;2;r;g;b and the 48 forms) are skipped
//! over so their arguments are not misread as standalone codes. Every
//! other code is ignored.

use crate::terminal::types::{Color, Style};

/// Fold a list of SGR codes into a style.
///
/// An empty list is a reset, same as `0`.
pub fn apply_sgr(style: Style, codes: &[u16]) -> Style {
    if codes.is_empty() {
        return Style::default();
    }

    let mut style = style;
    let mut iter = codes.iter().copied();
    while let Some(code) = iter.next() {
        match code {
            0 => style = Style::default(),
            1 => style.bold = true,
            22 => style.bold = false,
            30..=37 => style.fg = Color::from_index(code - 30).unwrap_or_default(),
            39 => style.fg = Color::Default,
            40..=47 => style.bg = Color::from_index(code - 40).unwrap_or_default(),
            49 => style.bg = Color::Default,
            90..=97 => style.fg = Color::from_index(code - 90 + 8).unwrap_or_default(),
            100..=107 => style.bg = Color::from_index(code - 100 + 8).unwrap_or_default(),
            38 | 48 => {
                let skip = match iter.next() {
                    Some(5) => 1,
                    Some(2) => 3,
                    _ => 0,
                };
                for _ in 0..skip {
                    iter.next();
                }
                tracing::trace!(target: "ansiart::terminal", code, "ignored extended color");
            }
            _ => tracing::trace!(target: "ansiart::terminal", code, "ignored SGR code"),
        }
    }
    style
}
