//! ANSI escape code conversion utilities.
//!
//! Converts cell styles to SGR tokens. A style change is always written as a
//! full reset followed by one combined token holding only the non-default
//! fields, so a token never depends on what came before it.

use crate::terminal::{Color, Style};

/// Full SGR reset.
pub const RESET: &str = "\x1b[0m";

/// SGR code for a foreground color, or `None` for the default color.
pub fn fg_code(color: Color) -> Option<u16> {
    color
        .index()
        .map(|idx| if idx < 8 { 30 + idx } else { 90 + idx - 8 })
}

/// SGR code for a background color, or `None` for the default color.
pub fn bg_code(color: Color) -> Option<u16> {
    color
        .index()
        .map(|idx| if idx < 8 { 40 + idx } else { 100 + idx - 8 })
}

/// Append a single SGR token for the non-default fields of `style`.
///
/// Parameter order is bold, foreground, background.
///
/// # Arguments
/// * `style` - The style to encode
/// * `buf` - The output buffer to append to
///
/// # Returns
/// `true` if a token was appended, `false` if the style is default
pub fn style_to_ansi(style: &Style, buf: &mut String) -> bool {
    let mut params: Vec<u16> = Vec::with_capacity(3);
    if style.bold {
        params.push(1);
    }
    params.extend(fg_code(style.fg));
    params.extend(bg_code(style.bg));

    if params.is_empty() {
        return false;
    }

    buf.push_str("\x1b[");
    for (i, p) in params.iter().enumerate() {
        if i > 0 {
            buf.push(';');
        }
        buf.push_str(&p.to_string());
    }
    buf.push('m');
    true
}

/// Append a reset followed by the minimal token for `style`.
pub fn style_change(style: &Style, buf: &mut String) {
    buf.push_str(RESET);
    style_to_ansi(style, buf);
}
