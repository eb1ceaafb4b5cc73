//! Virtual terminal rasterizer module.
//!
//! Provides a VTE-based fixed-size buffer for turning decoded art text into a
//! grid of styled cells. Only the sequences that legacy art relies on are
//! interpreted (SGR, CUP, ED, EL); everything else is consumed and ignored.

mod buffer;
pub mod handlers;
mod types;

#[cfg(test)]
mod tests;

pub use buffer::{rasterize, Cursor, TerminalBuffer};
pub use types::{Cell, Color, Grid, Style};
