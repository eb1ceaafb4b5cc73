//! ansiart - legacy ANSI art rasterizer and styled text compositor.
//!
//! Decodes CP437 art files, rasterizes the escape sequences they contain into
//! a fixed cell grid, and layers styled text blocks onto a terminal-sized
//! canvas without letting styles bleed across block edges.
//!
//! Data flows one way: bytes -> [`codepage`] -> [`terminal`] grid ->
//! [`render`] lines -> [`canvas`] -> frame string.

pub mod art;
pub mod canvas;
pub mod cli;
pub mod codepage;
pub mod config;
pub mod frame;
pub mod render;
pub mod terminal;

pub use art::{ArtBackground, ArtCache, ArtError};
pub use canvas::{Canvas, CanvasError, CenterBorder};
pub use config::Config;
pub use frame::{compose, FrameSpec, Overlay};
