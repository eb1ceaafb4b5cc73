//! Fixed-size terminal buffer fed by a VTE parser.
//!
//! The buffer owns the cell grid, the cursor and the current style register.
//! Text is pushed through [`TerminalBuffer::process`], which drives a
//! `vte::Parser` and routes recognized sequences to the handlers in
//! [`super::handlers`].

use vte::{Params, Parser, Perform};

use super::types::{Cell, Grid, Style};

const TRACE_TARGET: &str = "ansiart::terminal";

/// Cursor position inside the grid (0-indexed).
///
/// The cursor may sit past the right or bottom edge. Writes resolve that
/// lazily: past the right edge wraps, past the bottom edge is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Rasterization target: a grid, a cursor and the style register.
#[derive(Debug, Clone)]
pub struct TerminalBuffer {
    pub(super) grid: Grid,
    pub(super) cursor: Cursor,
    pub(super) style: Style,
}

impl TerminalBuffer {
    /// Create a blank buffer of `width x height` cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            cursor: Cursor::default(),
            style: Style::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Current cursor row, clamped to the grid.
    pub fn cursor_row(&self) -> usize {
        self.cursor.row.min(self.height().saturating_sub(1))
    }

    /// Current cursor column, clamped to the grid.
    pub fn cursor_col(&self) -> usize {
        self.cursor.col.min(self.width().saturating_sub(1))
    }

    /// The style that the next written character will carry.
    pub fn current_style(&self) -> Style {
        self.style
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Feed text (possibly containing escape sequences) into the buffer.
    ///
    /// Unterminated sequences at the end of `text` are dropped along with
    /// the parser.
    pub fn process(&mut self, text: &str) {
        let mut parser = Parser::new();
        parser.advance(self, text.as_bytes());
    }

    /// Write one printable character at the cursor and advance.
    fn write_char(&mut self, c: char) {
        if self.cursor.col >= self.width() {
            self.line_feed();
        }
        if self.cursor.row >= self.height() {
            return;
        }
        self.grid
            .set(self.cursor.row, self.cursor.col, Cell::new(c, self.style));
        self.cursor.col += 1;
    }

    fn line_feed(&mut self) {
        // Capped at height: everything at or past it is discarded anyway.
        self.cursor.row = (self.cursor.row + 1).min(self.height());
        self.cursor.col = 0;
    }

    fn carriage_return(&mut self) {
        self.cursor.col = 0;
    }
}

impl Perform for TerminalBuffer {
    fn print(&mut self, c: char) {
        self.write_char(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' => self.line_feed(),
            b'\r' => self.carriage_return(),
            _ => tracing::trace!(target: TRACE_TARGET, byte, "ignored control byte"),
        }
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        if ignore || !intermediates.is_empty() {
            tracing::trace!(target: TRACE_TARGET, %action, "ignored malformed CSI sequence");
            return;
        }

        match action {
            'm' => {
                let codes: Vec<u16> = params.iter().flat_map(|p| p.iter().copied()).collect();
                self.style = super::handlers::style::apply_sgr(self.style, &codes);
            }
            'H' | 'f' => {
                let args: Vec<u16> = params.iter().map(|p| p[0]).collect();
                self.cursor_position(&args);
            }
            'J' => {
                let mode = params.iter().next().map_or(0, |p| p[0]);
                self.erase_display(mode);
            }
            'K' => {
                let mode = params.iter().next().map_or(0, |p| p[0]);
                self.erase_line(mode);
            }
            _ => {
                tracing::trace!(target: TRACE_TARGET, %action, "ignored CSI sequence");
            }
        }
    }

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, byte: u8) {
        tracing::trace!(target: TRACE_TARGET, byte, "ignored ESC sequence");
    }

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {
        tracing::trace!(target: TRACE_TARGET, "ignored OSC sequence");
    }
}

/// Rasterize text into a fresh `width x height` grid.
///
/// Pure: the cursor and style register live only for the duration of the
/// call. Malformed or unsupported sequences degrade to missing styling.
pub fn rasterize(text: &str, width: usize, height: usize) -> Grid {
    let mut buffer = TerminalBuffer::new(width, height);
    buffer.process(text);
    buffer.into_grid()
}
