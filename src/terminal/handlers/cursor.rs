//! Cursor movement handlers.
//!
//! Handles CSI sequences:
//! - H/f: Cursor position

use crate::terminal::buffer::TerminalBuffer;

impl TerminalBuffer {
    /// CUP: move to the 1-based `(row, col)` given in `params`.
    ///
    /// Missing or zero parameters default to 1. The cursor is not clamped to
    /// the grid here; writes sort out wrapping and discarding.
    pub(crate) fn cursor_position(&mut self, params: &[u16]) {
        let arg = |i: usize| -> usize {
            params
                .get(i)
                .copied()
                .filter(|&v| v != 0)
                .map_or(1, usize::from)
        };
        self.cursor.row = arg(0) - 1;
        self.cursor.col = arg(1) - 1;
    }
}
