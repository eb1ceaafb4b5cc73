//! Erase handlers.
//!
//! Handles CSI sequences:
//! - J: Erase display (only mode 2)
//! - K: Erase line (modes 0, 1, 2)

use crate::terminal::buffer::{Cursor, TerminalBuffer};
use crate::terminal::types::Cell;

impl TerminalBuffer {
    /// ED: mode 2 blanks the whole grid with the current style and homes
    /// the cursor. Other modes leave the buffer untouched.
    pub(crate) fn erase_display(&mut self, mode: u16) {
        if mode != 2 {
            tracing::trace!(target: "ansiart::terminal", mode, "ignored erase display mode");
            return;
        }
        self.grid.fill(Cell::blank(self.style));
        self.cursor = Cursor::default();
    }

    /// EL: blank part of the cursor row with the current style.
    ///
    /// Mode 0 clears cursor to end of row, 1 clears start of row through the
    /// cursor, 2 clears the whole row. The cursor does not move.
    pub(crate) fn erase_line(&mut self, mode: u16) {
        let row = self.cursor.row;
        let col = self.cursor.col;
        let width = self.width();
        let blank = Cell::blank(self.style);
        match mode {
            0 => self.grid.fill_row(row, col, width, blank),
            1 => self.grid.fill_row(row, 0, col.saturating_add(1), blank),
            2 => self.grid.fill_row(row, 0, width, blank),
            _ => tracing::trace!(target: "ansiart::terminal", mode, "ignored erase line mode"),
        }
    }
}
