//! Placement geometry for the compositor.

/// A rectangle in screen cells. Coordinates may be negative or extend past
/// the screen; consumers clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub row: i64,
    pub col: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn new(row: i64, col: i64, width: i64, height: i64) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// Grow the rectangle by `rows` above and below, `cols` left and right.
    pub fn inflate(&self, rows: i64, cols: i64) -> Self {
        Self {
            row: self.row - rows,
            col: self.col - cols,
            width: self.width + 2 * cols,
            height: self.height + 2 * rows,
        }
    }

    /// Row just below the rectangle.
    pub fn bottom(&self) -> i64 {
        self.row + self.height
    }
}

/// Border cleared around a centered block before it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterBorder {
    /// Rows cleared above and below the block
    pub rows: u16,
    /// Columns cleared left and right of the block
    pub cols: u16,
    /// Extra full-width rows cleared below the bottom border
    pub trailing_rows: u16,
}

impl Default for CenterBorder {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 2,
            trailing_rows: 1,
        }
    }
}

/// Offset that centers `inner` inside `outer`, never negative.
///
/// # Arguments
/// * `outer` - Available space (screen width or height)
/// * `inner` - Size of the block being centered
pub fn center_offset(outer: i64, inner: i64) -> i64 {
    ((outer - inner) / 2).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_offset_centers() {
        // (120 - 47) / 2 = 36
        assert_eq!(center_offset(120, 47), 36);
        assert_eq!(center_offset(25, 5), 10);
    }

    #[test]
    fn center_offset_handles_oversized_block() {
        assert_eq!(center_offset(40, 47), 0);
        assert_eq!(center_offset(10, 100), 0);
    }

    #[test]
    fn inflate_grows_every_side() {
        let rect = Rect::new(5, 10, 4, 2).inflate(1, 2);
        assert_eq!(rect, Rect::new(4, 8, 8, 4));
        assert_eq!(rect.bottom(), 8);
    }

    #[test]
    fn default_border() {
        let border = CenterBorder::default();
        assert_eq!((border.rows, border.cols, border.trailing_rows), (1, 2, 1));
    }
}
