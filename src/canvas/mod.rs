//! Screen buffer compositor.
//!
//! A [`Canvas`] holds one frame as `height` styled rows, each exactly `width`
//! visible columns wide. Blocks of styled text are layered onto it in call
//! order; later calls win wherever they overlap. Out-of-range geometry is
//! clamped or skipped, never an error.

mod error;
mod layout;

pub use error::CanvasError;
pub use layout::{center_offset, CenterBorder, Rect};

use crate::render::{active_style, block_width, split_columns, strip_tokens, truncate, visual_width, RESET};

const TRACE_TARGET: &str = "ansiart::canvas";

/// One frame's worth of styled rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    rows: Vec<String>,
    border: CenterBorder,
}

impl Canvas {
    /// Create a blank canvas.
    ///
    /// # Errors
    /// Returns [`CanvasError::InvalidSize`] if either dimension is zero or
    /// negative.
    pub fn new(width: i32, height: i32) -> Result<Self, CanvasError> {
        let invalid = || CanvasError::InvalidSize { width, height };
        let w = usize::try_from(width).ok().filter(|&w| w > 0).ok_or_else(invalid)?;
        let h = usize::try_from(height).ok().filter(|&h| h > 0).ok_or_else(invalid)?;
        Ok(Self {
            width: w,
            height: h,
            rows: vec![" ".repeat(w); h],
            border: CenterBorder::default(),
        })
    }

    /// Use `border` when [`Canvas::place_centered`] clears around a block.
    pub fn with_border(mut self, border: CenterBorder) -> Self {
        self.border = border;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Styled content of a row.
    pub fn row(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(String::as_str)
    }

    /// Visible characters of a row, tokens removed.
    pub fn plain_row(&self, row: usize) -> Option<String> {
        self.row(row).map(strip_tokens)
    }

    /// Place a multi-line block with its top-left corner at `(row, col)`.
    ///
    /// At `col <= 0` each affected row is replaced outright and padded to
    /// the screen width. Otherwise only the columns the line covers change;
    /// the rest of the row keeps its content and styling.
    pub fn place_block(&mut self, text: &str, row: i32, col: i32) {
        for (i, line) in text.lines().enumerate() {
            self.place_line(line, i64::from(row) + i as i64, i64::from(col));
        }
    }

    /// Place art lines, each cut to at most `max_width` columns first.
    pub fn place_art_block<S: AsRef<str>>(&mut self, lines: &[S], row: i32, col: i32, max_width: usize) {
        for (i, line) in lines.iter().enumerate() {
            let line = truncate(line.as_ref(), max_width);
            self.place_line(&line, i64::from(row) + i as i64, i64::from(col));
        }
    }

    /// Blank the `width x height` rectangle at `(row, col)` with default-styled
    /// spaces. Columns outside the rectangle are untouched.
    pub fn clear_rect(&mut self, row: i32, col: i32, width: i32, height: i32) {
        self.clear(Rect::new(
            i64::from(row),
            i64::from(col),
            i64::from(width),
            i64::from(height),
        ));
    }

    /// Place a block in the middle of the screen.
    ///
    /// With `clear_border`, the canvas border area around the block (and the
    /// trailing full-width rows below it) is blanked first.
    pub fn place_centered(&mut self, text: &str, clear_border: bool) {
        let rect = self.block_rect(text, 0, 0);
        if rect.height == 0 {
            return;
        }
        let row = center_offset(self.height as i64, rect.height);
        let col = center_offset(self.width as i64, rect.width);
        let rect = Rect { row, col, ..rect };

        if clear_border {
            let border = self.border;
            let cleared = rect.inflate(i64::from(border.rows), i64::from(border.cols));
            self.clear(cleared);
            self.clear(Rect::new(
                cleared.bottom(),
                0,
                self.width as i64,
                i64::from(border.trailing_rows),
            ));
        }

        for (i, line) in text.lines().enumerate() {
            self.place_line(line, row + i as i64, col);
        }
    }

    /// Like [`Canvas::place_block`], after blanking a rectangle `border`
    /// cells larger than the block on every side.
    pub fn place_with_border_clear(&mut self, text: &str, row: i32, col: i32, border: i32) {
        let rect = self.block_rect(text, row, col);
        if rect.height == 0 {
            return;
        }
        let border = i64::from(border.max(0));
        self.clear(rect.inflate(border, border));
        self.place_block(text, row, col);
    }

    /// The finished frame: rows joined by LF, each ending in a reset.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows.iter().map(|r| r.len() + RESET.len() + 1).sum());
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(row);
            out.push_str(RESET);
        }
        out
    }

    fn block_rect(&self, text: &str, row: i32, col: i32) -> Rect {
        Rect::new(
            i64::from(row),
            i64::from(col),
            block_width(text) as i64,
            text.lines().count() as i64,
        )
    }

    fn row_index(&self, row: i64) -> Option<usize> {
        usize::try_from(row).ok().filter(|&r| r < self.height)
    }

    fn place_line(&mut self, line: &str, row: i64, col: i64) {
        let Some(r) = self.row_index(row) else {
            tracing::trace!(target: TRACE_TARGET, row, "skipped off-screen row");
            return;
        };

        if col <= 0 {
            self.rows[r] = self.full_row(line);
            return;
        }

        let start = col as usize;
        if start >= self.width {
            return;
        }
        let line = truncate(line, self.width - start);
        let width = visual_width(&line);
        if width == 0 {
            return;
        }
        self.rows[r] = splice(&self.rows[r], start, start + width, &line);
    }

    fn clear(&mut self, rect: Rect) {
        let c0 = rect.col.clamp(0, self.width as i64) as usize;
        let c1 = (rect.col + rect.width).clamp(0, self.width as i64) as usize;
        if c0 >= c1 {
            return;
        }
        let blank = " ".repeat(c1 - c0);
        for row in rect.row.max(0)..rect.bottom() {
            let Some(r) = self.row_index(row) else {
                break;
            };
            self.rows[r] = splice(&self.rows[r], c0, c1, &blank);
        }
    }

    fn full_row(&self, line: &str) -> String {
        let line = truncate(line, self.width);
        let pad = self.width - visual_width(&line);
        let mut out = String::with_capacity(line.len() + RESET.len() + pad);
        out.push_str(&line);
        out.push_str(RESET);
        out.push_str(&" ".repeat(pad));
        out
    }
}

/// Replace columns `[start, end)` of `existing` with `content`.
///
/// `content` is drawn from a reset state, and the style that was in effect
/// at `end` is re-established before the untouched right part.
fn splice(existing: &str, start: usize, end: usize, content: &str) -> String {
    let parts = split_columns(existing, start, end);
    let mut prefix = String::with_capacity(parts.left.len() + parts.mid.len());
    prefix.push_str(&parts.left);
    prefix.push_str(&parts.mid);
    let restore = active_style(&prefix);

    let mut out = String::with_capacity(existing.len() + content.len() + 2 * RESET.len());
    out.push_str(&parts.left);
    out.push_str(RESET);
    out.push_str(content);
    out.push_str(RESET);
    out.push_str(&restore);
    out.push_str(&parts.right);
    out
}
