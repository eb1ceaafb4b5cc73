//! Terminal data types.
//!
//! Contains the core data structures for representing rasterized art:
//! - Color: the 16 standard ANSI colors plus "unset"
//! - Style: foreground, background and bold flag
//! - Cell: a single character with its style
//! - Grid: a fixed `rows x cols` array of cells

/// ANSI color codes.
///
/// Only the standard 8 colors and their bright variants are representable.
/// `Default` means "unset" and lets the terminal pick its own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    const NORMAL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    const BRIGHT: [Color; 8] = [
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Map a palette index (0-7 normal, 8-15 bright) to a color.
    pub fn from_index(idx: u16) -> Option<Self> {
        match idx {
            0..=7 => Some(Self::NORMAL[idx as usize]),
            8..=15 => Some(Self::BRIGHT[(idx - 8) as usize]),
            _ => None,
        }
    }

    /// Palette index of this color, or `None` for `Default`.
    pub fn index(&self) -> Option<u16> {
        let idx = match self {
            Color::Default => return None,
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
            Color::BrightBlack => 8,
            Color::BrightRed => 9,
            Color::BrightGreen => 10,
            Color::BrightYellow => 11,
            Color::BrightBlue => 12,
            Color::BrightMagenta => 13,
            Color::BrightCyan => 14,
            Color::BrightWhite => 15,
        };
        Some(idx)
    }
}

/// Text attributes carried by every cell.
///
/// Two styles are equal iff all three fields match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
}

impl Style {
    /// Whether this is the default (all unset) style.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A single character with its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub style: Style,
}

impl Cell {
    pub fn new(char: char, style: Style) -> Self {
        Self { char, style }
    }

    /// A blank cell carrying the given style.
    pub fn blank(style: Style) -> Self {
        Self::new(' ', style)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Style::default())
    }
}

/// A fixed-size grid of cells, `height` rows of `width` cells each.
///
/// Rows never grow or shrink after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid filled with default-styled spaces.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Cell::default(); width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get a row by index.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Iterate over all rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Get a cell, or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Set a cell. Out-of-bounds writes are dropped.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(slot) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *slot = cell;
        }
    }

    /// Fill `[from, to)` of a row with `cell`, clamped to the row width.
    pub fn fill_row(&mut self, row: usize, from: usize, to: usize, cell: Cell) {
        if let Some(r) = self.rows.get_mut(row) {
            let to = to.min(r.len());
            if from < to {
                r[from..to].fill(cell);
            }
        }
    }

    /// Fill every cell of the grid with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        for r in &mut self.rows {
            r.fill(cell);
        }
    }

    /// Plain text of a row, without any styling.
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.row(row).map(|cells| cells.iter().map(|c| c.char).collect())
    }
}
