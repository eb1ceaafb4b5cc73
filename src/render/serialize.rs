//! Cell grid serialization.
//!
//! Turns a rasterized grid back into styled lines. Runs of cells that share a
//! style get a single style change; every row ends with a reset so nothing
//! bleeds into whatever is placed after it.

use super::ansi::{style_change, RESET};
use crate::terminal::{Cell, Grid, Style};

/// Serialize one row of cells.
pub fn serialize_row(row: &[Cell]) -> String {
    let mut output = String::with_capacity(row.len() * 2);
    let mut current_style = Style::default();

    for cell in row {
        if cell.style != current_style {
            style_change(&cell.style, &mut output);
            current_style = cell.style;
        }
        output.push(cell.char);
    }

    output.push_str(RESET);
    output
}

/// Serialize every row of a grid, top to bottom.
pub fn serialize_lines(grid: &Grid) -> Vec<String> {
    grid.rows().map(serialize_row).collect()
}

/// Serialize a grid as one block, rows joined by LF.
pub fn serialize(grid: &Grid) -> String {
    serialize_lines(grid).join("\n")
}
