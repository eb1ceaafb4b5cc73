//! Rasterizer tests.
//!
//! Handler-specific tests live next to each handler; these cover
//! character placement and full sequence replay.

use super::*;

fn red() -> Style {
    Style {
        fg: Color::Red,
        ..Default::default()
    }
}

// Character placement

#[test]
fn plain_text_fills_first_row() {
    let grid = rasterize("hi", 4, 2);
    assert_eq!(grid.row_text(0).unwrap(), "hi  ");
    assert_eq!(grid.row_text(1).unwrap(), "    ");
}

#[test]
fn line_feed_moves_to_next_row_start() {
    let grid = rasterize("ab\ncd", 3, 2);
    assert_eq!(grid.row_text(0).unwrap(), "ab ");
    assert_eq!(grid.row_text(1).unwrap(), "cd ");
}

#[test]
fn carriage_return_only_resets_column() {
    let grid = rasterize("abc\rX", 3, 2);
    assert_eq!(grid.row_text(0).unwrap(), "Xbc");
    assert_eq!(grid.row_text(1).unwrap(), "   ");
}

#[test]
fn writes_past_right_edge_wrap() {
    let grid = rasterize("abcde", 3, 2);
    assert_eq!(grid.row_text(0).unwrap(), "abc");
    assert_eq!(grid.row_text(1).unwrap(), "de ");
}

#[test]
fn exact_width_then_newline_does_not_skip_a_row() {
    let grid = rasterize("abc\ndef", 3, 2);
    assert_eq!(grid.row_text(1).unwrap(), "def");
}

#[test]
fn writes_past_bottom_edge_are_discarded() {
    let grid = rasterize("ab\ncd\nef\ngh", 2, 2);
    assert_eq!(grid.height(), 2);
    assert_eq!(grid.row_text(0).unwrap(), "ab");
    assert_eq!(grid.row_text(1).unwrap(), "cd");
}

#[test]
fn multibyte_characters_take_one_cell() {
    let grid = rasterize("░▒▓█", 4, 1);
    assert_eq!(grid.row_text(0).unwrap(), "░▒▓█");
}

#[test]
fn cursor_position_then_write() {
    let grid = rasterize("\x1b[2;3HX", 4, 3);
    assert_eq!(grid.cell(1, 2).unwrap().char, 'X');
}

// Styling

#[test]
fn red_a_then_reset() {
    let grid = rasterize("\x1b[31mA\x1b[0m", 3, 1);
    assert_eq!(*grid.cell(0, 0).unwrap(), Cell::new('A', red()));
    assert_eq!(*grid.cell(0, 1).unwrap(), Cell::default());
    assert_eq!(*grid.cell(0, 2).unwrap(), Cell::default());
}

#[test]
fn style_persists_across_line_feed() {
    let grid = rasterize("\x1b[31ma\nb", 2, 2);
    assert_eq!(grid.cell(1, 0).unwrap().style, red());
}

#[test]
fn erase_display_mid_stream_resets_everything() {
    let grid = rasterize("\x1b[1;44mjunk\njunk\x1b[0m\x1b[2JZ", 4, 2);
    assert_eq!(*grid.cell(0, 0).unwrap(), Cell::new('Z', Style::default()));
    assert!(grid
        .rows()
        .flatten()
        .skip(1)
        .all(|c| *c == Cell::default()));
}

// Robustness

#[test]
fn unknown_csi_final_bytes_are_ignored() {
    let grid = rasterize("a\x1b[5Ab\x1b[?25lc\x1b[sd", 4, 1);
    assert_eq!(grid.row_text(0).unwrap(), "abcd");
}

#[test]
fn non_csi_escapes_are_ignored() {
    let grid = rasterize("a\x1b7b\x1b]0;title\x07c", 3, 1);
    assert_eq!(grid.row_text(0).unwrap(), "abc");
}

#[test]
fn unterminated_sequence_at_end_is_dropped() {
    let grid = rasterize("ab\x1b[31", 3, 1);
    assert_eq!(grid.row_text(0).unwrap(), "ab ");
    assert_eq!(grid.cell(0, 0).unwrap().style, Style::default());
}

#[test]
fn other_control_bytes_are_ignored() {
    let grid = rasterize("a\x07\x08b", 3, 1);
    assert_eq!(grid.row_text(0).unwrap(), "ab ");
}

#[test]
fn empty_grid_accepts_input() {
    let grid = rasterize("anything\x1b[2J\x1b[K", 0, 0);
    assert_eq!(grid.height(), 0);
}
