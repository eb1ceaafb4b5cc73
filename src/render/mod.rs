//! Styled line rendering.
//!
//! Everything that reads or writes style tokens inside text: token
//! encoding, grid serialization, visual width and column splitting.

mod ansi;
mod serialize;
mod split;
mod width;

pub use ansi::{bg_code, fg_code, style_change, style_to_ansi, RESET};
pub use serialize::{serialize, serialize_lines, serialize_row};
pub use split::{active_style, split_columns, truncate, SplitLine};
pub use width::{block_width, segments, strip_tokens, visual_width, Segment, Segments};
