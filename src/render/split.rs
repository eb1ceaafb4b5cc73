//! ANSI-aware column splitting.
//!
//! Splits a styled line at visible-column offsets without ever cutting a
//! token in half. Tokens ride along with the segment the column counter has
//! reached when they are seen, so `left + mid + right` is always the original
//! line byte for byte.

use super::width::{segments, Segment};

/// A styled line split at two column offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitLine {
    /// Columns `[0, start)`.
    pub left: String,
    /// Columns `[start, end)`.
    pub mid: String,
    /// Columns `[end, ..)`.
    pub right: String,
}

impl SplitLine {
    /// Concatenation of the three parts.
    pub fn concat(&self) -> String {
        let mut out = String::with_capacity(self.left.len() + self.mid.len() + self.right.len());
        out.push_str(&self.left);
        out.push_str(&self.mid);
        out.push_str(&self.right);
        out
    }
}

/// Split `line` into `[0, start)`, `[start, end)` and `[end, ..)`.
///
/// `end` is raised to `start` if it is smaller.
pub fn split_columns(line: &str, start: usize, end: usize) -> SplitLine {
    let end = end.max(start);
    let mut out = SplitLine::default();
    let mut col = 0usize;

    for seg in segments(line) {
        let buf = if col < start {
            &mut out.left
        } else if col < end {
            &mut out.mid
        } else {
            &mut out.right
        };
        match seg {
            Segment::Token(token) => buf.push_str(token),
            Segment::Char(c) => {
                buf.push(c);
                col += 1;
            }
        }
    }
    out
}

/// Keep at most `max` visible columns of `line`.
///
/// Tokens that sit exactly at the cut belong to the dropped part.
pub fn truncate(line: &str, max: usize) -> String {
    split_columns(line, max, max).left
}

/// The SGR tokens needed to recreate the style in effect at the end of
/// `line`: every SGR token after the last full reset.
pub fn active_style(line: &str) -> String {
    let mut active = String::new();
    for seg in segments(line) {
        if let Segment::Token(token) = seg {
            if !token.ends_with('m') {
                continue;
            }
            if is_full_reset(token) {
                active.clear();
            } else {
                active.push_str(token);
            }
        }
    }
    active
}

/// `ESC[m`, `ESC[0m`, `ESC[00m`, ...
fn is_full_reset(token: &str) -> bool {
    token
        .strip_prefix("\x1b[")
        .and_then(|t| t.strip_suffix('m'))
        .is_some_and(|params| params.bytes().all(|b| b == b'0'))
}
