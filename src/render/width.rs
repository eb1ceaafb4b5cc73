//! Style token scanning and visual width.
//!
//! A token is `ESC [`, any parameter bytes (0x30-0x3F), any intermediate
//! bytes (0x20-0x2F) and one final byte (0x40-0x7E). An ESC that does not
//! start a complete token is an ordinary character.

const ESC: u8 = 0x1b;

/// One unit of a styled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A complete control token, zero columns wide.
    Token(&'a str),
    /// A visible character, one column wide.
    Char(char),
}

/// Iterator over the segments of a styled line.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(len) = token_len(self.rest) {
            let (token, rest) = self.rest.split_at(len);
            self.rest = rest;
            return Some(Segment::Token(token));
        }
        let c = self.rest.chars().next()?;
        self.rest = &self.rest[c.len_utf8()..];
        Some(Segment::Char(c))
    }
}

/// Split a styled line into tokens and characters.
pub fn segments(line: &str) -> Segments<'_> {
    Segments { rest: line }
}

/// Byte length of the token at the start of `s`, if `s` starts with one.
fn token_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != ESC || bytes[1] != b'[' {
        return None;
    }
    let mut i = 2;
    while i < bytes.len() && (0x30..=0x3F).contains(&bytes[i]) {
        i += 1;
    }
    while i < bytes.len() && (0x20..=0x2F).contains(&bytes[i]) {
        i += 1;
    }
    match bytes.get(i) {
        Some(0x40..=0x7E) => Some(i + 1),
        _ => None,
    }
}

/// Number of visible columns in a styled line.
///
/// Tokens count zero, every other `char` counts one regardless of how many
/// bytes it takes.
pub fn visual_width(line: &str) -> usize {
    segments(line)
        .filter(|s| matches!(s, Segment::Char(_)))
        .count()
}

/// The visible characters of a styled line, tokens removed.
pub fn strip_tokens(line: &str) -> String {
    segments(line)
        .filter_map(|s| match s {
            Segment::Char(c) => Some(c),
            Segment::Token(_) => None,
        })
        .collect()
}

/// Widest line of a multi-line block.
pub fn block_width(text: &str) -> usize {
    text.lines().map(visual_width).max().unwrap_or(0)
}
