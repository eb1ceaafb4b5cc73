//! Code page 437 decoding for legacy art files.
//!
//! Every byte maps to exactly one code point, so decoding cannot fail.
//! The low half stays ASCII (control bytes included, so ESC, CR and LF keep
//! their meaning for the rasterizer). The high half is the IBM PC glyph set.

/// DOS end-of-file marker that precedes a SAUCE record.
pub const EOF_MARKER: u8 = 0x1A;

/// Unicode code points for bytes 0x80-0xFF.
const CP437_HIGH: [char; 128] = [
    // 0x80
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{a0}',
];

/// Map a single byte to its code point.
pub fn decode_byte(byte: u8) -> char {
    match byte {
        0x7F => '⌂',
        0x00..=0x7E => char::from(byte),
        _ => CP437_HIGH[usize::from(byte - 0x80)],
    }
}

/// Decode a CP437 byte stream.
///
/// Line terminators are normalized: CR LF and bare CR both become LF.
pub fn decode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut iter = bytes.iter().copied().peekable();
    while let Some(byte) = iter.next() {
        if byte == b'\r' {
            iter.next_if_eq(&b'\n');
            out.push('\n');
        } else {
            out.push(decode_byte(byte));
        }
    }
    out
}

/// Drop the SAUCE trailer (everything from the first EOF marker on).
///
/// Input without an EOF marker is returned untouched.
pub fn strip_sauce(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == EOF_MARKER) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}
