//! 8x8 bitmap font for the title label and button glyphs.
//! Bit 7 of each row byte is the leftmost column. Letters are upper-case only.

pub const FONT_W: i32 = 8;
pub const FONT_H: i32 = 8;

type Glyph = [u8; FONT_H as usize];

const GLYPH_BLANK: Glyph = [0x00; FONT_H as usize];
const GLYPH_UNKNOWN: Glyph = [0x7E, 0x42, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

const GLYPH_DOT: Glyph = [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00];
const GLYPH_COMMA: Glyph = [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30];
const GLYPH_COLON: Glyph = [0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x00];
const GLYPH_MINUS: Glyph = [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00];
const GLYPH_UNDERSCORE: Glyph = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00];
const GLYPH_LBRACKET: Glyph = [0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00];
const GLYPH_RBRACKET: Glyph = [0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3C, 0x00];
const GLYPH_LPAREN: Glyph = [0x0C, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0C, 0x00];
const GLYPH_RPAREN: Glyph = [0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00];
const GLYPH_SLASH: Glyph = [0x06, 0x0C, 0x0C, 0x18, 0x30, 0x30, 0x60, 0x00];
const GLYPH_BANG: Glyph = [0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00];
const GLYPH_QUESTION: Glyph = [0x3C, 0x66, 0x06, 0x0C, 0x18, 0x00, 0x18, 0x00];

const DIGITS: [Glyph; 10] = [
    [0x3C, 0x66, 0x6E, 0x7E, 0x76, 0x66, 0x3C, 0x00],
    [0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00],
    [0x3C, 0x66, 0x06, 0x0C, 0x30, 0x60, 0x7E, 0x00],
    [0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00],
    [0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x00],
    [0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00],
    [0x1C, 0x30, 0x60, 0x7C, 0x66, 0x66, 0x3C, 0x00],
    [0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00],
    [0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00],
    [0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0C, 0x38, 0x00],
];

const LETTERS: [Glyph; 26] = [
    [0x18, 0x24, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00],
    [0x7C, 0x62, 0x62, 0x7C, 0x62, 0x62, 0x7C, 0x00],
    [0x3C, 0x62, 0x60, 0x60, 0x60, 0x62, 0x3C, 0x00],
    [0x78, 0x64, 0x62, 0x62, 0x62, 0x64, 0x78, 0x00],
    [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x7E, 0x00],
    [0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x00],
    [0x3C, 0x62, 0x60, 0x6E, 0x62, 0x62, 0x3C, 0x00],
    [0x42, 0x42, 0x42, 0x7E, 0x42, 0x42, 0x42, 0x00],
    [0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00],
    [0x1E, 0x0C, 0x0C, 0x0C, 0x0C, 0x6C, 0x38, 0x00],
    [0x62, 0x64, 0x68, 0x70, 0x68, 0x64, 0x62, 0x00],
    [0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00],
    [0x42, 0x66, 0x5A, 0x5A, 0x42, 0x42, 0x42, 0x00],
    [0x42, 0x62, 0x72, 0x5A, 0x4E, 0x46, 0x42, 0x00],
    [0x3C, 0x62, 0x62, 0x62, 0x62, 0x62, 0x3C, 0x00],
    [0x7C, 0x62, 0x62, 0x7C, 0x60, 0x60, 0x60, 0x00],
    [0x3C, 0x62, 0x62, 0x62, 0x6A, 0x64, 0x3A, 0x00],
    [0x7C, 0x62, 0x62, 0x7C, 0x68, 0x64, 0x62, 0x00],
    [0x3C, 0x62, 0x30, 0x1C, 0x06, 0x62, 0x3C, 0x00],
    [0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00],
    [0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00],
    [0x42, 0x42, 0x42, 0x24, 0x24, 0x18, 0x18, 0x00],
    [0x42, 0x42, 0x42, 0x5A, 0x5A, 0x66, 0x42, 0x00],
    [0x42, 0x24, 0x18, 0x18, 0x18, 0x24, 0x42, 0x00],
    [0x42, 0x24, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00],
    [0x7E, 0x04, 0x08, 0x10, 0x20, 0x40, 0x7E, 0x00],
];

/// Bitmap rows for `ch`
pub fn glyph_for(ch: char) -> &'static Glyph {
    match ch {
        '0'..='9' => &DIGITS[ch as usize - '0' as usize],
        'a'..='z' => &LETTERS[ch as usize - 'a' as usize],
        'A'..='Z' => &LETTERS[ch as usize - 'A' as usize],
        ' ' => &GLYPH_BLANK,
        '.' => &GLYPH_DOT,
        ',' => &GLYPH_COMMA,
        ':' => &GLYPH_COLON,
        '-' => &GLYPH_MINUS,
        '_' => &GLYPH_UNDERSCORE,
        '[' => &GLYPH_LBRACKET,
        ']' => &GLYPH_RBRACKET,
        '(' => &GLYPH_LPAREN,
        ')' => &GLYPH_RPAREN,
        '/' => &GLYPH_SLASH,
        '!' => &GLYPH_BANG,
        '?' => &GLYPH_QUESTION,
        _ => &GLYPH_UNKNOWN,
    }
}

/// Width in pixels of `text` drawn with this font
pub fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * FONT_W
}

/// Pixel offsets of the set bits of `ch`, relative to its top-left
pub fn glyph_pixels(ch: char) -> impl Iterator<Item = (i32, i32)> {
    let glyph = glyph_for(ch);
    (0..FONT_H).flat_map(move |row| {
        let pattern = glyph[row as usize];
        (0..FONT_W)
            .filter(move |col| pattern & (0x80 >> col) != 0)
            .map(move |col| (col, row))
    })
}
