use std::collections::HashMap;

// ── GlyphPlacement ────────────────────────────────────────────────────────────

/// A glyph positioned on the canvas by [`layout_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphPlacement {
    pub ch: char,
    /// Top-left pixel of the glyph cell on the canvas.
    pub x: i32,
    pub y: i32,
    /// Integer magnification; every font pixel becomes a `scale × scale` block.
    pub scale: u32,
}

// ── layout_text ───────────────────────────────────────────────────────────────

/// Position each character of `text` starting at `origin`.
///
/// # Skipping rules
/// - `'\n'` resets the X cursor to `origin.0` and advances Y by one scaled
///   line height; it produces no placement.
/// - Characters absent from `font.glyphs` are silently skipped and do not
///   advance the cursor.
/// - Returns an empty list when `scale` is zero.
pub fn layout_text(text: &str, font: &Font, origin: (i32, i32), scale: u32) -> Vec<GlyphPlacement> {
    if scale == 0 {
        return Vec::new();
    }

    let mut placements = Vec::new();
    let mut cursor_x = origin.0;
    let mut cursor_y = origin.1;

    for ch in text.chars() {
        if ch == '\n' {
            cursor_x = origin.0;
            cursor_y += (font.line_height * scale) as i32;
            continue;
        }

        let Some(glyph) = font.glyphs.get(&ch) else {
            continue;
        };

        placements.push(GlyphPlacement { ch, x: cursor_x, y: cursor_y, scale });
        cursor_x += (glyph.x_advance * scale) as i32;
    }

    placements
}

// ── Glyph ────────────────────────────────────────────────────────────────────

/// A single character of a bitmap font.
///
/// The bitmap is column-major: `columns[c]` holds column `c`, bit `r` set
/// means row `r` (counting from the top) is inked.
#[derive(Debug, Clone)]
pub struct Glyph {
    /// The character this glyph represents.
    pub id: char,
    /// Pixel width of the glyph cell (number of columns).
    pub width: u32,
    /// Pixel height of the glyph cell; only the low `height` bits of each
    /// column are read.
    pub height: u32,
    /// How far to advance the cursor after drawing this glyph.
    pub x_advance: u32,
    /// Column bitmaps, left to right, LSB is the top row.
    pub columns: Vec<u8>,
}

impl Glyph {
    /// Inked pixels as `(dx, dy)` offsets from the glyph's top-left corner.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let height = self.height;
        self.columns.iter().enumerate().flat_map(move |(dx, &bits)| {
            (0..height)
                .filter(move |&dy| bits & (1 << dy) != 0)
                .map(move |dy| (dx as u32, dy))
        })
    }
}

// ── Font ─────────────────────────────────────────────────────────────────────

/// A fixed-cell bitmap font.
pub struct Font {
    pub glyphs: HashMap<char, Glyph>,
    /// Vertical distance between successive lines in pixels (unscaled).
    pub line_height: u32,
}

impl Font {
    /// The built-in 5×7 ASCII font (printable range `' '..='~'`).
    ///
    /// Each cell advances 6 px and lines are 8 px apart, leaving one blank
    /// pixel between neighbouring glyphs in both directions.
    pub fn builtin() -> Self {
        let glyphs = FONT_5X7
            .iter()
            .enumerate()
            .map(|(i, cols)| {
                let ch = char::from(FIRST_CHAR + i as u8);
                (ch, Glyph {
                    id: ch,
                    width: 5,
                    height: 7,
                    x_advance: 6,
                    columns: cols.to_vec(),
                })
            })
            .collect();

        Self { glyphs, line_height: 8 }
    }

    /// Pixel size of `text` at `scale`: widest line × number of lines.
    pub fn measure(&self, text: &str, scale: u32) -> (u32, u32) {
        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines
            .iter()
            .map(|line| {
                line.chars()
                    .filter_map(|ch| self.glyphs.get(&ch))
                    .map(|g| g.x_advance)
                    .sum::<u32>()
            })
            .max()
            .unwrap_or(0);
        (width * scale, lines.len() as u32 * self.line_height * scale)
    }
}

// ── Built-in font data ────────────────────────────────────────────────────────

const FIRST_CHAR: u8 = b' ';

/// Classic 5×7 LCD font, one entry per printable ASCII character.
#[rustfmt::skip]
const FONT_5X7: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // \
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x08, 0x04, 0x08, 0x10, 0x08], // ~
];
