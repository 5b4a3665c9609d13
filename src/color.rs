use image::Rgba;
use serde::Deserialize;

use crate::error::{Result, SheetError};

// ── Color ───────────────────────────────────────────────────────────────────

/// An 8-bit RGBA color as written to the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    pub const RED: Self = Self([255, 0, 0, 255]);
    pub const BLUE: Self = Self([0, 0, 255, 255]);
    pub const PEACHPUFF: Self = Self([255, 218, 185, 255]);
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Parse a color string.
    ///
    /// Accepted forms (case-insensitive, surrounding whitespace ignored):
    /// - a named color from [`NAMED_COLORS`] (`"white"`, `"peachpuff"`, ...)
    /// - `#rgb`, `#rrggbb` or `#rrggbbaa`
    /// - `rgb(r, g, b)` with decimal components in `0..=255`
    pub fn parse(s: &str) -> Result<Self> {
        let raw = s.trim().to_ascii_lowercase();
        let unknown = || SheetError::UnknownColor(s.to_string());

        if let Some(hex) = raw.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(unknown);
        }
        if let Some(body) = raw.strip_prefix("rgb(").and_then(|b| b.strip_suffix(')')) {
            return parse_rgb_fn(body).ok_or_else(unknown);
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == raw)
            .map(|&(_, c)| c)
            .ok_or_else(unknown)
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba(self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = SheetError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl std::str::FromStr for Color {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            // #rgb expands each nibble: #f80 -> #ff8800
            let mut out = [0u8; 4];
            for (i, ch) in hex.chars().enumerate() {
                let v = ch.to_digit(16)? as u8;
                out[i] = v * 17;
            }
            out[3] = 255;
            Some(Color(out))
        }
        6 => Some(Color([byte(0)?, byte(2)?, byte(4)?, 255])),
        8 => Some(Color([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
        _ => None,
    }
}

fn parse_rgb_fn(body: &str) -> Option<Color> {
    let parts: Vec<u8> = body
        .split(',')
        .map(|p| p.trim().parse::<u8>().ok())
        .collect::<Option<_>>()?;
    match *parts.as_slice() {
        [r, g, b] => Some(Color::rgb(r, g, b)),
        _ => None,
    }
}

// ── Named colors ────────────────────────────────────────────────────────────

/// Recognised color names. Values follow the CSS / X11 color table.
pub const NAMED_COLORS: &[(&str, Color)] = &[
    ("transparent",  Color::TRANSPARENT),
    ("black",        Color::BLACK),
    ("white",        Color::WHITE),
    ("red",          Color::RED),
    ("blue",         Color::BLUE),
    ("green",        Color::rgb(0, 128, 0)),
    ("lime",         Color::rgb(0, 255, 0)),
    ("yellow",       Color::rgb(255, 255, 0)),
    ("cyan",         Color::rgb(0, 255, 255)),
    ("aqua",         Color::rgb(0, 255, 255)),
    ("magenta",      Color::rgb(255, 0, 255)),
    ("fuchsia",      Color::rgb(255, 0, 255)),
    ("gray",         Color::rgb(128, 128, 128)),
    ("grey",         Color::rgb(128, 128, 128)),
    ("silver",       Color::rgb(192, 192, 192)),
    ("maroon",       Color::rgb(128, 0, 0)),
    ("navy",         Color::rgb(0, 0, 128)),
    ("olive",        Color::rgb(128, 128, 0)),
    ("purple",       Color::rgb(128, 0, 128)),
    ("teal",         Color::rgb(0, 128, 128)),
    ("orange",       Color::rgb(255, 165, 0)),
    ("pink",         Color::rgb(255, 192, 203)),
    ("hotpink",      Color::rgb(255, 105, 180)),
    ("brown",        Color::rgb(165, 42, 42)),
    ("gold",         Color::rgb(255, 215, 0)),
    ("peachpuff",    Color::PEACHPUFF),
    ("tan",          Color::rgb(210, 180, 140)),
    ("khaki",        Color::rgb(240, 230, 140)),
    ("salmon",       Color::rgb(250, 128, 114)),
    ("coral",        Color::rgb(255, 127, 80)),
    ("tomato",       Color::rgb(255, 99, 71)),
    ("crimson",      Color::rgb(220, 20, 60)),
    ("indigo",       Color::rgb(75, 0, 130)),
    ("violet",       Color::rgb(238, 130, 238)),
    ("orchid",       Color::rgb(218, 112, 214)),
    ("plum",         Color::rgb(221, 160, 221)),
    ("beige",        Color::rgb(245, 245, 220)),
    ("ivory",        Color::rgb(255, 255, 240)),
    ("lavender",     Color::rgb(230, 230, 250)),
    ("turquoise",    Color::rgb(64, 224, 208)),
    ("skyblue",      Color::rgb(135, 206, 235)),
    ("steelblue",    Color::rgb(70, 130, 180)),
    ("slategray",    Color::rgb(112, 128, 144)),
    ("darkgreen",    Color::rgb(0, 100, 0)),
    ("darkred",      Color::rgb(139, 0, 0)),
    ("darkblue",     Color::rgb(0, 0, 139)),
    ("forestgreen",  Color::rgb(34, 139, 34)),
    ("seagreen",     Color::rgb(46, 139, 87)),
    ("chocolate",    Color::rgb(210, 105, 30)),
    ("sienna",       Color::rgb(160, 82, 45)),
    ("wheat",        Color::rgb(245, 222, 179)),
];
