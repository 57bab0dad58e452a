use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::error::ColorError;

/// The editable representations of a color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Hex,
    Rgba,
    Hsv,
    Hsl,
    Alpha,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Hex => "hex",
            Channel::Rgba => "rgba",
            Channel::Hsv => "hsv",
            Channel::Hsl => "hsl",
            Channel::Alpha => "alpha",
        })
    }
}

/// Six-digit RGB hex color. Never carries alpha.
///
/// Displays as `#rrggbb` (lowercase).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hex([u8; 3]);

impl Hex {
    pub const BLACK: Hex = Hex([0, 0, 0]);
    pub const WHITE: Hex = Hex([255, 255, 255]);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Hex([r, g, b])
    }

    /// `0xRRGGBB` literal, used for palette tables.
    pub const fn from_u32(v: u32) -> Self {
        Hex([(v >> 16) as u8, (v >> 8) as u8, v as u8])
    }

    /// Accepts `#rgb`, `rgb`, `#rrggbb` or `rrggbb`; surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let fail = || ColorError::parse(Channel::Hex, s);
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        let nibble = |c: u8| -> Option<u8> {
            match c {
                b'0'..=b'9' => Some(c - b'0'),
                b'a'..=b'f' => Some(c - b'a' + 10),
                b'A'..=b'F' => Some(c - b'A' + 10),
                _ => None,
            }
        };

        let bytes = digits.as_bytes();
        let mut rgb = [0u8; 3];
        match bytes.len() {
            3 => {
                // #rgb -> #rrggbb
                for (out, &c) in rgb.iter_mut().zip(bytes) {
                    *out = nibble(c).ok_or_else(fail)? * 17;
                }
            }
            6 => {
                for (out, pair) in rgb.iter_mut().zip(bytes.chunks_exact(2)) {
                    let hi = nibble(pair[0]).ok_or_else(fail)?;
                    let lo = nibble(pair[1]).ok_or_else(fail)?;
                    *out = hi << 4 | lo;
                }
            }
            _ => return Err(fail()),
        }
        Ok(Hex(rgb))
    }

    pub const fn rgb(self) -> [u8; 3] {
        self.0
    }

    /// Hex never encodes alpha, so the result is always opaque.
    pub const fn to_rgba(self) -> Rgba {
        Rgba::opaque(self.0[0], self.0[1], self.0[2])
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl std::str::FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hex::parse(s)
    }
}

impl TryFrom<String> for Hex {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Hex::parse(&s)
    }
}

impl From<Hex> for String {
    fn from(h: Hex) -> Self {
        h.to_string()
    }
}

/// 8-bit RGB channels plus a straight alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Comma-joined, the same shape the RGBA text field accepts: `61,166,251,1`.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.r, self.g, self.b, self.a)
    }
}

/// Hue in degrees `[0, 360]`, saturation and value in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.h, self.s, self.v)
    }
}

/// Hue in degrees `[0, 360]`, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.h, self.s, self.l)
    }
}

/// One logical color held in all four representations.
///
/// Invariant:
/// - `rgba` is canonical; `hex`, `hsv` and `hsl` denote the same color up to ±1 rounding
///   per channel (see `convert` for the exact bounds).
/// - alpha lives only on `rgba`.
///
/// Values are immutable; every edit builds a whole new `Color`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Color {
    hex: Hex,
    rgba: Rgba,
    hsv: Hsv,
    hsl: Hsl,
}

impl Color {
    pub const SEED: Hex = Hex::from_u32(0x3da6fb);

    /// Derives every other representation from `rgba`.
    pub fn from_rgba(rgba: Rgba) -> Self {
        Self {
            hex: convert::rgba_to_hex(rgba),
            rgba,
            hsv: convert::rgba_to_hsv(rgba),
            hsl: convert::rgba_to_hsl(rgba),
        }
    }

    pub fn from_hex(hex: Hex) -> Self {
        Self::from_rgba(hex.to_rgba())
    }

    /// Keeps `hsv` as given (hue survives achromatic colors) and derives the rest.
    pub fn from_hsv(hsv: Hsv, alpha: f32) -> Self {
        let rgba = convert::hsv_to_rgba(hsv).with_alpha(alpha);
        Self {
            hsv,
            ..Self::from_rgba(rgba)
        }
    }

    /// Keeps `hsl` as given and derives the rest.
    pub fn from_hsl(hsl: Hsl, alpha: f32) -> Self {
        let rgba = convert::hsl_to_rgba(hsl).with_alpha(alpha);
        Self {
            hsl,
            ..Self::from_rgba(rgba)
        }
    }

    /// Alpha is decoupled from hue/saturation/value/lightness; only `rgba.a` changes.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            rgba: self.rgba.with_alpha(alpha),
            ..self
        }
    }

    pub fn hex(&self) -> Hex {
        self.hex
    }
    pub fn rgba(&self) -> Rgba {
        self.rgba
    }
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }
    pub fn alpha(&self) -> f32 {
        self.rgba.a
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::from_hex(Color::SEED)
    }
}
