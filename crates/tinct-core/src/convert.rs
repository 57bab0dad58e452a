//! Color-space conversions between hex, RGBA, HSV and HSL.
//!
//! Pure functions, no shared state. Every integer output is rounded to the nearest
//! integer (halves away from zero), hues land in `[0, 360)`, and an achromatic color
//! (`max == min`) reports hue 0.
//!
//! Conversions are lossy. `hex -> rgba -> hex` is exact for six-digit input. HSV and HSL
//! store whole percents, so one percent step spans ~2.55 RGB units:
//! - `rgba -> hsv -> rgba` returns the dominant channel within ±1 and every channel within ±3.
//! - `rgba -> hsl -> rgba` returns every channel within ±5.
//!
//! Those bounds are expected behavior, not defects.

use crate::color::{Hex, Hsl, Hsv, Rgba};
use crate::error::ColorError;

/// Three- or six-digit hex, `#` optional. Alpha is always 1.
pub fn hex_to_rgba(hex: &str) -> Result<Rgba, ColorError> {
    Hex::parse(hex).map(Hex::to_rgba)
}

/// Drops alpha.
pub fn rgba_to_hex(rgba: Rgba) -> Hex {
    Hex::from_rgb(rgba.r, rgba.g, rgba.b)
}

fn unit_channels(rgba: Rgba) -> (f64, f64, f64) {
    (
        f64::from(rgba.r) / 255.0,
        f64::from(rgba.g) / 255.0,
        f64::from(rgba.b) / 255.0,
    )
}

/// Hue as a fraction of a turn, shared by HSV and HSL. `d` must be non-zero.
fn hue_turns(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h / 6.0
}

fn degrees(turns: f64) -> u16 {
    ((turns * 360.0).round() as u16) % 360
}

fn percent(unit: f64) -> u8 {
    (unit * 100.0).round().clamp(0.0, 100.0) as u8
}

fn byte(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn rgba_to_hsv(rgba: Rgba) -> Hsv {
    let (r, g, b) = unit_channels(rgba);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let s = if max == 0.0 { 0.0 } else { d / max };
    let h = if d == 0.0 { 0.0 } else { hue_turns(r, g, b, max, d) };

    Hsv::new(degrees(h), percent(s), percent(max))
}

/// Alpha is always 1; callers carry their own alpha.
pub fn hsv_to_rgba(hsv: Hsv) -> Rgba {
    let h = f64::from(hsv.h);
    let s = f64::from(hsv.s) / 100.0;
    let v = f64::from(hsv.v) / 100.0;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgba::opaque(byte(r + m), byte(g + m), byte(b + m))
}

pub fn rgba_to_hsl(rgba: Rgba) -> Hsl {
    let (r, g, b) = unit_channels(rgba);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0, 0, percent(l));
    }

    let d = max - min;
    // The denominator flips at l = 0.5; keep both branches.
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = hue_turns(r, g, b, max, d);

    Hsl::new(degrees(h), percent(s), percent(l))
}

/// Alpha is always 1; callers carry their own alpha.
pub fn hsl_to_rgba(hsl: Hsl) -> Rgba {
    let h = f64::from(hsl.h) / 360.0;
    let s = f64::from(hsl.s) / 100.0;
    let l = f64::from(hsl.l) / 100.0;

    if s == 0.0 {
        let v = byte(l);
        return Rgba::opaque(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgba::opaque(
        byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
        byte(hue_to_channel(p, q, h)),
        byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
