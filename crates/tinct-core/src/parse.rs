//! Text-field parsing for the comma-separated representations.
//!
//! Parsing never touches any store; callers decide what to do with a rejection.

use crate::color::{Channel, Hsl, Hsv, Rgba};
use crate::error::ColorError;

fn split(channel: Channel, text: &str, counts: &[usize]) -> Result<Vec<f64>, ColorError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if !counts.contains(&parts.len()) {
        return Err(ColorError::parse(channel, text));
    }
    parts
        .iter()
        .map(|p| match p.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(ColorError::parse(channel, text)),
        })
        .collect()
}

fn in_range(channel: Channel, value: f64, min: f64, max: f64) -> Result<f64, ColorError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::range(channel, value, min, max))
    }
}

/// `r,g,b` or `r,g,b,a`. RGB must be integers in `[0, 255]`, alpha a number in `[0, 1]`
/// (defaults to 1).
pub fn parse_rgba(text: &str) -> Result<Rgba, ColorError> {
    let nums = split(Channel::Rgba, text, &[3, 4])?;

    let mut rgb = [0u8; 3];
    for (out, &n) in rgb.iter_mut().zip(&nums) {
        if n.fract() != 0.0 {
            return Err(ColorError::parse(Channel::Rgba, text));
        }
        *out = in_range(Channel::Rgba, n, 0.0, 255.0)? as u8;
    }

    let alpha = match nums.get(3) {
        Some(&a) => in_range(Channel::Alpha, a, 0.0, 1.0)? as f32,
        None => 1.0,
    };

    Ok(Rgba::new(rgb[0], rgb[1], rgb[2], alpha))
}

/// `h,s,v`: hue in `[0, 360]`, saturation/value in `[0, 100]`. Fractions round to the
/// nearest integer.
pub fn parse_hsv(text: &str) -> Result<Hsv, ColorError> {
    let [h, s, v] = hue_triple(Channel::Hsv, text)?;
    Ok(Hsv::new(h as u16, s as u8, v as u8))
}

/// `h,s,l`: hue in `[0, 360]`, saturation/lightness in `[0, 100]`.
pub fn parse_hsl(text: &str) -> Result<Hsl, ColorError> {
    let [h, s, l] = hue_triple(Channel::Hsl, text)?;
    Ok(Hsl::new(h as u16, s as u8, l as u8))
}

fn hue_triple(channel: Channel, text: &str) -> Result<[f64; 3], ColorError> {
    let nums = split(channel, text, &[3])?;
    Ok([
        in_range(channel, nums[0], 0.0, 360.0)?.round(),
        in_range(channel, nums[1], 0.0, 100.0)?.round(),
        in_range(channel, nums[2], 0.0, 100.0)?.round(),
    ])
}

/// Validates an alpha value and snaps it to the control's 0.01 step.
pub fn check_alpha(alpha: f32) -> Result<f32, ColorError> {
    if !alpha.is_finite() {
        return Err(ColorError::parse(Channel::Alpha, alpha.to_string()));
    }
    let a = in_range(Channel::Alpha, f64::from(alpha), 0.0, 1.0)?;
    Ok(((a * 100.0).round() / 100.0) as f32)
}
