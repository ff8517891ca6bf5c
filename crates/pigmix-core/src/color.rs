//! 8-bit RGB helpers: hex notation, ratios and plain channel interpolation.

use crate::error::{PigmixError, Result};
use crate::pigment::Pigment;

/// An 8-bit gamma-encoded RGB triple.
pub type Rgb8 = [u8; 3];

/// Parse `#rrggbb` or `rrggbb` into an RGB triple.
pub fn parse_hex(input: &str) -> Result<Rgb8> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(PigmixError::InvalidColorFormat(input.to_string()));
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|_| PigmixError::InvalidColorFormat(input.to_string()))?;
    }
    Ok(rgb)
}

/// Format an RGB triple as lowercase `#rrggbb`.
pub fn to_hex(rgb: Rgb8) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Parse a color given either as hex or as a pigment name.
pub fn parse_color(input: &str) -> Result<Rgb8> {
    let trimmed = input.trim();
    if trimmed.starts_with('#') {
        return parse_hex(trimmed);
    }
    match trimmed.parse::<Pigment>() {
        Ok(pigment) => Ok(pigment.rgb()),
        Err(_) => parse_hex(trimmed).map_err(|_| PigmixError::UnknownPigment(input.to_string())),
    }
}

/// Parse a mix ratio. Any finite value is accepted; values outside
/// `[0, 1]` extrapolate.
pub fn parse_ratio(input: &str) -> Result<f64> {
    let ratio: f64 = input
        .trim()
        .parse()
        .map_err(|_| PigmixError::InvalidRatio(input.to_string()))?;
    if !ratio.is_finite() {
        return Err(PigmixError::InvalidRatio(input.to_string()));
    }
    Ok(ratio)
}

/// Channel-wise linear interpolation, the "naive" mix that pigment mixing is
/// compared against.
#[inline]
pub fn lerp_rgb8(a: Rgb8, b: Rgb8, t: f64) -> Rgb8 {
    let mix = |x: u8, y: u8| -> u8 {
        let v = x as f64 * (1.0 - t) + y as f64 * t;
        v.round().clamp(0.0, 255.0) as u8
    };
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}
