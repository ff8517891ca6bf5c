//! sRGB transfer function (OETF/EOTF) in double precision.
#![allow(clippy::excessive_precision)]

/// Convert a gamma-encoded sRGB channel to linear light.
#[inline]
pub fn srgb_to_linear(x: f64) -> f64 {
    if x < 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear-light channel to gamma-encoded sRGB.
#[inline]
pub fn linear_to_srgb(x: f64) -> f64 {
    if x < 0.0031308 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

#[inline]
pub(crate) fn srgb_to_linear3(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(srgb_to_linear)
}

#[inline]
pub(crate) fn linear_to_srgb3(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(linear_to_srgb)
}
