//! Latent pigment space: RGB ⇄ `[c0, c1, c2, c3, r_res, g_res, b_res]`.
//!
//! The first four components are pigment weights, the last three the
//! per-channel difference between the input color and what the reflectance
//! polynomial predicts for those weights. Decoding right after encoding the
//! same color therefore reproduces it regardless of how well the weights fit.

use std::ops::Index;

use pigmix_core::Rgb8;
use serde::{Deserialize, Serialize};

use crate::lut::Lut;
use crate::polynomial;
use crate::transfer::{linear_to_srgb3, srgb_to_linear3};

/// Number of latent components.
pub const LATENT_SIZE: usize = 7;

/// A color in latent pigment space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Latent(pub [f64; LATENT_SIZE]);

impl Latent {
    /// Pigment weights `[c0, c1, c2, c3]`. `c3` is not clamped.
    #[inline]
    pub fn weights(&self) -> [f64; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    /// Residual correction per RGB channel.
    #[inline]
    pub fn residual(&self) -> [f64; 3] {
        [self.0[4], self.0[5], self.0[6]]
    }

    /// Component-wise `(1 - t) * self + t * other`. `t` is not restricted.
    #[inline]
    pub fn lerp(&self, other: &Latent, t: f64) -> Latent {
        let mut out = [0.0f64; LATENT_SIZE];
        for (i, v) in out.iter_mut().enumerate() {
            *v = (1.0 - t) * self.0[i] + t * other.0[i];
        }
        Latent(out)
    }

    /// Weighted sum of several latents. Weights are used as given.
    pub fn weighted_sum(parts: &[(Latent, f64)]) -> Latent {
        let mut out = [0.0f64; LATENT_SIZE];
        for (latent, weight) in parts {
            for (acc, v) in out.iter_mut().zip(latent.0.iter()) {
                *acc += weight * v;
            }
        }
        Latent(out)
    }
}

impl Index<usize> for Latent {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl From<[f64; LATENT_SIZE]> for Latent {
    fn from(values: [f64; LATENT_SIZE]) -> Self {
        Self(values)
    }
}

/// Clamp to `[0, 1]`; NaN maps to 0.
#[inline]
pub(crate) fn clamp01(x: f64) -> f64 {
    x.max(0.0).min(1.0)
}

/// Encode a gamma-encoded float RGB color.
pub fn float_rgb_to_latent(rgb: [f64; 3], lut: &Lut) -> Latent {
    let rgb = rgb.map(clamp01);

    let [c0, c1, c2] = lut.sample(rgb);
    let c3 = 1.0 - (c0 + c1 + c2);

    let mix = polynomial::evaluate(c0, c1, c2, c3);

    Latent([
        c0,
        c1,
        c2,
        c3,
        rgb[0] - mix[0],
        rgb[1] - mix[1],
        rgb[2] - mix[2],
    ])
}

/// Encode an 8-bit gamma-encoded RGB color.
pub fn rgb_to_latent(rgb: Rgb8, lut: &Lut) -> Latent {
    float_rgb_to_latent(rgb.map(|c| c as f64 / 255.0), lut)
}

/// Encode a linear-light float RGB color.
pub fn linear_float_rgb_to_latent(rgb: [f64; 3], lut: &Lut) -> Latent {
    float_rgb_to_latent(linear_to_srgb3(rgb), lut)
}

/// Decode to gamma-encoded float RGB, clamped to `[0, 1]`.
pub fn latent_to_float_rgb(latent: &Latent) -> [f64; 3] {
    let [c0, c1, c2, c3] = latent.weights();
    let rgb = polynomial::evaluate(c0, c1, c2, c3);
    let res = latent.residual();
    [
        clamp01(rgb[0] + res[0]),
        clamp01(rgb[1] + res[1]),
        clamp01(rgb[2] + res[2]),
    ]
}

/// Decode to 8-bit RGB, rounding to nearest.
pub fn latent_to_rgb(latent: &Latent) -> Rgb8 {
    latent_to_float_rgb(latent).map(|c| (c * 255.0).round() as u8)
}

/// Decode to linear-light float RGB.
pub fn latent_to_linear_float_rgb(latent: &Latent) -> [f64; 3] {
    srgb_to_linear3(latent_to_float_rgb(latent))
}
