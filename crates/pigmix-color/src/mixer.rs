//! Pigment mixing by interpolation in latent space.

use std::sync::Arc;

use pigmix_core::Rgb8;

use crate::latent::{
    float_rgb_to_latent, latent_to_float_rgb, latent_to_linear_float_rgb, latent_to_rgb,
    linear_float_rgb_to_latent, rgb_to_latent, Latent,
};
use crate::lut::Lut;

/// Mix two 8-bit colors. `t = 0` gives `a`, `t = 1` gives `b`; other values
/// of `t` extrapolate.
pub fn lerp(a: Rgb8, b: Rgb8, t: f64, lut: &Lut) -> Rgb8 {
    let la = rgb_to_latent(a, lut);
    let lb = rgb_to_latent(b, lut);
    latent_to_rgb(&la.lerp(&lb, t))
}

/// Mix two gamma-encoded float colors.
pub fn lerp_float(a: [f64; 3], b: [f64; 3], t: f64, lut: &Lut) -> [f64; 3] {
    let la = float_rgb_to_latent(a, lut);
    let lb = float_rgb_to_latent(b, lut);
    latent_to_float_rgb(&la.lerp(&lb, t))
}

/// Mix two linear-light float colors.
pub fn lerp_linear_float(a: [f64; 3], b: [f64; 3], t: f64, lut: &Lut) -> [f64; 3] {
    let la = linear_float_rgb_to_latent(a, lut);
    let lb = linear_float_rgb_to_latent(b, lut);
    latent_to_linear_float_rgb(&la.lerp(&lb, t))
}

/// Mix any number of 8-bit colors with the given weights.
pub fn mix_weighted(colors: &[(Rgb8, f64)], lut: &Lut) -> Rgb8 {
    let parts: Vec<(Latent, f64)> = colors
        .iter()
        .map(|&(rgb, weight)| (rgb_to_latent(rgb, lut), weight))
        .collect();
    latent_to_rgb(&Latent::weighted_sum(&parts))
}

/// A LUT handle bundled with the mixing operations.
///
/// Cloning is cheap; clones share the same table and can be used from any
/// number of threads at once.
#[derive(Debug, Clone, Default)]
pub struct Mixer {
    lut: Arc<Lut>,
}

impl Mixer {
    pub fn new(lut: Arc<Lut>) -> Self {
        Self { lut }
    }

    /// The table this mixer encodes with.
    pub fn lut(&self) -> &Arc<Lut> {
        &self.lut
    }

    pub fn lerp(&self, a: Rgb8, b: Rgb8, t: f64) -> Rgb8 {
        lerp(a, b, t, &self.lut)
    }

    pub fn lerp_float(&self, a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
        lerp_float(a, b, t, &self.lut)
    }

    pub fn lerp_linear_float(&self, a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
        lerp_linear_float(a, b, t, &self.lut)
    }

    pub fn mix_weighted(&self, colors: &[(Rgb8, f64)]) -> Rgb8 {
        mix_weighted(colors, &self.lut)
    }

    pub fn to_latent(&self, rgb: Rgb8) -> Latent {
        rgb_to_latent(rgb, &self.lut)
    }

    /// `steps` evenly spaced mixes from `a` to `b`, both ends included.
    pub fn gradient(&self, a: Rgb8, b: Rgb8, steps: usize) -> Vec<Rgb8> {
        let la = self.to_latent(a);
        let lb = self.to_latent(b);
        let denom = steps.saturating_sub(1).max(1) as f64;
        (0..steps)
            .map(|i| latent_to_rgb(&la.lerp(&lb, i as f64 / denom)))
            .collect()
    }
}
