//! Gradient images comparing naive RGB interpolation with pigment mixing.

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};
use pigmix_color::Mixer;
use pigmix_core::{lerp_rgb8, Rgb8};
use rayon::prelude::*;
use tracing::info;

/// Render a `width × height` strip. The top half is the naive channel lerp,
/// the bottom half the pigment mix; `t` runs from 0 at the left edge to 1 at
/// the right edge.
pub fn render_gradient(mixer: &Mixer, a: Rgb8, b: Rgb8, width: u32, height: u32) -> RgbImage {
    let denom = width.saturating_sub(1).max(1) as f64;
    let columns: Vec<(Rgb8, Rgb8)> = (0..width)
        .into_par_iter()
        .map(|x| {
            let t = x as f64 / denom;
            (lerp_rgb8(a, b, t), mixer.lerp(a, b, t))
        })
        .collect();

    let split = height / 2;
    RgbImage::from_fn(width, height, |x, y| {
        let (naive, mixed) = columns[x as usize];
        if y < split {
            Rgb(naive)
        } else {
            Rgb(mixed)
        }
    })
}

/// Render and write a gradient PNG.
pub fn save_gradient(
    mixer: &Mixer,
    a: Rgb8,
    b: Rgb8,
    width: u32,
    height: u32,
    path: &Path,
) -> Result<()> {
    let img = render_gradient(mixer, a, b, width, height);
    img.save(path)
        .with_context(|| format!("writing gradient {}", path.display()))?;
    info!(path = %path.display(), width, height, "Gradient saved");
    Ok(())
}
