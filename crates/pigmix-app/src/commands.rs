//! Subcommand implementations, kept separate from argument parsing.

use std::path::Path;

use anyhow::{bail, Context, Result};
use pigmix_color::lut::{LUT_PLANE_LEN, PLANE_OFFSETS};
use pigmix_color::{pack_raw_bytes, Lut, Mixer};
use pigmix_core::{lerp_rgb8, parse_color, parse_ratio, to_hex, Rgb8};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Result of mixing two colors, pigment-mixed and naive side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixReport {
    #[serde(rename = "mixedColor")]
    pub mixed_color: String,
    #[serde(rename = "linearColor")]
    pub linear_color: String,
    #[serde(rename = "mixedRGB")]
    pub mixed_rgb: Rgb8,
    #[serde(rename = "linearRGB")]
    pub linear_rgb: Rgb8,
}

impl MixReport {
    pub fn new(mixer: &Mixer, a: Rgb8, b: Rgb8, t: f64) -> Self {
        let mixed = mixer.lerp(a, b, t);
        let linear = lerp_rgb8(a, b, t);
        Self {
            mixed_color: to_hex(mixed),
            linear_color: to_hex(linear),
            mixed_rgb: mixed,
            linear_rgb: linear,
        }
    }
}

/// Parse the `mix` arguments and build the report.
pub fn mix(mixer: &Mixer, a: &str, b: &str, ratio: &str) -> Result<MixReport> {
    let a = parse_color(a).context("first color")?;
    let b = parse_color(b).context("second color")?;
    let t = parse_ratio(ratio)?;
    Ok(MixReport::new(mixer, a, b, t))
}

/// Parse one `COLOR:WEIGHT` blend component. The weight defaults to 1.
pub fn parse_blend_part(part: &str) -> Result<(Rgb8, f64)> {
    let (color, weight) = match part.rsplit_once(':') {
        Some((color, weight)) => (color, parse_ratio(weight)?),
        None => (part, 1.0),
    };
    Ok((parse_color(color)?, weight))
}

/// Mix several weighted colors in latent space.
pub fn blend(mixer: &Mixer, parts: &[String]) -> Result<Rgb8> {
    if parts.is_empty() {
        bail!("blend needs at least one color");
    }
    let colors = parts
        .iter()
        .map(|part| parse_blend_part(part).with_context(|| format!("blend component {:?}", part)))
        .collect::<Result<Vec<_>>>()?;
    Ok(mixer.mix_weighted(&colors))
}

/// Pack a raw LUT file into the compressed distribution form.
pub fn pack_lut(input: &Path) -> Result<String> {
    let bytes = std::fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    // Validate the payload before packing so a bad input is caught here.
    let lut = Lut::from_raw_bytes(&bytes)?;
    let packed = pack_raw_bytes(lut.payload())?;
    info!(
        input = %input.display(),
        bytes = bytes.len(),
        packed = packed.len(),
        "LUT packed"
    );
    Ok(packed)
}

/// Summary of a loaded table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LutSummary {
    pub loaded: bool,
    pub len: usize,
    pub payload_len: usize,
    /// Mean byte value of each weight plane, 0 when no table is loaded.
    pub plane_means: [f64; 3],
}

pub fn inspect(lut: &Lut) -> LutSummary {
    let mut plane_means = [0.0f64; 3];
    if !lut.is_empty() {
        let bytes = lut.as_bytes();
        for (mean, start) in plane_means.iter_mut().zip(PLANE_OFFSETS) {
            let sum: u64 = bytes[start..start + LUT_PLANE_LEN]
                .iter()
                .map(|&b| b as u64)
                .sum();
            *mean = sum as f64 / LUT_PLANE_LEN as f64;
        }
    }
    LutSummary {
        loaded: !lut.is_empty(),
        len: lut.len(),
        payload_len: lut.payload().len(),
        plane_means,
    }
}
