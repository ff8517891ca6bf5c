//! Pigmix Color - Pigment mixing in a latent space, and the LUT it needs.

pub mod error;
pub mod latent;
pub mod lut;
pub mod mixer;
pub mod polynomial;
pub mod shared;
pub mod transfer;

pub use error::LoadError;
pub use latent::{
    float_rgb_to_latent, latent_to_float_rgb, latent_to_linear_float_rgb, latent_to_rgb,
    linear_float_rgb_to_latent, rgb_to_latent, Latent, LATENT_SIZE,
};
pub use lut::{
    delta_decode, delta_encode, pack_raw_bytes, Lut, LutFormat, LutSource, LUT_DATA_LEN,
    LUT_PADDED_LEN,
};
pub use mixer::{lerp, lerp_float, lerp_linear_float, mix_weighted, Mixer};
pub use shared::SharedLut;
pub use transfer::{linear_to_srgb, srgb_to_linear};
