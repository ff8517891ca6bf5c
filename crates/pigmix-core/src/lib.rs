//! Pigmix Core - Foundation types for pigment mixing consumers
//!
//! This crate provides the small pieces that sit in front of the mixing
//! engine:
//! - Hex color parsing and formatting
//! - Mix ratio validation and naive RGB interpolation
//! - A palette of named artist pigments

pub mod color;
pub mod error;
pub mod pigment;

pub use color::{lerp_rgb8, parse_color, parse_hex, parse_ratio, to_hex, Rgb8};
pub use error::{PigmixError, Result};
pub use pigment::Pigment;
