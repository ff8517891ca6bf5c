//! Error types for Pigmix consumers.

use thiserror::Error;

/// Errors raised while turning user input into colors and mix ratios.
#[derive(Error, Debug)]
pub enum PigmixError {
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),

    #[error("Invalid ratio: {0}")]
    InvalidRatio(String),

    #[error("Unknown pigment: {0}")]
    UnknownPigment(String),
}

/// Result type alias for Pigmix operations.
pub type Result<T> = std::result::Result<T, PigmixError>;
