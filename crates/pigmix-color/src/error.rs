//! LUT loading errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid base64 in LUT source: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("failed to decompress LUT stream: {0}")]
    Decompress(#[source] std::io::Error),
    #[error("failed to compress LUT stream: {0}")]
    Compress(#[source] std::io::Error),
    /// The decoded payload is shorter than `LUT_DATA_LEN`. The sampler reads
    /// up to the last byte of the third plane, so a short table is refused
    /// at load time rather than indexed out of bounds while mixing.
    #[error("LUT payload too short: expected at least {expected} bytes, got {got}")]
    Size { expected: usize, got: usize },
    #[error("failed to read LUT file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
