//! Pigment weight look-up table: addressing, loading and packing.
//!
//! The table holds three planes of 64×64×64 bytes (one per pigment weight)
//! after a 192-byte lead-in. It is distributed either raw or as base64 text
//! of a zlib stream whose bytes are delta coded in rows of 64. A loaded table
//! is always padded with zeros so that the farthest trilinear corner of the
//! last plane stays inside the buffer.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::LoadError;

/// Grid resolution per RGB axis.
pub const LUT_GRID: usize = 64;
/// Bytes per weight plane.
pub const LUT_PLANE_LEN: usize = LUT_GRID * LUT_GRID * LUT_GRID;
/// Bytes preceding the first plane.
pub const LUT_LEAD_IN: usize = 192;
/// Length of the decoded payload.
pub const LUT_DATA_LEN: usize = LUT_LEAD_IN + 3 * LUT_PLANE_LEN;
/// Zero padding appended after the payload: the largest corner stride.
pub const LUT_PAD_LEN: usize = LUT_GRID * LUT_GRID + LUT_GRID + 1;
/// Length of a loaded table.
pub const LUT_PADDED_LEN: usize = LUT_DATA_LEN + LUT_PAD_LEN;

/// Mask applied to flat cell addresses (18 bits).
pub const CELL_MASK: usize = 0x3FFFF;

/// Byte offset of each weight plane.
pub const PLANE_OFFSETS: [usize; 3] = [
    LUT_LEAD_IN,
    LUT_LEAD_IN + LUT_PLANE_LEN,
    LUT_LEAD_IN + 2 * LUT_PLANE_LEN,
];

/// Offsets of the eight trilinear corners, ordered x fastest then y then z.
pub const CORNER_OFFSETS: [usize; 8] = [
    0,
    1,
    LUT_GRID,
    LUT_GRID + 1,
    LUT_GRID * LUT_GRID,
    LUT_GRID * LUT_GRID + 1,
    LUT_GRID * LUT_GRID + LUT_GRID,
    LUT_GRID * LUT_GRID + LUT_GRID + 1,
];

/// Delta coding restarts at every multiple of this index.
const DELTA_ROW: usize = 64;
const DELTA_BIAS: u8 = 127;

/// Flat address of grid cell `(ix, iy, iz)`.
#[inline]
pub fn cell_address(ix: usize, iy: usize, iz: usize) -> usize {
    (ix + iy * LUT_GRID + iz * LUT_GRID * LUT_GRID) & CELL_MASK
}

/// Distribution form of a LUT file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LutFormat {
    /// Base64 text of a zlib stream of delta coded bytes.
    #[default]
    Compressed,
    /// Decoded bytes, used as is.
    Raw,
}

impl FromStr for LutFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compressed" | "base64" => Ok(Self::Compressed),
            "raw" => Ok(Self::Raw),
            other => Err(format!("unknown LUT format: {}", other)),
        }
    }
}

/// Where to load a LUT from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LutSource {
    pub path: PathBuf,
    #[serde(default)]
    pub format: LutFormat,
}

/// Immutable pigment weight table.
///
/// Construct one with a loader and share it (usually behind an `Arc`) with
/// every encode and mix call. An empty table makes the encoder fall back to
/// zero pigment weights.
#[derive(Clone, PartialEq, Eq)]
pub struct Lut {
    data: Box<[u8]>,
}

impl fmt::Debug for Lut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lut").field("len", &self.data.len()).finish()
    }
}

impl Default for Lut {
    fn default() -> Self {
        Self::empty()
    }
}

impl Lut {
    /// The absent table.
    pub fn empty() -> Self {
        Self {
            data: Box::default(),
        }
    }

    /// Decode the compressed distribution form.
    pub fn from_compressed_base64(text: &str) -> Result<Self, LoadError> {
        let cleaned: Vec<u8> = text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        let compressed = STANDARD.decode(cleaned)?;

        let mut decoded = inflate(&compressed)?;
        delta_decode(&mut decoded);

        let lut = Self::from_decoded(decoded)?;
        info!(
            compressed = compressed.len(),
            "Loaded compressed pigment LUT"
        );
        Ok(lut)
    }

    /// Use an already decoded buffer.
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let lut = Self::from_decoded(bytes.to_vec())?;
        info!(bytes = bytes.len(), "Loaded raw pigment LUT");
        Ok(lut)
    }

    /// Read and decode a compressed LUT file.
    pub fn load_compressed_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_compressed_base64(&text)
    }

    /// Read a raw LUT file.
    pub fn load_raw_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_raw_bytes(&bytes)
    }

    /// Load from a configured source.
    pub fn load(source: &LutSource) -> Result<Self, LoadError> {
        info!(path = %source.path.display(), format = ?source.format, "Loading pigment LUT");
        match source.format {
            LutFormat::Compressed => Self::load_compressed_file(&source.path),
            LutFormat::Raw => Self::load_raw_file(&source.path),
        }
    }

    fn from_decoded(mut decoded: Vec<u8>) -> Result<Self, LoadError> {
        if decoded.len() < LUT_DATA_LEN {
            return Err(LoadError::Size {
                expected: LUT_DATA_LEN,
                got: decoded.len(),
            });
        }
        if decoded.len() > LUT_DATA_LEN {
            let trailing = &decoded[LUT_DATA_LEN..];
            if trailing.iter().any(|&b| b != 0) {
                warn!(
                    trailing = trailing.len(),
                    "Dropping non-zero bytes past the LUT payload"
                );
            } else {
                debug!(trailing = trailing.len(), "Dropping LUT padding");
            }
            decoded.truncate(LUT_DATA_LEN);
        }
        decoded.resize(LUT_PADDED_LEN, 0);
        Ok(Self {
            data: decoded.into_boxed_slice(),
        })
    }

    /// Whether this is the absent table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length including padding.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// The full padded buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The decoded payload without padding.
    pub fn payload(&self) -> &[u8] {
        &self.data[..self.data.len().min(LUT_DATA_LEN)]
    }

    /// Pack the payload back into the compressed distribution form.
    pub fn to_compressed_base64(&self) -> Result<String, LoadError> {
        pack_raw_bytes(self.payload())
    }

    /// Trilinearly sample the three weight planes at a clamped RGB point.
    /// Returns `[0, 0, 0]` for the absent table.
    pub fn sample(&self, rgb: [f64; 3]) -> [f64; 3] {
        if self.is_empty() {
            return [0.0; 3];
        }

        let x = rgb[0] * 63.0;
        let y = rgb[1] * 63.0;
        let z = rgb[2] * 63.0;

        let ix = x as usize;
        let iy = y as usize;
        let iz = z as usize;

        let tx = x - ix as f64;
        let ty = y - iy as f64;
        let tz = z - iz as f64;

        let xyz = cell_address(ix, iy, iz);

        let weights = [
            (1.0 - tx) * (1.0 - ty) * (1.0 - tz),
            tx * (1.0 - ty) * (1.0 - tz),
            (1.0 - tx) * ty * (1.0 - tz),
            tx * ty * (1.0 - tz),
            (1.0 - tx) * (1.0 - ty) * tz,
            tx * (1.0 - ty) * tz,
            (1.0 - tx) * ty * tz,
            tx * ty * tz,
        ];

        let mut c = [0.0f64; 3];
        for (w, corner) in weights.iter().zip(CORNER_OFFSETS) {
            for (plane, base) in PLANE_OFFSETS.iter().enumerate() {
                c[plane] += w * self.data[xyz + base + corner] as f64;
            }
        }
        c.map(|v| v / 255.0)
    }
}

/// Inflate a complete zlib stream of any decoded length. A stream that ends
/// before its trailer is an error, not a short read.
fn inflate(compressed: &[u8]) -> Result<Vec<u8>, LoadError> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(LUT_PADDED_LEN);
    loop {
        if out.len() == out.capacity() {
            out.reserve(64 * 1024);
        }
        let (in_before, out_before) = (inflater.total_in(), inflater.total_out());
        let status = inflater
            .decompress_vec(
                &compressed[in_before as usize..],
                &mut out,
                FlushDecompress::None,
            )
            .map_err(|e| LoadError::Decompress(e.into()))?;
        if status == Status::StreamEnd {
            return Ok(out);
        }
        // No progress with room left in `out` means the input ran dry.
        let stalled = inflater.total_in() == in_before && inflater.total_out() == out_before;
        if stalled && out.len() < out.capacity() {
            return Err(LoadError::Decompress(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "zlib stream ended before its trailer",
            )));
        }
    }
}

/// Undo the distribution delta coding in place.
pub fn delta_decode(bytes: &mut [u8]) {
    for i in 0..bytes.len() {
        let encoded = bytes[i].wrapping_sub(DELTA_BIAS);
        bytes[i] = if i % DELTA_ROW != 0 {
            bytes[i - 1].wrapping_add(encoded)
        } else {
            DELTA_BIAS.wrapping_add(encoded)
        };
    }
}

/// Apply the distribution delta coding in place. Inverse of [`delta_decode`].
pub fn delta_encode(bytes: &mut [u8]) {
    for i in (0..bytes.len()).rev() {
        if i % DELTA_ROW != 0 {
            bytes[i] = bytes[i].wrapping_sub(bytes[i - 1]).wrapping_add(DELTA_BIAS);
        }
    }
}

/// Produce the compressed distribution form of a decoded payload.
pub fn pack_raw_bytes(bytes: &[u8]) -> Result<String, LoadError> {
    let mut encoded = bytes.to_vec();
    delta_encode(&mut encoded);

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&encoded).map_err(LoadError::Compress)?;
    let compressed = encoder.finish().map_err(LoadError::Compress)?;
    debug!(
        decoded = bytes.len(),
        compressed = compressed.len(),
        "Packed LUT payload"
    );
    Ok(STANDARD.encode(compressed))
}
