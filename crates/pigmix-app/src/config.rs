//! Application configuration: which LUT to load.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pigmix_color::{Lut, LutFormat, LutSource};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Settings read from an optional JSON file and overridden by CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// LUT to mix with. Without one the engine runs on the polynomial alone.
    pub lut: Option<LutSource>,
}

impl AppConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&data)
            .with_context(|| format!("parsing config {}", path.display()))
    }

    /// Apply command line overrides. A path replaces the configured source;
    /// a format alone only changes the format of the configured source.
    pub fn with_overrides(mut self, lut_path: Option<PathBuf>, format: Option<LutFormat>) -> Self {
        if let Some(path) = lut_path {
            let format = format
                .or_else(|| self.lut.as_ref().map(|source| source.format))
                .unwrap_or_default();
            self.lut = Some(LutSource { path, format });
        } else if let (Some(format), Some(current)) = (format, self.lut.as_mut()) {
            current.format = format;
        }
        self
    }

    /// Load the configured LUT, or the empty table when none is configured.
    pub fn open_lut(&self) -> Result<Lut> {
        match &self.lut {
            Some(source) => Lut::load(source)
                .with_context(|| format!("loading LUT {}", source.path.display())),
            None => {
                warn!("No LUT configured, mixing with the reflectance polynomial only");
                Ok(Lut::empty())
            }
        }
    }
}
