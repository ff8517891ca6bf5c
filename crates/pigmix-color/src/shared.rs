//! Replaceable LUT slot for long-running consumers.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::error::LoadError;
use crate::lut::Lut;
use crate::mixer::Mixer;

/// Holds the current table and swaps it atomically on reload.
///
/// Readers take a snapshot (`Arc<Lut>`) and mix without holding the lock. A
/// reload decodes the new table first and only replaces the current one when
/// decoding succeeded.
#[derive(Debug, Default)]
pub struct SharedLut {
    current: RwLock<Arc<Lut>>,
}

impl SharedLut {
    pub fn new(lut: Lut) -> Self {
        Self {
            current: RwLock::new(Arc::new(lut)),
        }
    }

    /// The table in effect right now.
    pub fn snapshot(&self) -> Arc<Lut> {
        self.current.read().clone()
    }

    /// A mixer bound to the current table.
    pub fn mixer(&self) -> Mixer {
        Mixer::new(self.snapshot())
    }

    /// Install a table, returning the previous one.
    pub fn replace(&self, lut: Lut) -> Arc<Lut> {
        std::mem::replace(&mut *self.current.write(), Arc::new(lut))
    }

    pub fn reload_compressed(&self, text: &str) -> Result<(), LoadError> {
        self.reload_with(|| Lut::from_compressed_base64(text))
    }

    pub fn reload_raw(&self, bytes: &[u8]) -> Result<(), LoadError> {
        self.reload_with(|| Lut::from_raw_bytes(bytes))
    }

    fn reload_with(&self, load: impl FnOnce() -> Result<Lut, LoadError>) -> Result<(), LoadError> {
        match load() {
            Ok(lut) => {
                self.replace(lut);
                info!("Pigment LUT replaced");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "LUT reload failed, keeping current table");
                Err(e)
            }
        }
    }
}
