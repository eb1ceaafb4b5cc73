//! Art background loading and caching.
//!
//! An art file is read once, decoded from CP437, rasterized into a fixed grid
//! and serialized to styled lines. The lines are immutable afterwards and are
//! reused by every frame that shows the art.

use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::codepage;
use crate::config::ArtConfig;
use crate::render::serialize_lines;
use crate::terminal::{rasterize, Grid};

/// Errors that can occur while loading an art file.
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    #[error("Failed to read art file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A rasterized art file, ready to be placed on a canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtBackground {
    width: usize,
    lines: Vec<String>,
}

impl ArtBackground {
    /// Read, decode and rasterize an art file.
    ///
    /// # Errors
    /// Returns [`ArtError::Read`] if the file cannot be read. Decoding and
    /// rasterizing never fail.
    pub fn load(path: impl AsRef<Path>, config: &ArtConfig) -> Result<Self, ArtError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ArtError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(target: "ansiart::art", path = %path.display(), bytes = bytes.len(), "loaded art file");
        Ok(Self::from_bytes(&bytes, config))
    }

    /// Decode and rasterize art that is already in memory.
    pub fn from_bytes(bytes: &[u8], config: &ArtConfig) -> Self {
        let bytes = if config.strip_sauce {
            codepage::strip_sauce(bytes)
        } else {
            bytes
        };
        let text = codepage::decode(bytes);
        Self::from_grid(&rasterize(&text, config.width, config.height))
    }

    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            lines: serialize_lines(grid),
        }
    }

    /// Intended width of every line, in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Serialized rows, each ending in a reset.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Lazily loaded art background.
///
/// The first call to [`ArtCache::get`] loads the file; later calls return
/// the same result. A failed load is logged once and remembered, so frames
/// keep rendering without art instead of retrying every frame.
#[derive(Debug)]
pub struct ArtCache {
    path: PathBuf,
    config: ArtConfig,
    art: OnceCell<Option<ArtBackground>>,
}

impl ArtCache {
    pub fn new(path: impl Into<PathBuf>, config: ArtConfig) -> Self {
        Self {
            path: path.into(),
            config,
            art: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cached art, loading it on first use.
    pub fn get(&self) -> Option<&ArtBackground> {
        self.art
            .get_or_init(|| match ArtBackground::load(&self.path, &self.config) {
                Ok(art) => Some(art),
                Err(e) => {
                    tracing::warn!(target: "ansiart::art", error = %e, "rendering without art background");
                    None
                }
            })
            .as_ref()
    }
}
