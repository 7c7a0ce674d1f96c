//! Error type shared by the renderer and the generator.

use std::path::PathBuf;

/// Hint printed when the raster backend cannot be used.
pub const INSTALL_HINT: &str = "The raster backend could not allocate a drawing surface. \
     Free some memory and run the generator again.";

/// Everything that can stop an icon generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The raster canvas could not be acquired at startup.
    #[error("raster canvas backend is unavailable: {reason}")]
    MissingCapability { reason: String },

    /// The requested edge length cannot be rasterized.
    #[error("cannot render an icon of size {0}px")]
    InvalidSize(u32),

    /// Encoding or writing an icon file failed.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteError,
    },

    /// The extension manifest snippet could not be (de)serialized.
    #[error("icon manifest JSON error")]
    Manifest(#[from] serde_json::Error),
}

/// Underlying cause of an [`Error::Write`].
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error(transparent)]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if this is a startup capability failure.
    pub fn is_missing_capability(&self) -> bool {
        matches!(self, Self::MissingCapability { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
