//! Errors for optional inputs (fonts, screenshot, logo)

use std::path::PathBuf;
use thiserror::Error;

/// Why an optional asset could not be used
///
/// These never abort generation. Each one is turned into a visual fallback
/// and reported as a [`crate::pipeline::Diagnostic`].
#[derive(Error, Debug)]
pub enum AssetError {
    /// Nothing exists at the configured path
    #[error("{} does not exist", path.display())]
    Missing { path: PathBuf },

    /// The file exists but could not be read
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a decodable raster image
    #[error("could not decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The file was read but is not a usable font face
    #[error("invalid font {}: {source}", path.display())]
    InvalidFont {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },
}

impl AssetError {
    pub fn is_missing(&self) -> bool {
        matches!(self, AssetError::Missing { .. })
    }
}
