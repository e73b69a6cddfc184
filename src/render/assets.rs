//! Attempt-or-default loading of optional inputs

use image::{DynamicImage, ImageReader};
use std::path::Path;

use crate::error::AssetError;

/// Outcome of trying to acquire an optional asset
#[derive(Debug)]
pub enum Acquired<T> {
    Loaded(T),
    Fallback(AssetError),
}

impl<T> Acquired<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Acquired::Loaded(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Acquired<U> {
        match self {
            Acquired::Loaded(v) => Acquired::Loaded(f(v)),
            Acquired::Fallback(e) => Acquired::Fallback(e),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Acquired::Loaded(v) => Some(v),
            Acquired::Fallback(_) => None,
        }
    }
}

impl<T> From<Result<T, AssetError>> for Acquired<T> {
    fn from(result: Result<T, AssetError>) -> Self {
        match result {
            Ok(v) => Acquired::Loaded(v),
            Err(e) => Acquired::Fallback(e),
        }
    }
}

/// Read a whole file, distinguishing "absent" from "unreadable"
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing {
            path: path.to_path_buf(),
        });
    }
    std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Open and decode a raster image, guessing the format from its content
pub fn load_image(path: &Path) -> Acquired<DynamicImage> {
    decode_image(path).into()
}

fn decode_image(path: &Path) -> Result<DynamicImage, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing {
            path: path.to_path_buf(),
        });
    }
    let io_err = |source: std::io::Error| AssetError::Io {
        path: path.to_path_buf(),
        source,
    };
    ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?
        .decode()
        .map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })
}
