//! Error types for the conversion pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting an image.
#[derive(Error, Debug)]
pub enum Error {
    /// Input could not be read or decoded as an image.
    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// In-memory image data could not be decoded.
    #[error("Failed to decode image data: {0}")]
    DecodeData(#[source] image::ImageError),

    /// Output could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Canvas dimensions must be positive.
    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer size mismatch.
    #[error("Pixel buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
