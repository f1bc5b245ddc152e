//! Image decoding and normalization to RGB8.
//!
//! Every color model the decoder understands (indexed, grayscale, RGBA, 16-bit,
//! float) is flattened to 8-bit RGB. Alpha is dropped rather than blended.

use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::debug;

use crate::{Error, Raster, Result};

/// Decodes the image file at `path` into a [`Raster`].
///
/// The format is sniffed from the file content, so a mislabelled extension
/// still decodes.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path = path.as_ref();
    let decode_err = |source: ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    debug!(path = %path.display(), "Decoded image");
    Ok(normalize(img))
}

/// Decodes an in-memory encoded image into a [`Raster`].
pub fn decode(bytes: &[u8]) -> Result<Raster> {
    let img = image::load_from_memory(bytes).map_err(Error::DecodeData)?;
    Ok(normalize(img))
}

fn normalize(img: DynamicImage) -> Raster {
    debug!(
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Normalizing to RGB8"
    );
    Raster::from_image(img.to_rgb8())
}
