//! Owned RGB8 raster.

use image::RgbImage;

use crate::{Error, Result};

/// Bytes per RGB8 pixel.
const CHANNELS: usize = 3;

/// Row-major grid of RGB8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Pixel data, 3 bytes per pixel.
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Raster {
    /// Creates a new raster initialized to black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; width as usize * height as usize * CHANNELS],
            width,
            height,
        }
    }

    /// Creates a raster filled with a single color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * CHANNELS)
            .collect();
        Self {
            data,
            width,
            height,
        }
    }

    /// Wraps an existing RGB8 buffer.
    pub fn from_rgb8(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the width of the raster.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the raster.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the raw RGB8 bytes.
    pub fn as_rgb8(&self) -> &[u8] {
        &self.data
    }

    /// Gets a pixel at the given coordinates.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let idx = self.index(x, y)?;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Sets a pixel at the given coordinates. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx..idx + CHANNELS].copy_from_slice(&rgb);
        }
    }

    /// Iterates over rows of RGB8 bytes, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on zero, an empty raster has no rows anyway
        let stride = (self.width as usize * CHANNELS).max(1);
        self.data.chunks_exact(stride)
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize * self.width as usize + x as usize) * CHANNELS)
        } else {
            None
        }
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub(crate) fn from_image(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            data: img.into_raw(),
            width,
            height,
        }
    }

    pub(crate) fn to_image(&self) -> RgbImage {
        // Length is checked at construction
        RgbImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| RgbImage::new(self.width, self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let raster = Raster::new(4, 3);
        assert_eq!(raster.dimensions(), (4, 3));
        assert_eq!(raster.as_rgb8().len(), 36);
        assert!(raster.as_rgb8().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_ops() {
        let mut raster = Raster::new(8, 8);
        raster.set_pixel(3, 5, [10, 20, 30]);
        assert_eq!(raster.get_pixel(3, 5), Some([10, 20, 30]));
        assert_eq!(raster.get_pixel(5, 3), Some([0, 0, 0]));
        assert_eq!(raster.get_pixel(8, 0), None);

        // Ignored, not a panic
        raster.set_pixel(100, 100, [1, 2, 3]);
    }

    #[test]
    fn test_from_rgb8_size_mismatch() {
        let err = Raster::from_rgb8(2, 2, vec![0; 11]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSize {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn test_filled_and_rows() {
        let raster = Raster::filled(2, 3, [1, 2, 3]);
        assert_eq!(raster.rows().count(), 3);
        for row in raster.rows() {
            assert_eq!(row, &[1, 2, 3, 1, 2, 3]);
        }
    }

    #[test]
    fn test_image_conversion() {
        let mut raster = Raster::new(3, 2);
        raster.set_pixel(2, 1, [255, 128, 0]);
        let img = raster.to_image();
        assert_eq!(img.get_pixel(2, 1).0, [255, 128, 0]);
        assert_eq!(Raster::from_image(img), raster);
    }
}
