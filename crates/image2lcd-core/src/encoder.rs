//! Canvas to RGB565 byte buffer.

use crate::rgb565::rgb888_to_rgb565;
use crate::{compose, Canvas, CanvasSize, Raster, BYTES_PER_PIXEL};

/// Packed RGB565 pixels, high byte first, in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl OutputBuffer {
    /// Returns the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Length in bytes, always `width * height * 2`.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterates over scanlines, each `width * 2` bytes.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let stride = (self.width as usize * BYTES_PER_PIXEL).max(1);
        self.bytes.chunks_exact(stride)
    }

    /// Reassembles the RGB565 value at `(x, y)` from its byte pair.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some(u16::from_be_bytes([self.bytes[idx], self.bytes[idx + 1]]))
    }
}

/// Packs every canvas pixel to RGB565, top to bottom, left to right.
pub fn encode(canvas: &Canvas) -> OutputBuffer {
    let raster = canvas.as_raster();
    let mut bytes = Vec::with_capacity(canvas.size().pixel_count() * BYTES_PER_PIXEL);
    for px in raster.as_rgb8().chunks_exact(3) {
        let packed = rgb888_to_rgb565(px[0], px[1], px[2]);
        bytes.extend_from_slice(&packed.to_be_bytes());
    }

    OutputBuffer {
        bytes,
        width: raster.width(),
        height: raster.height(),
    }
}

/// Fits `raster` onto a canvas of `size` and packs it. Performs no I/O.
pub fn convert(raster: &Raster, size: CanvasSize) -> OutputBuffer {
    encode(&compose(raster, size))
}
