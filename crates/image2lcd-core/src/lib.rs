//! Image to LCD array conversion library.
//!
//! Turns an arbitrary raster image into a fixed-size RGB565 pixel buffer for
//! memory-mapped LCD controllers and emits it as a C `static const unsigned char`
//! array. The pipeline is strictly linear: decode, fit and letterbox onto a
//! black canvas, pack each pixel to RGB565, serialize.

pub mod c_array;
pub mod compositor;
pub mod encoder;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod raster;
pub mod rgb565;

pub use compositor::{compose, Canvas, CanvasSize, FitGeometry};
pub use encoder::{convert, encode, OutputBuffer};
pub use error::{Error, Result};
pub use pipeline::{convert_file, default_output_path, ConvertOptions};
pub use raster::Raster;

/// Default canvas dimensions.
pub const CANVAS_WIDTH: u32 = 320;
pub const CANVAS_HEIGHT: u32 = 240;

/// Bytes per packed RGB565 pixel.
pub const BYTES_PER_PIXEL: usize = 2;
