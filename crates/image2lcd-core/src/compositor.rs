//! Aspect-preserving fit and letterbox composition.

use image::imageops::{self, FilterType};
use tracing::{debug, info};

use crate::{Error, Raster, Result, CANVAS_HEIGHT, CANVAS_WIDTH};

/// Target canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

impl CanvasSize {
    /// Creates a canvas size, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of pixels on the canvas.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl std::fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Where and how large the source lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitGeometry {
    pub orig_width: u32,
    pub orig_height: u32,
    pub new_width: u32,
    pub new_height: u32,
    pub x_offset: u32,
    pub y_offset: u32,
}

impl FitGeometry {
    /// Computes the fit of a `src_width` x `src_height` image on `canvas`.
    ///
    /// Images that already fit are never upscaled. Larger images are scaled by
    /// `min(W / w, H / h)` with each side rounded to the nearest pixel.
    pub fn compute(src_width: u32, src_height: u32, canvas: CanvasSize) -> Self {
        let (new_width, new_height) = if src_width > canvas.width || src_height > canvas.height {
            let width_ratio = f64::from(canvas.width) / f64::from(src_width);
            let height_ratio = f64::from(canvas.height) / f64::from(src_height);
            let scale = width_ratio.min(height_ratio);
            (
                scale_dim(src_width, scale, canvas.width),
                scale_dim(src_height, scale, canvas.height),
            )
        } else {
            (src_width, src_height)
        };

        Self {
            orig_width: src_width,
            orig_height: src_height,
            new_width,
            new_height,
            x_offset: (canvas.width - new_width) / 2,
            y_offset: (canvas.height - new_height) / 2,
        }
    }

    /// Returns true if the source must be resampled.
    pub fn needs_resize(&self) -> bool {
        self.new_width != self.orig_width || self.new_height != self.orig_height
    }
}

fn scale_dim(dim: u32, scale: f64, limit: u32) -> u32 {
    ((f64::from(dim) * scale).round() as u32).clamp(1, limit)
}

/// Fixed-size black canvas that a fitted raster is pasted onto.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    raster: Raster,
}

impl Canvas {
    /// Creates a black canvas.
    pub fn new(size: CanvasSize) -> Self {
        Self {
            raster: Raster::new(size.width, size.height),
        }
    }

    /// Returns the canvas size.
    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.raster.width(),
            height: self.raster.height(),
        }
    }

    /// Gets a pixel at the given coordinates.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.raster.get_pixel(x, y)
    }

    /// Returns the underlying raster.
    pub fn as_raster(&self) -> &Raster {
        &self.raster
    }

    /// Copies `src` onto the canvas with its top-left corner at `(x, y)`.
    ///
    /// Anything falling outside the canvas is clipped.
    pub fn paste(&mut self, src: &Raster, x: u32, y: u32) {
        let (canvas_w, canvas_h) = self.raster.dimensions();
        if x >= canvas_w || y >= canvas_h {
            return;
        }
        let copy_w = src.width().min(canvas_w - x) as usize;
        let copy_h = src.height().min(canvas_h - y);

        let stride = canvas_w as usize * 3;
        let data = self.raster.data_mut();
        for (dy, row) in src.rows().take(copy_h as usize).enumerate() {
            let start = (y as usize + dy) * stride + x as usize * 3;
            data[start..start + copy_w * 3].copy_from_slice(&row[..copy_w * 3]);
        }
    }
}

/// Fits `raster` into `size` and centers it on a black canvas.
pub fn compose(raster: &Raster, size: CanvasSize) -> Canvas {
    let geometry = FitGeometry::compute(raster.width(), raster.height(), size);
    debug!(?geometry, canvas = %size, "Computed fit geometry");

    let mut canvas = Canvas::new(size);
    if geometry.needs_resize() {
        let resized = imageops::resize(
            &raster.to_image(),
            geometry.new_width,
            geometry.new_height,
            FilterType::Lanczos3,
        );
        info!(
            "Image resized from {}x{} to {}x{}",
            geometry.orig_width, geometry.orig_height, geometry.new_width, geometry.new_height
        );
        canvas.paste(
            &Raster::from_image(resized),
            geometry.x_offset,
            geometry.y_offset,
        );
    } else {
        canvas.paste(raster, geometry.x_offset, geometry.y_offset);
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: u32, height: u32) -> CanvasSize {
        CanvasSize::new(width, height).unwrap()
    }

    #[test]
    fn test_canvas_size_default_and_validation() {
        assert_eq!(CanvasSize::default(), size(320, 240));
        assert!(matches!(
            CanvasSize::new(0, 240),
            Err(Error::InvalidDimensions { width: 0, height: 240 })
        ));
        assert_eq!(CanvasSize::default().to_string(), "320x240");
    }

    #[test]
    fn test_fit_small_image_is_not_upscaled() {
        let g = FitGeometry::compute(100, 100, CanvasSize::default());
        assert!(!g.needs_resize());
        assert_eq!((g.new_width, g.new_height), (100, 100));
        assert_eq!((g.x_offset, g.y_offset), (110, 70));
    }

    #[test]
    fn test_fit_exact_half() {
        let g = FitGeometry::compute(640, 480, CanvasSize::default());
        assert!(g.needs_resize());
        assert_eq!((g.new_width, g.new_height), (320, 240));
        assert_eq!((g.x_offset, g.y_offset), (0, 0));
    }

    #[test]
    fn test_fit_wide_and_tall() {
        // Width bound: 1000x100 -> 320x32
        let g = FitGeometry::compute(1000, 100, CanvasSize::default());
        assert_eq!((g.new_width, g.new_height), (320, 32));
        assert_eq!((g.x_offset, g.y_offset), (0, 104));

        // Height bound: 100x1000 -> 24x240
        let g = FitGeometry::compute(100, 1000, CanvasSize::default());
        assert_eq!((g.new_width, g.new_height), (24, 240));
        assert_eq!((g.x_offset, g.y_offset), (148, 0));
    }

    #[test]
    fn test_fit_one_dimension_over() {
        // Only the width exceeds the canvas; height shrinks with it
        let g = FitGeometry::compute(400, 200, CanvasSize::default());
        assert_eq!((g.new_width, g.new_height), (320, 160));
        assert_eq!((g.x_offset, g.y_offset), (0, 40));
    }

    #[test]
    fn test_odd_padding_goes_bottom_right() {
        let g = FitGeometry::compute(101, 99, CanvasSize::default());
        assert_eq!((g.x_offset, g.y_offset), (109, 70));
        // 109 left, 110 right; 70 top, 71 bottom
        assert_eq!(320 - 101 - g.x_offset, 110);
        assert_eq!(240 - 99 - g.y_offset, 71);
    }

    #[test]
    fn test_fit_preserves_aspect_and_touches_edge() {
        let canvas = CanvasSize::default();
        for &(w, h) in &[(641, 480), (1920, 1080), (333, 1001), (5000, 7), (321, 241)] {
            let g = FitGeometry::compute(w, h, canvas);
            assert!(g.new_width <= canvas.width && g.new_height <= canvas.height);
            assert!(g.new_width == canvas.width || g.new_height == canvas.height);

            let expected_h = f64::from(g.new_width) * f64::from(h) / f64::from(w);
            let expected_w = f64::from(g.new_height) * f64::from(w) / f64::from(h);
            assert!(
                (expected_h - f64::from(g.new_height)).abs() <= 1.0
                    || (expected_w - f64::from(g.new_width)).abs() <= 1.0,
                "{w}x{h} -> {}x{}",
                g.new_width,
                g.new_height
            );
        }
    }

    #[test]
    fn test_compose_small_is_pixel_exact() {
        let mut src = Raster::new(5, 3);
        for y in 0..3 {
            for x in 0..5 {
                src.set_pixel(x, y, [x as u8 * 40, y as u8 * 80, 7]);
            }
        }

        let canvas = compose(&src, size(16, 8));
        assert_eq!(canvas.size(), size(16, 8));
        let (ox, oy) = (5, 2);
        for y in 0..8 {
            for x in 0..16 {
                let inside = (ox..ox + 5).contains(&x) && (oy..oy + 3).contains(&y);
                let expected = if inside {
                    src.get_pixel(x - ox, y - oy).unwrap()
                } else {
                    [0, 0, 0]
                };
                assert_eq!(canvas.get_pixel(x, y), Some(expected), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_compose_downscale_fills_canvas() {
        let src = Raster::filled(640, 480, [255, 0, 0]);
        let canvas = compose(&src, CanvasSize::default());
        assert_eq!(canvas.size(), CanvasSize::default());
        assert_eq!(canvas.get_pixel(0, 0), Some([255, 0, 0]));
        assert_eq!(canvas.get_pixel(160, 120), Some([255, 0, 0]));
        assert_eq!(canvas.get_pixel(319, 239), Some([255, 0, 0]));
    }

    #[test]
    fn test_compose_downscale_letterboxes() {
        let src = Raster::filled(64, 16, [0, 255, 0]);
        let canvas = compose(&src, size(16, 16));
        // 64x16 -> 16x4 at y offset 6
        assert_eq!(canvas.get_pixel(8, 5), Some([0, 0, 0]));
        assert_eq!(canvas.get_pixel(8, 7), Some([0, 255, 0]));
        assert_eq!(canvas.get_pixel(8, 10), Some([0, 0, 0]));
    }

    #[test]
    fn test_paste_clips() {
        let mut canvas = Canvas::new(size(4, 4));
        canvas.paste(&Raster::filled(3, 3, [1, 1, 1]), 2, 2);
        assert_eq!(canvas.get_pixel(3, 3), Some([1, 1, 1]));
        assert_eq!(canvas.get_pixel(1, 1), Some([0, 0, 0]));
        canvas.paste(&Raster::filled(3, 3, [2, 2, 2]), 9, 9);
        assert_eq!(canvas.size(), size(4, 4));
    }
}
