//! Fixed-size RGBA drawing surface.

use crate::shapes::Shape;
use image::{Rgba, RgbaImage};

/// Transparent color used for the empty canvas
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A raster that shapes are painted onto in z-order.
///
/// Painting replaces pixels in the shape's footprint (no blending), and
/// pixels outside the canvas are dropped.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, TRANSPARENT),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Paint a shape in a solid color.
    ///
    /// Returns the number of pixels written after clipping.
    pub fn paint(&mut self, shape: &Shape, color: Rgba<u8>) -> usize {
        let mut written = 0;
        for (x, y) in shape.pixels() {
            if self.put(x, y, color) {
                written += 1;
            }
        }
        written
    }

    /// Set a single pixel; returns false if it lies outside the canvas.
    pub fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return false;
        }
        self.image.put_pixel(x as u32, y as u32, color);
        true
    }

    /// Color at a pixel, or `None` outside the canvas.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Hand over the finished raster.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
