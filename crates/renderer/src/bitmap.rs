//! RGBA pixel buffers and the surface contract they are drawn onto.

use crate::colour::Color;
use crate::error::Result;
use crate::png;
use grid_common::Rect;

/// An RGBA bitmap, row-major, 4 bytes per pixel, initially transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u8; width * height * 4],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Set one pixel. Writes outside the bitmap are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, colour: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) * 4;
        self.pixels[idx] = colour.r;
        self.pixels[idx + 1] = colour.g;
        self.pixels[idx + 2] = colour.b;
        self.pixels[idx + 3] = colour.a;
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        Some(Color::new(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ))
    }

    /// Fill the half-open pixel rectangle `[x0, x1) x [y0, y1)`, clipped.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, colour: Color) {
        for y in y0..y1.min(self.height) {
            for x in x0..x1.min(self.width) {
                self.set_pixel(x, y, colour);
            }
        }
    }

    /// Number of pixels with non-zero alpha.
    pub fn painted_pixels(&self) -> usize {
        self.pixels.chunks_exact(4).filter(|p| p[3] != 0).count()
    }

    /// Encode as PNG, row 0 at the top of the image.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        png::create_png_auto(&self.pixels, self.width, self.height)
    }
}

/// A surface that displays finished bitmaps.
pub trait RenderSurface {
    /// Draw `bitmap` stretched over `dest`, in device units.
    fn draw_bitmap(&mut self, bitmap: &Bitmap, dest: Rect) -> Result<()>;
}
