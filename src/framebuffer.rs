//! Reference pixel surface.
//!
//! A host normally owns its own surface and implements [`PixelSink`] for it.
//! [`Framebuffer`] is the in-crate one, a row-major grid of [`Rgba`]. Plots
//! outside the grid are dropped. Full coverage overwrites; fractional coverage
//! is composited with the "over" operator.

use crate::color::{Ink, Rgba};
use crate::error::{Error, Result};
use crate::sink::PixelSink;

/// Row-major RGBA pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Framebuffer {
    /// Create a transparent framebuffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(600, 400).unwrap();
    /// assert_eq!(fb.width(), 600);
    /// assert_eq!(fb.height(), 400);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self { width, height, pixels: vec![Rgba::TRANSPARENT; len] })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row by row.
    #[must_use]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    /// Pixel at `(x, y)`, or `None` outside the grid.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite the pixel at `(x, y)`. Outside the grid this is a no-op.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Composite `color` over the pixel at `(x, y)`.
    ///
    /// `out = src·αs + dst·αd·(1 - αs)`, normalized by the output alpha.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = over(color, self.pixels[i]);
        }
    }

    /// Number of pixels that differ from `background`.
    #[must_use]
    pub fn count_painted(&self, background: Rgba) -> usize {
        self.pixels.iter().filter(|&&px| px != background).count()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}

fn over(src: Rgba, dst: Rgba) -> Rgba {
    let src_a = f64::from(src.a) / 255.0;
    let dst_a = f64::from(dst.a) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return dst;
    }

    let channel = |s: u8, d: u8| {
        let mixed = (f64::from(s) * src_a + f64::from(d) * dst_a * (1.0 - src_a)) / out_a;
        mixed.round() as u8
    };
    Rgba::new(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        (out_a * 255.0).round() as u8,
    )
}

impl PixelSink for Framebuffer {
    fn plot(&mut self, x: i32, y: i32, ink: Ink) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if ink.is_solid() {
            self.set_pixel(x, y, ink.color);
        } else if ink.coverage > 0.0 {
            self.blend_pixel(x, y, ink.blended());
        }
    }
}
