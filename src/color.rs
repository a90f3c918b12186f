//! Color and coverage types.
//!
//! [`Rgba`] is the production color a host paints with. [`Ink`] pairs a color
//! with the fractional coverage a rasterizer assigned to one pixel.

use crate::scalar::clamp_unit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Opaque gray for a level in `[0, 1]` (0 = black, 1 = white).
    ///
    /// Levels outside the unit interval are clamped.
    #[must_use]
    pub fn gray(level: f64) -> Self {
        let v = (clamp_unit(level) * 255.0).round() as u8;
        Self::rgb(v, v, v)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Scale alpha by a coverage factor in `[0, 1]`.
    #[must_use]
    pub fn with_coverage(self, coverage: f64) -> Self {
        let a = (f64::from(self.a) * clamp_unit(coverage)).round() as u8;
        self.with_alpha(a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Rec. 709 luminance in `[0, 1]`, ignoring alpha.
    #[must_use]
    pub fn luminance(self) -> f64 {
        0.2126 * f64::from(self.r) / 255.0
            + 0.7152 * f64::from(self.g) / 255.0
            + 0.0722 * f64::from(self.b) / 255.0
    }
}

/// A color together with the coverage assigned to one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ink {
    /// Color to paint.
    pub color: Rgba,
    /// Fraction of the pixel covered, in `[0, 1]`.
    pub coverage: f64,
}

impl Ink {
    /// Full-coverage ink.
    #[must_use]
    pub const fn solid(color: Rgba) -> Self {
        Self { color, coverage: 1.0 }
    }

    /// Ink with fractional coverage, clamped to `[0, 1]`.
    #[must_use]
    pub fn partial(color: Rgba, coverage: f64) -> Self {
        Self { color, coverage: clamp_unit(coverage) }
    }

    /// Debug ink: the level is rendered as an opaque gray instead of blended.
    #[must_use]
    pub fn gray(level: f64) -> Self {
        Self::solid(Rgba::gray(level))
    }

    /// True if this ink covers its pixel completely.
    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.coverage >= 1.0
    }

    /// The color with its alpha scaled by the coverage.
    #[must_use]
    pub fn blended(&self) -> Rgba {
        self.color.with_coverage(self.coverage)
    }
}
