//! The pixel sink seam.
//!
//! Every rasterizer writes through [`PixelSink::plot`] and nothing else. The
//! sink owns the surface and is responsible for dropping coordinates that fall
//! outside it; rasterizers never bounds-check.

use crate::color::Ink;
use crate::geometry::Point;
use std::collections::BTreeSet;

/// Write target for rasterizers.
pub trait PixelSink {
    /// Paint one pixel. Out-of-range coordinates must be ignored silently.
    fn plot(&mut self, x: i32, y: i32, ink: Ink);
}

impl<F> PixelSink for F
where
    F: FnMut(i32, i32, Ink),
{
    #[inline]
    fn plot(&mut self, x: i32, y: i32, ink: Ink) {
        self(x, y, ink);
    }
}

/// Plot a position computed in `i64`, dropping it if it falls outside the
/// `i32` grid.
#[inline]
pub(crate) fn plot_wide<S: PixelSink + ?Sized>(sink: &mut S, x: i64, y: i64, ink: Ink) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        sink.plot(x, y, ink);
    }
}

/// One recorded plot call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    /// Pixel position.
    pub point: Point,
    /// Ink the rasterizer emitted for it.
    pub ink: Ink,
}

/// A sink that records every plot call in order.
///
/// Useful for inspecting exactly what a rasterizer emitted, including repeated
/// pixels and zero-coverage caps that a framebuffer would hide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelTrace {
    plots: Vec<Plot>,
}

impl PixelTrace {
    /// Create an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of plot calls recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plots.len()
    }

    /// True if nothing was plotted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// All recorded plot calls, in emission order.
    #[must_use]
    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    /// Plotted positions in emission order (duplicates kept).
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        self.plots.iter().map(|p| p.point).collect()
    }

    /// Distinct plotted positions as `(x, y)` pairs, sorted.
    #[must_use]
    pub fn pixel_set(&self) -> BTreeSet<(i32, i32)> {
        self.plots.iter().map(|p| (p.point.x, p.point.y)).collect()
    }

    /// Coverage values in emission order.
    #[must_use]
    pub fn coverages(&self) -> Vec<f64> {
        self.plots.iter().map(|p| p.ink.coverage).collect()
    }

    /// First recorded plot, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Plot> {
        self.plots.first()
    }

    /// Last recorded plot, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Plot> {
        self.plots.last()
    }

    /// True if `(x, y)` was plotted at least once.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.plots.iter().any(|p| p.point.x == x && p.point.y == y)
    }

    /// Forget all recorded plots.
    pub fn clear(&mut self) {
        self.plots.clear();
    }
}

impl PixelSink for PixelTrace {
    fn plot(&mut self, x: i32, y: i32, ink: Ink) {
        self.plots.push(Plot { point: Point::new(x, y), ink });
    }
}
