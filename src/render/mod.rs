//! Rasterization algorithms.
//!
//! Converts continuous primitives into pixel plots written through a
//! [`PixelSink`]. Rasterizers never fail: degenerate input resolves to a
//! single pixel or to nothing.
//!
//! # Algorithms
//!
//! - **DDA**: floating-point line stepping along the dominant axis
//! - **Bresenham's Line**: integer error-term line drawing
//! - **Wu's Anti-aliased Line**: per-column coverage pairs
//! - **Midpoint Circle**: eight-way symmetric outline
//! - **Direct conics**: ellipse, hyperbola and parabola by explicit evaluation
//! - **Parametric curves**: cubic Hermite, Bezier (Bernstein form) and uniform
//!   B-spline (Cox–de Boor)
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

pub mod conic;
pub mod debug;
pub mod line;
pub mod parametric;

use crate::color::Rgba;
use crate::sink::PixelSink;

pub use conic::{
    draw_circle, draw_ellipse, draw_hyperbola, draw_parabola, Circle, Direction, Ellipse,
    Hyperbola, Parabola,
};
pub use debug::draw_line_debug;
pub use line::{draw_line_bresenham, draw_line_dda, draw_line_wu, LineAlgorithm};
pub use parametric::{
    draw_bezier, draw_bspline, draw_hermite, BSpline, Bezier, Hermite, BSPLINE_ORDER,
    DEFAULT_STEPS,
};

/// Trait for primitives that can rasterize themselves.
pub trait Drawable {
    /// Draw this primitive through a sink.
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba);

    /// Draw this primitive with anti-aliasing if supported.
    fn draw_aa<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        // Default to non-AA drawing
        self.draw(sink, color);
    }
}
