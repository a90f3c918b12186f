//! Parametric curve rasterizers: cubic Hermite, Bezier and uniform B-spline.
//!
//! Curves are sampled at evenly spaced parameter values and each sample is
//! snapped to a pixel. There is no arc-length reparametrization, so pixel
//! density follows the curve's parametric speed: fast stretches leave gaps,
//! slow stretches plot the same pixel repeatedly.
//!
//! # References
//!
//! - de Boor, C. (1972). "On calculating with B-splines." *Journal of
//!   Approximation Theory*, 6(1), 50-62.

use super::Drawable;
use crate::color::{Ink, Rgba};
use crate::curve::CurveKind;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::scalar::{ipart, round};
use crate::sink::{plot_wide, PixelSink};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default samples per unit of parameter range (a step of 0.01).
pub const DEFAULT_STEPS: u32 = 100;

/// Cox–de Boor order the B-spline recursion starts from.
pub const BSPLINE_ORDER: usize = 3;

/// Minimum control points for a Bezier curve.
pub const BEZIER_MIN_POINTS: usize = 2;

/// Minimum control points for a B-spline; below this the sampled range
/// `[2, n]` is empty.
pub const BSPLINE_MIN_POINTS: usize = 4;

/// First parameter value sampled on a B-spline.
const BSPLINE_T_START: f64 = (BSPLINE_ORDER - 1) as f64;

// ============================================================================
// Parameters
// ============================================================================

/// Cubic Hermite curve.
///
/// The tangents are taken as absolute points and weighted directly by the
/// tangent basis functions, not as vectors relative to the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hermite {
    /// Curve start.
    pub start: Point,
    /// Curve end.
    pub end: Point,
    /// Start tangent point.
    pub start_tangent: Point,
    /// End tangent point.
    pub end_tangent: Point,
    /// Samples per unit of `t`.
    pub steps: u32,
}

impl Hermite {
    /// Create a Hermite curve sampled at the default density.
    #[must_use]
    pub const fn new(start: Point, end: Point, start_tangent: Point, end_tangent: Point) -> Self {
        Self { start, end, start_tangent, end_tangent, steps: DEFAULT_STEPS }
    }

    /// Set the sampling density.
    #[must_use]
    pub const fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }
}

/// Bezier curve of degree `control_points.len() - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bezier {
    /// Control polygon.
    pub control_points: Vec<Point>,
    /// Samples per unit of `t`.
    pub steps: u32,
}

impl Bezier {
    /// Create a Bezier curve sampled at the default density.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewControlPoints`] for fewer than two points.
    pub fn new(control_points: Vec<Point>) -> Result<Self> {
        check_count(CurveKind::Bezier, BEZIER_MIN_POINTS, control_points.len())?;
        Ok(Self { control_points, steps: DEFAULT_STEPS })
    }

    /// Set the sampling density.
    #[must_use]
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }
}

/// Uniform B-spline of fixed order [`BSPLINE_ORDER`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BSpline {
    /// Control polygon.
    pub control_points: Vec<Point>,
    /// Samples per unit of `t`.
    pub steps: u32,
}

impl BSpline {
    /// Create a B-spline sampled at the default density.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewControlPoints`] for fewer than four points.
    pub fn new(control_points: Vec<Point>) -> Result<Self> {
        check_count(CurveKind::BSpline, BSPLINE_MIN_POINTS, control_points.len())?;
        Ok(Self { control_points, steps: DEFAULT_STEPS })
    }

    /// Set the sampling density.
    #[must_use]
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }
}

fn check_count(kind: CurveKind, required: usize, actual: usize) -> Result<()> {
    if actual < required {
        return Err(Error::TooFewControlPoints { kind, required, actual });
    }
    Ok(())
}

// ============================================================================
// Sampling
// ============================================================================

/// Evenly spaced parameter values over `[start, end]`, both inclusive.
///
/// Values are computed from an integer index rather than accumulated, so the
/// last sample is exactly `end` when the range is a whole number of steps.
/// The interval count is a `u64` and saturates at `u64::MAX`, which no `u32`
/// density over a realistic polygon approaches.
fn parameter_samples(start: f64, end: f64, steps: u32) -> impl Iterator<Item = f64> {
    let per_unit = f64::from(steps.max(1));
    let count = if end > start { ((end - start) * per_unit).round() as u64 } else { 0 };
    (0..=count).map(move |i| start + i as f64 / per_unit)
}

// ============================================================================
// Hermite
// ============================================================================

/// Cubic Hermite basis `[h1, h2, h3, h4]` at `t`.
#[must_use]
pub fn hermite_basis(t: f64) -> [f64; 4] {
    let t2 = t * t;
    let t3 = t2 * t;
    [2.0 * t3 - 3.0 * t2 + 1.0, -2.0 * t3 + 3.0 * t2, t3 - 2.0 * t2 + t, t3 - t2]
}

/// Draw a cubic Hermite curve for `t` in `[0, 1]`.
///
/// Each sample is `h1·start + h2·end + h3·start_tangent + h4·end_tangent`,
/// truncated toward zero. The tangent weights can carry a sample off the
/// `i32` grid; such samples are dropped.
pub fn draw_hermite<S: PixelSink + ?Sized>(
    sink: &mut S,
    start: Point,
    end: Point,
    start_tangent: Point,
    end_tangent: Point,
    steps: u32,
    color: Rgba,
) {
    let ink = Ink::solid(color);
    let weigh = |h: [f64; 4], a: i32, b: i32, c: i32, d: i32| {
        h[0] * f64::from(a) + h[1] * f64::from(b) + h[2] * f64::from(c) + h[3] * f64::from(d)
    };

    for t in parameter_samples(0.0, 1.0, steps) {
        let h = hermite_basis(t);
        let x = weigh(h, start.x, end.x, start_tangent.x, end_tangent.x);
        let y = weigh(h, start.y, end.y, start_tangent.y, end_tangent.y);
        plot_wide(sink, ipart(x), ipart(y), ink);
    }
}

// ============================================================================
// Bezier
// ============================================================================

/// Binomial coefficient `C(n, k)` by the multiplicative formula.
///
/// Works in floating point and never forms a factorial, so large `n` loses
/// precision gracefully instead of overflowing.
#[must_use]
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Evaluate a Bezier curve at `t` in Bernstein form.
///
/// Returns `None` for an empty control polygon.
#[must_use]
pub fn bezier_point(control_points: &[Point], t: f64) -> Option<(f64, f64)> {
    let n = control_points.len().checked_sub(1)?;
    let u = 1.0 - t;
    let (mut x, mut y) = (0.0, 0.0);
    for (i, p) in control_points.iter().enumerate() {
        let coefficient = binomial(n, i) * t.powi(i as i32) * u.powi((n - i) as i32);
        x += coefficient * f64::from(p.x);
        y += coefficient * f64::from(p.y);
    }
    Some((x, y))
}

/// Draw a Bezier curve for `t` in `[0, 1]`, truncating samples toward zero.
///
/// Fewer than two control points plots nothing.
pub fn draw_bezier<S: PixelSink + ?Sized>(
    sink: &mut S,
    control_points: &[Point],
    steps: u32,
    color: Rgba,
) {
    if control_points.len() < BEZIER_MIN_POINTS {
        log::debug!("bezier: {} control points, nothing plotted", control_points.len());
        return;
    }

    let ink = Ink::solid(color);
    for t in parameter_samples(0.0, 1.0, steps) {
        if let Some((x, y)) = bezier_point(control_points, t) {
            plot_wide(sink, ipart(x), ipart(y), ink);
        }
    }
}

// ============================================================================
// B-spline
// ============================================================================

/// Cox–de Boor basis `N(i, order)` on the uniform knot vector `knot(j) = j`.
///
/// Order 1 is the indicator of `[i, i + 1)`. Order 0 is treated as order 1 so
/// the recursion always terminates.
///
/// Both recursion terms divide by the knot span `order - 1`, which makes the
/// basis a partition of unity. A formulation that divides the falling term by
/// 1 instead plots different pixels for the same control polygon.
#[must_use]
pub fn bspline_basis(i: usize, order: usize, t: f64) -> f64 {
    let lo = i as f64;
    if order <= 1 {
        return if lo <= t && t < lo + 1.0 { 1.0 } else { 0.0 };
    }

    // Uniform knots: both denominators are (order - 1).
    let span = (order - 1) as f64;
    let hi = (i + order) as f64;
    let left = (t - lo) / span * bspline_basis(i, order - 1, t);
    let right = (hi - t) / span * bspline_basis(i + 1, order - 1, t);
    left + right
}

/// Evaluate a uniform B-spline of order [`BSPLINE_ORDER`] at `t`.
#[must_use]
pub fn bspline_point(control_points: &[Point], t: f64) -> (f64, f64) {
    control_points.iter().enumerate().fold((0.0, 0.0), |(x, y), (i, p)| {
        let basis = bspline_basis(i, BSPLINE_ORDER, t);
        (x + basis * f64::from(p.x), y + basis * f64::from(p.y))
    })
}

/// Draw a uniform B-spline for `t` in `[2, n]`, `n = control_points.len() - 1`,
/// rounding each sample.
///
/// Fewer than [`BSPLINE_MIN_POINTS`] control points plots nothing.
pub fn draw_bspline<S: PixelSink + ?Sized>(
    sink: &mut S,
    control_points: &[Point],
    steps: u32,
    color: Rgba,
) {
    if control_points.len() < BSPLINE_MIN_POINTS {
        log::debug!("bspline: {} control points, nothing plotted", control_points.len());
        return;
    }

    let ink = Ink::solid(color);
    let t_end = (control_points.len() - 1) as f64;
    for t in parameter_samples(BSPLINE_T_START, t_end, steps) {
        let (x, y) = bspline_point(control_points, t);
        sink.plot(round(x), round(y), ink);
    }
}

// ============================================================================
// Drawable
// ============================================================================

impl Drawable for Hermite {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        draw_hermite(
            sink,
            self.start,
            self.end,
            self.start_tangent,
            self.end_tangent,
            self.steps,
            color,
        );
    }
}

impl Drawable for Bezier {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        draw_bezier(sink, &self.control_points, self.steps, color);
    }
}

impl Drawable for BSpline {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        draw_bspline(sink, &self.control_points, self.steps, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
