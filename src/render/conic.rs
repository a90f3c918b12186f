//! Conic section rasterizers: midpoint circle, ellipse, parabola, hyperbola.
//!
//! All four exploit symmetry: one quadrant or octant is computed and mirrored
//! about the center (or focus).

use super::Drawable;
use crate::color::{Ink, Rgba};
use crate::curve::CurveKind;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::sink::{plot_wide, PixelSink};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Parameters
// ============================================================================

/// Circle parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    /// Center pixel.
    pub center: Point,
    /// Radius in pixels.
    pub radius: i32,
}

impl Circle {
    /// Create a circle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeRadius`] for `radius < 0`.
    pub fn new(center: Point, radius: i32) -> Result<Self> {
        if radius < 0 {
            return Err(Error::NegativeRadius(radius));
        }
        Ok(Self { center, radius })
    }
}

/// Ellipse parameters: semi-axis `a` along x, `b` along y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipse {
    /// Center pixel.
    pub center: Point,
    /// Horizontal semi-axis.
    pub a: i32,
    /// Vertical semi-axis.
    pub b: i32,
}

impl Ellipse {
    /// Create an ellipse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAxis`] unless both semi-axes are positive.
    pub fn new(center: Point, a: i32, b: i32) -> Result<Self> {
        check_axes(CurveKind::Ellipse, a, b)?;
        Ok(Self { center, a, b })
    }
}

/// Hyperbola parameters: `y² / b² - x² / a² = 1`, opening along y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hyperbola {
    /// Center pixel.
    pub center: Point,
    /// Horizontal semi-axis; also the half-width of the scanned range.
    pub a: i32,
    /// Vertical semi-axis (vertex distance).
    pub b: i32,
}

impl Hyperbola {
    /// Create a hyperbola.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAxis`] unless both semi-axes are positive.
    pub fn new(center: Point, a: i32, b: i32) -> Result<Self> {
        check_axes(CurveKind::Hyperbola, a, b)?;
        Ok(Self { center, a, b })
    }
}

fn check_axes(kind: CurveKind, a: i32, b: i32) -> Result<()> {
    if a <= 0 || b <= 0 {
        return Err(Error::InvalidAxis { kind, a, b });
    }
    Ok(())
}

/// Which way a parabola opens along y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Toward increasing y.
    Positive,
    /// Toward decreasing y.
    #[default]
    Negative,
}

impl Direction {
    /// `1` or `-1`.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }

    /// Direction from a sign; `0` and positive values map to `Positive`.
    #[must_use]
    pub const fn from_sign(sign: i32) -> Self {
        if sign < 0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// Parabola parameters: `y = direction * x² / (2a)` about the focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parabola {
    /// Anchor pixel.
    pub focus: Point,
    /// Scale; `|a|` is also the half-width of the scanned range.
    pub a: i32,
    /// Opening direction.
    pub direction: Direction,
}

impl Parabola {
    /// Create a parabola.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidScale`] for `a == 0`.
    pub fn new(focus: Point, a: i32, direction: Direction) -> Result<Self> {
        if a == 0 {
            return Err(Error::InvalidScale);
        }
        Ok(Self { focus, a, direction })
    }
}

// ============================================================================
// Circle
// ============================================================================

/// Draw a circle outline using the midpoint algorithm.
///
/// The decision variable starts at `1 - radius`. Each iteration plots the
/// eight symmetric points, advances `y`, updates the decision (decrementing
/// `x` when it is positive) and plots the eight points again for the updated
/// position. `radius == 0` plots the center once; negative radii plot nothing.
/// Points that fall off the `i32` grid are dropped.
pub fn draw_circle<S: PixelSink + ?Sized>(sink: &mut S, center: Point, radius: i32, color: Rgba) {
    let ink = Ink::solid(color);
    if radius <= 0 {
        if radius == 0 {
            sink.plot(center.x, center.y, ink);
        } else {
            log::debug!("circle: negative radius {radius}, nothing plotted");
        }
        return;
    }

    let mut x = i64::from(radius);
    let mut y = 0;
    let mut decision = 1 - x;

    while x >= y {
        plot_octants(sink, center, x, y, ink);
        y += 1;
        if decision <= 0 {
            decision += 2 * y + 1;
        } else {
            x -= 1;
            decision += 2 * (y - x) + 1;
        }
        plot_octants(sink, center, x, y, ink);
    }
}

#[inline]
fn plot_octants<S: PixelSink + ?Sized>(sink: &mut S, c: Point, x: i64, y: i64, ink: Ink) {
    plot_quadrants(sink, c, x, y, ink);
    plot_quadrants(sink, c, y, x, ink);
}

#[inline]
fn plot_quadrants<S: PixelSink + ?Sized>(sink: &mut S, c: Point, x: i64, y: i64, ink: Ink) {
    let (cx, cy) = (i64::from(c.x), i64::from(c.y));
    plot_wide(sink, cx + x, cy + y, ink);
    plot_wide(sink, cx - x, cy + y, ink);
    plot_wide(sink, cx + x, cy - y, ink);
    plot_wide(sink, cx - x, cy - y, ink);
}

// ============================================================================
// Ellipse and hyperbola
// ============================================================================

/// Draw an ellipse by direct evaluation of `y = b * sqrt(1 - x²/a²)`.
///
/// Every integer `x` in `[-a, a]` is sampled and mirrored into all four
/// quadrants. Pixels thin out near `x = ±a`, where the curve is steep; that is
/// the accepted cost of the direct form. Non-positive axes plot nothing.
pub fn draw_ellipse<S: PixelSink + ?Sized>(sink: &mut S, center: Point, a: i32, b: i32, color: Rgba) {
    if a <= 0 || b <= 0 {
        log::debug!("ellipse: degenerate axes a={a} b={b}, nothing plotted");
        return;
    }
    scan_conic(sink, center, a, b, -1.0, Ink::solid(color));
}

/// Draw both branches of a hyperbola by evaluating `y = b * sqrt(1 + x²/a²)`
/// for every integer `x` in `[-a, a]`. Non-positive axes plot nothing.
pub fn draw_hyperbola<S: PixelSink + ?Sized>(
    sink: &mut S,
    center: Point,
    a: i32,
    b: i32,
    color: Rgba,
) {
    if a <= 0 || b <= 0 {
        log::debug!("hyperbola: degenerate axes a={a} b={b}, nothing plotted");
        return;
    }
    scan_conic(sink, center, a, b, 1.0, Ink::solid(color));
}

/// Shared scan for `y = b * sqrt(1 + k * x²/a²)`, `k = ±1`.
fn scan_conic<S: PixelSink + ?Sized>(sink: &mut S, center: Point, a: i32, b: i32, k: f64, ink: Ink) {
    let a2 = f64::from(a) * f64::from(a);
    let bf = f64::from(b);
    for x in -a..=a {
        let xf = f64::from(x);
        // Round half up in i64: the hyperbola reaches b * sqrt(2).
        let y = (bf * (1.0 + k * xf * xf / a2).max(0.0).sqrt() + 0.5).floor() as i64;
        plot_quadrants(sink, center, i64::from(x), y, ink);
    }
}

// ============================================================================
// Parabola
// ============================================================================

/// Draw a parabola `y = direction * x² / (2a)` with truncating integer
/// division, for every integer `x` in `[-|a|, |a|]`, mirrored about the focus.
///
/// `a == 0` plots nothing.
pub fn draw_parabola<S: PixelSink + ?Sized>(
    sink: &mut S,
    focus: Point,
    a: i32,
    direction: Direction,
    color: Rgba,
) {
    if a == 0 {
        log::debug!("parabola: zero scale, nothing plotted");
        return;
    }

    let ink = Ink::solid(color);
    let span = parabola_span(a);
    let denom = 2 * i64::from(a);
    let sign = i64::from(direction.sign());
    let (fx, fy) = (i64::from(focus.x), i64::from(focus.y));
    for x in -span..=span {
        // i64 division truncates toward zero.
        let y = sign * x * x / denom;
        plot_wide(sink, fx + x, fy + y, ink);
        plot_wide(sink, fx - x, fy + y, ink);
    }
}

/// Half-width of the scanned range, `|a|`, which for `i32::MIN` is one past
/// `i32::MAX`.
fn parabola_span(a: i32) -> i64 {
    i64::from(a.unsigned_abs())
}

// ============================================================================
// Drawable
// ============================================================================

impl Drawable for Circle {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        draw_circle(sink, self.center, self.radius, color);
    }
}

impl Drawable for Ellipse {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        draw_ellipse(sink, self.center, self.a, self.b, color);
    }
}

impl Drawable for Hyperbola {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        draw_hyperbola(sink, self.center, self.a, self.b, color);
    }
}

impl Drawable for Parabola {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        draw_parabola(sink, self.focus, self.a, self.direction, color);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::Framebuffer;
    use crate::sink::PixelTrace;
    use std::collections::BTreeSet;

    fn relative(trace: &PixelTrace, c: Point) -> BTreeSet<(i32, i32)> {
        trace.pixel_set().into_iter().map(|(x, y)| (x - c.x, y - c.y)).collect()
    }

    #[test]
    fn test_circle_zero_radius() {
        let mut trace = PixelTrace::new();
        draw_circle(&mut trace, Point::new(50, 50), 0, Rgba::RED);
        assert_eq!(trace.points(), vec![Point::new(50, 50)]);
    }

    #[test]
    fn test_circle_negative_radius() {
        let mut trace = PixelTrace::new();
        draw_circle(&mut trace, Point::new(50, 50), -4, Rgba::RED);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_circle_radius_one() {
        let mut trace = PixelTrace::new();
        draw_circle(&mut trace, Point::ORIGIN, 1, Rgba::RED);
        // Two iterations: (1, 0) -> (1, 1), then (1, 1) -> (0, 2). The
        // post-update plot runs even once x has dropped below y.
        let expected: BTreeSet<(i32, i32)> = [
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (1, 1),
            (-1, 1),
            (1, -1),
            (-1, -1),
            (0, 2),
            (0, -2),
            (2, 0),
            (-2, 0),
        ]
        .into_iter()
        .collect();
        assert_eq!(trace.pixel_set(), expected);
        assert_eq!(trace.len(), 32);
    }

    #[test]
    fn test_circle_extremes_and_symmetry() {
        let c = Point::new(100, 80);
        let mut trace = PixelTrace::new();
        draw_circle(&mut trace, c, 20, Rgba::BLACK);
        let set = relative(&trace, c);

        for &(x, y) in &set {
            for p in [(x, -y), (-x, y), (-x, -y), (y, x), (-y, x), (y, -x), (-y, -x)] {
                assert!(set.contains(&p), "missing reflection {p:?} of {:?}", (x, y));
            }
        }
        assert!(set.contains(&(20, 0)));
        assert!(set.contains(&(0, -20)));
        assert!(!set.contains(&(0, 0)));
    }

    #[test]
    fn test_circle_outline_framebuffer() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        Circle::new(Point::new(50, 50), 20).unwrap().draw(&mut fb, Rgba::GREEN);

        assert_eq!(fb.get_pixel(70, 50), Some(Rgba::GREEN));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::WHITE));
    }

    #[test]
    fn test_ellipse_vertices_and_symmetry() {
        let c = Point::new(10, -5);
        let mut trace = PixelTrace::new();
        draw_ellipse(&mut trace, c, 80, 50, Rgba::BLACK);
        let set = relative(&trace, c);

        assert!(set.contains(&(0, 50)));
        assert!(set.contains(&(0, -50)));
        assert!(set.contains(&(80, 0)));
        assert!(set.contains(&(-80, 0)));
        for &(x, y) in &set {
            assert!(set.contains(&(-x, y)));
            assert!(set.contains(&(x, -y)));
        }
        // 161 columns, four mirrored plots each.
        assert_eq!(trace.len(), 161 * 4);
    }

    #[test]
    fn test_ellipse_degenerate_axes() {
        let mut trace = PixelTrace::new();
        draw_ellipse(&mut trace, Point::ORIGIN, 0, 10, Rgba::BLACK);
        draw_ellipse(&mut trace, Point::ORIGIN, 10, -1, Rgba::BLACK);
        assert!(trace.is_empty());
        assert!(Ellipse::new(Point::ORIGIN, 0, 10).is_err());
        assert!(Ellipse::new(Point::ORIGIN, 3, 2).is_ok());
    }

    #[test]
    fn test_hyperbola_values() {
        let mut trace = PixelTrace::new();
        draw_hyperbola(&mut trace, Point::ORIGIN, 20, 30, Rgba::BLACK);
        let set = trace.pixel_set();

        // Vertex at x = 0, and y = 30 * sqrt(2) ≈ 42.43 at x = ±a.
        assert!(set.contains(&(0, 30)));
        assert!(set.contains(&(0, -30)));
        assert!(set.contains(&(20, 42)));
        assert!(set.contains(&(-20, -42)));
        for &(x, y) in &set {
            assert!(set.contains(&(-x, y)));
            assert!(set.contains(&(x, -y)));
            assert!(y.abs() >= 30);
        }
    }

    #[test]
    fn test_parabola_truncating_division() {
        let mut trace = PixelTrace::new();
        draw_parabola(&mut trace, Point::ORIGIN, 50, Direction::Negative, Rgba::BLACK);
        let set = trace.pixel_set();

        assert!(set.contains(&(0, 0)));
        assert!(set.contains(&(50, -25)));
        assert!(set.contains(&(-50, -25)));
        // 3 * 3 / 100 truncates to 0, 10 * 10 / 100 is exactly 1.
        assert!(set.contains(&(3, 0)));
        assert!(set.contains(&(10, -1)));
        assert!(set.contains(&(9, 0)));
    }

    #[test]
    fn test_parabola_negative_scale_flips() {
        let mut up = PixelTrace::new();
        draw_parabola(&mut up, Point::ORIGIN, -10, Direction::Negative, Rgba::BLACK);
        assert!(up.contains(10, 5));
        assert!(up.contains(-10, 5));
    }

    #[test]
    fn test_parabola_zero_scale() {
        let mut trace = PixelTrace::new();
        draw_parabola(&mut trace, Point::ORIGIN, 0, Direction::Positive, Rgba::BLACK);
        assert!(trace.is_empty());
        assert!(Parabola::new(Point::ORIGIN, 0, Direction::Positive).is_err());
    }

    #[test]
    fn test_circle_clipped_at_grid_edge() {
        let c = Point::new(i32::MAX - 5, 0);
        let mut trace = PixelTrace::new();
        draw_circle(&mut trace, c, 10, Rgba::BLACK);

        assert!(trace.contains(c.x - 10, 0));
        assert!(trace.contains(c.x, 10));
        assert!(trace.contains(c.x, -10));
        assert!(trace.contains(i32::MAX, 9));
        let mut full = PixelTrace::new();
        draw_circle(&mut full, Point::ORIGIN, 10, Rgba::BLACK);
        assert!(trace.len() < full.len());
    }

    #[test]
    fn test_hyperbola_branch_past_grid_edge_is_dropped() {
        let mut trace = PixelTrace::new();
        draw_hyperbola(&mut trace, Point::new(0, i32::MAX - 10), 20, 30, Rgba::BLACK);
        // Only the lower branch fits: 41 columns, mirrored in x.
        assert_eq!(trace.len(), 41 * 2);
        assert!(trace.points().iter().all(|p| p.y <= i32::MAX - 40));
    }

    #[test]
    fn test_parabola_clipped_at_grid_corner() {
        let mut trace = PixelTrace::new();
        let corner = Point::new(i32::MAX, i32::MIN);
        draw_parabola(&mut trace, corner, 3, Direction::Positive, Rgba::BLACK);
        // x in [-3, 3]: the mirror that lands right of i32::MAX is dropped,
        // except at x = 0 where both plots coincide.
        assert_eq!(trace.len(), 8);
        assert!(trace.contains(i32::MAX, i32::MIN));
        assert!(trace.contains(i32::MAX - 3, i32::MIN + 1));
    }

    #[test]
    fn test_parabola_span_of_most_negative_scale() {
        assert_eq!(parabola_span(i32::MIN), 1_i64 << 31);
        assert_eq!(parabola_span(-50), 50);
        assert_eq!(parabola_span(i32::MAX), i64::from(i32::MAX));
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Positive.sign(), 1);
        assert_eq!(Direction::Negative.sign(), -1);
        assert_eq!(Direction::from_sign(-1), Direction::Negative);
        assert_eq!(Direction::from_sign(1), Direction::Positive);
    }
}
