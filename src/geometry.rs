//! Geometric primitives on the integer pixel grid.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This point translated by `(dx, dy)`, saturating at the `i32` range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = (i64::from(self.x) - i64::from(other.x)) as f64;
        let dy = (i64::from(self.y) - i64::from(other.y)) as f64;
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Signed x extent. Widened so any two `i32` endpoints fit.
    #[must_use]
    pub fn dx(&self) -> i64 {
        i64::from(self.end.x) - i64::from(self.start.x)
    }

    /// Signed y extent.
    #[must_use]
    pub fn dy(&self) -> i64 {
        i64::from(self.end.y) - i64::from(self.start.y)
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// True when both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Perpendicular distance from `p` to the infinite line through the segment.
    ///
    /// For a degenerate segment this is the distance to its single point.
    #[must_use]
    pub fn distance_to(&self, p: Point) -> f64 {
        let length = self.length();
        if length == 0.0 {
            return self.start.distance(p);
        }
        let px = i64::from(p.x) - i64::from(self.start.x);
        let py = i64::from(p.y) - i64::from(self.start.y);
        let cross = i128::from(self.dx()) * i128::from(py) - i128::from(self.dy()) * i128::from(px);
        (cross as f64).abs() / length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(3, 4);
        assert_abs_diff_eq!(p1.distance(p2), 5.0);
    }

    #[test]
    fn test_point_offset() {
        assert_eq!(Point::new(10, 20).offset(-50, 100), Point::new(-40, 120));
        assert_eq!(Point::from((3, -4)), Point::new(3, -4));
    }

    #[test]
    fn test_line_length() {
        let line = Line::from_coords(0, 0, 3, 4);
        assert_abs_diff_eq!(line.length(), 5.0);
        assert_eq!(line.dx(), 3);
        assert_eq!(line.dy(), 4);
    }

    #[test]
    fn test_distance_to_horizontal_line() {
        let line = Line::from_coords(0, 0, 10, 0);
        assert_abs_diff_eq!(line.distance_to(Point::new(5, 3)), 3.0);
        assert_abs_diff_eq!(line.distance_to(Point::new(5, -2)), 2.0);
        assert_abs_diff_eq!(line.distance_to(Point::new(7, 0)), 0.0);
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        let line = Line::from_coords(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(line.dx(), i64::from(u32::MAX));
        assert_abs_diff_eq!(
            line.distance_to(Point::new(i32::MAX, i32::MIN)),
            line.length() / 2.0,
            epsilon = 1e-3
        );
        let corner = Point::new(i32::MAX, i32::MIN);
        assert_eq!(Point::new(i32::MAX - 1, i32::MIN).offset(5, -5), corner);
    }

    #[test]
    fn test_distance_to_degenerate_line() {
        let line = Line::from_coords(1, 1, 1, 1);
        assert!(line.is_degenerate());
        assert_abs_diff_eq!(line.distance_to(Point::new(4, 5)), 5.0);
    }
}
