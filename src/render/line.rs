//! Line rasterizers.
//!
//! Each algorithm is split into a walker that produces the pixels it chooses
//! and a thin `draw_*` wrapper that turns them into ink. The debug renderers
//! reuse the same walkers with a different ink mapping.

use super::Drawable;
use crate::color::{Ink, Rgba};
use crate::geometry::{Line, Point};
use crate::scalar::{fpart, rfpart, round, step_toward};
use crate::sink::{plot_wide, PixelSink};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three line algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineAlgorithm {
    /// Floating-point digital differential analyzer.
    Dda,
    /// Integer Bresenham.
    #[default]
    Bresenham,
    /// Xiaolin Wu's anti-aliased line.
    Wu,
}

impl LineAlgorithm {
    /// All line algorithms.
    pub const ALL: [Self; 3] = [Self::Dda, Self::Bresenham, Self::Wu];

    /// Rasterize `start → end` with this algorithm.
    pub fn draw<S: PixelSink + ?Sized>(self, sink: &mut S, start: Point, end: Point, color: Rgba) {
        match self {
            Self::Dda => draw_line_dda(sink, start, end, color),
            Self::Bresenham => draw_line_bresenham(sink, start, end, color),
            Self::Wu => draw_line_wu(sink, start, end, color),
        }
    }
}

// ============================================================================
// DDA
// ============================================================================

/// Draw a line with the floating-point DDA.
///
/// Takes `max(|dx|, |dy|)` unit steps along the dominant axis and plots the
/// rounded accumulator at each of the `steps + 1` positions, so both endpoints
/// are included. A zero-length line plots its single point.
pub fn draw_line_dda<S: PixelSink + ?Sized>(sink: &mut S, start: Point, end: Point, color: Rgba) {
    let ink = Ink::solid(color);
    for (x, y) in DdaSteps::new(start, end) {
        sink.plot(round(x), round(y), ink);
    }
}

/// The exact accumulator positions of a DDA walk, start and end inclusive.
#[derive(Debug, Clone)]
pub(crate) struct DdaSteps {
    x: f64,
    y: f64,
    x_inc: f64,
    y_inc: f64,
    remaining: u64,
}

impl DdaSteps {
    pub(crate) fn new(start: Point, end: Point) -> Self {
        let line = Line::new(start, end);
        let (dx, dy) = (line.dx(), line.dy());
        let steps = dx.unsigned_abs().max(dy.unsigned_abs());

        let (x_inc, y_inc) = if steps == 0 {
            log::debug!("dda: zero-length line at ({}, {})", start.x, start.y);
            (0.0, 0.0)
        } else {
            (dx as f64 / steps as f64, dy as f64 / steps as f64)
        };

        Self {
            x: f64::from(start.x),
            y: f64::from(start.y),
            x_inc,
            y_inc,
            remaining: steps + 1,
        }
    }
}

impl Iterator for DdaSteps {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<(f64, f64)> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let position = (self.x, self.y);
        self.x += self.x_inc;
        self.y += self.y_inc;
        Some(position)
    }
}

// ============================================================================
// Bresenham
// ============================================================================

/// Draw a line using Bresenham's integer algorithm.
///
/// The error term starts at `|dx| - |dy|`; on each step `2 * error` is tested
/// against `-|dy|` and `|dx|` independently, so both axes may advance at once.
/// The end point is plotted before the loop exits.
pub fn draw_line_bresenham<S: PixelSink + ?Sized>(
    sink: &mut S,
    start: Point,
    end: Point,
    color: Rgba,
) {
    let ink = Ink::solid(color);
    for p in BresenhamSteps::new(start, end) {
        sink.plot(p.x, p.y, ink);
    }
}

/// The pixels of a Bresenham walk, start and end inclusive.
///
/// Extents and the error term are `i64`: a walk between any two `i32` points
/// needs 33 bits, and `2 * error` one more.
#[derive(Debug, Clone)]
pub(crate) struct BresenhamSteps {
    current: Point,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl BresenhamSteps {
    pub(crate) fn new(start: Point, end: Point) -> Self {
        let line = Line::new(start, end);
        let dx = line.dx().abs();
        let dy = line.dy().abs();
        Self {
            current: start,
            end,
            dx,
            dy,
            sx: step_toward(start.x, end.x),
            sy: step_toward(start.y, end.y),
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamSteps {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let p = self.current;
        if p == self.end {
            self.done = true;
            return Some(p);
        }

        // Each axis moves at most its own extent, so `current` stays between
        // the endpoints.
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.current.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }
        Some(p)
    }
}

// ============================================================================
// Wu
// ============================================================================

/// Draw an anti-aliased line using Wu's algorithm.
///
/// The line is normalized once (swap axes if steep, then order endpoints by
/// x) and walked in whole steps along the dominant axis. Every column gets two
/// pixels whose coverages sum to 1. A zero-length line plots its single point
/// at full coverage. A partner pixel past the edge of the `i32` grid is
/// dropped.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
pub fn draw_line_wu<S: PixelSink + ?Sized>(sink: &mut S, start: Point, end: Point, color: Rgba) {
    wu_walk(start, end, |x, y, coverage| plot_wide(sink, x, y, Ink::partial(color, coverage)));
}

/// Visit each Wu pixel with its coverage, caps first, then interior columns.
pub(crate) fn wu_walk(start: Point, end: Point, mut visit: impl FnMut(i64, i64, f64)) {
    match WuLine::new(start, end) {
        Some(line) => line.pixels().for_each(|(x, y, coverage)| visit(x, y, coverage)),
        None => {
            log::debug!("wu: zero-length line at ({}, {})", start.x, start.y);
            visit(i64::from(start.x), i64::from(start.y), 1.0);
        }
    }
}

/// A Wu line after normalization: `x0 < x1`, `|y1 - y0| <= x1 - x0`, with
/// `steep` recording whether the axes were swapped to get there.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WuLine {
    steep: bool,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    gradient: f64,
}

impl WuLine {
    /// `None` for a zero-length line.
    pub(crate) fn new(start: Point, end: Point) -> Option<Self> {
        let (mut x0, mut y0) = (i64::from(start.x), i64::from(start.y));
        let (mut x1, mut y1) = (i64::from(end.x), i64::from(end.y));

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        // Not steep means |dy| <= |dx|, so dx == 0 only for a single point.
        let dx = x1 - x0;
        if dx == 0 {
            return None;
        }

        let gradient = (y1 - y0) as f64 / dx as f64;
        Some(Self { steep, x0, y0, x1, y1, gradient })
    }

    /// Every pixel and its coverage, in the original orientation.
    pub(crate) fn pixels(self) -> impl Iterator<Item = (i64, i64, f64)> {
        let Self { steep, x0, y0, x1, y1, gradient } = self;

        // Integer endpoints sit on pixel centres: each cap column is fully
        // spanned and the cap's y is the endpoint's own y.
        let caps = [(x0, y0 as f64), (x1, y1 as f64)];
        let interior = ((x0 + 1)..x1).scan(y0 as f64, move |intery, x| {
            *intery += gradient;
            Some((x, *intery))
        });

        caps.into_iter()
            .chain(interior)
            .flat_map(|(x, y)| {
                let base = y.floor() as i64;
                [(x, base, rfpart(y)), (x, base + 1, fpart(y))]
            })
            .map(move |(x, y, coverage)| if steep { (y, x, coverage) } else { (x, y, coverage) })
    }
}

impl Drawable for Line {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        draw_line_bresenham(sink, self.start, self.end, color);
    }

    fn draw_aa<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        draw_line_wu(sink, self.start, self.end, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
