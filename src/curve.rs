//! Curve dispatch.
//!
//! [`Curve`] is the closed set of everything the crate can rasterize, each
//! variant carrying its own typed parameters. Hosts that work from mode names
//! and mouse clicks go through [`CurveKind`] and [`Curve::from_points`].

use std::fmt;
use std::str::FromStr;

use crate::color::{Ink, Rgba};
use crate::config::CurveDefaults;
use crate::error::{Error, Result};
use crate::geometry::{Line, Point};
use crate::render::conic::{
    draw_circle, draw_ellipse, draw_hyperbola, draw_parabola, Circle, Ellipse, Hyperbola, Parabola,
};
use crate::render::debug::draw_line_debug;
use crate::render::line::LineAlgorithm;
use crate::render::parametric::{draw_bezier, draw_bspline, draw_hermite, BSpline, Bezier, Hermite};
use crate::render::Drawable;
use crate::sink::PixelSink;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// CurveKind
// ============================================================================

/// Parameterless tag for each curve kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CurveKind {
    /// DDA line.
    Dda,
    /// Bresenham line.
    Bresenham,
    /// Wu anti-aliased line.
    Wu,
    /// Midpoint circle.
    Circle,
    /// Ellipse.
    Ellipse,
    /// Parabola.
    Parabola,
    /// Hyperbola.
    Hyperbola,
    /// Cubic Hermite curve.
    Hermite,
    /// Bezier curve.
    Bezier,
    /// Uniform B-spline.
    BSpline,
}

impl CurveKind {
    /// Every kind, lines first.
    pub const ALL: [Self; 10] = [
        Self::Dda,
        Self::Bresenham,
        Self::Wu,
        Self::Circle,
        Self::Ellipse,
        Self::Parabola,
        Self::Hyperbola,
        Self::Hermite,
        Self::Bezier,
        Self::BSpline,
    ];

    /// Display name, as used in mode menus.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dda => "DDA",
            Self::Bresenham => "Bresenham",
            Self::Wu => "Wu",
            Self::Circle => "Circle",
            Self::Ellipse => "Ellipse",
            Self::Parabola => "Parabola",
            Self::Hyperbola => "Hyperbola",
            Self::Hermite => "Hermite",
            Self::Bezier => "Bezier",
            Self::BSpline => "BSpline",
        }
    }

    /// The line algorithm for line kinds.
    #[must_use]
    pub const fn line_algorithm(self) -> Option<LineAlgorithm> {
        match self {
            Self::Dda => Some(LineAlgorithm::Dda),
            Self::Bresenham => Some(LineAlgorithm::Bresenham),
            Self::Wu => Some(LineAlgorithm::Wu),
            _ => None,
        }
    }

    /// True for the three line kinds, the only ones with a debug rendering.
    #[must_use]
    pub const fn is_line(self) -> bool {
        self.line_algorithm().is_some()
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveKind {
    type Err = Error;

    /// Case-insensitive. `"Vu"` is accepted as a spelling of Wu.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("vu") {
            return Ok(Self::Wu);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::UnknownCurveKind(s.to_string()))
    }
}

// ============================================================================
// Modes and toolsets
// ============================================================================

/// Production or diagnostic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RenderMode {
    /// Plot in the requested color.
    #[default]
    Normal,
    /// Plot diagnostic gray levels (line kinds only).
    Debug,
}

/// The curve families a front end offers, each a superset of the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Toolset {
    /// Line algorithms only.
    Lines,
    /// Lines and conic sections.
    Conics,
    /// Lines, conics and parametric curves.
    Curves,
}

impl Toolset {
    /// All toolsets, smallest first.
    pub const ALL: [Self; 3] = [Self::Lines, Self::Conics, Self::Curves];

    /// Kinds this toolset exposes, in menu order.
    #[must_use]
    pub fn kinds(self) -> &'static [CurveKind] {
        static LINES: [CurveKind; 3] = [CurveKind::Dda, CurveKind::Bresenham, CurveKind::Wu];
        static CONICS: [CurveKind; 7] = [
            CurveKind::Dda,
            CurveKind::Bresenham,
            CurveKind::Wu,
            CurveKind::Circle,
            CurveKind::Ellipse,
            CurveKind::Parabola,
            CurveKind::Hyperbola,
        ];
        static CURVES: [CurveKind; 10] = CurveKind::ALL;

        match self {
            Self::Lines => &LINES,
            Self::Conics => &CONICS,
            Self::Curves => &CURVES,
        }
    }

    /// True if `kind` is available in this toolset.
    #[must_use]
    pub fn supports(self, kind: CurveKind) -> bool {
        self.kinds().contains(&kind)
    }
}

// ============================================================================
// Curve
// ============================================================================

/// A fully parameterized curve ready to rasterize.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Curve {
    /// DDA line.
    Dda(Line),
    /// Bresenham line.
    Bresenham(Line),
    /// Wu anti-aliased line.
    Wu(Line),
    /// Midpoint circle.
    Circle(Circle),
    /// Ellipse.
    Ellipse(Ellipse),
    /// Parabola.
    Parabola(Parabola),
    /// Hyperbola.
    Hyperbola(Hyperbola),
    /// Cubic Hermite curve.
    Hermite(Hermite),
    /// Bezier curve.
    Bezier(Bezier),
    /// Uniform B-spline.
    BSpline(BSpline),
}

impl Curve {
    /// Line `start → end` drawn with `algorithm`.
    #[must_use]
    pub const fn line(algorithm: LineAlgorithm, start: Point, end: Point) -> Self {
        let line = Line::new(start, end);
        match algorithm {
            LineAlgorithm::Dda => Self::Dda(line),
            LineAlgorithm::Bresenham => Self::Bresenham(line),
            LineAlgorithm::Wu => Self::Wu(line),
        }
    }

    /// Validated Bezier curve.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewControlPoints`] for fewer than two points.
    pub fn bezier(control_points: Vec<Point>) -> Result<Self> {
        Bezier::new(control_points).map(Self::Bezier)
    }

    /// Validated B-spline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooFewControlPoints`] for fewer than four points.
    pub fn bspline(control_points: Vec<Point>) -> Result<Self> {
        BSpline::new(control_points).map(Self::BSpline)
    }

    /// Build a curve from two clicked points, filling in the rest from
    /// `defaults`.
    ///
    /// Values are taken as-is, so degenerate defaults (a zero axis, say)
    /// produce a curve that rasterizes to nothing rather than an error.
    #[must_use]
    pub fn from_points(
        kind: CurveKind,
        first: Point,
        second: Point,
        defaults: &CurveDefaults,
    ) -> Self {
        let (cx, cy) = defaults.control_offset;
        let control = || vec![first, first.offset(cx, cy), second.offset(-cx, -cy), second];

        match kind {
            CurveKind::Dda => Self::Dda(Line::new(first, second)),
            CurveKind::Bresenham => Self::Bresenham(Line::new(first, second)),
            CurveKind::Wu => Self::Wu(Line::new(first, second)),
            CurveKind::Circle => {
                Self::Circle(Circle { center: first, radius: defaults.circle_radius })
            }
            CurveKind::Ellipse => {
                let (a, b) = defaults.ellipse_axes;
                Self::Ellipse(Ellipse { center: first, a, b })
            }
            CurveKind::Parabola => Self::Parabola(Parabola {
                focus: first,
                a: defaults.parabola_scale,
                direction: defaults.parabola_direction,
            }),
            CurveKind::Hyperbola => {
                let (a, b) = defaults.hyperbola_axes;
                Self::Hyperbola(Hyperbola { center: first, a, b })
            }
            CurveKind::Hermite => {
                let (ex, ey) = defaults.hermite_end_offset;
                let (tx, ty) = defaults.hermite_tangent_offset;
                Self::Hermite(
                    Hermite::new(first, second.offset(ex, ey), second, second.offset(tx, ty))
                        .with_steps(defaults.steps),
                )
            }
            CurveKind::Bezier => {
                Self::Bezier(Bezier { control_points: control(), steps: defaults.steps })
            }
            CurveKind::BSpline => {
                Self::BSpline(BSpline { control_points: control(), steps: defaults.steps })
            }
        }
    }

    /// The kind tag of this curve.
    #[must_use]
    pub const fn kind(&self) -> CurveKind {
        match self {
            Self::Dda(_) => CurveKind::Dda,
            Self::Bresenham(_) => CurveKind::Bresenham,
            Self::Wu(_) => CurveKind::Wu,
            Self::Circle(_) => CurveKind::Circle,
            Self::Ellipse(_) => CurveKind::Ellipse,
            Self::Parabola(_) => CurveKind::Parabola,
            Self::Hyperbola(_) => CurveKind::Hyperbola,
            Self::Hermite(_) => CurveKind::Hermite,
            Self::Bezier(_) => CurveKind::Bezier,
            Self::BSpline(_) => CurveKind::BSpline,
        }
    }

    /// Rasterize through `sink` and return the number of plot calls made.
    ///
    /// [`RenderMode::Debug`] renders line kinds in diagnostic gray and ignores
    /// `color`. Other kinds have no debug rendering and are drawn normally.
    pub fn rasterize<S: PixelSink + ?Sized>(
        &self,
        sink: &mut S,
        mode: RenderMode,
        color: Rgba,
    ) -> usize {
        let mut counter = CountingSink { inner: sink, plots: 0 };
        let sink = &mut counter;

        match self {
            Self::Dda(line) => draw_line(sink, LineAlgorithm::Dda, line, mode, color),
            Self::Bresenham(line) => draw_line(sink, LineAlgorithm::Bresenham, line, mode, color),
            Self::Wu(line) => draw_line(sink, LineAlgorithm::Wu, line, mode, color),
            Self::Circle(c) => draw_circle(sink, c.center, c.radius, color),
            Self::Ellipse(e) => draw_ellipse(sink, e.center, e.a, e.b, color),
            Self::Parabola(p) => draw_parabola(sink, p.focus, p.a, p.direction, color),
            Self::Hyperbola(h) => draw_hyperbola(sink, h.center, h.a, h.b, color),
            Self::Hermite(h) => draw_hermite(
                sink,
                h.start,
                h.end,
                h.start_tangent,
                h.end_tangent,
                h.steps,
                color,
            ),
            Self::Bezier(b) => draw_bezier(sink, &b.control_points, b.steps, color),
            Self::BSpline(b) => draw_bspline(sink, &b.control_points, b.steps, color),
        }

        log::trace!("{}: {:?} rasterized with {} plots", self.kind(), mode, counter.plots);
        counter.plots
    }

    /// Like [`rasterize`](Self::rasterize), but rejects debug mode for kinds
    /// that have no debug rendering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DebugUnsupported`] for debug mode on a non-line kind.
    pub fn try_rasterize<S: PixelSink + ?Sized>(
        &self,
        sink: &mut S,
        mode: RenderMode,
        color: Rgba,
    ) -> Result<usize> {
        if mode == RenderMode::Debug && !self.kind().is_line() {
            return Err(Error::DebugUnsupported(self.kind()));
        }
        Ok(self.rasterize(sink, mode, color))
    }
}

impl Drawable for Curve {
    fn draw<S: PixelSink + ?Sized>(&self, sink: &mut S, color: Rgba) {
        self.rasterize(sink, RenderMode::Normal, color);
    }
}

fn draw_line<S: PixelSink + ?Sized>(
    sink: &mut S,
    algorithm: LineAlgorithm,
    line: &Line,
    mode: RenderMode,
    color: Rgba,
) {
    match mode {
        RenderMode::Normal => algorithm.draw(sink, line.start, line.end, color),
        RenderMode::Debug => draw_line_debug(sink, algorithm, line.start, line.end),
    }
}

/// Forwards plots and counts them.
struct CountingSink<'a, S: ?Sized> {
    inner: &'a mut S,
    plots: usize,
}

impl<S: PixelSink + ?Sized> PixelSink for CountingSink<'_, S> {
    #[inline]
    fn plot(&mut self, x: i32, y: i32, ink: Ink) {
        self.plots += 1;
        self.inner.plot(x, y, ink);
    }
}
