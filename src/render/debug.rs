//! Grayscale diagnostic renderings of the line algorithms.
//!
//! The pixels chosen are exactly those of the production rasterizer; only the
//! ink changes. Every plot carries an opaque gray at full coverage:
//!
//! - DDA and Bresenham: `1 - d`, where `d` is the perpendicular distance from
//!   the chosen pixel to the ideal line, so a pixel on the line is white and
//!   one a full pixel away is black.
//! - Wu: the pixel's coverage.

use super::line::{wu_walk, BresenhamSteps, DdaSteps, LineAlgorithm};
use crate::color::Ink;
use crate::geometry::{Line, Point};
use crate::scalar::{clamp_unit, round};
use crate::sink::{plot_wide, PixelSink};

/// Draw `start → end` with `algorithm`, replacing the color with a diagnostic
/// gray level.
pub fn draw_line_debug<S: PixelSink + ?Sized>(
    sink: &mut S,
    algorithm: LineAlgorithm,
    start: Point,
    end: Point,
) {
    match algorithm {
        LineAlgorithm::Dda => draw_dda_debug(sink, start, end),
        LineAlgorithm::Bresenham => draw_bresenham_debug(sink, start, end),
        LineAlgorithm::Wu => draw_wu_debug(sink, start, end),
    }
}

/// DDA with each rounded pixel shaded by its distance from the ideal line.
pub fn draw_dda_debug<S: PixelSink + ?Sized>(sink: &mut S, start: Point, end: Point) {
    let line = Line::new(start, end);
    for (x, y) in DdaSteps::new(start, end) {
        let pixel = Point::new(round(x), round(y));
        sink.plot(pixel.x, pixel.y, distance_ink(&line, pixel));
    }
}

/// Bresenham with each pixel shaded by its distance from the ideal line.
pub fn draw_bresenham_debug<S: PixelSink + ?Sized>(sink: &mut S, start: Point, end: Point) {
    let line = Line::new(start, end);
    for pixel in BresenhamSteps::new(start, end) {
        sink.plot(pixel.x, pixel.y, distance_ink(&line, pixel));
    }
}

/// Wu with each pixel's coverage rendered as a gray level.
pub fn draw_wu_debug<S: PixelSink + ?Sized>(sink: &mut S, start: Point, end: Point) {
    wu_walk(start, end, |x, y, coverage| plot_wide(sink, x, y, Ink::gray(coverage)));
}

fn distance_ink(line: &Line, pixel: Point) -> Ink {
    Ink::gray(clamp_unit(1.0 - line.distance_to(pixel)))
}
