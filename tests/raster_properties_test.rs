//! Raster Property Tests
//!
//! Whole-crate checks of the observable rasterizer guarantees, driven through
//! the public API only.
//!
//! Run: cargo test --test raster_properties_test

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use proptest::prelude::*;
use trueno_raster::prelude::*;
use trueno_raster::render::{
    draw_bezier, draw_bspline, draw_circle, draw_ellipse, draw_hyperbola, draw_line_bresenham,
    draw_line_dda, draw_line_wu, draw_parabola, DEFAULT_STEPS,
};

fn trace(draw: impl FnOnce(&mut PixelTrace)) -> PixelTrace {
    let mut trace = PixelTrace::new();
    draw(&mut trace);
    trace
}

// ============================================================================
// Lines
// ============================================================================

#[test]
fn test_dda_and_bresenham_agree_on_axis_and_diagonal_lines() {
    let cases = [
        (Point::new(0, 0), Point::new(25, 0)),
        (Point::new(3, -7), Point::new(3, 18)),
        (Point::new(-5, -5), Point::new(20, 20)),
        (Point::new(10, 0), Point::new(-10, 20)),
        (Point::new(40, 40), Point::new(0, 40)),
    ];
    for (start, end) in cases {
        let dda = trace(|t| draw_line_dda(t, start, end, Rgba::BLACK));
        let bresenham = trace(|t| draw_line_bresenham(t, start, end, Rgba::BLACK));
        assert_eq!(dda.points(), bresenham.points(), "{start:?} -> {end:?}");
    }
}

#[test]
fn test_wu_coverage_pairs_sum_to_one() {
    let wu = trace(|t| draw_line_wu(t, Point::new(-12, 4), Point::new(31, -19), Rgba::BLUE));
    for pair in wu.plots().chunks_exact(2) {
        let sum = pair[0].ink.coverage + pair[1].ink.coverage;
        assert!((sum - 1.0).abs() < 1e-9, "pair {pair:?} sums to {sum}");
    }
}

// ============================================================================
// Conics
// ============================================================================

#[test]
fn test_circle_radius_zero_plots_center_once() {
    let circle = trace(|t| draw_circle(t, Point::new(9, -4), 0, Rgba::BLACK));
    assert_eq!(circle.points(), vec![Point::new(9, -4)]);
}

#[test]
fn test_conics_symmetric_about_center() {
    let center = Point::new(100, 80);
    let ellipse = trace(|t| draw_ellipse(t, center, 80, 50, Rgba::BLACK)).pixel_set();
    let hyperbola = trace(|t| draw_hyperbola(t, center, 20, 30, Rgba::BLACK)).pixel_set();

    for set in [&ellipse, &hyperbola] {
        for &(x, y) in set {
            assert!(set.contains(&(2 * center.x - x, y)));
            assert!(set.contains(&(x, 2 * center.y - y)));
        }
    }
}

#[test]
fn test_parabola_reference_values() {
    let parabola =
        trace(|t| draw_parabola(t, Point::ORIGIN, 50, Direction::Negative, Rgba::BLACK));
    assert!(parabola.contains(0, 0));
    // -(50 * 50) / (2 * 50) truncates to -25 on both sides.
    assert!(parabola.contains(50, -25));
    assert!(parabola.contains(-50, -25));
}

// ============================================================================
// Parametric curves
// ============================================================================

#[test]
fn test_bezier_collapsed_polygon_is_one_pixel() {
    let bezier = trace(|t| draw_bezier(t, &[Point::ORIGIN; 4], DEFAULT_STEPS, Rgba::BLACK));
    assert_eq!(bezier.pixel_set().into_iter().collect::<Vec<_>>(), vec![(0, 0)]);
}

#[test]
fn test_bezier_cubic_endpoints() {
    let control = [Point::new(0, 0), Point::new(0, 100), Point::new(100, 100), Point::new(100, 0)];
    let bezier = trace(|t| draw_bezier(t, &control, DEFAULT_STEPS, Rgba::BLACK));
    assert_eq!(bezier.first().map(|p| p.point), Some(Point::new(0, 0)));
    assert_eq!(bezier.last().map(|p| p.point), Some(Point::new(100, 0)));
}

#[test]
fn test_bspline_three_points_is_rejected_and_noop() {
    let control = vec![Point::new(0, 0), Point::new(50, 80), Point::new(100, 0)];
    let bspline = trace(|t| draw_bspline(t, &control, DEFAULT_STEPS, Rgba::BLACK));
    assert!(bspline.is_empty());

    match Curve::bspline(control) {
        Err(Error::TooFewControlPoints { kind, required, actual }) => {
            assert_eq!(kind, CurveKind::BSpline);
            assert_eq!(required, 4);
            assert_eq!(actual, 3);
        }
        other => panic!("expected TooFewControlPoints, got {other:?}"),
    }
}

// ============================================================================
// Dispatch and framebuffer
// ============================================================================

#[test]
fn test_rasterize_is_deterministic() {
    let defaults = CurveDefaults::default();
    for kind in CurveKind::ALL {
        let curve = Curve::from_points(kind, Point::new(30, 40), Point::new(170, 120), &defaults);
        for mode in [RenderMode::Normal, RenderMode::Debug] {
            let first = trace(|t| {
                curve.rasterize(t, mode, Rgba::RED);
            });
            let second = trace(|t| {
                curve.rasterize(t, mode, Rgba::RED);
            });
            assert_eq!(first, second, "{kind} in {mode:?}");
        }
    }
}

#[test]
fn test_mode_names_round_trip() {
    for kind in CurveKind::ALL {
        assert_eq!(kind.name().parse::<CurveKind>().unwrap(), kind);
        assert_eq!(kind.name().to_uppercase().parse::<CurveKind>().unwrap(), kind);
    }
    assert_eq!("Vu".parse::<CurveKind>().unwrap(), CurveKind::Wu);
}

#[test]
fn test_toolsets_cover_front_ends() {
    assert_eq!(Toolset::Lines.kinds().len(), 3);
    assert_eq!(Toolset::Conics.kinds().len(), 7);
    assert_eq!(Toolset::Curves.kinds(), &CurveKind::ALL);
}

#[test]
fn test_framebuffer_clips_and_blends() {
    let mut fb = Framebuffer::new(20, 20).unwrap();
    fb.clear(Rgba::WHITE);

    let circle = Curve::from_points(
        CurveKind::Circle,
        Point::new(0, 0),
        Point::new(0, 0),
        &CurveDefaults::default().with_circle_radius(10),
    );
    let plots = circle.rasterize(&mut fb, RenderMode::Normal, Rgba::BLACK);
    assert!(plots > 0);
    // Only the quarter arc inside the buffer survives.
    assert_eq!(fb.get_pixel(10, 0), Some(Rgba::BLACK));
    assert_eq!(fb.get_pixel(0, 10), Some(Rgba::BLACK));
    assert_eq!(fb.get_pixel(19, 19), Some(Rgba::WHITE));

    fb.plot(15, 15, Ink::partial(Rgba::BLACK, 0.5));
    let blended = fb.get_pixel(15, 15).unwrap();
    assert!(blended.r > 100 && blended.r < 160);
}

#[test]
fn test_ascii_preview_of_debug_line() {
    let flat = Curve::line(LineAlgorithm::Bresenham, Point::new(0, 0), Point::new(6, 0));
    let flat = trace(|t| {
        flat.rasterize(t, RenderMode::Debug, Rgba::RED);
    });
    assert_eq!(AsciiPreview::new().render_debug_trace(&flat), "@@@@@@@\n");

    let sloped = Curve::line(LineAlgorithm::Bresenham, Point::new(0, 0), Point::new(10, 3));
    let sloped = trace(|t| {
        sloped.rasterize(t, RenderMode::Debug, Rgba::RED);
    });
    let preview = AsciiPreview::new().render_debug_trace(&sloped);
    assert_eq!(preview.lines().count(), 4);
    assert!(preview.chars().any(|c| !c.is_whitespace() && c != '@'), "{preview}");
}

#[test]
fn test_two_clicks_at_grid_corner() {
    let defaults = CurveDefaults::default();
    let first = Point::new(i32::MAX - 2, i32::MAX - 2);
    let second = Point::new(i32::MAX, i32::MAX);
    for kind in CurveKind::ALL {
        let curve = Curve::from_points(kind, first, second, &defaults);
        for mode in [RenderMode::Normal, RenderMode::Debug] {
            let mut trace = PixelTrace::new();
            let plots = curve.rasterize(&mut trace, mode, Rgba::BLACK);
            assert!(plots > 0, "{kind} in {mode:?}");
            assert_eq!(plots, trace.len());
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

fn point() -> impl Strategy<Value = Point> {
    (-300i32..300, -300i32..300).prop_map(|(x, y)| Point::new(x, y))
}

fn kind() -> impl Strategy<Value = CurveKind> {
    prop::sample::select(CurveKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_from_points_always_rasterizes(kind in kind(), first in point(), second in point()) {
        let curve = Curve::from_points(kind, first, second, &CurveDefaults::default());
        prop_assert_eq!(curve.kind(), kind);
        let mut trace = PixelTrace::new();
        let plots = curve.rasterize(&mut trace, RenderMode::Normal, Rgba::BLACK);
        prop_assert_eq!(plots, trace.len());
        prop_assert!(plots > 0);
    }

    #[test]
    fn prop_framebuffer_never_panics(kind in kind(), first in point(), second in point()) {
        let mut fb = Framebuffer::new(64, 48).unwrap();
        let curve = Curve::from_points(kind, first, second, &CurveDefaults::default());
        curve.rasterize(&mut fb, RenderMode::Debug, Rgba::GREEN);
        prop_assert_eq!(fb.pixels().len(), 64 * 48);
    }

    #[test]
    fn prop_coverage_in_unit_interval(start in point(), end in point()) {
        let wu = trace(|t| draw_line_wu(t, start, end, Rgba::BLACK));
        for c in wu.coverages() {
            prop_assert!((0.0..=1.0).contains(&c));
        }
    }
}
