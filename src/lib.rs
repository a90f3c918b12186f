//! # Trueno-Raster
//!
//! Classic raster-graphics algorithms for teaching and inspection: straight
//! lines, conic sections and parametric splines converted into pixel plots.
//!
//! Every rasterizer writes through one seam, [`PixelSink`](sink::PixelSink).
//! The host owns the surface; the crate only decides which pixels to plot and
//! with what coverage.
//!
//! ## Features
//!
//! - **Lines**: DDA, integer Bresenham and Wu anti-aliasing
//! - **Conics**: midpoint circle, ellipse, parabola and hyperbola
//! - **Curves**: cubic Hermite, Bezier and uniform B-spline
//! - **Debug rendering**: grayscale views of line-algorithm error and coverage
//! - **Two-point construction**: build any curve from two clicks
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut fb = Framebuffer::new(64, 64)?;
//! let curve = Curve::from_points(
//!     CurveKind::Bresenham,
//!     Point::new(2, 3),
//!     Point::new(60, 40),
//!     &CurveDefaults::default(),
//! );
//! let plots = curve.rasterize(&mut fb, RenderMode::Normal, Rgba::BLACK);
//! assert_eq!(plots, 59);
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize for points, colors and curve parameters
//! - `config`: YAML loading of [`CurveDefaults`](config::CurveDefaults)
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - de Boor, C. (1972). "On calculating with B-splines."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Scalar helpers and the crate rounding policy.
pub mod scalar;

/// Color and coverage types.
pub mod color;

/// Integer points and line segments.
pub mod geometry;

/// The pixel sink seam and a recording sink.
pub mod sink;

/// Reference RGBA framebuffer.
pub mod framebuffer;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Line, conic, parametric and debug rasterizers.
pub mod render;

/// Curve dispatch, mode names and toolsets.
pub mod curve;

/// Two-point construction defaults.
pub mod config;

/// Text previews.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Ink, Rgba};
    pub use crate::config::CurveDefaults;
    pub use crate::curve::{Curve, CurveKind, RenderMode, Toolset};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Point};
    pub use crate::output::AsciiPreview;
    pub use crate::render::{
        BSpline, Bezier, Circle, Direction, Drawable, Ellipse, Hermite, Hyperbola, LineAlgorithm,
        Parabola,
    };
    pub use crate::sink::{PixelSink, PixelTrace};
}

// ============================================================================
// Tests
// ============================================================================
