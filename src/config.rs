//! Two-point construction defaults.
//!
//! A host that only collects two clicks still needs radii, axes and extra
//! control points to build most curves. [`CurveDefaults`] holds those
//! constants; [`Curve::from_points`](crate::curve::Curve::from_points) reads
//! them. With the `config` feature they can be loaded from YAML, with any
//! missing field falling back to its default.

use crate::render::conic::Direction;
use crate::render::parametric::DEFAULT_STEPS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "config")]
use crate::error::{Error, Result};
#[cfg(feature = "config")]
use std::path::Path;

/// Constants used to complete a curve from two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveDefaults {
    /// Circle radius around the first point.
    #[cfg_attr(feature = "serde", serde(default = "default_circle_radius"))]
    pub circle_radius: i32,

    /// Ellipse semi-axes `(a, b)`.
    #[cfg_attr(feature = "serde", serde(default = "default_ellipse_axes"))]
    pub ellipse_axes: (i32, i32),

    /// Parabola scale `a`.
    #[cfg_attr(feature = "serde", serde(default = "default_parabola_scale"))]
    pub parabola_scale: i32,

    /// Parabola opening direction.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parabola_direction: Direction,

    /// Hyperbola semi-axes `(a, b)`.
    #[cfg_attr(feature = "serde", serde(default = "default_hyperbola_axes"))]
    pub hyperbola_axes: (i32, i32),

    /// Hermite end point, relative to the second point.
    #[cfg_attr(feature = "serde", serde(default = "default_hermite_end_offset"))]
    pub hermite_end_offset: (i32, i32),

    /// Hermite end tangent, relative to the second point.
    #[cfg_attr(feature = "serde", serde(default = "default_hermite_tangent_offset"))]
    pub hermite_tangent_offset: (i32, i32),

    /// Inner Bezier / B-spline control points: added to the first point and
    /// subtracted from the second.
    #[cfg_attr(feature = "serde", serde(default = "default_control_offset"))]
    pub control_offset: (i32, i32),

    /// Parametric samples per unit of `t`.
    #[cfg_attr(feature = "serde", serde(default = "default_steps"))]
    pub steps: u32,
}

fn default_circle_radius() -> i32 {
    20
}
fn default_ellipse_axes() -> (i32, i32) {
    (80, 50)
}
fn default_parabola_scale() -> i32 {
    50
}
fn default_hyperbola_axes() -> (i32, i32) {
    (20, 30)
}
fn default_hermite_end_offset() -> (i32, i32) {
    (100, 100)
}
fn default_hermite_tangent_offset() -> (i32, i32) {
    (200, 0)
}
fn default_control_offset() -> (i32, i32) {
    (50, 100)
}
fn default_steps() -> u32 {
    DEFAULT_STEPS
}

impl Default for CurveDefaults {
    fn default() -> Self {
        Self {
            circle_radius: default_circle_radius(),
            ellipse_axes: default_ellipse_axes(),
            parabola_scale: default_parabola_scale(),
            parabola_direction: Direction::default(),
            hyperbola_axes: default_hyperbola_axes(),
            hermite_end_offset: default_hermite_end_offset(),
            hermite_tangent_offset: default_hermite_tangent_offset(),
            control_offset: default_control_offset(),
            steps: default_steps(),
        }
    }
}

impl CurveDefaults {
    /// Creates the stock defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the circle radius.
    #[must_use]
    pub const fn with_circle_radius(mut self, radius: i32) -> Self {
        self.circle_radius = radius;
        self
    }

    /// Set the ellipse semi-axes.
    #[must_use]
    pub const fn with_ellipse_axes(mut self, a: i32, b: i32) -> Self {
        self.ellipse_axes = (a, b);
        self
    }

    /// Set the parabola scale and direction.
    #[must_use]
    pub const fn with_parabola(mut self, scale: i32, direction: Direction) -> Self {
        self.parabola_scale = scale;
        self.parabola_direction = direction;
        self
    }

    /// Set the hyperbola semi-axes.
    #[must_use]
    pub const fn with_hyperbola_axes(mut self, a: i32, b: i32) -> Self {
        self.hyperbola_axes = (a, b);
        self
    }

    /// Set the Hermite end and end-tangent offsets.
    #[must_use]
    pub const fn with_hermite_offsets(mut self, end: (i32, i32), tangent: (i32, i32)) -> Self {
        self.hermite_end_offset = end;
        self.hermite_tangent_offset = tangent;
        self
    }

    /// Set the inner control-point offset.
    #[must_use]
    pub const fn with_control_offset(mut self, dx: i32, dy: i32) -> Self {
        self.control_offset = (dx, dy);
        self
    }

    /// Set the parametric sampling density.
    #[must_use]
    pub const fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }
}

#[cfg(feature = "config")]
impl CurveDefaults {
    /// Loads defaults from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses defaults from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })
    }
}
