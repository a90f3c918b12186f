//! Error types for trueno-raster operations.
//!
//! Rasterizers never fail: degenerate geometry resolves to a defined (possibly
//! empty) pixel sequence. These errors come from the validated constructors,
//! mode-name parsing, framebuffer allocation and configuration loading.

use crate::curve::CurveKind;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside of rasterization proper.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a configuration file.
    #[cfg(feature = "config")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML configuration could not be parsed.
    #[cfg(feature = "config")]
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A control-point curve was given fewer points than its basis needs.
    #[error("{kind} needs at least {required} control points, got {actual}")]
    TooFewControlPoints {
        /// Curve kind being constructed.
        kind: CurveKind,
        /// Minimum number of control points.
        required: usize,
        /// Number of control points supplied.
        actual: usize,
    },

    /// Semi-axis lengths must both be positive.
    #[error("{kind} semi-axes must be positive, got a={a} b={b}")]
    InvalidAxis {
        /// Curve kind being constructed.
        kind: CurveKind,
        /// First semi-axis.
        a: i32,
        /// Second semi-axis.
        b: i32,
    },

    /// Parabola scale must be non-zero.
    #[error("parabola scale must be non-zero")]
    InvalidScale,

    /// Circle radius must not be negative.
    #[error("circle radius must not be negative, got {0}")]
    NegativeRadius(i32),

    /// A mode name did not match any curve kind.
    #[error("unknown curve kind: {0:?}")]
    UnknownCurveKind(String),

    /// Debug rendering exists only for the line algorithms.
    #[error("debug rendering is not available for {0}")]
    DebugUnsupported(CurveKind),
}
