//! Scalar helpers shared by every rasterizer.
//!
//! The rounding policy of the crate is round-half-up (`floor(x + 0.5)`), so
//! `-2.5` rounds to `-2` and `2.5` rounds to `3`. This keeps pixel positions
//! translation invariant, which symmetric `f64::round` does not.

/// Fractional part of `x`, always in `[0, 1)`.
#[inline]
pub fn fpart(x: f64) -> f64 {
    x - x.floor()
}

/// Complement of [`fpart`].
#[inline]
pub fn rfpart(x: f64) -> f64 {
    1.0 - fpart(x)
}

/// Integer part of `x`, truncated toward zero and saturating at the `i64`
/// range.
#[inline]
pub fn ipart(x: f64) -> i64 {
    x.trunc() as i64
}

/// Largest integer not greater than `x`.
#[inline]
pub fn floor(x: f64) -> i32 {
    x.floor() as i32
}

/// Round half up.
#[inline]
pub fn round(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}

/// Clamp to the unit interval. NaN maps to 0.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Step direction from `from` toward `to`: `1` or `-1`.
///
/// Equal arguments yield `-1`; callers never step in that case.
#[inline]
pub fn step_toward(from: i32, to: i32) -> i32 {
    if from < to {
        1
    } else {
        -1
    }
}
