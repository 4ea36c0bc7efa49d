//! `mathcore::floats` submodule implements consts and functions that are the scalar foundation
//! of `tanksmaths` crate.
//!
//! None of these functions rely on platform math routines: [`sqrt`] is an iterative
//! approximation with a fixed iteration count, and [`approx`] is a relative-plus-absolute
//! tolerance comparison.
//!
//! [`ApproxEq`] trait lifts [`approx`] to vectors and matrices.
//!

/// PI constant that is used throughout `tanksmaths` (literal `3.1415926535897931` rounded to `f32`).
///
#[allow(clippy::excessive_precision)]
pub const PI: f32 = 3.141_592_653_589_793_1;
/// Smallest positive value that is representable by `f32` (it is subnormal).
///
#[allow(clippy::excessive_precision)]
pub const EPSILON: f32 = 1.401_298_4e-45;
/// Multiplier that converts degrees to radians.
///
pub const DEG2RAD: f32 = (PI * 2.0) / 360.0;
/// Multiplier that converts radians to degrees.
///
pub const RAD2DEG: f32 = 360.0 / (PI * 2.0);
/// Positive infinity.
///
pub const INFINITY: f32 = f32::INFINITY;
/// Negative infinity.
///
pub const NEG_INFINITY: f32 = f32::NEG_INFINITY;

/// Relative tolerance of [`approx`].
///
pub const APPROX_RELATIVE_TOLERANCE: f32 = 0.00001;
/// Smallest smoothing time that is accepted by smooth damping.
///
pub const SMOOTH_TIME_FLOOR: f32 = 0.0001;

/// Returns the larger of two numbers.
///
/// Comparison is strict, so `a` is returned when numbers are equal.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::floats::max;
/// assert_eq!(max(2.0, 3.0), 3.0);
/// assert_eq!(max(-1.0, -5.0), -1.0);
/// ```
///
pub fn max(a: f32, b: f32) -> f32 {
    if b > a {
        b
    } else {
        a
    }
}
/// Returns the smaller of two numbers.
///
/// Comparison is strict, so `a` is returned when numbers are equal.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::floats::min;
/// assert_eq!(min(2.0, 3.0), 2.0);
/// ```
///
pub fn min(a: f32, b: f32) -> f32 {
    if b < a {
        b
    } else {
        a
    }
}

/// Clamps number between 0.0 and 1.0.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::floats::clamp01;
/// assert_eq!(clamp01(1.5), 1.0);
/// assert_eq!(clamp01(-0.5), 0.0);
/// assert_eq!(clamp01(0.25), 0.25);
/// ```
///
pub fn clamp01(a: f32) -> f32 {
    min(max(a, 0.0), 1.0)
}
/// Clamps number within `[min; max]` range.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::floats::clamp_range;
/// assert_eq!(clamp_range(15.0, -10.0, 10.0), 10.0);
/// assert_eq!(clamp_range(-15.0, -10.0, 10.0), -10.0);
/// ```
///
pub fn clamp_range(value: f32, min_value: f32, max_value: f32) -> f32 {
    min(max(value, min_value), max_value)
}

/// Linearly interpolates between `a` and `b` by `t`.
///
/// `t` is clamped between [0.0; 1.0].
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::floats::lerp;
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 2.0), 10.0);
/// ```
///
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * clamp01(t)
}
/// Linearly interpolates between `a` and `b` by `t` without clamping `t`.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::floats::lerp_unclamped;
/// assert_eq!(lerp_unclamped(0.0, 10.0, 2.0), 20.0);
/// ```
///
pub fn lerp_unclamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Returns squared number.
///
pub fn square(a: f32) -> f32 {
    a * a
}
/// Returns absolute value of a number.
///
pub fn abs(a: f32) -> f32 {
    if a < 0.0 {
        -a
    } else {
        a
    }
}

/// Compares two numbers using relative and absolute tolerance.
///
/// Numbers are considered equal when their difference is smaller than
/// `APPROX_RELATIVE_TOLERANCE` of the larger absolute value, or smaller than `EPSILON * 8`.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::floats::approx;
/// // one ulp apart
/// let next: f32 = 1.0 + f32::EPSILON;
/// assert_ne!(next, 1.0);
/// assert!(approx(next, 1.0));
/// assert!(!approx(1.0, 1.001));
/// ```
///
pub fn approx(a: f32, b: f32) -> bool {
    abs(b - a) < max(APPROX_RELATIVE_TOLERANCE * max(abs(a), abs(b)), EPSILON * 8.0)
}

/// Returns square root approximation of a number.
///
/// Babylonian iteration `root = (a / root + root) / 2` is seeded with `1.0` and runs exactly
/// `floor(a) + 1` times, so accuracy depends on the input rather than on convergence.
/// Non-positive numbers (and NaN) yield `1.0`.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::floats::{approx, sqrt};
/// assert_eq!(sqrt(0.0), 1.0);
/// assert_eq!(sqrt(1.0), 1.0);
/// assert!(approx(sqrt(16.0), 4.0));
/// // single iteration for inputs below one
/// assert_eq!(sqrt(0.25), 0.625);
/// ```
///
pub fn sqrt(a: f32) -> f32 {
    let mut root: f32 = 1.0;
    if a.is_nan() || a <= 0.0 {
        return root;
    }

    let iterations: u64 = (a.floor() as u64).saturating_add(1);
    // The sequence is deterministic, so once it settles on a fixed point or flips between
    // two values the outcome of the remaining iterations is known.
    let mut previous: f32 = f32::NAN;
    for i in 1..=iterations {
        let next: f32 = (a / root + root) / 2.0;
        if next.is_nan() {
            return next;
        }
        if next == root {
            log::trace!("`sqrt({a})` settled after {i} of {iterations} iterations");
            return root;
        }
        if next == previous {
            log::trace!("`sqrt({a})` oscillates after {i} of {iterations} iterations");
            return if (iterations - i) % 2 == 0 { next } else { root };
        }
        previous = root;
        root = next;
    }
    root
}

/// [`ApproxEq`] trait compares values with [`approx`] tolerance instead of exact equality.
///
/// Implementors compare every component or entry.
///
pub trait ApproxEq {
    /// Returns whether values are approximately equal.
    ///
    fn approx_eq(&self, other: &Self) -> bool;
}
impl ApproxEq for f32 {
    fn approx_eq(&self, other: &Self) -> bool {
        approx(*self, *other)
    }
}
impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq(&self, other: &Self) -> bool {
        self.iter().zip(other.iter()).all(|(a, b)| a.approx_eq(b))
    }
}
