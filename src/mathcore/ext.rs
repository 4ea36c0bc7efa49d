//! `mathcore::ext` hidden submodule supplies helper enums and structs that are
//! used throughout `tanksmaths` crate.
//!

use crate::mathcore::floats::{INFINITY, SMOOTH_TIME_FLOOR};
use std::{error::Error, fmt};

/// [`MathError`] enum lists all errors that could occur during vector and matrix operations.
///
/// Other anomalies (NaN after inverting singular matrix, precision loss of
/// [`sqrt`](crate::mathcore::floats::sqrt)) are not errors.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::{MathError, vectors::Vector3};
/// assert_eq!(
///     Vector3::one().get(3),
///     Err(MathError::IndexOutOfRange { index: 3, length: 3 })
/// );
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MathError {
    /// Divisor (vector component or scalar) was exactly zero.
    ///
    DivideByZero,
    /// Index was outside of the valid range of an indexer, row or column accessor.
    ///
    IndexOutOfRange {
        /// Index that was requested.
        ///
        index: usize,
        /// Amount of valid indices.
        ///
        length: usize,
    },
}
impl MathError {
    /// Checks that index fits in `length` and logs rejected access.
    ///
    pub(crate) fn check_index(index: usize, length: usize) -> Result<usize, MathError> {
        if index < length {
            Ok(index)
        } else {
            log::debug!("index {index} is out of range 0..{length}");
            Err(MathError::IndexOutOfRange { index, length })
        }
    }

    /// Checks that none of the divisors is zero and logs rejected division.
    ///
    pub(crate) fn check_divisors(divisors: &[f32]) -> Result<(), MathError> {
        if divisors.iter().any(|&divisor| divisor == 0.0) {
            log::debug!("division by zero divisor in {divisors:?}");
            Err(MathError::DivideByZero)
        } else {
            Ok(())
        }
    }
}
impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DivideByZero => write!(f, "You cannot divide by zero"),
            MathError::IndexOutOfRange { index, length } => {
                write!(f, "Index {index} is out of range (length is {length})")
            }
        }
    }
}
impl Error for MathError {}

/// [`SmoothDamp`] struct holds settings of critically damped smoothing.
///
/// `Default` implementation sets `smooth_time` to 0.3 seconds, does not limit speed and uses
/// frame time of 60 frames per second.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::SmoothDamp;
/// let settings: SmoothDamp = SmoothDamp {
///     smooth_time: 0.5,
///     ..Default::default()
/// };
/// assert_eq!(settings.max_speed, f32::INFINITY);
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SmoothDamp {
    /// Approximate time that it takes to reach the target.
    ///
    /// Values below `SMOOTH_TIME_FLOOR` are floored.
    ///
    pub smooth_time: f32,
    /// Maximal speed of change.
    ///
    pub max_speed: f32,
    /// Time that passed since last step.
    ///
    /// Zero delta time leaves the value where it is.
    ///
    pub delta_time: f32,
}
impl SmoothDamp {
    /// Performs one smoothing step from `current` to `target`.
    ///
    /// `velocity` is read and updated in place. When the result would overshoot (or reach) the
    /// target, it is snapped to the target and velocity is reset to zero.
    ///
    /// # Example
    /// ```rust
    /// # use tanksmaths::mathcore::SmoothDamp;
    /// let settings: SmoothDamp = SmoothDamp::default();
    /// let mut velocity: f32 = 0.0;
    /// let mut value: f32 = 0.0;
    /// for _ in 0..600 {
    ///     value = settings.step(value, 10.0, &mut velocity);
    /// }
    /// assert!((value - 10.0).abs() < 0.001);
    /// ```
    ///
    pub fn step(&self, current: f32, target: f32, velocity: &mut f32) -> f32 {
        let smooth_time: f32 = crate::mathcore::floats::max(SMOOTH_TIME_FLOOR, self.smooth_time);
        let omega: f32 = 2.0 / smooth_time;
        let x: f32 = omega * self.delta_time;
        let exp: f32 = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

        let original_target: f32 = target;
        let max_change: f32 = self.max_speed * smooth_time;
        let change: f32 =
            crate::mathcore::floats::clamp_range(current - target, -max_change, max_change);
        let target: f32 = current - change;

        let temp: f32 = (*velocity + omega * change) * self.delta_time;
        *velocity = (*velocity - omega * temp) * exp;
        let mut output: f32 = target + (change + temp) * exp;

        if (original_target - current > 0.0) == (output > original_target) {
            output = original_target;
            *velocity = 0.0;
        }
        output
    }
}
impl Default for SmoothDamp {
    fn default() -> Self {
        SmoothDamp {
            smooth_time: 0.3,
            max_speed: INFINITY,
            delta_time: 1.0 / 60.0,
        }
    }
}
