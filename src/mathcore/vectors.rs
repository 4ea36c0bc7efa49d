//! `mathcore::vectors` submodule implements two-, three- and four-dimensional vectors which can be
//! used to represent positions, directions, speed and other things.
//!
//! # Reported magnitude
//! [`Vector2`] and [`Vector3`] carry hidden reported magnitude that is written only by
//! `normalize`, `normalized` and `clamp_magnitude`, and is read only by `sqr_magnitude`.
//! Those functions never rescale vector components:
//! ```rust
//! # use tanksmaths::mathcore::vectors::Vector3;
//! let mut vector: Vector3 = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(vector.sqr_magnitude(), 0.0);
//! vector.normalize();
//! assert_eq!(vector.elements(), [3.0, 4.0, 0.0]);
//! assert_eq!(vector.sqr_magnitude(), 1.0);
//! ```
//!

use crate::mathcore::{
    floats::{self, ApproxEq},
    MathError, SmoothDamp,
};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Add, AddAssign, Div, Mul, MulAssign, Sub, SubAssign},
};

// Vectors share almost all of their interface, but the amount of components differs and generic
// consts would not allow naming fields, so common parts are generated by macros.
//
/// [`impl_vector`] macro implements all common associated functions and methods on vectors.
///
/// This macro depends on manual implementation of `elements` function and
/// `From<[f32; $size]>` trait implementation. Vector struct should have `mag` field.
///
macro_rules! impl_vector {
    ($struct:ident, $size:expr) => {
        impl $struct {
            /// Initializes vector with zeroes.
            ///
            pub fn zero() -> Self {
                Self::from([0.0; $size])
            }
            /// Initializes vector with ones.
            ///
            pub fn one() -> Self {
                Self::from([1.0; $size])
            }

            /// Applies function to every vector element and returns changed vector.
            ///
            /// Allows to perform custom operations on each vector element.
            ///
            pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self::from(self.elements().map(f))
            }
            /// Combines vectors by applying function on their elements.
            ///
            /// Allows performing operations with 2 vectors.
            ///
            pub fn combine(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let (e1, e2): ([f32; $size], [f32; $size]) = (self.elements(), other.elements());
                let mut elements: [f32; $size] = [0.0; $size];
                for i in 0..$size {
                    elements[i] = f(e1[i], e2[i]);
                }
                Self::from(elements)
            }

            /// Returns component at given index.
            ///
            /// Fails with [`MathError::IndexOutOfRange`] if there is no such component.
            ///
            pub fn get(&self, index: usize) -> Result<f32, MathError> {
                Ok(self.elements()[MathError::check_index(index, $size)?])
            }

            /// Returns vector itself (unary plus).
            ///
            pub fn positive(self) -> Self {
                self
            }
            /// Multiplies two vectors component-wise.
            ///
            pub fn scale(self, other: Self) -> Self {
                self.combine(other, |a, b| a * b)
            }
            /// Multiplies every vector component by given number.
            ///
            pub fn scale_by(self, multiplier: f32) -> Self {
                self.map(|a| a * multiplier)
            }
            /// Divides two vectors component-wise.
            ///
            /// Fails with [`MathError::DivideByZero`] if any component of `other` is zero.
            ///
            pub fn divide(self, other: Self) -> Result<Self, MathError> {
                MathError::check_divisors(&other.elements())?;
                Ok(self.combine(other, |a, b| a / b))
            }
            /// Divides every vector component by given number.
            ///
            /// Fails with [`MathError::DivideByZero`] if `divisor` is zero.
            ///
            pub fn divide_by(self, divisor: f32) -> Result<Self, MathError> {
                MathError::check_divisors(&[divisor])?;
                Ok(self.map(|a| a / divisor))
            }

            /// Returns magnitude of vector (vector length).
            ///
            /// Uses [`floats::sqrt`], so it inherits its precision and returns 1.0 for zero vector.
            ///
            pub fn magnitude(&self) -> f32 {
                floats::sqrt(self.dot(*self))
            }
            /// Returns square of reported magnitude.
            ///
            /// Reported magnitude is 0.0 until `normalize`, `normalized` or
            /// `clamp_magnitude` writes it, so this is not `magnitude()` squared.
            ///
            pub fn sqr_magnitude(&self) -> f32 {
                self.mag * self.mag
            }
            /// Sets reported magnitude to 1.0.
            ///
            /// Components are left untouched.
            ///
            pub fn normalize(&mut self) {
                self.mag = 1.0;
            }
            /// Returns copy of vector with reported magnitude set to 1.0.
            ///
            /// Components are left untouched.
            ///
            pub fn normalized(mut self) -> Self {
                self.normalize();
                self
            }
            /// Returns copy of vector whose reported magnitude is capped by `max_length`.
            ///
            /// Components are left untouched.
            ///
            pub fn clamp_magnitude(self, max_length: f32) -> Self {
                let magnitude: f32 = self.magnitude();
                let mut vector: Self = self;
                vector.mag = if magnitude > max_length {
                    max_length
                } else {
                    magnitude
                };
                vector
            }

            /// Performs dot product operation on two vectors.
            ///
            pub fn dot(self, other: Self) -> f32 {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .fold(0.0, |acc, (a, b)| acc + *a * *b)
            }

            /// Returns vector that is made from the largest components of two vectors.
            ///
            pub fn max(self, other: Self) -> Self {
                self.combine(other, floats::max)
            }
            /// Returns vector that is made from the smallest components of two vectors.
            ///
            pub fn min(self, other: Self) -> Self {
                self.combine(other, floats::min)
            }

            /// Linearly interpolates between vectors `self` and `other` by `t`.
            ///
            /// `t` will be clamped between [0.0; 1.0].
            ///
            pub fn lerp(self, other: Self, t: f32) -> Self {
                self.combine(other, |a, b| floats::lerp(a, b, t))
            }
            /// Linearly interpolates between vectors `self` and `other` by `t` without clamping `t`.
            ///
            pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
                self.combine(other, |a, b| floats::lerp_unclamped(a, b, t))
            }

            /// Moves point towards `target`, travelling at most `max_distance`.
            ///
            /// If remaining distance is not greater than `max_distance` or is exactly zero,
            /// `target` is returned.
            /// Fails with [`MathError::DivideByZero`] if direction cannot be computed.
            ///
            pub fn move_towards(self, target: Self, max_distance: f32) -> Result<Self, MathError> {
                let difference: Self = target - self;
                let magnitude: f32 = difference.magnitude();
                if magnitude <= max_distance || magnitude == 0.0 {
                    return Ok(target);
                }
                Ok(self + difference.divide_by(magnitude)? * max_distance)
            }

            /// Returns whether every component is less than or equal to corresponding component of `other`.
            ///
            pub fn le_all(&self, other: &Self) -> bool {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .all(|(a, b)| a <= b)
            }
            /// Returns whether every component is greater than or equal to corresponding component of `other`.
            ///
            pub fn ge_all(&self, other: &Self) -> bool {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .all(|(a, b)| a >= b)
            }
            /// Returns whether every component is less than or equal to `value`.
            ///
            /// `value >= vector` comparison is the same check.
            ///
            pub fn le_all_scalar(&self, value: f32) -> bool {
                self.elements().iter().all(|a| *a <= value)
            }
            /// Returns whether every component is greater than or equal to `value`.
            ///
            /// `value <= vector` comparison is the same check.
            ///
            pub fn ge_all_scalar(&self, value: f32) -> bool {
                self.elements().iter().all(|a| *a >= value)
            }
        }
        impl PartialEq for $struct {
            /// Compares components exactly, reported magnitude is ignored.
            ///
            fn eq(&self, other: &Self) -> bool {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .all(|(a, b)| a == b)
            }
        }
        impl ApproxEq for $struct {
            fn approx_eq(&self, other: &Self) -> bool {
                self.elements().approx_eq(&other.elements())
            }
        }
        impl fmt::Display for $struct {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({})", self.elements().map(|elem| elem.to_string()).join(", "))
            }
        }
        impl From<$struct> for [f32; $size] {
            fn from(vector: $struct) -> Self {
                vector.elements()
            }
        }
    };
}

// All the following macros depend on [`impl_vector`] macro.
/// [`impl_vector_vector_operations`] macro implements vector-vector operations for vector.
///
macro_rules! impl_vector_vector_operations {
    ($struct_name:ident, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<Self> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
    )+}
}
/// [`impl_vector_assignoperations`] macro implements `...Assign` trait for vector.
///
macro_rules! impl_vector_assignoperations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+}
}
/// [`impl_vector_operations`] macro implements all operation traits for vector.
///
/// Division is fallible, so `Div` implementations return `Result`.
///
macro_rules! impl_vector_operations {
    ($struct_name:ident) => {
        impl Mul<f32> for $struct_name {
            type Output = Self;

            fn mul(self, rhs: f32) -> Self::Output {
                self.scale_by(rhs)
            }
        }
        impl Div<Self> for $struct_name {
            type Output = Result<Self, MathError>;

            fn div(self, rhs: Self) -> Self::Output {
                self.divide(rhs)
            }
        }
        impl Div<f32> for $struct_name {
            type Output = Result<Self, MathError>;

            fn div(self, rhs: f32) -> Self::Output {
                self.divide_by(rhs)
            }
        }
        impl_vector_vector_operations!($struct_name, ((Add, add, +),
                                                      (Sub, sub, -),
                                                      (Mul, mul, *),));
        impl_vector_assignoperations!($struct_name, Self, ((AddAssign, add_assign, +),
                                                           (SubAssign, sub_assign, -),));
        impl_vector_assignoperations!($struct_name, f32, ((MulAssign, mul_assign, *),));
    };
}

/// [`Vector2`] struct represents two-dimensional vector and two-dimensional point with `f32` coordinates.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::{vectors::Vector2, MathError};
/// let a: Vector2 = Vector2::new(1.0, 2.0);
/// assert_eq!(a + Vector2::one(), Vector2::new(2.0, 3.0));
/// assert_eq!(a * Vector2::new(2.0, 3.0), Vector2::new(2.0, 6.0));
/// assert_eq!(a / Vector2::new(0.0, 1.0), Err(MathError::DivideByZero));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Vector2 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,

    /// Reported magnitude.
    ///
    #[serde(skip)]
    mag: f32,
}
impl Vector2 {
    /// Constructs vector from components.
    ///
    pub fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y, mag: 0.0 }
    }

    /// Shorthand for writing `Vector2::new(0.0, 1.0)`.
    ///
    pub fn up() -> Self {
        Vector2::new(0.0, 1.0)
    }
    /// Shorthand for writing `Vector2::new(0.0, -1.0)`.
    ///
    pub fn back() -> Self {
        Vector2::new(0.0, -1.0)
    }
    /// Shorthand for writing `Vector2::new(-1.0, 0.0)`.
    ///
    pub fn left() -> Self {
        Vector2::new(-1.0, 0.0)
    }
    /// Shorthand for writing `Vector2::new(1.0, 0.0)`.
    ///
    pub fn right() -> Self {
        Vector2::new(1.0, 0.0)
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 2] {
        [self.x, self.y]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f32; 2]) {
        self.x = elements[0];
        self.y = elements[1];
    }

    /// Converts plane vector to [`Vector3`] lying on XZ plane (`(x, 0, y)`).
    ///
    pub fn to_vector3(self) -> Vector3 {
        Vector3::new(self.x, 0.0, self.y)
    }

    /// Returns distance between two points.
    ///
    /// Uses [`floats::sqrt`], so distance from point to itself is 1.0.
    ///
    pub fn distance(self, other: Self) -> f32 {
        floats::sqrt(floats::square(self.x - other.x) + floats::square(self.y - other.y))
    }

    /// Returns angle in degrees of direction from `self` to `to`, measured from X axis.
    ///
    /// # Example
    /// ```rust
    /// # use tanksmaths::mathcore::{floats::approx, vectors::Vector2};
    /// let angle: f32 = Vector2::new(1.0, 1.0).angle(Vector2::new(1.0, 3.0));
    /// assert!(approx(angle, 90.0));
    /// ```
    ///
    pub fn angle(self, to: Self) -> f32 {
        (to.y - self.y).atan2(to.x - self.x) * (180.0 / floats::PI)
    }
}
impl_vector!(Vector2, 2);
impl_vector_operations!(Vector2);
impl From<[f32; 2]> for Vector2 {
    fn from(arr: [f32; 2]) -> Self {
        Vector2::new(arr[0], arr[1])
    }
}

/// [`Vector3`] struct represents three-dimensional vector and three-dimensional point with `f32` coordinates.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::vectors::Vector3;
/// let position: Vector3 = Vector3::zero();
/// let target: Vector3 = Vector3::new(10.0, 0.0, 0.0);
/// assert_eq!(position.move_towards(target, 3.0), Ok(Vector3::new(3.0, 0.0, 0.0)));
/// assert_eq!(position.move_towards(target, 20.0), Ok(target));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Vector3 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,

    /// Z component of vector.
    ///
    pub z: f32,

    /// Reported magnitude.
    ///
    #[serde(skip)]
    mag: f32,
}
impl Vector3 {
    /// Constructs vector from components.
    ///
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z, mag: 0.0 }
    }

    /// Shorthand for writing `Vector3::new(0.0, 1.0, 0.0)`.
    ///
    pub fn up() -> Self {
        Vector3::new(0.0, 1.0, 0.0)
    }
    /// Shorthand for writing `Vector3::new(0.0, -1.0, 0.0)`.
    ///
    pub fn down() -> Self {
        Vector3::new(0.0, -1.0, 0.0)
    }
    /// Shorthand for writing `Vector3::new(-1.0, 0.0, 0.0)`.
    ///
    pub fn left() -> Self {
        Vector3::new(-1.0, 0.0, 0.0)
    }
    /// Shorthand for writing `Vector3::new(1.0, 0.0, 0.0)`.
    ///
    pub fn right() -> Self {
        Vector3::new(1.0, 0.0, 0.0)
    }
    /// Shorthand for writing `Vector3::new(0.0, 0.0, 1.0)`.
    ///
    pub fn forward() -> Self {
        Vector3::new(0.0, 0.0, 1.0)
    }
    /// Shorthand for writing `Vector3::new(0.0, 0.0, -1.0)`.
    ///
    pub fn back() -> Self {
        Vector3::new(0.0, 0.0, -1.0)
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f32; 3]) {
        self.x = elements[0];
        self.y = elements[1];
        self.z = elements[2];
    }

    /// Returns distance between two points.
    ///
    /// Unlike [`Vector3::magnitude`], this uses exact square root, so distance from point to itself is 0.0.
    ///
    pub fn distance(self, other: Self) -> f32 {
        (floats::square(self.x - other.x)
            + floats::square(self.y - other.y)
            + floats::square(self.z - other.z))
        .sqrt()
    }

    /// Returns angle in radians of direction from `self` to `to` projected on XY plane.
    ///
    pub fn angle(self, to: Self) -> f32 {
        (to.y - self.y).atan2(to.x - self.x)
    }

    /// Returns cross product of two vectors as it is defined in this library.
    ///
    /// Second component is `-(a.x * a.z - b.x * a.z)`, which differs from textbook
    /// cross product. [`Vector3::standard_cross`] implements the textbook one.
    ///
    /// # Example
    /// ```rust
    /// # use tanksmaths::mathcore::vectors::Vector3;
    /// let a: Vector3 = Vector3::new(1.0, 2.0, 3.0);
    /// let b: Vector3 = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.cross(b), Vector3::new(-3.0, 9.0, -3.0));
    /// assert_eq!(a.standard_cross(b), Vector3::new(-3.0, 6.0, -3.0));
    /// ```
    ///
    pub fn cross(self, other: Self) -> Self {
        let (a, b): (Self, Self) = (self, other);
        Vector3::new(
            a.y * b.z - b.y * a.z,
            (a.x * a.z - b.x * a.z) * -1.0,
            a.x * b.y - b.x * a.y,
        )
    }
    /// Returns textbook (right-handed) cross product of two vectors.
    ///
    pub fn standard_cross(self, other: Self) -> Self {
        let (a, b): (Self, Self) = (self, other);
        Vector3::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// Gradually changes value towards `target` using critically damped spring.
    ///
    /// `velocity` is updated in place, `max_speed` defaults to infinity and
    /// `smooth_time` is floored at `SMOOTH_TIME_FLOOR`.
    /// This is a shorthand for [`SmoothDamp::step`].
    ///
    pub fn smooth_damp(
        current: f32,
        target: f32,
        velocity: &mut f32,
        smooth_time: f32,
        max_speed: Option<f32>,
        delta_time: f32,
    ) -> f32 {
        let settings: SmoothDamp = SmoothDamp {
            smooth_time,
            max_speed: max_speed.unwrap_or(floats::INFINITY),
            delta_time,
        };
        settings.step(current, target, velocity)
    }
    /// Gradually moves point towards `target`, smoothing each component independently.
    ///
    /// `velocity` holds velocity of each component and is updated in place.
    ///
    /// # Example
    /// ```rust
    /// # use tanksmaths::mathcore::{vectors::Vector3, SmoothDamp};
    /// let mut velocity: Vector3 = Vector3::zero();
    /// let position: Vector3 = Vector3::zero().smooth_damp_towards(
    ///     Vector3::new(10.0, 0.0, -10.0),
    ///     &mut velocity,
    ///     SmoothDamp::default(),
    /// );
    /// assert!(position.x > 0.0 && position.z < 0.0);
    /// assert_eq!(position.y, 0.0);
    /// ```
    ///
    pub fn smooth_damp_towards(
        self,
        target: Self,
        velocity: &mut Vector3,
        settings: SmoothDamp,
    ) -> Self {
        let mut velocities: [f32; 3] = velocity.elements();
        let (current, target): ([f32; 3], [f32; 3]) = (self.elements(), target.elements());
        let mut result: [f32; 3] = [0.0; 3];
        for i in 0..3 {
            result[i] = settings.step(current[i], target[i], &mut velocities[i]);
        }
        velocity.set(velocities);
        Vector3::from(result)
    }
}
impl_vector!(Vector3, 3);
impl_vector_operations!(Vector3);
impl From<[f32; 3]> for Vector3 {
    fn from(arr: [f32; 3]) -> Self {
        Vector3::new(arr[0], arr[1], arr[2])
    }
}

/// [`Vector4`] struct is a four-component data carrier that is used to build [`Matrix4D`](crate::mathcore::matrices::Matrix4D).
///
/// It has no arithmetic.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector4 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,

    /// Z component of vector.
    ///
    pub z: f32,

    /// W component of vector.
    ///
    pub w: f32,
}
impl Vector4 {
    /// Constructs vector from components.
    ///
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Vector4 { x, y, z, w }
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}
impl ApproxEq for Vector4 {
    fn approx_eq(&self, other: &Self) -> bool {
        self.elements().approx_eq(&other.elements())
    }
}
impl fmt::Display for Vector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}
impl From<[f32; 4]> for Vector4 {
    fn from(arr: [f32; 4]) -> Self {
        Vector4::new(arr[0], arr[1], arr[2], arr[3])
    }
}
impl From<Vector4> for [f32; 4] {
    fn from(vector: Vector4) -> Self {
        vector.elements()
    }
}

#[cfg(test)]
mod tests {
    use super::{Vector2, Vector3, Vector4};
    use crate::mathcore::{
        floats::{approx, ApproxEq},
        MathError,
    };
    use proptest::prelude::*;

    #[test]
    fn vector() {
        assert_eq!(Vector2::zero(), Vector2::new(0.0, 0.0));
        assert_eq!(Vector2::one(), Vector2::new(1.0, 1.0));
        assert_eq!(Vector2::default(), Vector2::zero());

        let vec1: Vector2 = Vector2::from([3.0, 4.0]);
        assert_eq!(vec1.elements(), [3.0, 4.0]);
        assert_eq!(<[f32; 2]>::from(vec1), [3.0, 4.0]);
        assert_eq!(vec1.positive(), vec1);

        let vec2: Vector2 = vec1.scale(Vector2::from([4.0, 3.0]));
        assert_eq!(vec2.elements(), [12.0, 12.0]);
        assert_eq!(vec1 * Vector2::from([4.0, 3.0]), vec2);

        let mut vec3: Vector2 = Vector2::from([5.0, 2.0]).max(Vector2::from([3.0, 6.0]));
        assert_eq!(vec3, Vector2::from([5.0, 6.0]));
        let mut vec4: Vector2 = Vector2::min(Vector2::from([5.0, 2.0]), Vector2::from([3.0, 6.0]));
        assert_eq!(vec4, Vector2::from([3.0, 2.0]));

        assert_eq!(vec1.map(|n| n * 2.0), Vector2::from([6.0, 8.0]));
        assert_eq!(
            vec1.combine(vec2, |n1, n2| n1 * n2),
            Vector2::from([36.0, 48.0])
        );

        assert_eq!(vec1 + vec2, Vector2::from([15.0, 16.0]));
        assert_eq!(vec1 - vec2, Vector2::from([-9.0, -8.0]));
        assert_eq!(vec2 * 2.0, Vector2::from([24.0, 24.0]));
        assert_eq!(vec2 / 3.0, Ok(Vector2::from([4.0, 4.0])));
        assert_eq!(vec2 / vec1, Ok(Vector2::from([4.0, 3.0])));

        vec3 += vec1;
        assert_eq!(vec3.elements(), [8.0, 10.0]);
        vec4 -= vec2;
        assert_eq!(vec4.elements(), [-9.0, -10.0]);
        vec4 *= 2.0;
        assert_eq!(vec4.elements(), [-18.0, -20.0]);

        assert_eq!(Vector2::dot(vec1, Vector2::from([5.0, 3.0])), 27.0);
        assert_eq!(vec1.to_string(), "(3, 4)");
        assert_eq!(Vector3::new(1.5, -2.0, 0.0).to_string(), "(1.5, -2, 0)");
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(
            Vector2::new(1.0, 2.0) / Vector2::new(0.0, 1.0),
            Err(MathError::DivideByZero)
        );
        assert_eq!(
            Vector3::one().divide(Vector3::new(1.0, 1.0, -0.0)),
            Err(MathError::DivideByZero)
        );
        assert_eq!(Vector3::one() / 0.0, Err(MathError::DivideByZero));
        assert_eq!(Vector2::one().divide_by(0.0), Err(MathError::DivideByZero));
        assert_eq!(
            Vector3::new(2.0, 4.0, 8.0) / 2.0,
            Ok(Vector3::new(1.0, 2.0, 4.0))
        );
    }

    #[test]
    fn indexing() {
        let vec2: Vector2 = Vector2::new(1.0, 2.0);
        assert_eq!(vec2.get(0), Ok(1.0));
        assert_eq!(vec2.get(1), Ok(2.0));
        assert_eq!(
            vec2.get(2),
            Err(MathError::IndexOutOfRange {
                index: 2,
                length: 2
            })
        );

        let vec3: Vector3 = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(vec3.get(2), Ok(3.0));
        assert_eq!(
            vec3.get(3),
            Err(MathError::IndexOutOfRange {
                index: 3,
                length: 3
            })
        );
    }

    #[test]
    fn equality() {
        // one ulp apart
        let a: Vector2 = Vector2::new(1.0 + f32::EPSILON, 1.0);
        let b: Vector2 = Vector2::one();
        assert_ne!(a, b);
        assert!(a.approx_eq(&b));
        assert!(!Vector2::new(1.001, 1.0).approx_eq(&b));

        // reported magnitude does not take part in comparison
        assert_eq!(Vector3::one().normalized(), Vector3::one());
    }

    #[test]
    fn magnitude() {
        assert_eq!(Vector2::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vector3::new(0.0, 0.0, 10.0).magnitude(), 10.0);
        assert_eq!(Vector3::zero().magnitude(), 1.0);
        // three iterations are not enough for sqrt(2)
        assert_ne!(Vector2::one().magnitude(), 2.0_f32.sqrt());
        assert!(approx(Vector2::one().magnitude(), 1.414_215_7));
    }

    #[test]
    fn reported_magnitude() {
        let mut vec: Vector2 = Vector2::new(3.0, 4.0);
        assert_eq!(vec.sqr_magnitude(), 0.0);
        vec.normalize();
        assert_eq!(vec.elements(), [3.0, 4.0]);
        assert_eq!(vec.sqr_magnitude(), 1.0);

        let clamped: Vector2 = Vector2::new(3.0, 4.0).clamp_magnitude(2.0);
        assert_eq!(clamped.elements(), [3.0, 4.0]);
        assert_eq!(clamped.sqr_magnitude(), 4.0);
        let unclamped: Vector3 = Vector3::new(0.0, 3.0, 4.0).clamp_magnitude(10.0);
        assert_eq!(unclamped.sqr_magnitude(), 25.0);

        // fresh vectors forget reported magnitude
        let sum: Vector2 = vec + Vector2::zero();
        assert_eq!(sum.sqr_magnitude(), 0.0);
    }

    #[test]
    fn distance_and_angle() {
        let a: Vector3 = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a.distance(a), 0.0);
        assert_eq!(Vector3::zero().distance(Vector3::new(0.0, 3.0, 4.0)), 5.0);

        let p: Vector2 = Vector2::new(1.0, 1.0);
        assert_eq!(p.distance(Vector2::new(4.0, 5.0)), 5.0);
        assert_eq!(p.distance(p), 1.0);

        assert!(approx(Vector2::zero().angle(Vector2::new(-1.0, 0.0)), 180.0));
        assert!(approx(Vector2::zero().angle(Vector2::new(1.0, -1.0)), -45.0));
        assert!(approx(
            Vector3::zero().angle(Vector3::new(0.0, 1.0, 5.0)),
            std::f32::consts::FRAC_PI_2
        ));
    }

    #[test]
    fn interpolation() {
        let a: Vector3 = Vector3::new(0.0, 10.0, -10.0);
        let b: Vector3 = Vector3::new(10.0, 20.0, 10.0);
        assert_eq!(a.lerp(b, 0.5), Vector3::new(5.0, 15.0, 0.0));
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp_unclamped(b, 2.0), Vector3::new(20.0, 30.0, 30.0));
        assert_eq!(
            Vector2::new(0.0, 2.0).lerp_unclamped(Vector2::new(2.0, 4.0), -1.0),
            Vector2::new(-2.0, 0.0)
        );
    }

    #[test]
    fn move_towards() {
        let origin: Vector3 = Vector3::zero();
        let target: Vector3 = Vector3::new(10.0, 0.0, 0.0);
        assert_eq!(origin.move_towards(target, 3.0), Ok(Vector3::new(3.0, 0.0, 0.0)));
        assert_eq!(origin.move_towards(target, 20.0), Ok(target));
        assert_eq!(origin.move_towards(target, 10.0), Ok(target));

        // zero displacement reports magnitude 1.0, the step collapses onto the target
        let point: Vector2 = Vector2::new(2.0, 2.0);
        assert_eq!(point.move_towards(point, 0.5), Ok(point));
        assert_eq!(point.move_towards(point, 0.0), Ok(point));

        assert_eq!(
            Vector2::zero().move_towards(Vector2::new(0.0, 4.0), 1.0),
            Ok(Vector2::new(0.0, 1.0))
        );
    }

    #[test]
    fn comparison() {
        let small: Vector3 = Vector3::new(1.0, 2.0, 3.0);
        let big: Vector3 = Vector3::new(1.0, 5.0, 6.0);
        assert!(small.le_all(&big));
        assert!(big.ge_all(&small));
        assert!(!Vector3::new(0.0, 9.0, 0.0).le_all(&big));
        assert!(small.le_all_scalar(3.0));
        assert!(!small.le_all_scalar(2.0));
        assert!(small.ge_all_scalar(1.0));
        assert!(!small.ge_all_scalar(1.5));
        assert!(Vector2::one().le_all(&Vector2::one()));
    }

    #[test]
    fn cross() {
        let x: Vector3 = Vector3::right();
        let y: Vector3 = Vector3::up();
        assert_eq!(x.standard_cross(y), Vector3::forward());
        assert_eq!(x.cross(y), Vector3::forward());

        let z: Vector3 = Vector3::forward();
        assert_eq!(x.standard_cross(z), Vector3::down());
        assert_eq!(x.cross(z), Vector3::zero());
    }

    #[test]
    fn smooth_damp() {
        let mut velocity: f32 = 0.0;
        let value: f32 = Vector3::smooth_damp(0.0, 10.0, &mut velocity, 1.0, None, 0.1);
        assert!(value > 0.0 && value < 10.0);
        assert!(velocity > 0.0);

        let mut limited: f32 = 0.0;
        let slow: f32 = Vector3::smooth_damp(0.0, 10.0, &mut limited, 1.0, Some(0.5), 0.1);
        assert!(slow < value);
    }

    #[test]
    fn conversions() {
        assert_eq!(Vector2::new(1.0, 2.0).to_vector3(), Vector3::new(1.0, 0.0, 2.0));
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]).elements(), [1.0, 2.0, 3.0]);

        let mut vec: Vector3 = Vector3::zero();
        vec.set([4.0, 5.0, 6.0]);
        assert_eq!(<[f32; 3]>::from(vec), [4.0, 5.0, 6.0]);

        let vec4: Vector4 = Vector4::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(vec4, Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(<[f32; 4]>::from(vec4), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(vec4.to_string(), "(1, 2, 3, 4)");

        assert_eq!(Vector2::left() + Vector2::right(), Vector2::zero());
        assert_eq!(Vector2::up() + Vector2::back(), Vector2::zero());
        assert_eq!(Vector3::down() + Vector3::up(), Vector3::zero());
        assert_eq!(Vector3::back() + Vector3::forward(), Vector3::zero());
        assert_eq!(Vector3::left() + Vector3::right(), Vector3::zero());
    }

    /// Strategy for divisors that have no zero component.
    ///
    fn divisor() -> impl Strategy<Value = f32> {
        prop_oneof![-100.0_f32..-0.5, 0.5_f32..100.0]
    }

    proptest! {
        #[test]
        fn normalize_keeps_components(x in -1e4_f32..1e4, y in -1e4_f32..1e4, z in -1e4_f32..1e4) {
            let mut vec: Vector3 = Vector3::new(x, y, z);
            vec.normalize();
            prop_assert_eq!(vec.elements(), [x, y, z]);
            prop_assert_eq!(Vector2::new(x, y).normalized().elements(), [x, y]);
        }

        #[test]
        fn distance_to_itself_is_zero(x in -1e4_f32..1e4, y in -1e4_f32..1e4, z in -1e4_f32..1e4) {
            let vec: Vector3 = Vector3::new(x, y, z);
            prop_assert_eq!(vec.distance(vec), 0.0);
        }

        #[test]
        fn division_is_undone_by_multiplication(
            x in -1e3_f32..1e3, y in -1e3_f32..1e3, z in -1e3_f32..1e3,
            dx in divisor(), dy in divisor(), dz in divisor()
        ) {
            let a: Vector3 = Vector3::new(x, y, z);
            let b: Vector3 = Vector3::new(dx, dy, dz);
            let restored: Vector3 = (a / b).expect("divisor has no zero components") * b;
            prop_assert!(restored.approx_eq(&a));
        }
    }
}
