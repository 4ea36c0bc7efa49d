//! `mathcore::matrices` submodule implements square 2x2, 3x3 and 4x4 matrices that are built from vectors.
//!
//! # Layout
//! Each vector that is passed to constructor becomes one column of the matrix.
//! Entries are stored in named fields `dCR`: `R` is the position of a vector that was
//! passed to constructor and `C` is the index of a component inside that vector, so in
//! mathematical notation field `dCR` holds the entry at row `C` and column `R`.
//! Flat indexers traverse fields in their declaration order, vector by vector:
//! ```text
//!        1st   2nd   3rd vector
//!       ----------------
//! C=0 | d00   d01   d02
//! C=1 | d10   d11   d12
//! C=2 | d20   d21   d22
//!       0..=2 3..=5 6..=8   <- flat indices
//! ```
//! Accessors keep the naming of the fields: `get_row(i)` returns i-th vector that was passed to
//! constructor (`d0i, d1i, ...`) and `get_column(i)` gathers i-th component of each of them
//! (`di0, di1, ...`).
//!
//! # Multiplication
//! `*` operator multiplies matrices entry by entry (Hadamard product), it is **not** matrix
//! multiplication. Matrix product of column-built matrices is available as `standard_product`.
//!

use crate::mathcore::{
    floats::ApproxEq,
    vectors::{Vector2, Vector3, Vector4},
    MathError,
};
use serde::{Deserialize, Serialize};
use std::{
    array,
    ops::{Add, AddAssign, Mul, MulAssign},
};

/// [`impl_matrix`] macro implements all common associated functions, methods and operations on matrices.
///
/// Fields should be listed in flat index order.
///
macro_rules! impl_matrix {
    ($struct:ident, $vector:ident, $size:expr, [$($field:ident),+ $(,)?]) => {
        impl $struct {
            /// Returns all entries in flat index order.
            ///
            pub fn entries(&self) -> [f32; $size * $size] {
                [$(self.$field),+]
            }
            /// Constructs matrix from entries in flat index order.
            ///
            pub fn from_entries(entries: [f32; $size * $size]) -> Self {
                let [$($field),+] = entries;
                $struct { $($field),+ }
            }
            /// Returns matrix as an array of vectors (each inner array is one vector in order that
            /// is used by constructor).
            ///
            /// This is the layout that is expected by engines which build matrices from column vectors.
            ///
            pub fn to_array(&self) -> [[f32; $size]; $size] {
                let entries: [f32; $size * $size] = self.entries();
                array::from_fn(|r| array::from_fn(|c| entries[r * $size + c]))
            }

            /// Initializes identity matrix (1.0 on main diagonal and 0.0 elsewhere).
            ///
            pub fn identity() -> Self {
                Self::from_entries(array::from_fn(|k| {
                    if k / $size == k % $size {
                        1.0
                    } else {
                        0.0
                    }
                }))
            }
            /// Initializes matrix with zeroes.
            ///
            pub fn zero_matrix() -> Self {
                Self::from_entries([0.0; $size * $size])
            }

            /// Applies function to every matrix entry and returns changed matrix.
            ///
            pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
                Self::from_entries(self.entries().map(f))
            }
            /// Combines matrices by applying function on their entries.
            ///
            pub fn combine(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let (e1, e2): ([f32; $size * $size], [f32; $size * $size]) =
                    (self.entries(), other.entries());
                Self::from_entries(array::from_fn(|k| f(e1[k], e2[k])))
            }

            /// Returns entry at given flat index.
            ///
            /// Fails with [`MathError::IndexOutOfRange`] if there is no such entry.
            ///
            pub fn get(&self, index: usize) -> Result<f32, MathError> {
                Ok(self.entries()[MathError::check_index(index, $size * $size)?])
            }
            /// Returns i-th vector that was passed to constructor (`d0i, d1i, ...`).
            ///
            /// Fails with [`MathError::IndexOutOfRange`] if there is no such vector.
            ///
            pub fn get_row(&self, index: usize) -> Result<$vector, MathError> {
                Ok(self.row(MathError::check_index(index, $size)?))
            }
            /// Returns vector that is made from i-th component of every constructor vector (`di0, di1, ...`).
            ///
            /// Fails with [`MathError::IndexOutOfRange`] if there is no such component.
            ///
            pub fn get_column(&self, index: usize) -> Result<$vector, MathError> {
                Ok(self.column(MathError::check_index(index, $size)?))
            }
            /// Returns row without checking index.
            ///
            fn row(&self, index: usize) -> $vector {
                let entries: [f32; $size * $size] = self.entries();
                $vector::from(array::from_fn::<f32, $size, _>(|c| entries[index * $size + c]))
            }
            /// Returns column without checking index.
            ///
            fn column(&self, index: usize) -> $vector {
                let entries: [f32; $size * $size] = self.entries();
                $vector::from(array::from_fn::<f32, $size, _>(|r| entries[r * $size + index]))
            }

            /// Returns transpose of initial matrix.
            ///
            /// Interchanges its rows into columns (flips matrix over its diagonal).
            ///
            pub fn transpose(&self) -> Self {
                let entries: [f32; $size * $size] = self.entries();
                Self::from_entries(array::from_fn(|k| entries[(k % $size) * $size + k / $size]))
            }

            /// Multiplies matrices entry by entry (Hadamard product).
            ///
            pub fn hadamard(self, other: Self) -> Self {
                self.combine(other, |a, b| a * b)
            }
            /// Performs matrix product `self * other`, treating constructor vectors as columns.
            ///
            /// # Example
            /// ```rust
            /// # use tanksmaths::mathcore::{matrices::Matrix2D, vectors::Vector2};
            /// // columns (1, 3) and (2, 4)
            /// let a: Matrix2D = Matrix2D::new(Vector2::new(1.0, 3.0), Vector2::new(2.0, 4.0));
            /// // swaps columns of the left operand
            /// let swap: Matrix2D = Matrix2D::new(Vector2::new(0.0, 1.0), Vector2::new(1.0, 0.0));
            /// assert_eq!(
            ///     a.standard_product(swap),
            ///     Matrix2D::new(Vector2::new(2.0, 4.0), Vector2::new(1.0, 3.0))
            /// );
            /// ```
            ///
            pub fn standard_product(self, other: Self) -> Self {
                let (e1, e2): ([f32; $size * $size], [f32; $size * $size]) =
                    (self.entries(), other.entries());
                Self::from_entries(array::from_fn(|k| {
                    let (column, row): (usize, usize) = (k / $size, k % $size);
                    (0..$size).fold(0.0, |acc, i| {
                        acc + e1[i * $size + row] * e2[column * $size + i]
                    })
                }))
            }
        }
        impl Mul<Self> for $struct {
            type Output = Self;

            /// Multiplies matrices entry by entry.
            ///
            /// Is equal to `self.hadamard(rhs)`.
            ///
            fn mul(self, rhs: Self) -> Self::Output {
                self.hadamard(rhs)
            }
        }
        impl Add<Self> for $struct {
            type Output = Self;

            /// Returns matrix where each entry is a sum of those entries in given matrices.
            ///
            fn add(self, rhs: Self) -> Self::Output {
                self.combine(rhs, |a, b| a + b)
            }
        }
        impl MulAssign<Self> for $struct {
            fn mul_assign(&mut self, rhs: Self) {
                *self = self.hadamard(rhs);
            }
        }
        impl AddAssign<Self> for $struct {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }
        impl PartialEq for $struct {
            /// Checks if matrices are equal by comparing their columns exactly.
            ///
            fn eq(&self, other: &Self) -> bool {
                (0..$size).all(|i| self.column(i) == other.column(i))
            }
        }
        impl ApproxEq for $struct {
            fn approx_eq(&self, other: &Self) -> bool {
                self.entries().approx_eq(&other.entries())
            }
        }
        impl From<[[f32; $size]; $size]> for $struct {
            /// Each inner array is one vector in order that is used by constructor.
            ///
            fn from(arr: [[f32; $size]; $size]) -> Self {
                Self::from_entries(array::from_fn(|k| arr[k / $size][k % $size]))
            }
        }
    };
}
/// [`impl_matrix_setter`] macro implements flat index setter on matrix.
///
/// This macro depends on [`impl_matrix`] macro.
///
macro_rules! impl_matrix_setter {
    ($struct:ident, $size:expr) => {
        impl $struct {
            /// Sets entry at given flat index.
            ///
            /// Fails with [`MathError::IndexOutOfRange`] if there is no such entry.
            ///
            pub fn set(&mut self, index: usize, value: f32) -> Result<(), MathError> {
                let mut entries: [f32; $size * $size] = self.entries();
                entries[MathError::check_index(index, $size * $size)?] = value;
                *self = Self::from_entries(entries);
                Ok(())
            }
        }
    };
}

/// [`Matrix2D`] struct represents 2x2 matrix.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::{matrices::Matrix2D, vectors::Vector2};
/// let matrix: Matrix2D = Matrix2D::new(Vector2::new(4.0, 7.0), Vector2::new(2.0, 6.0));
/// assert_eq!(matrix.get(1), Ok(7.0));
/// assert_eq!(matrix.get_row(0), Ok(Vector2::new(4.0, 7.0)));
/// assert_eq!(matrix.get_column(0), Ok(Vector2::new(4.0, 2.0)));
/// assert_eq!(matrix * Matrix2D::identity(), Matrix2D::new(Vector2::new(4.0, 0.0), Vector2::new(0.0, 6.0)));
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Matrix2D {
    /// Entry at flat index 0.
    ///
    pub d00: f32,
    /// Entry at flat index 1.
    ///
    pub d10: f32,
    /// Entry at flat index 2.
    ///
    pub d01: f32,
    /// Entry at flat index 3.
    ///
    pub d11: f32,
}
impl Matrix2D {
    /// Constructs matrix from two vectors.
    ///
    pub fn new(v0: Vector2, v1: Vector2) -> Self {
        Matrix2D {
            d00: v0.x,
            d10: v0.y,
            d01: v1.x,
            d11: v1.y,
        }
    }

    /// Returns determinant of matrix.
    ///
    pub fn determinant(&self) -> f32 {
        self.d00 * self.d11 - self.d01 * self.d10
    }
    /// Returns inverse of matrix (adjugate divided by determinant).
    ///
    /// Zero determinant is not guarded against, so inverse of singular matrix contains
    /// infinities or NaN. [`Matrix2D::try_inverse`] checks it.
    ///
    /// # Example
    /// ```rust
    /// # use tanksmaths::mathcore::{matrices::Matrix2D, vectors::Vector2};
    /// let matrix: Matrix2D = Matrix2D::new(Vector2::new(2.0, 1.0), Vector2::new(4.0, 4.0));
    /// assert_eq!(
    ///     matrix.inverse(),
    ///     Matrix2D::new(Vector2::new(1.0, -0.25), Vector2::new(-1.0, 0.5))
    /// );
    /// ```
    ///
    pub fn inverse(&self) -> Self {
        let adjugate: Matrix2D = Matrix2D {
            d00: self.d11,
            d10: -self.d10,
            d01: -self.d01,
            d11: self.d00,
        };
        let determinant: f32 = self.determinant();
        if determinant == 0.0 {
            log::warn!("inverting singular matrix {self:?}");
        }
        adjugate.map(|entry| entry / determinant)
    }
    /// Returns inverse of matrix or `None` if its determinant is zero.
    ///
    pub fn try_inverse(&self) -> Option<Self> {
        if self.determinant() == 0.0 {
            None
        } else {
            Some(self.inverse())
        }
    }
}
impl_matrix!(Matrix2D, Vector2, 2, [d00, d10, d01, d11]);

/// [`Matrix3D`] struct represents 3x3 matrix.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::{matrices::Matrix3D, vectors::Vector3};
/// let mut matrix: Matrix3D = Matrix3D::identity();
/// matrix.set(2, 5.0).expect("index is in range");
/// assert_eq!(matrix.d20, 5.0);
/// assert_eq!(matrix.get_column(2), Ok(Vector3::new(5.0, 0.0, 1.0)));
/// assert_eq!(matrix.transpose().transpose(), matrix);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Matrix3D {
    /// Entry at flat index 0.
    ///
    pub d00: f32,
    /// Entry at flat index 1.
    ///
    pub d10: f32,
    /// Entry at flat index 2.
    ///
    pub d20: f32,
    /// Entry at flat index 3.
    ///
    pub d01: f32,
    /// Entry at flat index 4.
    ///
    pub d11: f32,
    /// Entry at flat index 5.
    ///
    pub d21: f32,
    /// Entry at flat index 6.
    ///
    pub d02: f32,
    /// Entry at flat index 7.
    ///
    pub d12: f32,
    /// Entry at flat index 8.
    ///
    pub d22: f32,
}
impl Matrix3D {
    /// Constructs matrix from three vectors.
    ///
    pub fn new(v0: Vector3, v1: Vector3, v2: Vector3) -> Self {
        Matrix3D {
            d00: v0.x,
            d10: v0.y,
            d20: v0.z,
            d01: v1.x,
            d11: v1.y,
            d21: v1.z,
            d02: v2.x,
            d12: v2.y,
            d22: v2.z,
        }
    }

    /// Returns matrix of minors (each entry is determinant of 2x2 matrix that remains after
    /// removing its row and column).
    ///
    fn minors(&self) -> Matrix3D {
        let a: &Matrix3D = self;
        Matrix3D::new(
            Vector3::new(
                a.d11 * a.d22 - a.d21 * a.d12,
                a.d01 * a.d22 - a.d21 * a.d02,
                a.d01 * a.d12 - a.d11 * a.d02,
            ),
            Vector3::new(
                a.d10 * a.d22 - a.d20 * a.d12,
                a.d00 * a.d22 - a.d20 * a.d02,
                a.d00 * a.d12 - a.d10 * a.d02,
            ),
            Vector3::new(
                a.d10 * a.d21 - a.d20 * a.d11,
                a.d00 * a.d21 - a.d20 * a.d01,
                a.d00 * a.d11 - a.d10 * a.d01,
            ),
        )
    }

    /// Returns determinant of matrix by expanding along the first row.
    ///
    /// # Example
    /// ```rust
    /// # use tanksmaths::mathcore::{matrices::Matrix3D, vectors::Vector3};
    /// let matrix: Matrix3D = Matrix3D::new(
    ///     Vector3::new(-3.0, 2.0, 2.0),
    ///     Vector3::new(43.0, 1.0, -12.0),
    ///     Vector3::new(5.0, 0.0, 5.0),
    /// );
    /// assert_eq!(matrix.determinant(), -575.0);
    /// ```
    ///
    pub fn determinant(&self) -> f32 {
        let minors: Matrix3D = self.minors();
        self.d00 * minors.d00 - self.d10 * minors.d10 + self.d20 * minors.d20
    }
    /// Returns inverse of matrix using cofactor expansion.
    ///
    /// Matrix of minors gets alternating signs, is transposed into adjugate and is divided by
    /// determinant of `self` (determinant of the adjugate would be its square, so using it would
    /// scale the result). Zero determinant is not guarded against, so inverse of singular matrix
    /// contains infinities or NaN. [`Matrix3D::try_inverse`] checks it.
    ///
    /// # Example
    /// ```rust
    /// # use tanksmaths::mathcore::{matrices::Matrix3D, vectors::Vector3};
    /// let matrix: Matrix3D = Matrix3D::new(
    ///     Vector3::new(3.0, 2.0, 2.0),
    ///     Vector3::new(1.0, 2.0, 2.0),
    ///     Vector3::new(1.0, 3.0, 2.0),
    /// );
    /// assert_eq!(
    ///     matrix.inverse(),
    ///     Matrix3D::new(
    ///         Vector3::new(0.5, -0.5, 0.0),
    ///         Vector3::new(0.0, -1.0, 1.0),
    ///         Vector3::new(-0.25, 1.75, -1.0),
    ///     )
    /// );
    /// ```
    ///
    pub fn inverse(&self) -> Self {
        let mut cofactors: Matrix3D = self.minors();
        cofactors.d10 *= -1.0;
        cofactors.d01 *= -1.0;
        cofactors.d21 *= -1.0;
        cofactors.d12 *= -1.0;
        let adjugate: Matrix3D = cofactors.transpose();

        let determinant: f32 = self.determinant();
        if determinant == 0.0 {
            log::warn!("inverting singular matrix {self:?}");
        }
        adjugate.map(|entry| entry / determinant)
    }
    /// Returns inverse of matrix or `None` if its determinant is zero.
    ///
    pub fn try_inverse(&self) -> Option<Self> {
        if self.determinant() == 0.0 {
            None
        } else {
            Some(self.inverse())
        }
    }
}
impl_matrix!(Matrix3D, Vector3, 3, [d00, d10, d20, d01, d11, d21, d02, d12, d22]);
impl_matrix_setter!(Matrix3D, 3);

/// [`Matrix4D`] struct represents 4x4 matrix.
///
/// # Example
/// ```rust
/// # use tanksmaths::mathcore::{matrices::Matrix4D, vectors::Vector4};
/// let matrix: Matrix4D = Matrix4D::from([
///     [1.0, 2.0, 3.0, 4.0],
///     [5.0, 6.0, 7.0, 8.0],
///     [9.0, 10.0, 11.0, 12.0],
///     [13.0, 14.0, 15.0, 16.0],
/// ]);
/// assert_eq!(matrix.get(4), Ok(5.0));
/// assert_eq!(matrix.get_row(3), Ok(Vector4::new(13.0, 14.0, 15.0, 16.0)));
/// assert_eq!(matrix.get_column(3), Ok(Vector4::new(4.0, 8.0, 12.0, 16.0)));
/// assert_eq!(Matrix4D::from(matrix.to_array()), matrix);
/// ```
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default)]
pub struct Matrix4D {
    /// Entry at flat index 0.
    ///
    pub d00: f32,
    /// Entry at flat index 1.
    ///
    pub d10: f32,
    /// Entry at flat index 2.
    ///
    pub d20: f32,
    /// Entry at flat index 3.
    ///
    pub d30: f32,

    /// Entry at flat index 4.
    ///
    pub d01: f32,
    /// Entry at flat index 5.
    ///
    pub d11: f32,
    /// Entry at flat index 6.
    ///
    pub d21: f32,
    /// Entry at flat index 7.
    ///
    pub d31: f32,

    /// Entry at flat index 8.
    ///
    pub d02: f32,
    /// Entry at flat index 9.
    ///
    pub d12: f32,
    /// Entry at flat index 10.
    ///
    pub d22: f32,
    /// Entry at flat index 11.
    ///
    pub d32: f32,

    /// Entry at flat index 12.
    ///
    pub d03: f32,
    /// Entry at flat index 13.
    ///
    pub d13: f32,
    /// Entry at flat index 14.
    ///
    pub d23: f32,
    /// Entry at flat index 15.
    ///
    pub d33: f32,
}
impl Matrix4D {
    /// Constructs matrix from four vectors.
    ///
    pub fn new(v0: Vector4, v1: Vector4, v2: Vector4, v3: Vector4) -> Self {
        Matrix4D {
            d00: v0.x,
            d10: v0.y,
            d20: v0.z,
            d30: v0.w,
            d01: v1.x,
            d11: v1.y,
            d21: v1.z,
            d31: v1.w,
            d02: v2.x,
            d12: v2.y,
            d22: v2.z,
            d32: v2.w,
            d03: v3.x,
            d13: v3.y,
            d23: v3.z,
            d33: v3.w,
        }
    }

    /// Returns inverse of matrix or `None` if matrix is singular.
    ///
    /// Uses Gauss-Jordan elimination with partial pivoting.
    ///
    /// # Example
    /// ```rust
    /// # use tanksmaths::mathcore::matrices::Matrix4D;
    /// let scale: Matrix4D = Matrix4D::from([
    ///     [2.0, 0.0, 0.0, 0.0],
    ///     [0.0, 4.0, 0.0, 0.0],
    ///     [0.0, 0.0, 8.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(
    ///     scale.try_inverse(),
    ///     Some(Matrix4D::from([
    ///         [0.5, 0.0, 0.0, 0.0],
    ///         [0.0, 0.25, 0.0, 0.0],
    ///         [0.0, 0.0, 0.125, 0.0],
    ///         [0.0, 0.0, 0.0, 1.0],
    ///     ]))
    /// );
    /// assert_eq!(Matrix4D::zero_matrix().try_inverse(), None);
    /// ```
    ///
    pub fn try_inverse(&self) -> Option<Self> {
        let mut matrix: [[f32; 4]; 4] = self.to_array();
        let mut inverse: [[f32; 4]; 4] = Matrix4D::identity().to_array();

        for lead in 0..4 {
            let pivot_row: usize = (lead..4).fold(lead, |best, r| {
                if matrix[r][lead].abs() > matrix[best][lead].abs() {
                    r
                } else {
                    best
                }
            });
            if matrix[pivot_row][lead] == 0.0 {
                return None;
            }
            matrix.swap(lead, pivot_row);
            inverse.swap(lead, pivot_row);

            let pivot: f32 = matrix[lead][lead];
            for c in 0..4 {
                matrix[lead][c] /= pivot;
                inverse[lead][c] /= pivot;
            }
            for r in (0..4).filter(|&r| r != lead) {
                let factor: f32 = matrix[r][lead];
                if factor == 0.0 {
                    continue;
                }
                for c in 0..4 {
                    matrix[r][c] -= factor * matrix[lead][c];
                    inverse[r][c] -= factor * inverse[lead][c];
                }
            }
        }
        Some(Matrix4D::from(inverse))
    }
}
impl_matrix!(
    Matrix4D,
    Vector4,
    4,
    [d00, d10, d20, d30, d01, d11, d21, d31, d02, d12, d22, d32, d03, d13, d23, d33]
);
impl_matrix_setter!(Matrix4D, 4);

#[cfg(test)]
mod tests {
    use super::{Matrix2D, Matrix3D, Matrix4D};
    use crate::mathcore::{
        floats::ApproxEq,
        vectors::{Vector2, Vector3, Vector4},
        MathError,
    };
    use proptest::prelude::*;

    /// Checks that all entries differ by less than `tolerance`.
    ///
    fn close(a: [f32; 16], b: [f32; 16], tolerance: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < tolerance)
    }

    #[test]
    fn matrix2d() {
        let m1: Matrix2D = Matrix2D::new(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0));
        assert_eq!(m1.entries(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!((m1.d00, m1.d10, m1.d01, m1.d11), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(m1.get(3), Ok(4.0));
        assert_eq!(
            m1.get(4),
            Err(MathError::IndexOutOfRange {
                index: 4,
                length: 4
            })
        );
        assert_eq!(m1.get_row(1), Ok(Vector2::new(3.0, 4.0)));
        assert_eq!(m1.get_column(1), Ok(Vector2::new(2.0, 4.0)));
        assert!(m1.get_row(2).is_err());
        assert!(m1.get_column(2).is_err());

        assert_eq!(
            m1 * m1,
            Matrix2D::new(Vector2::new(1.0, 4.0), Vector2::new(9.0, 16.0))
        );
        assert_eq!(
            m1 + m1,
            Matrix2D::new(Vector2::new(2.0, 4.0), Vector2::new(6.0, 8.0))
        );
        assert_eq!(
            m1.transpose(),
            Matrix2D::new(Vector2::new(1.0, 3.0), Vector2::new(2.0, 4.0))
        );
        assert_eq!(m1.determinant(), -2.0);
        assert_eq!(
            m1.standard_product(m1.inverse()),
            Matrix2D::identity()
        );

        let mut m2: Matrix2D = m1;
        m2 += Matrix2D::identity();
        assert_eq!(m2.entries(), [2.0, 2.0, 3.0, 5.0]);
        m2 *= Matrix2D::zero_matrix();
        assert_eq!(m2, Matrix2D::zero_matrix());
    }

    #[test]
    fn identity_and_zero() {
        assert_eq!(Matrix2D::identity() * Matrix2D::identity(), Matrix2D::identity());
        assert_eq!(
            Matrix2D::identity(),
            Matrix2D::new(Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0))
        );
        assert_eq!(Matrix2D::zero_matrix(), Matrix2D::default());
        assert_eq!(
            Matrix3D::identity(),
            Matrix3D::new(Vector3::right(), Vector3::up(), Vector3::forward())
        );
        assert_eq!(Matrix3D::zero_matrix().entries(), [0.0; 9]);
        assert_eq!(
            Matrix4D::identity(),
            Matrix4D::new(
                Vector4::new(1.0, 0.0, 0.0, 0.0),
                Vector4::new(0.0, 1.0, 0.0, 0.0),
                Vector4::new(0.0, 0.0, 1.0, 0.0),
                Vector4::new(0.0, 0.0, 0.0, 1.0),
            )
        );
        assert_eq!(Matrix4D::zero_matrix().entries(), [0.0; 16]);
    }

    #[test]
    fn matrix3d() {
        let mut m: Matrix3D = Matrix3D::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(m.get(5), Ok(6.0));
        assert_eq!(m.get_row(2), Ok(Vector3::new(7.0, 8.0, 9.0)));
        assert_eq!(m.get_column(0), Ok(Vector3::new(1.0, 4.0, 7.0)));
        assert_eq!(
            m.get_row(3),
            Err(MathError::IndexOutOfRange {
                index: 3,
                length: 3
            })
        );
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.try_inverse(), None);

        assert_eq!(m.set(4, -5.0), Ok(()));
        assert_eq!(m.d11, -5.0);
        assert_eq!(
            m.set(9, 1.0),
            Err(MathError::IndexOutOfRange {
                index: 9,
                length: 9
            })
        );
        assert_eq!(m.d11, -5.0);

        assert_eq!(
            (m + Matrix3D::identity()).entries(),
            [2.0, 2.0, 3.0, 4.0, -4.0, 6.0, 7.0, 8.0, 10.0]
        );
        assert_eq!(
            (m * Matrix3D::identity()).entries(),
            [1.0, 0.0, 0.0, 0.0, -5.0, 0.0, 0.0, 0.0, 9.0]
        );
    }

    #[test]
    fn inverse3d() {
        assert_eq!(Matrix3D::identity().inverse(), Matrix3D::identity());

        let scale: Matrix3D = Matrix3D::new(
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 4.0, 0.0),
            Vector3::new(1.0, 0.0, 1.0),
        );
        assert_eq!(scale.determinant(), 8.0);
        let inverse: Matrix3D = scale.inverse();
        assert_eq!(
            inverse,
            Matrix3D::new(
                Vector3::new(0.5, 0.0, 0.0),
                Vector3::new(0.0, 0.25, 0.0),
                Vector3::new(-0.5, 0.0, 1.0),
            )
        );
        assert_eq!(scale.standard_product(inverse), Matrix3D::identity());
        assert_eq!(scale.try_inverse(), Some(inverse));

        // singular matrix is not guarded
        let singular: Matrix3D = Matrix3D::zero_matrix().inverse();
        assert!(singular.entries().iter().all(|entry| entry.is_nan()));
        assert!(Matrix2D::zero_matrix().inverse().d00.is_nan());
        assert!(Matrix2D::new(Vector2::one(), Vector2::one())
            .inverse()
            .d00
            .is_infinite());
        assert_eq!(Matrix2D::new(Vector2::one(), Vector2::one()).try_inverse(), None);
    }

    #[test]
    fn matrix4d() {
        let mut m: Matrix4D = Matrix4D::from([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!((m.d00, m.d30, m.d01, m.d33), (1.0, 4.0, 5.0, 16.0));
        for i in 0..16 {
            assert_eq!(m.get(i), Ok((i + 1) as f32));
        }
        assert!(m.get(16).is_err());
        assert!(m.get_column(4).is_err());
        assert_eq!(m.get_row(1), Ok(Vector4::new(5.0, 6.0, 7.0, 8.0)));

        assert_eq!(m.transpose().get_row(0), m.get_column(0));
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(
            (m * m).entries(),
            m.entries().map(|entry| entry * entry)
        );
        assert_eq!((m + m).entries(), m.entries().map(|entry| entry * 2.0));
        assert_eq!(m.standard_product(Matrix4D::identity()), m);

        assert_eq!(m.set(15, 0.0), Ok(()));
        assert_eq!(m.d33, 0.0);
        assert_eq!(
            m.set(16, 0.0),
            Err(MathError::IndexOutOfRange {
                index: 16,
                length: 16
            })
        );
    }

    #[test]
    fn inverse4d() {
        let transform: Matrix4D = Matrix4D::from([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [3.0, 5.0, 7.0, 1.0],
        ]);
        let inverse: Matrix4D = transform.try_inverse().expect("matrix is not singular");
        let expected: Matrix4D = Matrix4D::from([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.5, 0.0, 0.0],
            [0.0, 0.0, 0.25, 0.0],
            [-3.0, -2.5, -1.75, 1.0],
        ]);
        assert!(close(inverse.entries(), expected.entries(), 1e-5));
        assert!(close(
            transform.standard_product(inverse).entries(),
            Matrix4D::identity().entries(),
            1e-5
        ));

        let mut singular: Matrix4D = transform;
        for index in [3, 7, 11, 15] {
            singular.set(index, 0.0).expect("index is in range");
        }
        assert_eq!(singular.try_inverse(), None);
    }

    #[test]
    fn standard_product_order() {
        let a: Matrix2D = Matrix2D::new(Vector2::new(1.0, 3.0), Vector2::new(2.0, 4.0));
        let b: Matrix2D = Matrix2D::new(Vector2::new(2.0, 4.0), Vector2::new(1.0, 3.0));
        // a * b and b * a differ
        assert_eq!(a.standard_product(b).to_array(), [[10.0, 22.0], [7.0, 15.0]]);
        assert_eq!(b.standard_product(a).to_array(), [[5.0, 13.0], [8.0, 20.0]]);

        let translate: Matrix3D =
            Matrix3D::new(Vector3::right(), Vector3::up(), Vector3::new(5.0, 6.0, 1.0));
        let scale: Matrix3D = Matrix3D::new(
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 3.0, 0.0),
            Vector3::forward(),
        );
        // scaling is applied first, translation is not scaled
        assert_eq!(
            translate.standard_product(scale),
            Matrix3D::new(
                Vector3::new(2.0, 0.0, 0.0),
                Vector3::new(0.0, 3.0, 0.0),
                Vector3::new(5.0, 6.0, 1.0),
            )
        );
        assert_eq!(
            scale.standard_product(translate),
            Matrix3D::new(
                Vector3::new(2.0, 0.0, 0.0),
                Vector3::new(0.0, 3.0, 0.0),
                Vector3::new(10.0, 18.0, 1.0),
            )
        );
    }

    #[test]
    fn conversions() {
        let m: Matrix3D = Matrix3D::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.to_array(), [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(Matrix3D::from_entries(m.entries()), m);
        assert_eq!(
            Matrix2D::from([[1.0, 2.0], [3.0, 4.0]]),
            Matrix2D::new(Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0))
        );
        assert!(m.map(|entry| entry + 1e-7).approx_eq(&m));
        assert!(!m.map(|entry| entry + 0.1).approx_eq(&m));
    }

    proptest! {
        #[test]
        fn transpose_round_trip(entries in prop::array::uniform9(-1e6_f32..1e6)) {
            let m: Matrix3D = Matrix3D::from_entries(entries);
            prop_assert_eq!(m.transpose().transpose(), m);
        }

        #[test]
        fn transpose_swaps_rows_and_columns(entries in prop::array::uniform16(-1e6_f32..1e6), i in 0_usize..4) {
            let m: Matrix4D = Matrix4D::from_entries(entries);
            prop_assert_eq!(m.transpose().get_row(i), m.get_column(i));
        }
    }
}
