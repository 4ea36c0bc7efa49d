//! Prelude module: `mathcore::prelude` re-exports all `tanksmaths::mathcore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use tanksmaths::mathcore::prelude::*;
//!
//! let matrix: Matrix2D = Matrix2D::new(Vector2::right(), Vector2::up());
//! assert_eq!(matrix, Matrix2D::identity());
//! assert_eq!(Vector2::one().divide_by(0.0), Err(MathError::DivideByZero));
//! assert!(approx(sqrt(9.0), 3.0));
//! ```
//!

// re-exports
pub use crate::mathcore::floats::*;
pub use crate::mathcore::matrices::*;
pub use crate::mathcore::vectors::*;
pub use crate::mathcore::*;
