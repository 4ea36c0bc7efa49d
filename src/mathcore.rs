//! `tanksmaths::mathcore` module is a core that implements all math functionality of the crate.
//!
//! # Prelude
//! `tanksmaths::mathcore` prelude can be imported with `use tanksmaths::mathcore::prelude::*`.
//!
//! # Model
//! Scalars are plain `f32` that are processed by functions from [`floats`] submodule.
//! Vectors represent directions and coordinates, and matrices are built from vectors:
//! each vector that is passed to matrix constructor becomes one of its columns.
//!
//! Operations that can fail (division by zero, indexing out of range) return
//! `Result<_, MathError>` instead of producing infinities or panicking.
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod floats;
pub mod matrices;
pub mod vectors;

// prelude
pub mod prelude;
