//! # tanksmaths
//!
//! **tanksmaths** - self-contained scalar, vector and matrix math library written in pure Rust
//! that implements Unity-like interface.
//!
//! Square root, clamping and interpolation are computed by the library itself. Platform routines
//! are used only for angles (`atan2`) and for `Vector3::distance`.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate log;

extern crate serde;
extern crate serde_cbor;

// cores
pub mod datacore;
pub mod mathcore;
