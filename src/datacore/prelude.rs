//! Prelude module: `datacore::prelude` re-exports all `tanksmaths::datacore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use tanksmaths::datacore::prelude::*;
//! ```
//!

// re-exports
pub use crate::datacore::assets::*;
