//! `tanksmaths::datacore` module is a core that supplies traits which persist math values.
//!
//! # Prelude
//! `tanksmaths::datacore` prelude can be imported with `use tanksmaths::datacore::prelude::*`.
//!
//! # Usage
//! Every vector and matrix of `mathcore` is serializable, so it can be saved to a file or to a
//! byte buffer and restored later (for example, to keep tank spawn points or camera transforms
//! between game sessions).
//!

// submodules and public re-exports
pub mod assets;

// prelude
pub mod prelude;
