//! Macros shared between the g3d crates.

pub mod macros;
