//! Code-generation helpers.
//!
//! All macros are exported at the crate root.

mod meta;
mod ops;
