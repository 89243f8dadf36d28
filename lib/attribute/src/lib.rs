//! Attribute arrays for G3D geometry.
//!
//! An [Attribute] is a flat buffer of numeric components, split into fixed-arity elements and
//! labelled by an [AttributeDescriptor]. The descriptor's [Association] ties each element to a
//! vertex, face, corner, etc. of some geometry; the geometry itself lives in the `g3d` crate.
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod attribute;
mod data;
mod descriptor;
mod error;

pub use attribute::*;
pub use data::*;
pub use descriptor::*;
pub use error::*;

static_assertions::assert_impl_all!(Attribute: Send, Sync);
static_assertions::assert_impl_all!(AttributeDescriptor: Send, Sync);
