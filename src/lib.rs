//! In-memory G3D meshes: a set of typed [attributes](Attribute), each attached to the vertices,
//! faces, corners, etc. of a geometry, and the operations that transform one such set into another
//! (merge, remap, triangulate, flip, select, deform).
//!
//! ```
//! use g3d::{shapes, GeometryAttributes};
//!
//! let cube = shapes::unit_cube().triangulate_quad_mesh()?;
//! assert_eq!(cube.num_faces(), 12);
//!
//! let both = GeometryAttributes::merge(&[cube.clone(), cube.translate(&[2.0, 0.0, 0.0].into())])?;
//! assert_eq!(both.num_vertices(), 16);
//! assert_eq!(both.num_subgeometries(), 2);
//! # Ok::<(), g3d::Error>(())
//! ```
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod error;
pub mod geom;
mod geometry;
mod log;
mod ops;
pub mod shapes;

pub use error::Error;
pub use g3d_attribute as attribute;
pub use g3d_attribute::{
    Association, Attribute, AttributeData, AttributeDescriptor, DataType, Element, Semantic,
};
pub use geometry::*;

static_assertions::assert_impl_all!(GeometryAttributes: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(G3d: Send, Sync);
static_assertions::assert_impl_all!(Error: Send, Sync, std::error::Error);
