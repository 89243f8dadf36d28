//! Geometric primitives over nalgebra points.

mod float;
mod line;
mod quad;
mod triangle;
mod vector;

pub use float::*;
pub use line::*;
pub use quad::*;
pub use triangle::*;
pub use vector::*;

/// Corners of a quad `(a, b, c, d)` that make up its two triangles `(a, b, c)` and `(a, c, d)`.
pub const QUAD_SPLIT: [usize; 6] = [0, 1, 2, 0, 2, 3];
