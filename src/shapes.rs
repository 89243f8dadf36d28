//! Procedural geometry.
//!
//! Every builder returns an indexed geometry with positions, an index attribute and a face size
//! attribute, which passes [validate](GeometryAttributes::validate).

use g3d_attribute::{Association, Attribute, Semantic};
use nalgebra::{vector, Vector3};

use crate::{ops::face_size_attribute, Error, GeometryAttributes};

/// A geometry with faces of `corners_per_face` corners.
///
/// # Errors
///
/// * [`Overflow`](Error::Overflow) if `corners_per_face` does not fit in an `int32`.
pub fn polygon_mesh(
    positions: impl IntoIterator<Item = Vector3<f32>>,
    indices: impl IntoIterator<Item = i32>,
    corners_per_face: usize,
) -> Result<GeometryAttributes, Error> {
    GeometryAttributes::new([
        Attribute::typed(Association::Vertex, Semantic::Position, 0, positions),
        Attribute::typed(Association::Corner, Semantic::Index, 0, indices),
        face_size_attribute(corners_per_face)?,
    ])
}

pub fn triangle_mesh(
    positions: impl IntoIterator<Item = Vector3<f32>>,
    indices: impl IntoIterator<Item = i32>,
) -> GeometryAttributes {
    GeometryAttributes::from_unique(vec![
        Attribute::typed(Association::Vertex, Semantic::Position, 0, positions),
        Attribute::typed(Association::Corner, Semantic::Index, 0, indices),
        Attribute::typed(Association::All, Semantic::FaceSize, 0, [3i32]),
    ])
}

pub fn quad_mesh(
    positions: impl IntoIterator<Item = Vector3<f32>>,
    indices: impl IntoIterator<Item = i32>,
) -> GeometryAttributes {
    GeometryAttributes::from_unique(vec![
        Attribute::typed(Association::Vertex, Semantic::Position, 0, positions),
        Attribute::typed(Association::Corner, Semantic::Index, 0, indices),
        Attribute::typed(Association::All, Semantic::FaceSize, 0, [4i32]),
    ])
}

/// The unit square on the XY plane, facing +Z.
pub fn unit_quad() -> GeometryAttributes {
    quad_mesh(
        [
            vector![0.0, 0.0, 0.0],
            vector![1.0, 0.0, 0.0],
            vector![1.0, 1.0, 0.0],
            vector![0.0, 1.0, 0.0],
        ],
        [0, 1, 2, 3],
    )
}

/// The unit cube as six outward-facing quads.
///
/// Vertex `i` sits at `(i & 1, i >> 1 & 1, i >> 2 & 1)`.
pub fn unit_cube() -> GeometryAttributes {
    let positions = (0..8).map(|i: u8| {
        vector![
            f32::from(i & 1),
            f32::from(i >> 1 & 1),
            f32::from(i >> 2 & 1)
        ]
    });
    #[rustfmt::skip]
    let indices = [
        0, 2, 3, 1, // -z
        4, 5, 7, 6, // +z
        0, 1, 5, 4, // -y
        2, 6, 7, 3, // +y
        0, 4, 6, 2, // -x
        1, 3, 7, 5, // +x
    ];
    quad_mesh(positions, indices)
}

/// A `cols` by `rows` grid of unit quads on the XY plane, facing +Z, with its corner at the
/// origin.
///
/// # Errors
///
/// * [`Overflow`](Error::Overflow) if a vertex index does not fit in an `int32`.
pub fn grid(cols: usize, rows: usize) -> Result<GeometryAttributes, Error> {
    let stride = cols + 1;
    if stride.saturating_mul(rows + 1) > i32::MAX as usize {
        return Err(Error::Overflow(stride.saturating_mul(rows + 1)));
    }
    let positions = (0..=rows)
        .flat_map(|r| (0..=cols).map(move |c| vector![c as f32, r as f32, 0.0]));
    let indices = (0..rows).flat_map(|r| {
        (0..cols).flat_map(move |c| {
            let v = (r * stride + c) as i32;
            let s = stride as i32;
            [v, v + 1, v + s + 1, v + s]
        })
    });
    Ok(quad_mesh(positions, indices))
}
