use std::iter;

use g3d_attribute::{Association, Attribute, Semantic};
use nalgebra::{Matrix4, Point3, Vector3, Vector4};

use crate::{log, GeometryAttributes};

impl GeometryAttributes {
    /// Map every `float32x3` position attribute through `position` and every `float32x3` normal
    /// attribute through `normal`. Attributes stored as other types are left as they are.
    pub fn deform(
        &self,
        mut position: impl FnMut(Vector3<f32>) -> Vector3<f32>,
        mut normal: impl FnMut(Vector3<f32>) -> Vector3<f32>,
    ) -> Self {
        self.map_each(|attr| match attr.semantic() {
            Semantic::Position => attr.map::<Vector3<f32>>(&mut position).ok(),
            Semantic::Normal => attr.map::<Vector3<f32>>(&mut normal).ok(),
            _ => None,
        })
    }

    /// [deform](Self::deform) positions only.
    pub fn deform_positions(&self, position: impl FnMut(Vector3<f32>) -> Vector3<f32>) -> Self {
        self.deform(position, |n| n)
    }

    /// Apply an affine transform: positions as points, normals as directions (ignoring the
    /// translation part of `matrix`).
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        self.deform(
            |p| matrix.transform_point(&Point3::from(p)).coords,
            |n| matrix.transform_vector(&n),
        )
    }

    pub fn translate(&self, offset: &Vector3<f32>) -> Self {
        self.transform(&Matrix4::new_translation(offset))
    }

    /// Uniform scale about the origin.
    pub fn scale(&self, factor: f32) -> Self {
        self.transform(&Matrix4::new_scaling(factor))
    }

    /// Replace all color attributes with a single vertex color.
    pub fn color(&self, rgba: Vector4<f32>) -> Self {
        let vertices = self.num_vertices();
        log::debug!(vertices, ?rgba, "coloring");
        let mut res: Vec<Attribute> = self
            .iter()
            .filter(|a| a.semantic() != &Semantic::Color)
            .cloned()
            .collect();
        res.push(Attribute::typed(
            Association::Vertex,
            Semantic::Color,
            0,
            iter::repeat(rgba).take(vertices),
        ));
        Self::from_unique(res)
    }
}
