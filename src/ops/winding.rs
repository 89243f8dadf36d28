use g3d_attribute::Semantic;
use nalgebra::Vector3;

use crate::{log, Error, GeometryAttributes};

impl GeometryAttributes {
    /// The corner remapping which reverses the corners of each face, keeping faces in order.
    pub fn index_flipped_remapping(&self) -> Vec<usize> {
        let n = self.num_corners_per_face();
        (0..self.num_corners())
            .map(|c| (c / n + 1) * n - 1 - c % n)
            .collect()
    }

    /// Reverse the winding of every face, and negate normals to match.
    ///
    /// Applying this twice gives back the original geometry.
    ///
    /// # Errors
    ///
    /// * [`IndexOutOfRange`](Error::IndexOutOfRange) if the corners do not divide into whole
    ///   faces.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn flip_winding_order(&self) -> Result<Self, Error> {
        let flipped = self.gather(None, &self.index_flipped_remapping(), None)?;
        Ok(flipped.map_each(|attr| match attr.semantic() {
            Semantic::Normal => attr.map(|n: Vector3<f32>| -n).ok(),
            _ => None,
        }))
    }

    /// The geometry merged with its own [flipped](Self::flip_winding_order) copy, so that every
    /// face is visible from both sides.
    pub fn double_sided(&self) -> Result<Self, Error> {
        log::debug!(faces = self.num_faces(), "doubling");
        Self::merge(&[self.clone(), self.flip_winding_order()?])
    }
}
