use g3d_attribute::{Association, Attribute, Semantic};
use nalgebra::Point3;

use crate::{
    geom::{polygon_normal, Quad, Triangle},
    Error, GeometryAttributes,
};

impl GeometryAttributes {
    /// The position of each corner's vertex, face by face.
    fn face_points(&self, corners_per_face: usize) -> Result<Vec<Point3<f32>>, Error> {
        let found = self.num_corners_per_face();
        if found != corners_per_face {
            return Err(Error::FaceSize {
                expected: corners_per_face,
                found,
            });
        }
        let positions = self.positions().ok_or(Error::MissingPositions)?;
        let mut points: Vec<Point3<f32>> = self
            .corner_vertices()?
            .into_iter()
            .map(|v| Point3::from(positions[v]))
            .collect();
        points.truncate(self.num_faces() * corners_per_face);
        Ok(points)
    }

    /// Every face of a triangle mesh.
    ///
    /// # Errors
    ///
    /// * [`FaceSize`](Error::FaceSize) if faces do not have 3 corners.
    /// * [`MissingPositions`](Error::MissingPositions) if there is no `float32x3` position
    ///   attribute.
    pub fn triangles(&self) -> Result<Vec<Triangle<f32>>, Error> {
        Ok(self
            .face_points(3)?
            .chunks_exact(3)
            .map(|p| Triangle::new(p[0], p[1], p[2]))
            .collect())
    }

    /// Every face of a quad mesh. Errors as in [triangles](Self::triangles).
    pub fn quads(&self) -> Result<Vec<Quad<f32>>, Error> {
        Ok(self
            .face_points(4)?
            .chunks_exact(4)
            .map(|p| Quad::new(p[0], p[1], p[2], p[3]))
            .collect())
    }

    /// Add (or replace) a face normal attribute, computed from vertex positions.
    ///
    /// # Errors
    ///
    /// * [`MissingPositions`](Error::MissingPositions) if there is no `float32x3` position
    ///   attribute.
    pub fn compute_face_normals(&self) -> Result<Self, Error> {
        let n = self.num_corners_per_face();
        let points = self.face_points(n)?;
        let normals = points.chunks_exact(n).map(polygon_normal);
        Ok(self.with_attribute(Attribute::typed(
            Association::Face,
            Semantic::Normal,
            0,
            normals,
        )))
    }
}
