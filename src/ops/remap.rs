use g3d_attribute::{Association, Semantic};

use crate::{geom::QUAD_SPLIT, geometry::is_index, log, Error, GeometryAttributes};

use super::{face_size_attribute, index_attribute};

impl GeometryAttributes {
    /// Reorder, duplicate or drop faces: face `i` of the result is face `face_remap[i]` of `self`.
    ///
    /// Equivalent to [remap_faces_and_corners](Self::remap_faces_and_corners) with every corner
    /// of each selected face.
    ///
    /// # Errors
    ///
    /// * [`IndexOutOfRange`](Error::IndexOutOfRange) if an entry of `face_remap` is not a face.
    pub fn remap_faces(&self, face_remap: &[usize]) -> Result<Self, Error> {
        let faces = self.num_faces();
        if let Some(&f) = face_remap.iter().find(|&&f| f >= faces) {
            return Err(Error::out_of_range(f, faces));
        }
        let corner_remap = self.face_indices_to_corner_indices(face_remap);
        self.remap_faces_and_corners(face_remap, &corner_remap, None)
    }

    /// Gather face attributes by `face_remap` and corner and edge attributes by `corner_remap`.
    ///
    /// Vertex attributes are untouched. Subgeometry attributes are dropped, since the subgeometry
    /// ranges no longer hold. If `corners_per_face` is given, the face size attribute is replaced.
    /// Unindexed geometry gains an index attribute, so that corners keep referencing the vertices
    /// they did before.
    ///
    /// # Errors
    ///
    /// * [`IndexOutOfRange`](Error::IndexOutOfRange) if an entry of `face_remap` is not a face or
    ///   an entry of `corner_remap` is not a corner.
    pub fn remap_faces_and_corners(
        &self,
        face_remap: &[usize],
        corner_remap: &[usize],
        corners_per_face: Option<usize>,
    ) -> Result<Self, Error> {
        self.gather(Some(face_remap), corner_remap, corners_per_face)
    }

    pub(crate) fn gather(
        &self,
        face_remap: Option<&[usize]>,
        corner_remap: &[usize],
        corners_per_face: Option<usize>,
    ) -> Result<Self, Error> {
        let faces = self.num_faces();
        if let Some(&f) = face_remap.and_then(|r| r.iter().find(|&&f| f >= faces)) {
            return Err(Error::out_of_range(f, faces));
        }
        let corners = self.num_corners();
        if let Some(&c) = corner_remap.iter().find(|&&c| c >= corners) {
            return Err(Error::out_of_range(c, corners));
        }

        let mut res = Vec::with_capacity(self.len() + 2);
        for attr in self {
            match attr.association() {
                Association::Face => match face_remap {
                    Some(remap) => res.push(attr.remap(remap)?),
                    None => res.push(attr.clone()),
                },
                Association::Corner | Association::Edge => res.push(attr.remap(corner_remap)?),
                Association::Subgeometry if face_remap.is_some() => {}
                Association::All
                    if corners_per_face.is_some() && attr.semantic() == &Semantic::FaceSize => {}
                _ => res.push(attr.clone()),
            }
        }
        if !self.is_indexed() {
            res.push(index_attribute(corner_remap)?);
        }
        if let Some(n) = corners_per_face {
            res.push(face_size_attribute(n)?);
        }

        log::trace!(
            faces = face_remap.map(<[usize]>::len),
            corners = corner_remap.len(),
            "gathered"
        );
        Ok(Self::from_unique(res))
    }

    /// Split every quad into two triangles, `(a, b, c)` and `(a, c, d)`.
    ///
    /// Each face attribute value is repeated for both triangles of its quad.
    ///
    /// # Errors
    ///
    /// * [`FaceSize`](Error::FaceSize) if `self` is not a quad mesh.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn triangulate_quad_mesh(&self) -> Result<Self, Error> {
        let n = self.num_corners_per_face();
        if n != 4 {
            return Err(Error::FaceSize {
                expected: 4,
                found: n,
            });
        }
        let faces = self.num_faces();
        let face_remap: Vec<usize> = (0..faces).flat_map(|f| [f, f]).collect();
        let corner_remap: Vec<usize> = (0..faces)
            .flat_map(|f| QUAD_SPLIT.map(|c| f * 4 + c))
            .collect();
        log::debug!(quads = faces, "triangulating");
        self.remap_faces_and_corners(&face_remap, &corner_remap, Some(3))
    }

    /// Gather vertex attributes by `vertex_order` and replace the index attribute with
    /// `new_indices`. Nothing else changes.
    ///
    /// `new_indices` is not checked against the new vertex count; see [validate](Self::validate).
    ///
    /// # Errors
    ///
    /// * [`Attribute`](Error::Attribute) if an entry of `vertex_order` is not a vertex.
    /// * [`Overflow`](Error::Overflow) if an index does not fit in an `int32`.
    pub fn remap_vertices_with_indices(
        &self,
        vertex_order: &[usize],
        new_indices: &[usize],
    ) -> Result<Self, Error> {
        let mut index = Some(index_attribute(new_indices)?);
        let mut res = Vec::with_capacity(self.len() + 1);
        for attr in self {
            if is_index(attr) {
                res.extend(index.take());
            } else if attr.association() == Association::Vertex {
                res.push(attr.remap(vertex_order)?);
            } else {
                res.push(attr.clone());
            }
        }
        res.extend(index);
        Ok(Self::from_unique(res))
    }

    /// Reorder, duplicate or drop vertices: vertex `i` of the result is vertex `vertex_remap[i]`
    /// of `self`. Corners are renumbered to follow their vertex; where a vertex appears more than
    /// once in `vertex_remap`, corners use its first appearance.
    ///
    /// # Errors
    ///
    /// * [`IndexOutOfRange`](Error::IndexOutOfRange) if an entry of `vertex_remap` is not a
    ///   vertex.
    /// * [`DanglingVertex`](Error::DanglingVertex) if a corner references a vertex that
    ///   `vertex_remap` leaves out.
    pub fn remap_vertices(&self, vertex_remap: &[usize]) -> Result<Self, Error> {
        let len = self.num_vertices();
        let mut inverse = vec![None; len];
        for (new, &old) in vertex_remap.iter().enumerate() {
            inverse
                .get_mut(old)
                .ok_or_else(|| Error::out_of_range(old, len))?
                .get_or_insert(new);
        }
        let new_indices = self
            .corner_vertices()?
            .into_iter()
            .enumerate()
            .map(|(corner, vertex)| {
                inverse
                    .get(vertex)
                    .copied()
                    .flatten()
                    .ok_or(Error::DanglingVertex { corner, vertex })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.remap_vertices_with_indices(vertex_remap, &new_indices)
    }
}
