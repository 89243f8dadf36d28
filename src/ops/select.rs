use g3d_attribute::Association;

use crate::{geometry::is_index, log, Error, GeometryAttributes};

use super::index_attribute;

impl GeometryAttributes {
    /// Keep the faces for which `keep` returns true, in order.
    ///
    /// Vertices are not compacted; see [select_faces](Self::select_faces) for that.
    pub fn copy_faces(&self, keep: impl FnMut(&usize) -> bool) -> Result<Self, Error> {
        let faces: Vec<usize> = (0..self.num_faces()).filter(keep).collect();
        self.remap_faces(&faces)
    }

    /// Drop the faces for which `delete` returns true.
    pub fn delete_faces(&self, mut delete: impl FnMut(&usize) -> bool) -> Result<Self, Error> {
        self.copy_faces(|f| !delete(f))
    }

    /// Keep `count` faces starting at face `from`.
    ///
    /// # Errors
    ///
    /// * [`IndexOutOfRange`](Error::IndexOutOfRange) if the range extends past the last face.
    pub fn copy_face_range(&self, from: usize, count: usize) -> Result<Self, Error> {
        let faces = self.num_faces();
        let end = from.saturating_add(count);
        if count > 0 && end > faces {
            return Err(Error::out_of_range(end - 1, faces));
        }
        let face_remap: Vec<usize> = (from..end).collect();
        self.remap_faces(&face_remap)
    }

    /// Split the faces into consecutive groups of `size` faces (the last group may be smaller),
    /// one geometry per group.
    ///
    /// # Errors
    ///
    /// * [`ZeroGroupSize`](Error::ZeroGroupSize) if `size` is zero.
    pub fn copy_face_groups(&self, size: usize) -> Result<Vec<Self>, Error> {
        if size == 0 {
            return Err(Error::ZeroGroupSize);
        }
        let faces = self.num_faces();
        (0..faces)
            .step_by(size)
            .map(|from| self.copy_face_range(from, size.min(faces - from)))
            .collect()
    }

    /// The smallest geometry holding the faces listed in `faces`, in that order.
    ///
    /// Only vertices referenced by the selected faces are kept, numbered in order of first use.
    /// Subgeometry attributes are dropped.
    ///
    /// Selecting every face in order returns `self` unchanged; selecting nothing returns `None`.
    ///
    /// # Errors
    ///
    /// * [`IndexOutOfRange`](Error::IndexOutOfRange) if an entry of `faces` is not a face.
    /// * Any error of [corner_vertices](Self::corner_vertices).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(count = faces.len())))]
    pub fn select_faces(&self, faces: &[usize]) -> Result<Option<Self>, Error> {
        if faces.is_empty() {
            return Ok(None);
        }
        let num_faces = self.num_faces();
        if faces.len() == num_faces && faces.iter().enumerate().all(|(i, &f)| i == f) {
            return Ok(Some(self.clone()));
        }
        if let Some(&f) = faces.iter().find(|&&f| f >= num_faces) {
            return Err(Error::out_of_range(f, num_faces));
        }

        let corner_vertices = self.corner_vertices()?;
        let corners = self.face_indices_to_corner_indices(faces);
        let mut compact = vec![None; self.num_vertices()];
        let mut vertex_order = Vec::new();
        let new_indices: Vec<usize> = corners
            .iter()
            .map(|&c| {
                let old = corner_vertices[c];
                *compact[old].get_or_insert_with(|| {
                    vertex_order.push(old);
                    vertex_order.len() - 1
                })
            })
            .collect();

        let mut index = Some(index_attribute(&new_indices)?);
        let mut res = Vec::with_capacity(self.len() + 1);
        for attr in self {
            if is_index(attr) {
                res.extend(index.take());
                continue;
            }
            match attr.association() {
                Association::Vertex => res.push(attr.remap(&vertex_order)?),
                Association::Face => res.push(attr.remap(faces)?),
                Association::Corner | Association::Edge => res.push(attr.remap(&corners)?),
                Association::Subgeometry => {}
                _ => res.push(attr.clone()),
            }
        }
        res.extend(index);

        log::debug!(
            faces = faces.len(),
            vertices = vertex_order.len(),
            "selected"
        );
        Ok(Some(Self::from_unique(res)))
    }
}
