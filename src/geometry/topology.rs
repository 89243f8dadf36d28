use g3d_attribute::{Association, Attribute, AttributeDescriptor};

use crate::{log, Error, GeometryAttributes};

/// Corners per face when no face size attribute is present.
pub const DEFAULT_CORNERS_PER_FACE: usize = 3;

impl GeometryAttributes {
    /// Corners per face, from the face size attribute.
    ///
    /// Falls back to [DEFAULT_CORNERS_PER_FACE] if there is no face size attribute or it does not
    /// hold a single positive integer.
    pub fn num_corners_per_face(&self) -> usize {
        self.face_size_attribute()
            .and_then(face_size_value)
            .unwrap_or(DEFAULT_CORNERS_PER_FACE)
    }

    /// Element count of the position attribute, else of the first vertex attribute.
    pub fn num_vertices(&self) -> usize {
        self.position_attribute()
            .or_else(|| self.vertex_attributes().next())
            .map_or(0, Attribute::element_count)
    }

    /// Element count of the index attribute. Unindexed geometry has one corner per vertex.
    pub fn num_corners(&self) -> usize {
        self.index_attribute()
            .map_or_else(|| self.num_vertices(), Attribute::element_count)
    }

    pub fn num_faces(&self) -> usize {
        self.num_corners() / self.num_corners_per_face()
    }

    pub fn num_subgeometries(&self) -> usize {
        self.subgeometry_attributes()
            .next()
            .map_or(0, Attribute::element_count)
    }

    pub fn num_instances(&self) -> usize {
        self.instance_attributes()
            .next()
            .map_or(0, Attribute::element_count)
    }

    /// Whether corners map to vertices through an index attribute.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.index_attribute().is_some()
    }

    /// The number of elements an attribute with this descriptor should have in `self`.
    pub fn expected_element_count(&self, descriptor: &AttributeDescriptor) -> usize {
        match descriptor.association {
            Association::All => 1,
            Association::None => 0,
            Association::Vertex => self.num_vertices(),
            Association::Face => self.num_faces(),
            Association::Corner | Association::Edge => self.num_corners(),
            Association::Subgeometry => self.num_subgeometries(),
            Association::Instance => self.num_instances(),
        }
    }

    /// The first corner of `face`.
    #[inline]
    pub fn face_to_corner(&self, face: usize) -> usize {
        face * self.num_corners_per_face()
    }

    #[inline]
    pub fn corner_to_face(&self, corner: usize) -> usize {
        corner / self.num_corners_per_face()
    }

    /// Position of `corner` within its face.
    #[inline]
    pub fn corner_number(&self, corner: usize) -> usize {
        corner % self.num_corners_per_face()
    }

    /// Every corner of each face in `faces`, face by face.
    ///
    /// Faces too large to have corner indices contribute no corners.
    pub fn face_indices_to_corner_indices(&self, faces: &[usize]) -> Vec<usize> {
        let n = self.num_corners_per_face();
        faces
            .iter()
            .flat_map(|&f| f.saturating_mul(n)..f.saturating_add(1).saturating_mul(n))
            .collect()
    }

    /// The vertex referenced by each corner.
    ///
    /// # Errors
    ///
    /// * [`NonIntegralIndex`](Error::NonIntegralIndex) if the index attribute holds floats.
    /// * [`IndexOutOfRange`](Error::IndexOutOfRange) if an index is negative or not less than
    ///   [num_vertices](Self::num_vertices).
    pub fn corner_vertices(&self) -> Result<Vec<usize>, Error> {
        let Some(index) = self.index_attribute() else {
            return Ok((0..self.num_vertices()).collect());
        };
        if index.descriptor().data_type.is_float() {
            return Err(Error::NonIntegralIndex(index.name()));
        }
        let raw = index
            .data()
            .cast::<i64>()
            .ok_or_else(|| Error::NonIntegralIndex(index.name()))?;
        let len = self.num_vertices();
        raw.into_iter()
            .map(|i| match usize::try_from(i) {
                Ok(v) if v < len => Ok(v),
                _ => Err(Error::IndexOutOfRange { index: i, len }),
            })
            .collect()
    }

    /// Check that the attributes of `self` agree with its derived topology.
    ///
    /// # Errors
    ///
    /// * [`InvalidFaceSize`](Error::InvalidFaceSize) if the face size attribute is not a single
    ///   positive integer.
    /// * [`PartialFace`](Error::PartialFace) if the corners do not divide into whole faces.
    /// * [`ElementCount`](Error::ElementCount) if an attribute has the wrong number of elements.
    /// * Any error of [corner_vertices](Self::corner_vertices).
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(fs) = self.face_size_attribute() {
            if face_size_value(fs).is_none() {
                return Err(Error::InvalidFaceSize(fs.name()));
            }
        }
        let corners = self.num_corners();
        let corners_per_face = self.num_corners_per_face();
        if corners % corners_per_face != 0 {
            return Err(Error::PartialFace {
                corners,
                corners_per_face,
            });
        }
        for attr in self {
            let expected = self.expected_element_count(attr.descriptor());
            let found = attr.element_count();
            if expected != found {
                log::debug!(name = %attr.name(), expected, found, "element count mismatch");
                return Err(Error::ElementCount {
                    name: attr.name(),
                    expected,
                    found,
                });
            }
        }
        self.corner_vertices().map(drop)
    }
}

/// The single positive integer held by a face size attribute.
fn face_size_value(attr: &Attribute) -> Option<usize> {
    match attr.data().cast::<i64>()?.as_slice() {
        [n] => usize::try_from(*n).ok().filter(|&n| n > 0),
        _ => None,
    }
}
