use g3d_attribute::{Association, Attribute, Semantic};

use crate::{geometry::is_index, log, Error, GeometryAttributes};

use super::{index_attribute, to_i32};

impl GeometryAttributes {
    /// Combine several geometries into one, with one subgeometry per input.
    ///
    /// The attributes of the result are those of the first geometry, in order, with each
    /// vertex, face, corner, edge and `none` attribute extended by the matching attribute of every
    /// later geometry (or zeros where a geometry lacks it). `all` attributes are taken from the
    /// first geometry; subgeometry and instance attributes are not carried over. If any geometry
    /// is indexed, the merged index attribute addresses the concatenated vertices, with unindexed
    /// geometries contributing one corner per vertex. It takes the place of the first geometry's
    /// index attribute, or follows its other attributes if it has none.
    ///
    /// Two subgeometry attributes are appended, holding the first vertex
    /// ([vertex_offset](g3d_attribute::AttributeDescriptor::vertex_offset)) and first corner
    /// ([index_offset](g3d_attribute::AttributeDescriptor::index_offset)) of each input.
    ///
    /// Merging nothing gives an empty geometry, and merging a single geometry returns it unchanged.
    ///
    /// # Errors
    ///
    /// * [`CornersPerFaceMismatch`](Error::CornersPerFaceMismatch) if the inputs have different
    ///   face sizes.
    /// * [`Overflow`](Error::Overflow) if an offset or index does not fit in an `int32`.
    /// * Any error of [corner_vertices](Self::corner_vertices) for an indexed input.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(count = geometries.len())))]
    pub fn merge(geometries: &[GeometryAttributes]) -> Result<Self, Error> {
        let (first, rest) = match geometries {
            [] => return Ok(Self::empty()),
            [single] => return Ok(single.clone()),
            [first, rest @ ..] => (first, rest),
        };

        let corners_per_face = first.num_corners_per_face();
        if let Some(found) = rest
            .iter()
            .map(Self::num_corners_per_face)
            .find(|&n| n != corners_per_face)
        {
            return Err(Error::CornersPerFaceMismatch {
                expected: corners_per_face,
                found,
            });
        }

        let mut vertex_offsets = Vec::with_capacity(geometries.len());
        let mut index_offsets = Vec::with_capacity(geometries.len());
        let (mut vertices, mut corners) = (0, 0);
        for g in geometries {
            vertex_offsets.push(vertices);
            index_offsets.push(corners);
            vertices += g.num_vertices();
            corners += g.num_corners();
        }

        let mut index = if geometries.iter().any(Self::is_indexed) {
            Some(merge_indices(geometries, &vertex_offsets)?)
        } else {
            None
        };
        let mut res = Vec::with_capacity(first.len() + 3);
        for attr in first {
            match attr.association() {
                Association::All => res.push(attr.clone()),
                Association::Subgeometry | Association::Instance => {
                    log::trace!(name = %attr.name(), "dropping attribute");
                }
                _ if is_index(attr) => res.extend(index.take()),
                _ => {
                    let tail: Vec<Attribute> = rest
                        .iter()
                        .map(|g| g.get_or_default_attribute(attr.descriptor()))
                        .collect();
                    res.push(attr.concat(&tail)?);
                }
            }
        }
        res.extend(index);
        res.push(offset_attribute(Semantic::VertexOffset, &vertex_offsets)?);
        res.push(offset_attribute(Semantic::IndexOffset, &index_offsets)?);

        log::debug!(vertices, corners, attributes = res.len(), "merged");
        Ok(Self::from_unique(res))
    }
}

fn merge_indices(
    geometries: &[GeometryAttributes],
    vertex_offsets: &[usize],
) -> Result<Attribute, Error> {
    let mut indices = Vec::new();
    for (g, offset) in geometries.iter().zip(vertex_offsets) {
        indices.extend(g.corner_vertices()?.into_iter().map(|v| v + offset));
    }
    index_attribute(&indices)
}

fn offset_attribute(semantic: Semantic, offsets: &[usize]) -> Result<Attribute, Error> {
    let offsets = offsets
        .iter()
        .map(|&o| to_i32(o))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Attribute::typed(Association::Subgeometry, semantic, 0, offsets))
}
