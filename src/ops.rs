//! Transformations from one [GeometryAttributes] to another.
//!
//! Every operation is a method returning a new container; inputs are never modified, and
//! attributes an operation does not touch are shared with the result.

mod deform;
mod merge;
mod primitives;
mod remap;
mod select;
mod winding;

use g3d_attribute::{Association, Attribute, Semantic};

use crate::{Error, GeometryAttributes};

impl GeometryAttributes {
    /// Replace each attribute for which `f` returns `Some`, keeping the rest.
    ///
    /// `f` must preserve attribute names.
    pub(crate) fn map_each(&self, mut f: impl FnMut(&Attribute) -> Option<Attribute>) -> Self {
        Self::from_unique(
            self.iter()
                .map(|a| f(a).unwrap_or_else(|| a.clone()))
                .collect(),
        )
    }
}

pub(crate) fn to_i32(n: usize) -> Result<i32, Error> {
    i32::try_from(n).map_err(|_| Error::Overflow(n))
}

/// A fresh `int32` index attribute.
pub(crate) fn index_attribute(indices: &[usize]) -> Result<Attribute, Error> {
    let indices = indices
        .iter()
        .map(|&i| to_i32(i))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Attribute::typed(
        Association::Corner,
        Semantic::Index,
        0,
        indices,
    ))
}

pub(crate) fn face_size_attribute(corners_per_face: usize) -> Result<Attribute, Error> {
    Ok(Attribute::typed(
        Association::All,
        Semantic::FaceSize,
        0,
        [to_i32(corners_per_face)?],
    ))
}
