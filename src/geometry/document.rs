use std::ops::Deref;

use crate::GeometryAttributes;

/// Unit of the position data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Millimeter,
    Centimeter,
    #[default]
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    #[default]
    Right,
}

/// Metadata describing how the position data of a [G3d] should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    pub unit: Unit,
    pub up_axis: Axis,
    pub forward_axis: Axis,
    pub handedness: Handedness,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            unit: Unit::Meter,
            up_axis: Axis::Z,
            forward_axis: Axis::Y,
            handedness: Handedness::Right,
        }
    }
}

/// A geometry together with its optional [Header].
///
/// Dereferences to [GeometryAttributes], so every query and operation is available directly.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct G3d {
    pub header: Option<Header>,
    pub attributes: GeometryAttributes,
}

impl G3d {
    pub fn new(header: Option<Header>, attributes: GeometryAttributes) -> Self {
        Self { header, attributes }
    }

    /// Replace the attributes with the result of `f`, keeping the header.
    pub fn map(&self, f: impl FnOnce(&GeometryAttributes) -> GeometryAttributes) -> Self {
        Self {
            header: self.header,
            attributes: f(&self.attributes),
        }
    }

    /// [map](Self::map) for fallible operations.
    pub fn try_map<E>(
        &self,
        f: impl FnOnce(&GeometryAttributes) -> Result<GeometryAttributes, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            header: self.header,
            attributes: f(&self.attributes)?,
        })
    }

    #[inline]
    pub fn into_attributes(self) -> GeometryAttributes {
        self.attributes
    }
}

impl Deref for G3d {
    type Target = GeometryAttributes;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.attributes
    }
}

impl From<GeometryAttributes> for G3d {
    fn from(attributes: GeometryAttributes) -> Self {
        Self {
            header: None,
            attributes,
        }
    }
}
