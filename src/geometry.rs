//! The [GeometryAttributes] container.

mod document;
mod topology;

pub use document::*;
pub use topology::DEFAULT_CORNERS_PER_FACE;

use std::{collections::HashSet, sync::Arc};

use g3d_attribute::{Association, Attribute, AttributeDescriptor, Semantic};
use nalgebra::Vector3;

use crate::Error;

/// An ordered set of [Attributes](Attribute), uniquely named, which together describe a mesh.
///
/// Topology (vertex, face, corner counts, etc.) is never stored; it is derived from the
/// structural attributes present (see [GeometryAttributes::num_vertices] and friends).
///
/// Containers are immutable; every operation returns a new one. Attribute data is
/// reference-counted, so unchanged attributes are shared between a container and the containers
/// derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryAttributes {
    attributes: Arc<[Attribute]>,
}

impl Default for GeometryAttributes {
    fn default() -> Self {
        Self::empty()
    }
}

impl GeometryAttributes {
    /// The container with no attributes.
    pub fn empty() -> Self {
        Self {
            attributes: Arc::from(Vec::new()),
        }
    }

    /// # Errors
    ///
    /// * [`DuplicateAttribute`](Error::DuplicateAttribute) if two attributes share a name.
    pub fn new(attributes: impl IntoIterator<Item = Attribute>) -> Result<Self, Error> {
        let attributes: Vec<Attribute> = attributes.into_iter().collect();
        let mut names = HashSet::with_capacity(attributes.len());
        for attr in &attributes {
            if !names.insert(attr.name()) {
                return Err(Error::DuplicateAttribute(attr.name()));
            }
        }
        Ok(Self::from_unique(attributes))
    }

    /// Callers guarantee that names are unique.
    pub(crate) fn from_unique(attributes: Vec<Attribute>) -> Self {
        debug_assert_eq!(
            attributes.iter().map(Attribute::name).collect::<HashSet<_>>().len(),
            attributes.len()
        );
        Self {
            attributes: attributes.into(),
        }
    }

    #[inline]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    /// Number of attributes.
    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Whether `self` and `other` share the same attribute list in memory; i.e. one is an
    /// unmodified clone of the other.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.attributes, &other.attributes)
    }

    /// Get an attribute by its canonical name.
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.iter().find(|a| a.name() == name)
    }

    /// The attribute with the canonical name of `descriptor`.
    pub fn get_by_descriptor(&self, descriptor: &AttributeDescriptor) -> Option<&Attribute> {
        self.get(&descriptor.name())
    }

    /// Whether an attribute named `name` is present.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The first attribute with the given association and semantic.
    pub fn find(&self, association: Association, semantic: &Semantic) -> Option<&Attribute> {
        self.iter()
            .find(|a| a.association() == association && a.semantic() == semantic)
    }

    /// Attributes with the given association, in insertion order.
    pub fn attributes_with(
        &self,
        association: Association,
    ) -> impl Iterator<Item = &Attribute> + Clone + '_ {
        self.iter().filter(move |a| a.association() == association)
    }

    pub fn vertex_attributes(&self) -> impl Iterator<Item = &Attribute> + Clone + '_ {
        self.attributes_with(Association::Vertex)
    }

    pub fn face_attributes(&self) -> impl Iterator<Item = &Attribute> + Clone + '_ {
        self.attributes_with(Association::Face)
    }

    pub fn corner_attributes(&self) -> impl Iterator<Item = &Attribute> + Clone + '_ {
        self.attributes_with(Association::Corner)
    }

    pub fn edge_attributes(&self) -> impl Iterator<Item = &Attribute> + Clone + '_ {
        self.attributes_with(Association::Edge)
    }

    pub fn subgeometry_attributes(&self) -> impl Iterator<Item = &Attribute> + Clone + '_ {
        self.attributes_with(Association::Subgeometry)
    }

    pub fn instance_attributes(&self) -> impl Iterator<Item = &Attribute> + Clone + '_ {
        self.attributes_with(Association::Instance)
    }

    pub fn none_attributes(&self) -> impl Iterator<Item = &Attribute> + Clone + '_ {
        self.attributes_with(Association::None)
    }

    pub fn all_attributes(&self) -> impl Iterator<Item = &Attribute> + Clone + '_ {
        self.attributes_with(Association::All)
    }

    /// The vertex position attribute.
    pub fn position_attribute(&self) -> Option<&Attribute> {
        self.find(Association::Vertex, &Semantic::Position)
    }

    /// The corner -> vertex index buffer. Only scalar attributes qualify.
    pub fn index_attribute(&self) -> Option<&Attribute> {
        self.iter().find(|a| is_index(a))
    }

    /// The global face size attribute.
    pub fn face_size_attribute(&self) -> Option<&Attribute> {
        self.find(Association::All, &Semantic::FaceSize)
    }

    /// The first normal attribute, of any association.
    pub fn normal_attribute(&self) -> Option<&Attribute> {
        self.iter().find(|a| a.semantic() == &Semantic::Normal)
    }

    /// Vertex positions, if present and stored as `float32x3`.
    pub fn positions(&self) -> Option<Vec<Vector3<f32>>> {
        self.position_attribute()?.to_vec().ok()
    }

    /// The index buffer, if present and stored as `int32`.
    pub fn indices(&self) -> Option<Vec<i32>> {
        self.index_attribute()?.to_vec().ok()
    }

    /// Whether `self` and `other` have the same attribute names in the same order.
    pub fn has_same_attributes(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.name() == b.name())
    }

    /// The attribute described by `descriptor`, or a zero-filled one with as many elements as
    /// the topology expects.
    pub fn get_or_default_attribute(&self, descriptor: &AttributeDescriptor) -> Attribute {
        match self.get_by_descriptor(descriptor) {
            Some(attr) => attr.clone(),
            None => Attribute::zeroed(
                descriptor.clone(),
                self.expected_element_count(descriptor),
            ),
        }
    }

    /// A copy of `self` with `attribute` added, replacing any attribute of the same name in
    /// place.
    pub fn with_attribute(&self, attribute: Attribute) -> Self {
        self.with_attributes([attribute])
    }

    /// [with_attribute](Self::with_attribute) for several attributes, in order.
    pub fn with_attributes(&self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        let mut res = self.attributes.to_vec();
        for attr in attributes {
            let name = attr.name();
            match res.iter_mut().find(|a| a.name() == name) {
                Some(slot) => *slot = attr,
                None => res.push(attr),
            }
        }
        Self::from_unique(res)
    }

    /// A copy of `self` without the attribute named `name`.
    pub fn without_attribute(&self, name: &str) -> Self {
        self.filter(|a| a.name() != name)
    }

    /// A copy of `self` keeping only attributes matching `keep`.
    pub fn filter(&self, keep: impl FnMut(&&Attribute) -> bool) -> Self {
        Self::from_unique(self.iter().filter(keep).cloned().collect())
    }
}

impl<'g> IntoIterator for &'g GeometryAttributes {
    type Item = &'g Attribute;
    type IntoIter = std::slice::Iter<'g, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Attribute>> for GeometryAttributes {
    type Error = Error;

    fn try_from(attributes: Vec<Attribute>) -> Result<Self, Self::Error> {
        Self::new(attributes)
    }
}

#[inline]
pub(crate) fn is_index(attr: &Attribute) -> bool {
    attr.association() == Association::Corner
        && attr.semantic() == &Semantic::Index
        && attr.descriptor().data_arity == 1
}
