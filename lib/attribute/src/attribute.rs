use crate::{
    Association, AttributeData, AttributeDescriptor, AttributeError, Component, Element, Semantic,
};

/// A typed sequence of fixed-arity elements, tagged with the [AttributeDescriptor] that says what
/// the elements are attached to and what they mean.
///
/// Attributes are immutable; every operation returns a new attribute. Data is reference-counted,
/// so clones share storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    descriptor: AttributeDescriptor,
    data: AttributeData,
}

impl Attribute {
    /// # Errors
    ///
    /// * [`DataType`](AttributeError::DataType) if `data` is not of the descriptor's data type.
    /// * [`Arity`](AttributeError::Arity) if the length of `data` is not a multiple of the
    ///   descriptor's arity.
    pub fn new(descriptor: AttributeDescriptor, data: AttributeData) -> Result<Self, AttributeError> {
        if data.data_type() != descriptor.data_type {
            return Err(AttributeError::DataType {
                expected: descriptor.data_type,
                found: data.data_type(),
            });
        }
        if descriptor.arity() == 0 || data.len() % descriptor.arity() != 0 {
            return Err(AttributeError::Arity {
                len: data.len(),
                arity: descriptor.arity(),
            });
        }
        Ok(Self { descriptor, data })
    }

    /// Construct an attribute from typed elements.
    ///
    /// # Errors
    ///
    /// * [`TypeMismatch`](AttributeError::TypeMismatch) if `T` does not match the descriptor.
    pub fn from_elements<T: Element>(
        descriptor: AttributeDescriptor,
        elements: impl IntoIterator<Item = T>,
    ) -> Result<Self, AttributeError> {
        check_type::<T>(&descriptor)?;
        let AttributeDescriptor {
            association,
            semantic,
            index,
            ..
        } = descriptor;
        Ok(Self::typed(association, semantic, index, elements))
    }

    /// Construct an attribute whose storage type is taken from `T`.
    pub fn typed<T: Element>(
        association: Association,
        semantic: Semantic,
        index: u32,
        elements: impl IntoIterator<Item = T>,
    ) -> Self {
        let elements = elements.into_iter();
        let mut components = Vec::with_capacity(elements.size_hint().0 * T::ARITY);
        for e in elements {
            e.extend_components(&mut components);
        }
        Self {
            descriptor: AttributeDescriptor::of::<T>(association, semantic, index),
            data: AttributeData::from_vec(components),
        }
    }

    /// An attribute of `count` zero-valued elements.
    pub fn zeroed(descriptor: AttributeDescriptor, count: usize) -> Self {
        let data = AttributeData::zeroed(descriptor.data_type, count * descriptor.arity());
        Self { descriptor, data }
    }

    #[inline]
    pub fn descriptor(&self) -> &AttributeDescriptor {
        &self.descriptor
    }

    #[inline]
    pub fn data(&self) -> &AttributeData {
        &self.data
    }

    #[inline]
    pub fn association(&self) -> Association {
        self.descriptor.association
    }

    #[inline]
    pub fn semantic(&self) -> &Semantic {
        &self.descriptor.semantic
    }

    /// The canonical descriptor name, which identifies this attribute within a geometry.
    #[inline]
    pub fn name(&self) -> String {
        self.descriptor.name()
    }

    /// Number of elements (not components).
    #[inline]
    pub fn element_count(&self) -> usize {
        self.data.len().checked_div(self.descriptor.arity()).unwrap_or(0)
    }

    /// Whether elements of this attribute can be read as `T`.
    #[inline]
    pub fn is<T: Element>(&self) -> bool {
        check_type::<T>(&self.descriptor).is_ok()
    }

    /// Borrow the flat component buffer as `C`.
    pub fn components<C: Component>(&self) -> Result<&[C], AttributeError> {
        self.data.as_slice::<C>().ok_or(AttributeError::DataType {
            expected: C::TYPE,
            found: self.data.data_type(),
        })
    }

    /// Copy out all elements as `T`.
    ///
    /// # Errors
    ///
    /// * [`TypeMismatch`](AttributeError::TypeMismatch) if `T` does not match the descriptor.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>, AttributeError> {
        check_type::<T>(&self.descriptor)?;
        Ok(self
            .components::<T::Component>()?
            .chunks_exact(T::ARITY)
            .map(T::from_components)
            .collect())
    }

    /// Read element `index` as `T`, if it exists.
    pub fn get<T: Element>(&self, index: usize) -> Result<Option<T>, AttributeError> {
        check_type::<T>(&self.descriptor)?;
        let components = self.components::<T::Component>()?;
        Ok(components
            .get(index * T::ARITY..(index + 1) * T::ARITY)
            .map(T::from_components))
    }

    /// Elementwise map over `T`, keeping the descriptor.
    pub fn map<T: Element>(&self, mut f: impl FnMut(T) -> T) -> Result<Self, AttributeError> {
        let mapped = self.to_vec::<T>()?.into_iter().map(&mut f);
        Self::from_elements(self.descriptor.clone(), mapped)
    }

    /// Gather elements: element `i` of the result is element `order[i]` of `self`.
    ///
    /// # Errors
    ///
    /// * [`OutOfRange`](AttributeError::OutOfRange) if an entry of `order` is not an element.
    pub fn remap(&self, order: &[usize]) -> Result<Self, AttributeError> {
        Ok(Self {
            descriptor: self.descriptor.clone(),
            data: self.data.gather(self.descriptor.arity(), order)?,
        })
    }

    /// Append the data of `others`, in order, to the data of `self`.
    ///
    /// # Errors
    ///
    /// * [`NameMismatch`](AttributeError::NameMismatch) if any of `others` is a different attribute.
    pub fn concat<'a>(
        &self,
        others: impl IntoIterator<Item = &'a Attribute>,
    ) -> Result<Self, AttributeError> {
        let mut parts = vec![&self.data];
        for other in others {
            if other.descriptor != self.descriptor {
                return Err(AttributeError::NameMismatch {
                    expected: self.name(),
                    found: other.name(),
                });
            }
            parts.push(&other.data);
        }
        Ok(Self {
            descriptor: self.descriptor.clone(),
            data: AttributeData::concat(self.descriptor.data_type, parts)?,
        })
    }

    /// Re-tag this attribute's data with another descriptor of the same storage type.
    pub fn with_descriptor(self, descriptor: AttributeDescriptor) -> Result<Self, AttributeError> {
        Self::new(descriptor, self.data)
    }
}

fn check_type<T: Element>(descriptor: &AttributeDescriptor) -> Result<(), AttributeError> {
    if <T::Component as Component>::TYPE != descriptor.data_type || T::ARITY != descriptor.arity()
    {
        return Err(AttributeError::TypeMismatch {
            name: descriptor.name(),
            expected_type: <T::Component as Component>::TYPE,
            expected_arity: T::ARITY,
            found_type: descriptor.data_type,
            found_arity: descriptor.arity(),
        });
    }
    Ok(())
}
