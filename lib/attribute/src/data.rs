//! Runtime-typed attribute storage.

use std::sync::Arc;

use num_traits::NumCast;

use crate::{AttributeError, DataType};

mod element;
pub use element::*;

/// Flat, immutable component buffer of an attribute, tagged with its component type.
///
/// Buffers are reference-counted, so cloning is cheap and unchanged data can be shared between
/// geometries.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeData {
    Int8(Arc<[i8]>),
    Int16(Arc<[i16]>),
    Int32(Arc<[i32]>),
    Int64(Arc<[i64]>),
    Float32(Arc<[f32]>),
    Float64(Arc<[f64]>),
}

/// Apply `$body` to the buffer of every variant, rewrapping the result in the same variant.
macro_rules! map_variants {
    ($data:expr, $v:ident => $body:expr) => {
        match $data {
            AttributeData::Int8($v) => AttributeData::Int8($body),
            AttributeData::Int16($v) => AttributeData::Int16($body),
            AttributeData::Int32($v) => AttributeData::Int32($body),
            AttributeData::Int64($v) => AttributeData::Int64($body),
            AttributeData::Float32($v) => AttributeData::Float32($body),
            AttributeData::Float64($v) => AttributeData::Float64($body),
        }
    };
}

/// Evaluate `$body` for the buffer of whichever variant is present.
macro_rules! with_variant {
    ($data:expr, $v:ident => $body:expr) => {
        match $data {
            AttributeData::Int8($v) => $body,
            AttributeData::Int16($v) => $body,
            AttributeData::Int32($v) => $body,
            AttributeData::Int64($v) => $body,
            AttributeData::Float32($v) => $body,
            AttributeData::Float64($v) => $body,
        }
    };
}

impl AttributeData {
    /// A buffer of `len` zeroes.
    pub fn zeroed(data_type: DataType, len: usize) -> Self {
        match data_type {
            DataType::Int8 => Self::Int8(vec![0; len].into()),
            DataType::Int16 => Self::Int16(vec![0; len].into()),
            DataType::Int32 => Self::Int32(vec![0; len].into()),
            DataType::Int64 => Self::Int64(vec![0; len].into()),
            DataType::Float32 => Self::Float32(vec![0.0; len].into()),
            DataType::Float64 => Self::Float64(vec![0.0; len].into()),
        }
    }

    #[inline]
    pub fn from_vec<C: Component>(components: Vec<C>) -> Self {
        C::wrap(components)
    }

    pub fn data_type(&self) -> DataType {
        match self {
            AttributeData::Int8(_) => DataType::Int8,
            AttributeData::Int16(_) => DataType::Int16,
            AttributeData::Int32(_) => DataType::Int32,
            AttributeData::Int64(_) => DataType::Int64,
            AttributeData::Float32(_) => DataType::Float32,
            AttributeData::Float64(_) => DataType::Float64,
        }
    }

    /// Number of components (not elements) in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        with_variant!(self, v => v.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the buffer as a slice of `C`, if `C` is its component type.
    #[inline]
    pub fn as_slice<C: Component>(&self) -> Option<&[C]> {
        C::try_borrow(self)
    }

    /// Convert every component to `T`, returning `None` if any component is not representable.
    pub fn cast<T: NumCast>(&self) -> Option<Vec<T>> {
        with_variant!(self, v => v.iter().map(|c| <T as NumCast>::from(*c)).collect())
    }

    /// Build a new buffer whose `i`th element is element `order[i]` of `self`, where each element
    /// is `arity` consecutive components.
    ///
    /// # Errors
    ///
    /// * [`Arity`](AttributeError::Arity) if `arity` is zero or does not divide the buffer.
    /// * [`OutOfRange`](AttributeError::OutOfRange) if any entry of `order` is not an element.
    pub fn gather(&self, arity: usize, order: &[usize]) -> Result<Self, AttributeError> {
        if arity == 0 || self.len() % arity != 0 {
            return Err(AttributeError::Arity {
                len: self.len(),
                arity,
            });
        }
        Ok(map_variants!(self, v => gather_slice(v, arity, order)?))
    }

    /// Concatenate buffers of the same component type.
    ///
    /// # Errors
    ///
    /// * [`DataType`](AttributeError::DataType) if any part is not of type `data_type`.
    pub fn concat<'d>(
        data_type: DataType,
        parts: impl IntoIterator<Item = &'d AttributeData>,
    ) -> Result<Self, AttributeError> {
        let parts: Vec<&AttributeData> = parts.into_iter().collect();
        match data_type {
            DataType::Int8 => concat_as::<i8>(&parts),
            DataType::Int16 => concat_as::<i16>(&parts),
            DataType::Int32 => concat_as::<i32>(&parts),
            DataType::Int64 => concat_as::<i64>(&parts),
            DataType::Float32 => concat_as::<f32>(&parts),
            DataType::Float64 => concat_as::<f64>(&parts),
        }
    }
}

fn gather_slice<C: Copy>(
    src: &[C],
    arity: usize,
    order: &[usize],
) -> Result<Arc<[C]>, AttributeError> {
    let len = src.len() / arity;
    let mut res = Vec::with_capacity(order.len() * arity);
    for &index in order {
        if index >= len {
            return Err(AttributeError::OutOfRange { index, len });
        }
        res.extend_from_slice(&src[index * arity..(index + 1) * arity]);
    }
    Ok(res.into())
}

fn concat_as<C: Component>(parts: &[&AttributeData]) -> Result<AttributeData, AttributeError> {
    let mut res = Vec::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        let slice = part.as_slice::<C>().ok_or(AttributeError::DataType {
            expected: C::TYPE,
            found: part.data_type(),
        })?;
        res.extend_from_slice(slice);
    }
    Ok(C::wrap(res))
}

/// Primitive numeric types that can be stored in an [AttributeData] buffer.
pub trait Component:
    nalgebra::Scalar + Copy + num_traits::Zero + NumCast + Send + Sync + 'static
{
    const TYPE: DataType;

    fn wrap(components: Vec<Self>) -> AttributeData;

    fn try_borrow(data: &AttributeData) -> Option<&[Self]>;
}

macro_rules! impl_component {
    ($Target:ident: $Variant:ident) => {
        impl Component for $Target {
            const TYPE: DataType = DataType::$Variant;

            #[inline]
            fn wrap(components: Vec<Self>) -> AttributeData {
                AttributeData::$Variant(components.into())
            }

            #[inline]
            fn try_borrow(data: &AttributeData) -> Option<&[Self]> {
                match data {
                    AttributeData::$Variant(v) => Some(&v[..]),
                    _ => None,
                }
            }
        }
    };
}

impl_component!(i8: Int8);
impl_component!(i16: Int16);
impl_component!(i32: Int32);
impl_component!(i64: Int64);
impl_component!(f32: Float32);
impl_component!(f64: Float64);

static_assertions::assert_impl_all!(AttributeData: Send, Sync, Clone);
