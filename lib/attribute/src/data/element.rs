use g3d_common::item_with;
use nalgebra::{Matrix4, Point2, Point3, Vector2, Vector3, Vector4};

use crate::Component;

/// Types which can be used as a single attribute element: `ARITY` components of type
/// `Component`.
pub trait Element: Sized + Clone {
    type Component: Component;
    const ARITY: usize;

    /// # Panics
    ///
    /// * if `components.len() < Self::ARITY`
    fn from_components(components: &[Self::Component]) -> Self;

    fn extend_components(&self, out: &mut Vec<Self::Component>);
}

item_with! {C: i8, i16, i32, i64, f32, f64 => impl Element for C {
    type Component = C;
    const ARITY: usize = 1;

    #[inline]
    fn from_components(components: &[C]) -> Self {
        components[0]
    }

    #[inline]
    fn extend_components(&self, out: &mut Vec<C>) {
        out.push(*self);
    }
}}

item_with! {C: i8, i16, i32, i64, f32, f64 => impl<const N: usize> Element for [C; N] {
    type Component = C;
    const ARITY: usize = N;

    #[inline]
    fn from_components(components: &[C]) -> Self {
        std::array::from_fn(|i| components[i])
    }

    #[inline]
    fn extend_components(&self, out: &mut Vec<C>) {
        out.extend_from_slice(self);
    }
}}

/// Implement [Element] for a fixed-size nalgebra type, for every component type.
macro_rules! impl_element_na {
    ($Target:ident, $arity:expr, $from:ident, $slice:ident) => {
        item_with! {C: i8, i16, i32, i64, f32, f64 => impl Element for $Target<C> {
            type Component = C;
            const ARITY: usize = $arity;

            #[inline]
            fn from_components(components: &[C]) -> Self {
                $Target::$from(&components[..$arity])
            }

            #[inline]
            fn extend_components(&self, out: &mut Vec<C>) {
                out.extend_from_slice(self.$slice());
            }
        }}
    };
}

impl_element_na!(Vector2, 2, from_column_slice, as_slice);
impl_element_na!(Vector3, 3, from_column_slice, as_slice);
impl_element_na!(Vector4, 4, from_column_slice, as_slice);
impl_element_na!(Matrix4, 16, from_column_slice, as_slice);
impl_element_na!(Point2, 2, from_slice, coords_slice);
impl_element_na!(Point3, 3, from_slice, coords_slice);

/// Lets points share [impl_element_na] with vectors.
trait CoordsSlice<C> {
    fn coords_slice(&self) -> &[C];
}

impl<C: nalgebra::Scalar> CoordsSlice<C> for Point2<C> {
    #[inline]
    fn coords_slice(&self) -> &[C] {
        self.coords.as_slice()
    }
}

impl<C: nalgebra::Scalar> CoordsSlice<C> for Point3<C> {
    #[inline]
    fn coords_slice(&self) -> &[C] {
        self.coords.as_slice()
    }
}
