use g3d_common::item_with;
use simba::scalar::RealField;

/// Floating-point scalars usable in [primitives](crate::geom), so they can be generic over
/// {f32, f64}.
pub trait Float: RealField + Copy {
    const ZERO: Self;
    const ONE: Self;
    const HALF: Self;
}

item_with! {Real: f32, f64 => impl Float for Real {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const HALF: Self = 0.5;
}}
