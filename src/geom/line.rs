use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use g3d_common::{impl_add_sub, impl_mul_div};
use nalgebra::{Matrix4, Point3, Vector3};

use super::Float;

/// A line segment from `a` to `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<R: Float> {
    pub a: Point3<R>,
    pub b: Point3<R>,
}

impl<R: Float> Line<R> {
    #[inline]
    pub fn new(a: Point3<R>, b: Point3<R>) -> Self {
        Self { a, b }
    }

    /// `b - a`
    #[inline]
    pub fn vector(&self) -> Vector3<R> {
        self.b - self.a
    }

    #[inline]
    pub fn length(&self) -> R {
        self.vector().norm()
    }

    #[inline]
    pub fn midpoint(&self) -> Point3<R> {
        self.lerp(R::HALF)
    }

    /// The point at parameter `t`, where `0` is `a` and `1` is `b`.
    #[inline]
    pub fn lerp(&self, t: R) -> Point3<R> {
        self.a + self.vector() * t
    }

    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    pub fn transform(&self, m: &Matrix4<R>) -> Self {
        Self::new(m.transform_point(&self.a), m.transform_point(&self.b))
    }
}

impl_add_sub!([R: Float] self: Line<R>, rhs: Vector3<R>;
    (Line::new(self.a + rhs.to_owned(), self.b + rhs.to_owned());
        { self.a += rhs.to_owned(); self.b += rhs.to_owned(); });
    (Line::new(self.a - rhs.to_owned(), self.b - rhs.to_owned());
        { self.a -= rhs.to_owned(); self.b -= rhs.to_owned(); }));

impl_mul_div!([R: Float] self: Line<R>, rhs: R;
    (Line::new(self.a * rhs.to_owned(), self.b * rhs.to_owned());
        { self.a *= rhs.to_owned(); self.b *= rhs.to_owned(); });
    (Line::new(self.a / rhs.to_owned(), self.b / rhs.to_owned());
        { self.a /= rhs.to_owned(); self.b /= rhs.to_owned(); }));
