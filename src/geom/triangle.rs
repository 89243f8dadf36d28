use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use g3d_common::{impl_add_sub, impl_mul_div};
use nalgebra::{Matrix4, Point3, Vector3};

use super::{Float, Line, VectorExt};

/// A triangle with corners `a`, `b`, `c`, wound counter-clockwise around its normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<R: Float> {
    pub a: Point3<R>,
    pub b: Point3<R>,
    pub c: Point3<R>,
}

impl<R: Float> Triangle<R> {
    #[inline]
    pub fn new(a: Point3<R>, b: Point3<R>, c: Point3<R>) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn vertices(&self) -> [Point3<R>; 3] {
        [self.a, self.b, self.c]
    }

    /// `ab`, `bc`, `ca`
    pub fn edges(&self) -> [Line<R>; 3] {
        [
            Line::new(self.a, self.b),
            Line::new(self.b, self.c),
            Line::new(self.c, self.a),
        ]
    }

    /// `(b - a) × (c - a)`; its length is twice the area.
    #[inline]
    pub fn cross(&self) -> Vector3<R> {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    /// Unit normal, or zero for a degenerate triangle.
    #[inline]
    pub fn normal(&self) -> Vector3<R> {
        self.cross().safe_normalize()
    }

    #[inline]
    pub fn area(&self) -> R {
        self.cross().norm() * R::HALF
    }

    pub fn center(&self) -> Point3<R> {
        let sum = self.a.coords + self.b.coords + self.c.coords;
        Point3::from(sum / (R::ONE + R::ONE + R::ONE))
    }

    /// The same triangle with opposite winding.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self::new(self.a, self.c, self.b)
    }

    pub fn transform(&self, m: &Matrix4<R>) -> Self {
        Self::new(
            m.transform_point(&self.a),
            m.transform_point(&self.b),
            m.transform_point(&self.c),
        )
    }
}

impl_add_sub!([R: Float] self: Triangle<R>, rhs: Vector3<R>;
    (Triangle::new(self.a + rhs.to_owned(), self.b + rhs.to_owned(), self.c + rhs.to_owned());
        { self.a += rhs.to_owned(); self.b += rhs.to_owned(); self.c += rhs.to_owned(); });
    (Triangle::new(self.a - rhs.to_owned(), self.b - rhs.to_owned(), self.c - rhs.to_owned());
        { self.a -= rhs.to_owned(); self.b -= rhs.to_owned(); self.c -= rhs.to_owned(); }));

impl_mul_div!([R: Float] self: Triangle<R>, rhs: R;
    (Triangle::new(self.a * rhs.to_owned(), self.b * rhs.to_owned(), self.c * rhs.to_owned());
        { self.a *= rhs.to_owned(); self.b *= rhs.to_owned(); self.c *= rhs.to_owned(); });
    (Triangle::new(self.a / rhs.to_owned(), self.b / rhs.to_owned(), self.c / rhs.to_owned());
        { self.a /= rhs.to_owned(); self.b /= rhs.to_owned(); self.c /= rhs.to_owned(); }));
