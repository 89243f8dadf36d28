use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use g3d_common::{impl_add_sub, impl_mul_div};
use nalgebra::{Matrix4, Point3, Vector3};

use super::{polygon_normal, Float, Line, Triangle, QUAD_SPLIT};

/// A quadrilateral with corners `a`, `b`, `c`, `d` in winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad<R: Float> {
    pub a: Point3<R>,
    pub b: Point3<R>,
    pub c: Point3<R>,
    pub d: Point3<R>,
}

impl<R: Float> Quad<R> {
    #[inline]
    pub fn new(a: Point3<R>, b: Point3<R>, c: Point3<R>, d: Point3<R>) -> Self {
        Self { a, b, c, d }
    }

    #[inline]
    pub fn vertices(&self) -> [Point3<R>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn edges(&self) -> [Line<R>; 4] {
        [
            Line::new(self.a, self.b),
            Line::new(self.b, self.c),
            Line::new(self.c, self.d),
            Line::new(self.d, self.a),
        ]
    }

    /// `(a, b, c)` and `(a, c, d)`, matching [QUAD_SPLIT].
    pub fn triangles(&self) -> [Triangle<R>; 2] {
        let v = self.vertices();
        let [i0, i1, i2, j0, j1, j2] = QUAD_SPLIT;
        [
            Triangle::new(v[i0], v[i1], v[i2]),
            Triangle::new(v[j0], v[j1], v[j2]),
        ]
    }

    /// Sum of the areas of [Quad::triangles].
    pub fn area(&self) -> R {
        let [t0, t1] = self.triangles();
        t0.area() + t1.area()
    }

    /// Unit normal by Newell's method, or zero for a degenerate quad.
    pub fn normal(&self) -> Vector3<R> {
        polygon_normal(&self.vertices())
    }

    pub fn center(&self) -> Point3<R> {
        let sum = self.a.coords + self.b.coords + self.c.coords + self.d.coords;
        Point3::from(sum * R::HALF * R::HALF)
    }

    /// The same quad with opposite winding, keeping `a` first.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self::new(self.a, self.d, self.c, self.b)
    }

    pub fn transform(&self, m: &Matrix4<R>) -> Self {
        Self::new(
            m.transform_point(&self.a),
            m.transform_point(&self.b),
            m.transform_point(&self.c),
            m.transform_point(&self.d),
        )
    }
}

impl_add_sub!([R: Float] self: Quad<R>, rhs: Vector3<R>;
    (Quad::new(self.a + rhs.to_owned(), self.b + rhs.to_owned(), self.c + rhs.to_owned(), self.d + rhs.to_owned());
        { self.a += rhs.to_owned(); self.b += rhs.to_owned(); self.c += rhs.to_owned(); self.d += rhs.to_owned(); });
    (Quad::new(self.a - rhs.to_owned(), self.b - rhs.to_owned(), self.c - rhs.to_owned(), self.d - rhs.to_owned());
        { self.a -= rhs.to_owned(); self.b -= rhs.to_owned(); self.c -= rhs.to_owned(); self.d -= rhs.to_owned(); }));

impl_mul_div!([R: Float] self: Quad<R>, rhs: R;
    (Quad::new(self.a * rhs.to_owned(), self.b * rhs.to_owned(), self.c * rhs.to_owned(), self.d * rhs.to_owned());
        { self.a *= rhs.to_owned(); self.b *= rhs.to_owned(); self.c *= rhs.to_owned(); self.d *= rhs.to_owned(); });
    (Quad::new(self.a / rhs.to_owned(), self.b / rhs.to_owned(), self.c / rhs.to_owned(), self.d / rhs.to_owned());
        { self.a /= rhs.to_owned(); self.b /= rhs.to_owned(); self.c /= rhs.to_owned(); self.d /= rhs.to_owned(); }));
