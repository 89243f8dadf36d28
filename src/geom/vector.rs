use nalgebra::{Point3, Vector3};

use super::Float;

/// Extra operations on 3-vectors.
pub trait VectorExt {
    /// Normalize `self`, or return the zero vector if `self` has no length.
    fn safe_normalize(&self) -> Self;
}

impl<R: Float> VectorExt for Vector3<R> {
    #[inline]
    fn safe_normalize(&self) -> Self {
        self.try_normalize(R::ZERO).unwrap_or_else(Vector3::zeros)
    }
}

/// Normal of a planar polygon by Newell's method; works for any winding-ordered polygon,
/// including degenerate and slightly non-planar ones.
///
/// Returns the zero vector for fewer than three points or zero area.
pub fn polygon_normal<R: Float>(points: &[Point3<R>]) -> Vector3<R> {
    let mut n = Vector3::zeros();
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % points.len()];
        n.x += (p.y - q.y) * (p.z + q.z);
        n.y += (p.z - q.z) * (p.x + q.x);
        n.z += (p.x - q.x) * (p.y + q.y);
    }
    n.safe_normalize()
}

#[cfg(test)]
mod test {
    use nalgebra::{point, vector, Vector3};

    use super::*;

    #[test]
    fn safe_normalize_zero() {
        assert_eq!(Vector3::<f32>::zeros().safe_normalize(), Vector3::zeros());
        assert_eq!(vector![0.0, 3.0, 0.0f64].safe_normalize(), vector![0.0, 1.0, 0.0]);
    }

    #[test]
    fn newell_square() {
        let square = [
            point![0.0, 0.0, 0.0f32],
            point![1.0, 0.0, 0.0],
            point![1.0, 1.0, 0.0],
            point![0.0, 1.0, 0.0],
        ];
        assert_eq!(polygon_normal(&square), vector![0.0, 0.0, 1.0]);
        assert_eq!(polygon_normal(&square[..2]), Vector3::zeros());
    }
}
