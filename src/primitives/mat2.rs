//! 2x2 matrix type for plane-linear algebra.

use super::Vec2;
use num_traits::Float;
use std::ops::Mul;

/// A 2x2 matrix in row-major order:
///
/// ```text
/// | a  b |
/// | c  d |
/// ```
///
/// Used for frame rotations where no translation is involved; see
/// [`Affine2`](super::Affine2) for the full affine form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2<F> {
    /// Matrix element [0,0]
    pub a: F,
    /// Matrix element [0,1]
    pub b: F,
    /// Matrix element [1,0]
    pub c: F,
    /// Matrix element [1,1]
    pub d: F,
}

impl<F: Float> Mat2<F> {
    /// Creates a new matrix from row-major components.
    #[inline]
    pub fn new(a: F, b: F, c: F, d: F) -> Self {
        Self { a, b, c, d }
    }

    /// Creates the identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self {
            a: F::one(),
            b: F::zero(),
            c: F::zero(),
            d: F::one(),
        }
    }

    /// Creates a rotation matrix.
    ///
    /// Angle is in radians, positive is counter-clockwise.
    #[inline]
    pub fn rotation(angle: F) -> Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();
        Self {
            a: cos_a,
            b: -sin_a,
            c: sin_a,
            d: cos_a,
        }
    }

    /// Applies the matrix to a vector.
    #[inline]
    pub fn mul_vec(self, v: Vec2<F>) -> Vec2<F> {
        Vec2::new(self.a * v.x + self.b * v.y, self.c * v.x + self.d * v.y)
    }

    /// Returns the transpose.
    ///
    /// For a rotation matrix this is also the inverse.
    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            a: self.a,
            b: self.c,
            c: self.b,
            d: self.d,
        }
    }

    /// Returns the determinant.
    #[inline]
    pub fn determinant(self) -> F {
        self.a * self.d - self.b * self.c
    }
}

impl<F: Float> Mul for Mat2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
        }
    }
}

impl<F: Float> Default for Mat2<F> {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity() {
        let m: Mat2<f64> = Mat2::identity();
        let v = Vec2::new(3.0, 4.0);
        let r = m.mul_vec(v);
        assert_eq!(r, v);
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let m: Mat2<f64> = Mat2::rotation(FRAC_PI_2);
        let r = m.mul_vec(Vec2::new(1.0, 0.0));
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_rotation_inverse_is_transpose() {
        let m: Mat2<f64> = Mat2::rotation(0.7);
        let v = Vec2::new(2.0, -3.0);
        let back = m.transpose().mul_vec(m.mul_vec(v));
        assert_relative_eq!(back.x, v.x, epsilon = 1e-10);
        assert_relative_eq!(back.y, v.y, epsilon = 1e-10);
    }

    #[test]
    fn test_determinant() {
        let m: Mat2<f64> = Mat2::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.determinant(), -2.0);

        let r: Mat2<f64> = Mat2::rotation(1.3);
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_matrix_product() {
        let a: Mat2<f64> = Mat2::rotation(0.4);
        let b = Mat2::rotation(0.6);
        let combined = a * b;
        let direct = Mat2::rotation(1.0);
        assert_relative_eq!(combined.a, direct.a, epsilon = 1e-10);
        assert_relative_eq!(combined.b, direct.b, epsilon = 1e-10);
        assert_relative_eq!(combined.c, direct.c, epsilon = 1e-10);
        assert_relative_eq!(combined.d, direct.d, epsilon = 1e-10);
    }
}
