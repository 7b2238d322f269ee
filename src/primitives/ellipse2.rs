//! 2D ellipse type in center form.

use super::{Mat2, Point2, Vec2};
use num_traits::Float;

/// A 2D ellipse defined by center, semi-axes, and rotation.
///
/// The ellipse is parameterized by:
/// - `center`: the center point
/// - `semi_major`: half the length of the major axis (a)
/// - `semi_minor`: half the length of the minor axis (b)
/// - `rotation`: angle of the major axis from the x-axis (radians)
///
/// Both semi-axes must be non-negative; an ellipse with a zero axis is
/// degenerate and callers are expected to reject it before doing arc
/// geometry with it.
///
/// # Example
///
/// ```
/// use pathwise::primitives::{Ellipse2, Point2};
///
/// let ellipse: Ellipse2<f64> = Ellipse2::axis_aligned(Point2::origin(), 2.0, 1.0);
/// let p = ellipse.point_at(0.0);
/// assert_eq!(p.x, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse2<F> {
    /// Center point of the ellipse
    pub center: Point2<F>,
    /// Semi-major axis length (half of major axis)
    pub semi_major: F,
    /// Semi-minor axis length (half of minor axis)
    pub semi_minor: F,
    /// Rotation angle in radians (major axis direction from x-axis)
    pub rotation: F,
}

impl<F: Float> Ellipse2<F> {
    /// Creates a new ellipse with the given parameters.
    #[inline]
    pub fn new(center: Point2<F>, semi_major: F, semi_minor: F, rotation: F) -> Self {
        Self {
            center,
            semi_major,
            semi_minor,
            rotation,
        }
    }

    /// Creates an axis-aligned ellipse (no rotation).
    #[inline]
    pub fn axis_aligned(center: Point2<F>, semi_major: F, semi_minor: F) -> Self {
        Self {
            center,
            semi_major,
            semi_minor,
            rotation: F::zero(),
        }
    }

    /// Creates an ellipse from a circle.
    #[inline]
    pub fn from_circle(center: Point2<F>, radius: F) -> Self {
        Self {
            center,
            semi_major: radius,
            semi_minor: radius,
            rotation: F::zero(),
        }
    }

    /// Returns true if this ellipse is actually a circle (semi_major == semi_minor).
    #[inline]
    pub fn is_circle(&self) -> bool {
        (self.semi_major - self.semi_minor).abs() < F::epsilon()
    }

    /// Returns true if either axis has collapsed to zero.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.semi_major.abs() < F::epsilon() || self.semi_minor.abs() < F::epsilon()
    }

    /// Returns the point on the ellipse boundary at angle `t`.
    ///
    /// The angle is measured counter-clockwise from the major axis:
    /// - t = 0: point at (center + semi_major * major axis direction)
    /// - t = π/2: point at (center + semi_minor * minor axis direction)
    pub fn point_at(&self, t: F) -> Point2<F> {
        let local = Vec2::new(self.semi_major * t.cos(), self.semi_minor * t.sin());
        self.center + Mat2::rotation(self.rotation).mul_vec(local)
    }

    /// Returns the tangent (derivative) vector at angle `t`.
    ///
    /// The tangent points in the direction of increasing t. Its magnitude
    /// is the speed of the parameterization, which the arc approximation
    /// relies on, so it is not normalized.
    pub fn tangent_at(&self, t: F) -> Vec2<F> {
        let local = Vec2::new(-self.semi_major * t.sin(), self.semi_minor * t.cos());
        Mat2::rotation(self.rotation).mul_vec(local)
    }
}

impl<F: Float> Default for Ellipse2<F> {
    fn default() -> Self {
        Self::from_circle(Point2::origin(), F::one())
    }
}
