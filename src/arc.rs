//! Elliptical arc parameterization and cubic approximation.
//!
//! Path text describes arcs by their endpoints, radii, tilt, and two
//! selection flags. Drawing needs the center form: an ellipse, a start
//! angle, and a signed sweep. [`endpoint_to_center`] performs that
//! conversion; [`cubic_approximation`] then replaces an angular span
//! with a single cubic Bézier segment.

use crate::error::ArcError;
use crate::primitives::{Ellipse2, Mat2, Point2, Vec2};
use num_traits::Float;

/// An elliptical arc described by its endpoints.
///
/// This is the wire form of the grammar's arc command: two endpoints,
/// the ellipse radii and tilt, and the two flags that pick one of the
/// four candidate arcs through those endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointArc<F> {
    /// Arc start point.
    pub from: Point2<F>,
    /// Arc end point.
    pub to: Point2<F>,
    /// Radius along the ellipse's x axis (before tilt).
    pub rx: F,
    /// Radius along the ellipse's y axis (before tilt).
    pub ry: F,
    /// Tilt of the ellipse's x axis from the coordinate x axis, in radians.
    pub x_axis_rotation: F,
    /// Selects the candidate arc spanning more than half a turn.
    pub large_arc: bool,
    /// Selects the positive-angle sweep direction.
    pub sweep: bool,
}

/// An elliptical arc described by its ellipse and angular span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc<F> {
    /// The ellipse the arc lies on.
    pub ellipse: Ellipse2<F>,
    /// Angle of the arc's start point, counter-clockwise from the major axis.
    pub start_angle: F,
    /// Signed angular extent; negative sweeps clockwise.
    pub sweep_angle: F,
}

/// One cubic Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment<F> {
    /// Start point.
    pub from: Point2<F>,
    /// First control point.
    pub c1: Point2<F>,
    /// Second control point.
    pub c2: Point2<F>,
    /// End point.
    pub to: Point2<F>,
}

impl<F: Float> CubicSegment<F> {
    /// Creates a segment from its four points.
    #[inline]
    pub fn new(from: Point2<F>, c1: Point2<F>, c2: Point2<F>, to: Point2<F>) -> Self {
        Self { from, c1, c2, to }
    }

    /// Evaluates the segment at parameter `t` (0 to 1).
    pub fn eval(&self, t: F) -> Point2<F> {
        let one = F::one();
        let three = F::from(3.0).unwrap();
        let mt = one - t;
        let mt2 = mt * mt;
        let t2 = t * t;

        let b0 = mt2 * mt;
        let b1 = three * mt2 * t;
        let b2 = three * mt * t2;
        let b3 = t2 * t;

        Point2::new(
            b0 * self.from.x + b1 * self.c1.x + b2 * self.c2.x + b3 * self.to.x,
            b0 * self.from.y + b1 * self.c1.y + b2 * self.c2.y + b3 * self.to.y,
        )
    }
}

/// Signed angle from `u` to `v`: `sign(u × v) · acos(u·v / (|u|·|v|))`.
///
/// The cosine is clamped into [-1, 1] so parallel vectors with rounding
/// error do not produce NaN.
fn signed_angle<F: Float>(u: Vec2<F>, v: Vec2<F>) -> F {
    let one = F::one();
    let cos = (u.dot(v) / (u.magnitude() * v.magnitude()))
        .max(-one)
        .min(one);
    let angle = cos.acos();
    if u.cross(v) < F::zero() {
        -angle
    } else {
        angle
    }
}

/// Converts an endpoint-form arc to center form.
///
/// Both endpoints are rotated into the ellipse's untilted frame, the
/// center is solved there in closed form (the sign of the square-root
/// term is positive exactly when the flags differ), and the start and
/// sweep angles are measured between untilted-frame vectors. The sweep
/// is then folded by one full turn so its sign agrees with the sweep
/// flag.
///
/// Inputs that would break the closed form are rejected:
///
/// - a zero radius ([`ArcError::ZeroRadius`])
/// - coincident endpoints ([`ArcError::CoincidentEndpoints`])
/// - radii too small for any ellipse to reach both endpoints
///   ([`ArcError::RadiiTooSmall`])
///
/// # Example
///
/// ```
/// use pathwise::arc::{endpoint_to_center, EndpointArc};
/// use pathwise::primitives::Point2;
///
/// // Half of a unit circle.
/// let arc = EndpointArc {
///     from: Point2::new(-1.0, 0.0),
///     to: Point2::new(1.0, 0.0),
///     rx: 1.0,
///     ry: 1.0,
///     x_axis_rotation: 0.0,
///     large_arc: false,
///     sweep: true,
/// };
///
/// let center = endpoint_to_center(&arc).unwrap();
/// assert!(center.ellipse.center.distance(Point2::origin()) < 1e-9);
/// ```
pub fn endpoint_to_center<F: Float>(arc: &EndpointArc<F>) -> Result<CenterArc<F>, ArcError> {
    let two = F::one() + F::one();
    let tau = F::from(std::f64::consts::TAU).unwrap();

    let a = arc.rx.abs();
    let b = arc.ry.abs();
    if a < F::epsilon() || b < F::epsilon() {
        return Err(ArcError::ZeroRadius);
    }
    if arc.from.distance_squared(arc.to) < F::epsilon() {
        return Err(ArcError::CoincidentEndpoints);
    }

    // Endpoints in the ellipse's untilted frame.
    let untilt = Mat2::rotation(-arc.x_axis_rotation);
    let p1 = untilt.mul_vec(arc.from.to_vec());
    let p2 = untilt.mul_vec(arc.to.to_vec());

    // Half-chord and midpoint of the rotated endpoints.
    let xd = (p1.x - p2.x) / two;
    let yd = (p1.y - p2.y) / two;
    let mid = (p1 + p2) / two;

    // Closed-form center in the untilted frame.
    let a2 = a * a;
    let b2 = b * b;
    let numerator = a2 * b2 - a2 * yd * yd - b2 * xd * xd;
    let denominator = a2 * yd * yd + b2 * xd * xd;
    let radicand = numerator / denominator;
    if radicand < F::zero() {
        return Err(ArcError::RadiiTooSmall);
    }

    let sign = if arc.large_arc != arc.sweep {
        F::one()
    } else {
        -F::one()
    };
    let k = sign * radicand.sqrt();
    let local_center = Vec2::new(mid.x + k * a * yd / b, mid.y - k * b * xd / a);

    let center = Point2::from(Mat2::rotation(arc.x_axis_rotation).mul_vec(local_center));

    // Angles measured against untilted-frame vectors from the center.
    let u = p1 - local_center;
    let v = p2 - local_center;
    let start_angle = signed_angle(Vec2::unit_x(), u);
    let mut sweep_angle = signed_angle(u, v);

    // Fold the sweep by a full turn so its sign matches the flag.
    if !arc.sweep && sweep_angle > F::zero() {
        sweep_angle = sweep_angle - tau;
    } else if arc.sweep && sweep_angle < F::zero() {
        sweep_angle = sweep_angle + tau;
    }

    Ok(CenterArc {
        ellipse: Ellipse2::new(center, a, b, arc.x_axis_rotation),
        start_angle,
        sweep_angle,
    })
}

/// Approximates the span from `start` to `end` on `ellipse` with one
/// cubic Bézier segment.
///
/// Endpoints are the ellipse points at the two angles; each control
/// point offsets its endpoint along the ellipse tangent there, scaled by
/// `α = sin(Δ)·(√(4 + 3·tan²(Δ/2)) − 1) / 3`.
///
/// A single segment is accurate up to about a quarter turn and degrades
/// beyond that; larger spans are not subdivided here.
pub fn cubic_approximation<F: Float>(ellipse: &Ellipse2<F>, start: F, end: F) -> CubicSegment<F> {
    let three = F::from(3.0).unwrap();
    let four = F::from(4.0).unwrap();
    let two = F::one() + F::one();

    let delta = end - start;
    let half_tan = (delta / two).tan();
    let alpha = delta.sin() * ((four + three * half_tan * half_tan).sqrt() - F::one()) / three;

    let from = ellipse.point_at(start);
    let to = ellipse.point_at(end);
    let c1 = from + ellipse.tangent_at(start) * alpha;
    let c2 = to - ellipse.tangent_at(end) * alpha;

    CubicSegment::new(from, c1, c2, to)
}
