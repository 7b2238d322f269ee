//! Structured path commands.

use crate::primitives::Point2;

/// One command of the path mini-language, with its payload resolved to
/// typed fields.
///
/// Each grammar letter maps to exactly one variant; uppercase letters
/// produce the absolute form and lowercase the relative form. Relative
/// payloads hold deltas from the current point but are stored as
/// [`Point2`] values, matching how they appear in the source text; the
/// interpreter resolves them against its threaded state.
///
/// The builder only ever emits fully-populated variants: a numeric run
/// that cannot fill a variant's payload is dropped whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand<F> {
    /// `M` - start a new subpath at an absolute position.
    MoveTo(Point2<F>),
    /// `m` - start a new subpath at an offset from the current point.
    MoveToRel(Point2<F>),
    /// `L` - straight line to an absolute position.
    LineTo(Point2<F>),
    /// `l` - straight line by an offset.
    LineToRel(Point2<F>),
    /// `H` - horizontal line to an absolute x, keeping the current y.
    HorizontalTo(F),
    /// `h` - horizontal line by an x offset.
    HorizontalToRel(F),
    /// `V` - vertical line to an absolute y, keeping the current x.
    VerticalTo(F),
    /// `v` - vertical line by a y offset.
    VerticalToRel(F),
    /// `C` - cubic Bézier curve (control1, control2, end).
    CubicTo(Point2<F>, Point2<F>, Point2<F>),
    /// `c` - relative cubic Bézier curve.
    CubicToRel(Point2<F>, Point2<F>, Point2<F>),
    /// `S` - smooth cubic Bézier (control2, end); control1 is the previous
    /// cubic control point reflected through the current point.
    SmoothCubicTo(Point2<F>, Point2<F>),
    /// `s` - relative smooth cubic Bézier.
    SmoothCubicToRel(Point2<F>, Point2<F>),
    /// `Q` - quadratic Bézier curve (control, end).
    QuadraticTo(Point2<F>, Point2<F>),
    /// `q` - relative quadratic Bézier curve.
    QuadraticToRel(Point2<F>, Point2<F>),
    /// `T` - smooth quadratic Bézier (end only); the control point is the
    /// previous quadratic control point reflected through the current point.
    SmoothQuadraticTo(Point2<F>),
    /// `t` - relative smooth quadratic Bézier.
    SmoothQuadraticToRel(Point2<F>),
    /// `A` - elliptical arc to an absolute endpoint.
    ArcTo {
        /// Radius along the ellipse's x axis (before tilt).
        rx: F,
        /// Radius along the ellipse's y axis (before tilt).
        ry: F,
        /// Tilt of the ellipse's x axis, in degrees as written in the path.
        x_axis_rotation: F,
        /// Selects the longer of the two candidate arcs.
        large_arc: bool,
        /// Selects the positive-angle sweep direction.
        sweep: bool,
        /// Arc endpoint.
        end: Point2<F>,
    },
    /// `a` - elliptical arc to a relative endpoint.
    ArcToRel {
        /// Radius along the ellipse's x axis (before tilt).
        rx: F,
        /// Radius along the ellipse's y axis (before tilt).
        ry: F,
        /// Tilt of the ellipse's x axis, in degrees as written in the path.
        x_axis_rotation: F,
        /// Selects the longer of the two candidate arcs.
        large_arc: bool,
        /// Selects the positive-angle sweep direction.
        sweep: bool,
        /// Arc endpoint as an offset from the current point.
        end: Point2<F>,
    },
    /// `Z`/`z` - close the current subpath.
    ClosePath,
}

impl<F> PathCommand<F> {
    /// Returns true for the relative (lowercase) command forms.
    pub fn is_relative(&self) -> bool {
        matches!(
            self,
            PathCommand::MoveToRel(_)
                | PathCommand::LineToRel(_)
                | PathCommand::HorizontalToRel(_)
                | PathCommand::VerticalToRel(_)
                | PathCommand::CubicToRel(..)
                | PathCommand::SmoothCubicToRel(..)
                | PathCommand::QuadraticToRel(..)
                | PathCommand::SmoothQuadraticToRel(_)
                | PathCommand::ArcToRel { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_relative() {
        let rel: PathCommand<f64> = PathCommand::LineToRel(Point2::new(1.0, 1.0));
        let abs: PathCommand<f64> = PathCommand::LineTo(Point2::new(1.0, 1.0));
        assert!(rel.is_relative());
        assert!(!abs.is_relative());
        assert!(!PathCommand::<f64>::ClosePath.is_relative());
    }
}
