//! Folding path commands into draw calls.
//!
//! The interpreter walks a command list once, threading the state the
//! grammar's relative forms, shorthands, and smooth reflections depend
//! on, and emits moves, lines, and cubic curves on a [`PathSink`].
//! Quadratic curves are degree-elevated to their exact cubic equivalent
//! so the sink vocabulary stays minimal; elliptical arcs go through the
//! center conversion and come out as one cubic each.

use crate::arc::{cubic_approximation, endpoint_to_center, EndpointArc};
use crate::command::PathCommand;
use crate::error::Diagnostic;
use crate::primitives::{Affine2, Point2};
use num_traits::Float;

/// Receiver for interpreted path geometry.
///
/// All coordinates arriving here are absolute. `current_point` is `None`
/// until the first `move_to`.
pub trait PathSink<F> {
    /// Starts a new subpath at `p`.
    fn move_to(&mut self, p: Point2<F>);
    /// Draws a straight line to `p`.
    fn line_to(&mut self, p: Point2<F>);
    /// Draws a cubic Bézier to `end` with control points `c1` and `c2`.
    fn curve_to(&mut self, c1: Point2<F>, c2: Point2<F>, end: Point2<F>);
    /// Closes the current subpath.
    fn close_subpath(&mut self);
    /// The sink's notion of the pen position.
    fn current_point(&self) -> Option<Point2<F>>;
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp<F> {
    /// Start of a subpath.
    MoveTo(Point2<F>),
    /// Straight line segment.
    LineTo(Point2<F>),
    /// Cubic Bézier segment (control1, control2, end).
    CurveTo(Point2<F>, Point2<F>, Point2<F>),
    /// Subpath closure.
    Close,
}

/// A sink that records draw calls as [`PathOp`] values.
///
/// This is the crate's concrete output form; renderers replay `ops()`
/// onto whatever drawing surface they own.
///
/// # Example
///
/// ```
/// use pathwise::interpret::{interpret, BezierPath, PathOp};
/// use pathwise::parse;
///
/// let commands = parse::<f64>("M0 0 L10 0");
/// let mut path = BezierPath::new();
/// interpret(&commands, &mut path);
/// assert_eq!(path.ops().len(), 2);
/// assert!(matches!(path.ops()[1], PathOp::LineTo(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BezierPath<F> {
    ops: Vec<PathOp<F>>,
    current: Option<Point2<F>>,
    subpath_start: Option<Point2<F>>,
}

impl<F: Float> BezierPath<F> {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            current: None,
            subpath_start: None,
        }
    }

    /// The recorded draw calls, in emission order.
    pub fn ops(&self) -> &[PathOp<F>] {
        &self.ops
    }

    /// Returns true if nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl<F: Float> PathSink<F> for BezierPath<F> {
    fn move_to(&mut self, p: Point2<F>) {
        self.ops.push(PathOp::MoveTo(p));
        self.current = Some(p);
        self.subpath_start = Some(p);
    }

    fn line_to(&mut self, p: Point2<F>) {
        self.ops.push(PathOp::LineTo(p));
        self.current = Some(p);
    }

    fn curve_to(&mut self, c1: Point2<F>, c2: Point2<F>, end: Point2<F>) {
        self.ops.push(PathOp::CurveTo(c1, c2, end));
        self.current = Some(end);
    }

    fn close_subpath(&mut self) {
        self.ops.push(PathOp::Close);
        // The pen returns to where the subpath began.
        self.current = self.subpath_start;
    }

    fn current_point(&self) -> Option<Point2<F>> {
        self.current
    }
}

/// A sink adapter that applies an affine transform to every point before
/// forwarding to an inner sink.
///
/// Viewport fitting lives here, outside the interpreter: geometry is
/// produced in user units and mapped as a final step.
#[derive(Debug)]
pub struct TransformSink<'a, F, S> {
    transform: Affine2<F>,
    inner: &'a mut S,
}

impl<'a, F: Float, S: PathSink<F>> TransformSink<'a, F, S> {
    /// Wraps `inner`, mapping all geometry through `transform`.
    pub fn new(transform: Affine2<F>, inner: &'a mut S) -> Self {
        Self { transform, inner }
    }
}

impl<'a, F: Float, S: PathSink<F>> PathSink<F> for TransformSink<'a, F, S> {
    fn move_to(&mut self, p: Point2<F>) {
        self.inner.move_to(self.transform.apply_point(p));
    }

    fn line_to(&mut self, p: Point2<F>) {
        self.inner.line_to(self.transform.apply_point(p));
    }

    fn curve_to(&mut self, c1: Point2<F>, c2: Point2<F>, end: Point2<F>) {
        self.inner.curve_to(
            self.transform.apply_point(c1),
            self.transform.apply_point(c2),
            self.transform.apply_point(end),
        );
    }

    fn close_subpath(&mut self) {
        self.inner.close_subpath();
    }

    fn current_point(&self) -> Option<Point2<F>> {
        self.inner.current_point()
    }
}

/// The control point recorded by the previous command, tagged with its
/// curve family so smooth shorthands only reflect within their own kind.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LastControl<F> {
    None,
    Cubic(Point2<F>),
    Quadratic(Point2<F>),
}

/// Interpreter state threaded across the command fold.
#[derive(Debug, Clone, Copy)]
struct ParseState<F> {
    current: Point2<F>,
    subpath_start: Point2<F>,
    last_control: LastControl<F>,
}

impl<F: Float> ParseState<F> {
    fn new() -> Self {
        Self {
            current: Point2::origin(),
            subpath_start: Point2::origin(),
            last_control: LastControl::None,
        }
    }

    /// The implied first control point of a smooth cubic: the previous
    /// cubic control point reflected through the current point, or the
    /// current point itself after any other command.
    fn reflected_cubic_control(&self) -> Point2<F> {
        match self.last_control {
            LastControl::Cubic(c) => self.current + (self.current - c),
            _ => self.current,
        }
    }

    /// The implied control point of a smooth quadratic, by the same rule.
    fn reflected_quadratic_control(&self) -> Point2<F> {
        match self.last_control {
            LastControl::Quadratic(c) => self.current + (self.current - c),
            _ => self.current,
        }
    }
}

/// Interprets a command list onto a sink.
///
/// The fold resolves relative coordinates and shorthands against the
/// threaded state; each command leaves absolute geometry in the sink.
/// Returns the diagnostics for commands whose geometry had to be
/// repaired (currently only degenerate arcs, which fall back to a
/// straight line to their endpoint).
pub fn interpret<F: Float, S: PathSink<F>>(
    commands: &[PathCommand<F>],
    sink: &mut S,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut state = ParseState::new();

    for command in commands {
        step(*command, &mut state, sink, &mut diagnostics);
    }

    diagnostics
}

fn absolutize<F: Float>(current: Point2<F>, delta: Point2<F>) -> Point2<F> {
    current + delta.to_vec()
}

fn step<F: Float, S: PathSink<F>>(
    command: PathCommand<F>,
    state: &mut ParseState<F>,
    sink: &mut S,
    diagnostics: &mut Vec<Diagnostic>,
) {
    match command {
        PathCommand::MoveTo(p) => {
            sink.move_to(p);
            state.current = p;
            state.subpath_start = p;
            state.last_control = LastControl::None;
        }
        PathCommand::MoveToRel(d) => {
            let p = absolutize(state.current, d);
            sink.move_to(p);
            state.current = p;
            state.subpath_start = p;
            state.last_control = LastControl::None;
        }
        PathCommand::LineTo(p) => {
            sink.line_to(p);
            state.current = p;
            state.last_control = LastControl::None;
        }
        PathCommand::LineToRel(d) => {
            let p = absolutize(state.current, d);
            sink.line_to(p);
            state.current = p;
            state.last_control = LastControl::None;
        }
        PathCommand::HorizontalTo(x) => {
            let p = Point2::new(x, state.current.y);
            sink.line_to(p);
            state.current = p;
            state.last_control = LastControl::None;
        }
        PathCommand::HorizontalToRel(dx) => {
            let p = Point2::new(state.current.x + dx, state.current.y);
            sink.line_to(p);
            state.current = p;
            state.last_control = LastControl::None;
        }
        PathCommand::VerticalTo(y) => {
            let p = Point2::new(state.current.x, y);
            sink.line_to(p);
            state.current = p;
            state.last_control = LastControl::None;
        }
        PathCommand::VerticalToRel(dy) => {
            let p = Point2::new(state.current.x, state.current.y + dy);
            sink.line_to(p);
            state.current = p;
            state.last_control = LastControl::None;
        }
        PathCommand::CubicTo(c1, c2, end) => {
            cubic(state, sink, c1, c2, end);
        }
        PathCommand::CubicToRel(c1, c2, end) => {
            let c1 = absolutize(state.current, c1);
            let c2 = absolutize(state.current, c2);
            let end = absolutize(state.current, end);
            cubic(state, sink, c1, c2, end);
        }
        PathCommand::SmoothCubicTo(c2, end) => {
            let c1 = state.reflected_cubic_control();
            cubic(state, sink, c1, c2, end);
        }
        PathCommand::SmoothCubicToRel(c2, end) => {
            let c1 = state.reflected_cubic_control();
            let c2 = absolutize(state.current, c2);
            let end = absolutize(state.current, end);
            cubic(state, sink, c1, c2, end);
        }
        PathCommand::QuadraticTo(ctrl, end) => {
            quadratic(state, sink, ctrl, end);
        }
        PathCommand::QuadraticToRel(ctrl, end) => {
            let ctrl = absolutize(state.current, ctrl);
            let end = absolutize(state.current, end);
            quadratic(state, sink, ctrl, end);
        }
        PathCommand::SmoothQuadraticTo(end) => {
            let ctrl = state.reflected_quadratic_control();
            quadratic(state, sink, ctrl, end);
        }
        PathCommand::SmoothQuadraticToRel(end) => {
            let ctrl = state.reflected_quadratic_control();
            let end = absolutize(state.current, end);
            quadratic(state, sink, ctrl, end);
        }
        PathCommand::ArcTo {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            end,
        } => {
            arc(
                state,
                sink,
                diagnostics,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                end,
            );
        }
        PathCommand::ArcToRel {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            end,
        } => {
            let end = absolutize(state.current, end);
            arc(
                state,
                sink,
                diagnostics,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                end,
            );
        }
        PathCommand::ClosePath => {
            sink.close_subpath();
            // The pen returns to the subpath start; a following relative
            // command resolves from there.
            state.current = state.subpath_start;
            state.last_control = LastControl::None;
        }
    }
}

fn cubic<F: Float, S: PathSink<F>>(
    state: &mut ParseState<F>,
    sink: &mut S,
    c1: Point2<F>,
    c2: Point2<F>,
    end: Point2<F>,
) {
    sink.curve_to(c1, c2, end);
    state.current = end;
    state.last_control = LastControl::Cubic(c2);
}

/// Emits a quadratic curve as its exact cubic degree elevation:
/// `c1 = p0 + ⅔(q − p0)`, `c2 = p3 + ⅔(q − p3)`.
fn quadratic<F: Float, S: PathSink<F>>(
    state: &mut ParseState<F>,
    sink: &mut S,
    ctrl: Point2<F>,
    end: Point2<F>,
) {
    let two_thirds = F::from(2.0 / 3.0).unwrap();
    let c1 = state.current + (ctrl - state.current) * two_thirds;
    let c2 = end + (ctrl - end) * two_thirds;
    sink.curve_to(c1, c2, end);
    state.current = end;
    state.last_control = LastControl::Quadratic(ctrl);
}

#[allow(clippy::too_many_arguments)]
fn arc<F: Float, S: PathSink<F>>(
    state: &mut ParseState<F>,
    sink: &mut S,
    diagnostics: &mut Vec<Diagnostic>,
    rx: F,
    ry: F,
    x_axis_rotation: F,
    large_arc: bool,
    sweep: bool,
    end: Point2<F>,
) {
    let degrees_to_radians = F::from(std::f64::consts::PI / 180.0).unwrap();
    let endpoint_arc = EndpointArc {
        from: state.current,
        to: end,
        rx,
        ry,
        x_axis_rotation: x_axis_rotation * degrees_to_radians,
        large_arc,
        sweep,
    };

    match endpoint_to_center(&endpoint_arc) {
        Ok(center) => {
            let segment = cubic_approximation(
                &center.ellipse,
                center.start_angle,
                center.start_angle + center.sweep_angle,
            );
            // The commanded endpoint wins over the recomputed one so the
            // path stays exactly continuous for following commands.
            sink.curve_to(segment.c1, segment.c2, end);
        }
        Err(e) => {
            log::warn!("degenerate arc replaced by a line: {}", e);
            diagnostics.push(Diagnostic::DegenerateArc(e));
            sink.line_to(end);
        }
    }
    state.current = end;
    state.last_control = LastControl::None;
}
