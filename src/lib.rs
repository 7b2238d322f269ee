//! pathwise - SVG path data interpretation
//!
//! Parses the path mini-language (the `d` attribute grammar: moves,
//! lines, cubic and quadratic Bézier curves, elliptical arcs, subpath
//! closure, in absolute and relative forms) and reduces it to a sequence
//! of straight-line and cubic-Bézier drawing operations on a pluggable
//! [`PathSink`].
//!
//! Parsing never fails: malformed tokens are dropped locally and
//! reported through a diagnostic side channel while the rest of the path
//! parses normally. Elliptical arcs are converted from their endpoint
//! form to center form and approximated with a single cubic per arc
//! command.
//!
//! # Example
//!
//! ```
//! use pathwise::{interpret, parse, BezierPath};
//!
//! let commands = parse::<f64>("M0 0 L10 0 A5 5 0 0 1 20 0 Z");
//! let mut path = BezierPath::new();
//! interpret(&commands, &mut path);
//! assert_eq!(path.ops().len(), 4); // move, line, one cubic, close
//! ```

pub mod arc;
pub mod command;
pub mod error;
pub mod interpret;
pub mod parse;
pub mod primitives;

pub use arc::{CenterArc, CubicSegment, EndpointArc};
pub use command::PathCommand;
pub use error::{ArcError, Diagnostic};
pub use interpret::{interpret, BezierPath, PathOp, PathSink, TransformSink};
pub use parse::{parse, parse_with_diagnostics};
pub use primitives::{Ellipse2, Point2, Vec2};
