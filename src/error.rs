//! Error and diagnostic types for path interpretation.

use thiserror::Error;

/// A recoverable condition noticed while parsing or interpreting a path.
///
/// The parser and interpreter never fail outright: a malformed token
/// contributes no commands and processing continues with the next one.
/// Every swallowed condition is reported through this type so callers can
/// distinguish "clean parse" from "parsed with losses".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    /// A letter outside the command alphabet was skipped.
    #[error("unrecognized command letter '{0}'")]
    UnknownCommand(char),

    /// A command's numeric run did not match its arity and the token was
    /// dropped (or, for move/line pairing, a dangling number was dropped).
    #[error("command '{command}' takes groups of {expected} numbers, found {found}")]
    ArityMismatch {
        /// The command letter the run belonged to.
        command: char,
        /// The group size the command requires.
        expected: usize,
        /// How many numbers the run actually held.
        found: usize,
    },

    /// An arc command had geometry the converter cannot represent; a
    /// straight line to its endpoint was substituted.
    #[error("degenerate arc replaced by a line: {0}")]
    DegenerateArc(#[from] ArcError),
}

/// Reasons the endpoint-to-center arc conversion can reject its input.
///
/// These inputs would otherwise drive the closed-form center expression
/// into a division by zero or a negative square root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArcError {
    /// One of the ellipse radii is zero.
    #[error("ellipse radius is zero")]
    ZeroRadius,

    /// The arc's endpoints coincide, leaving the chord undefined.
    #[error("arc endpoints coincide")]
    CoincidentEndpoints,

    /// The radii are too small for any ellipse to pass through both
    /// endpoints.
    #[error("radii too small to span the endpoints")]
    RadiiTooSmall,
}
