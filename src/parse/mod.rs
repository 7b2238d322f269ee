//! Path text parsing.
//!
//! Turns a path data string into structured [`PathCommand`] values in
//! three stages: a numeric scanner ([`Numbers`]), a command tokenizer,
//! and a per-command builder that applies each letter's arity rules.
//!
//! Parsing is total: malformed tokens contribute nothing and are
//! reported through the diagnostic side channel instead of failing the
//! whole parse.
//!
//! # Example
//!
//! ```
//! use pathwise::parse;
//! use pathwise::PathCommand;
//! use pathwise::primitives::Point2;
//!
//! let commands: Vec<PathCommand<f64>> = parse("M10 10");
//! assert_eq!(commands, vec![PathCommand::MoveTo(Point2::new(10.0, 10.0))]);
//! ```

mod build;
mod scan;
mod tokenize;

pub use scan::Numbers;

use crate::command::PathCommand;
use crate::error::Diagnostic;
use num_traits::Float;
use std::str::FromStr;

/// Parses a path data string into an ordered command list.
///
/// Never fails; malformed pieces of the input are silently dropped. Use
/// [`parse_with_diagnostics`] to learn what was dropped.
pub fn parse<F: Float + FromStr>(input: &str) -> Vec<PathCommand<F>> {
    parse_with_diagnostics(input).0
}

/// Parses a path data string, also collecting a diagnostic per dropped
/// or skipped piece of input.
///
/// The command list is identical to what [`parse`] returns.
pub fn parse_with_diagnostics<F: Float + FromStr>(
    input: &str,
) -> (Vec<PathCommand<F>>, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let mut commands = Vec::new();

    for token in tokenize::tokenize(input, &mut diagnostics) {
        commands.extend(build::build(token, &mut diagnostics));
    }

    (commands, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;

    #[test]
    fn test_single_move() {
        let cmds: Vec<PathCommand<f64>> = parse("M10 10");
        assert_eq!(cmds, vec![PathCommand::MoveTo(Point2::new(10.0, 10.0))]);
    }

    #[test]
    fn test_relative_lines() {
        let cmds: Vec<PathCommand<f64>> = parse("l 1 1 2 2 3 3");
        assert_eq!(
            cmds,
            vec![
                PathCommand::LineToRel(Point2::new(1.0, 1.0)),
                PathCommand::LineToRel(Point2::new(2.0, 2.0)),
                PathCommand::LineToRel(Point2::new(3.0, 3.0)),
            ]
        );
    }

    #[test]
    fn test_repeated_relative_cubics() {
        let cmds: Vec<PathCommand<f64>> = parse("c 0 0 0 0 0 0 0 0 0 0 0 0");
        assert_eq!(cmds.len(), 2);
        assert!(cmds
            .iter()
            .all(|c| matches!(c, PathCommand::CubicToRel(..))));
    }

    #[test]
    fn test_arity_mismatch_yields_nothing() {
        let (cmds, diagnostics) = parse_with_diagnostics::<f64>("c 1 2 3");
        assert!(cmds.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_rectangle() {
        let cmds: Vec<PathCommand<f64>> = parse("M0 0 L10 0 L10 10 L0 10 Z");
        assert_eq!(
            cmds,
            vec![
                PathCommand::MoveTo(Point2::new(0.0, 0.0)),
                PathCommand::LineTo(Point2::new(10.0, 0.0)),
                PathCommand::LineTo(Point2::new(10.0, 10.0)),
                PathCommand::LineTo(Point2::new(0.0, 10.0)),
                PathCommand::ClosePath,
            ]
        );
    }

    #[test]
    fn test_no_separator_style() {
        let cmds: Vec<PathCommand<f64>> = parse("M0,0L10,0L10,10z");
        assert_eq!(cmds.len(), 4);
        assert_eq!(cmds[3], PathCommand::ClosePath);
    }

    #[test]
    fn test_unknown_letter_skipped_parse_continues() {
        let (cmds, diagnostics) = parse_with_diagnostics::<f64>("M0 0 U 9 L5 5");
        assert_eq!(
            cmds,
            vec![
                PathCommand::MoveTo(Point2::new(0.0, 0.0)),
                PathCommand::LineTo(Point2::new(5.0, 5.0)),
            ]
        );
        assert_eq!(diagnostics, vec![Diagnostic::UnknownCommand('U')]);
    }

    #[test]
    fn test_parse_is_total_on_junk() {
        let (cmds, _) = parse_with_diagnostics::<f64>("!!not a path@@");
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_f32_support() {
        let cmds: Vec<PathCommand<f32>> = parse("M1.5 2.5 l 1 0");
        assert_eq!(cmds.len(), 2);
    }
}
