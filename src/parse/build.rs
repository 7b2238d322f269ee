//! Building structured commands from tokens.

use num_traits::Float;
use std::str::FromStr;

use super::scan::Numbers;
use super::tokenize::Token;
use crate::command::PathCommand;
use crate::error::Diagnostic;
use crate::primitives::Point2;

/// Arc flags are true only when the number is exactly 1; 0 and every
/// other value read as false.
#[inline]
fn flag<F: Float>(value: F) -> bool {
    value == F::one()
}

fn point<F: Float>(x: F, y: F) -> Point2<F> {
    Point2::new(x, y)
}

/// Converts one token into zero or more commands.
///
/// Arity handling is deliberately irregular, matching the grammar:
/// - `M`/`m`/`L`/`l` pair numbers two at a time, one command per complete
///   pair; a dangling number is dropped.
/// - `H`/`h`/`V`/`v` take one number per command.
/// - Absolute `C`/`S`/`Q`/`T` require exactly one argument group; any
///   other count drops the token whole.
/// - Relative `c`/`s`/`q`/`t` and both arc forms repeat implicitly: the
///   run is chunked into fixed-size groups, and a count that is not an
///   exact multiple drops the token whole.
/// - `Z`/`z` always yield a single close command.
pub(crate) fn build<F: Float + FromStr>(
    token: Token<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<PathCommand<F>> {
    let mut scanner: Numbers<'_, F> = Numbers::new(token.run);
    let numbers: Vec<F> = scanner.by_ref().collect();

    // Anything the scanner could not consume is a tokenization gap.
    if let Some(c) = scanner
        .rest()
        .chars()
        .find(|&c| c != ',' && !c.is_whitespace())
    {
        log::warn!(
            "skipping unrecognized text starting at '{}' after command '{}'",
            c,
            token.letter
        );
        diagnostics.push(Diagnostic::UnknownCommand(c));
    }

    match token.letter {
        'M' => paired(token.letter, &numbers, diagnostics, |p| {
            PathCommand::MoveTo(p)
        }),
        'm' => paired(token.letter, &numbers, diagnostics, |p| {
            PathCommand::MoveToRel(p)
        }),
        'L' => paired(token.letter, &numbers, diagnostics, |p| {
            PathCommand::LineTo(p)
        }),
        'l' => paired(token.letter, &numbers, diagnostics, |p| {
            PathCommand::LineToRel(p)
        }),
        'H' => numbers.iter().map(|&x| PathCommand::HorizontalTo(x)).collect(),
        'h' => numbers
            .iter()
            .map(|&x| PathCommand::HorizontalToRel(x))
            .collect(),
        'V' => numbers.iter().map(|&y| PathCommand::VerticalTo(y)).collect(),
        'v' => numbers
            .iter()
            .map(|&y| PathCommand::VerticalToRel(y))
            .collect(),
        'C' => exact(token.letter, &numbers, 6, diagnostics, |g| {
            PathCommand::CubicTo(point(g[0], g[1]), point(g[2], g[3]), point(g[4], g[5]))
        }),
        'S' => exact(token.letter, &numbers, 4, diagnostics, |g| {
            PathCommand::SmoothCubicTo(point(g[0], g[1]), point(g[2], g[3]))
        }),
        'Q' => exact(token.letter, &numbers, 4, diagnostics, |g| {
            PathCommand::QuadraticTo(point(g[0], g[1]), point(g[2], g[3]))
        }),
        'T' => exact(token.letter, &numbers, 2, diagnostics, |g| {
            PathCommand::SmoothQuadraticTo(point(g[0], g[1]))
        }),
        'c' => chunked(token.letter, &numbers, 6, diagnostics, |g| {
            PathCommand::CubicToRel(point(g[0], g[1]), point(g[2], g[3]), point(g[4], g[5]))
        }),
        's' => chunked(token.letter, &numbers, 4, diagnostics, |g| {
            PathCommand::SmoothCubicToRel(point(g[0], g[1]), point(g[2], g[3]))
        }),
        'q' => chunked(token.letter, &numbers, 4, diagnostics, |g| {
            PathCommand::QuadraticToRel(point(g[0], g[1]), point(g[2], g[3]))
        }),
        't' => chunked(token.letter, &numbers, 2, diagnostics, |g| {
            PathCommand::SmoothQuadraticToRel(point(g[0], g[1]))
        }),
        'A' => chunked(token.letter, &numbers, 7, diagnostics, |g| {
            PathCommand::ArcTo {
                rx: g[0],
                ry: g[1],
                x_axis_rotation: g[2],
                large_arc: flag(g[3]),
                sweep: flag(g[4]),
                end: point(g[5], g[6]),
            }
        }),
        'a' => chunked(token.letter, &numbers, 7, diagnostics, |g| {
            PathCommand::ArcToRel {
                rx: g[0],
                ry: g[1],
                x_axis_rotation: g[2],
                large_arc: flag(g[3]),
                sweep: flag(g[4]),
                end: point(g[5], g[6]),
            }
        }),
        'Z' | 'z' => vec![PathCommand::ClosePath],
        _ => Vec::new(),
    }
}

/// Numbers paired two at a time; a dangling number produces no command
/// but is reported.
fn paired<F: Float>(
    letter: char,
    numbers: &[F],
    diagnostics: &mut Vec<Diagnostic>,
    make: impl Fn(Point2<F>) -> PathCommand<F>,
) -> Vec<PathCommand<F>> {
    if numbers.len() % 2 != 0 {
        log::warn!("command '{}' has a dangling coordinate, dropping it", letter);
        diagnostics.push(Diagnostic::ArityMismatch {
            command: letter,
            expected: 2,
            found: numbers.len(),
        });
    }
    numbers
        .chunks_exact(2)
        .map(|pair| make(point(pair[0], pair[1])))
        .collect()
}

/// Requires exactly `arity` numbers; anything else drops the token.
fn exact<F: Float>(
    letter: char,
    numbers: &[F],
    arity: usize,
    diagnostics: &mut Vec<Diagnostic>,
    make: impl Fn(&[F]) -> PathCommand<F>,
) -> Vec<PathCommand<F>> {
    if numbers.len() != arity {
        log::warn!(
            "command '{}' takes {} numbers, found {}; dropping token",
            letter,
            arity,
            numbers.len()
        );
        diagnostics.push(Diagnostic::ArityMismatch {
            command: letter,
            expected: arity,
            found: numbers.len(),
        });
        return Vec::new();
    }
    vec![make(numbers)]
}

/// Chunks the run into `arity`-sized groups, one command per group; a
/// count that is not an exact multiple drops the token whole.
fn chunked<F: Float>(
    letter: char,
    numbers: &[F],
    arity: usize,
    diagnostics: &mut Vec<Diagnostic>,
    make: impl Fn(&[F]) -> PathCommand<F>,
) -> Vec<PathCommand<F>> {
    if numbers.is_empty() {
        return Vec::new();
    }
    if numbers.len() % arity != 0 {
        log::warn!(
            "command '{}' takes groups of {} numbers, found {}; dropping token",
            letter,
            arity,
            numbers.len()
        );
        diagnostics.push(Diagnostic::ArityMismatch {
            command: letter,
            expected: arity,
            found: numbers.len(),
        });
        return Vec::new();
    }
    numbers.chunks_exact(arity).map(make).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(letter: char, run: &str) -> Vec<PathCommand<f64>> {
        let mut diagnostics = Vec::new();
        build(Token { letter, run }, &mut diagnostics)
    }

    fn commands_with_diagnostics(
        letter: char,
        run: &str,
    ) -> (Vec<PathCommand<f64>>, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let cmds = build(Token { letter, run }, &mut diagnostics);
        (cmds, diagnostics)
    }

    #[test]
    fn test_move_single_pair() {
        assert_eq!(
            commands('M', "10 10"),
            vec![PathCommand::MoveTo(Point2::new(10.0, 10.0))]
        );
    }

    #[test]
    fn test_move_emits_one_per_pair() {
        // Extra pairs stay MoveTo; they do not become implicit lines.
        assert_eq!(
            commands('M', "0 0 5 5"),
            vec![
                PathCommand::MoveTo(Point2::new(0.0, 0.0)),
                PathCommand::MoveTo(Point2::new(5.0, 5.0)),
            ]
        );
    }

    #[test]
    fn test_line_pairing() {
        assert_eq!(
            commands('l', "1 1 2 2 3 3"),
            vec![
                PathCommand::LineToRel(Point2::new(1.0, 1.0)),
                PathCommand::LineToRel(Point2::new(2.0, 2.0)),
                PathCommand::LineToRel(Point2::new(3.0, 3.0)),
            ]
        );
    }

    #[test]
    fn test_dangling_coordinate_dropped_and_reported() {
        let (cmds, diagnostics) = commands_with_diagnostics('L', "1 2 3");
        assert_eq!(cmds, vec![PathCommand::LineTo(Point2::new(1.0, 2.0))]);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::ArityMismatch {
                command: 'L',
                expected: 2,
                found: 3,
            }]
        );
    }

    #[test]
    fn test_horizontal_vertical_one_per_number() {
        assert_eq!(
            commands('h', "1 2 3"),
            vec![
                PathCommand::HorizontalToRel(1.0),
                PathCommand::HorizontalToRel(2.0),
                PathCommand::HorizontalToRel(3.0),
            ]
        );
        assert_eq!(commands('V', "7"), vec![PathCommand::VerticalTo(7.0)]);
    }

    #[test]
    fn test_absolute_cubic_requires_exact_arity() {
        assert_eq!(
            commands('C', "1 2 3 4 5 6"),
            vec![PathCommand::CubicTo(
                Point2::new(1.0, 2.0),
                Point2::new(3.0, 4.0),
                Point2::new(5.0, 6.0),
            )]
        );

        // Twelve numbers would be two curves, but absolute C does not repeat.
        let (cmds, diagnostics) =
            commands_with_diagnostics('C', "1 2 3 4 5 6 7 8 9 10 11 12");
        assert!(cmds.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_relative_cubic_chunks() {
        let cmds = commands('c', "0 0 0 0 0 0 0 0 0 0 0 0");
        assert_eq!(cmds.len(), 2);
        assert!(cmds
            .iter()
            .all(|c| matches!(c, PathCommand::CubicToRel(..))));
    }

    #[test]
    fn test_partial_chunk_fails_closed() {
        let (cmds, diagnostics) = commands_with_diagnostics('c', "1 2 3");
        assert!(cmds.is_empty());
        assert_eq!(
            diagnostics,
            vec![Diagnostic::ArityMismatch {
                command: 'c',
                expected: 6,
                found: 3,
            }]
        );
    }

    #[test]
    fn test_arc_chunking_and_flags() {
        let cmds = commands('a', "5 5 0 0 1 10 0 5 5 0 1 0 10 0");
        assert_eq!(cmds.len(), 2);
        match cmds[0] {
            PathCommand::ArcToRel {
                rx,
                ry,
                large_arc,
                sweep,
                end,
                ..
            } => {
                assert_eq!(rx, 5.0);
                assert_eq!(ry, 5.0);
                assert!(!large_arc);
                assert!(sweep);
                assert_eq!(end, Point2::new(10.0, 0.0));
            }
            ref other => panic!("expected ArcToRel, got {:?}", other),
        }
        match cmds[1] {
            PathCommand::ArcToRel {
                large_arc, sweep, ..
            } => {
                assert!(large_arc);
                assert!(!sweep);
            }
            ref other => panic!("expected ArcToRel, got {:?}", other),
        }
    }

    #[test]
    fn test_flag_is_true_only_on_exactly_one() {
        // Flag values other than 1 (here 2 and 0.5) read as false.
        let cmds = commands('A', "5 5 0 2 0.5 10 0");
        match cmds[0] {
            PathCommand::ArcTo {
                large_arc, sweep, ..
            } => {
                assert!(!large_arc);
                assert!(!sweep);
            }
            ref other => panic!("expected ArcTo, got {:?}", other),
        }
    }

    #[test]
    fn test_close_ignores_everything() {
        assert_eq!(commands('Z', ""), vec![PathCommand::ClosePath]);
        assert_eq!(commands('z', ""), vec![PathCommand::ClosePath]);
    }

    #[test]
    fn test_trailing_garbage_reported() {
        let (cmds, diagnostics) = commands_with_diagnostics('L', "1 2 # 9");
        assert_eq!(cmds, vec![PathCommand::LineTo(Point2::new(1.0, 2.0))]);
        assert_eq!(diagnostics, vec![Diagnostic::UnknownCommand('#')]);
    }

    #[test]
    fn test_empty_run_yields_nothing() {
        let (cmds, diagnostics) = commands_with_diagnostics('L', "");
        assert!(cmds.is_empty());
        assert!(diagnostics.is_empty());
    }
}
