//! Splitting path text into command tokens.

use crate::error::Diagnostic;

/// The command alphabet of the path mini-language.
pub(crate) const COMMAND_LETTERS: &[char] = &[
    'M', 'm', 'L', 'l', 'H', 'h', 'V', 'v', 'C', 'c', 'S', 's', 'Q', 'q', 'T', 't', 'A', 'a',
    'Z', 'z',
];

/// One command letter paired with its trailing numeric text.
///
/// The run extends to the next recognized command letter, so two adjacent
/// letters yield two tokens with the first run empty. The run may contain
/// trailing garbage; the builder's scanner stops at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Token<'a> {
    pub letter: char,
    pub run: &'a str,
}

fn is_command_letter(c: char) -> bool {
    COMMAND_LETTERS.contains(&c)
}

/// Splits `input` into `(letter, run)` tokens in source order.
///
/// Letters outside the command alphabet never open a token; ones that
/// appear before the first command letter are skipped here and reported.
/// (Inside a run they are the builder's to notice, since `e`/`E` may
/// legitimately belong to a number.)
pub(crate) fn tokenize<'a>(input: &'a str, diagnostics: &mut Vec<Diagnostic>) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut current: Option<(char, usize)> = None;

    for (pos, c) in input.char_indices() {
        if !is_command_letter(c) {
            if current.is_none() && c.is_alphabetic() {
                log::warn!("skipping unrecognized command letter '{}'", c);
                diagnostics.push(Diagnostic::UnknownCommand(c));
            }
            continue;
        }

        if let Some((letter, run_start)) = current.take() {
            tokens.push(Token {
                letter,
                run: &input[run_start..pos],
            });
        }
        current = Some((c, pos + c.len_utf8()));
    }

    if let Some((letter, run_start)) = current {
        tokens.push(Token {
            letter,
            run: &input[run_start..],
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<(char, &str)> {
        let mut diagnostics = Vec::new();
        tokenize(input, &mut diagnostics)
            .into_iter()
            .map(|t| (t.letter, t.run))
            .collect()
    }

    #[test]
    fn test_single_command() {
        assert_eq!(tokens("M10 10"), vec![('M', "10 10")]);
    }

    #[test]
    fn test_run_extends_to_next_letter() {
        assert_eq!(
            tokens("M0 0L10 0 10 10z"),
            vec![('M', "0 0"), ('L', "10 0 10 10"), ('z', "")]
        );
    }

    #[test]
    fn test_adjacent_letters_make_empty_run() {
        assert_eq!(
            tokens("M1 1ZM2 2"),
            vec![('M', "1 1"), ('Z', ""), ('M', "2 2")]
        );
    }

    #[test]
    fn test_unrecognized_letter_opens_no_token() {
        let mut diagnostics = Vec::new();
        let toks = tokenize("X 5 M1 1", &mut diagnostics);
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].letter, 'M');
        assert_eq!(diagnostics, vec![Diagnostic::UnknownCommand('X')]);
    }

    #[test]
    fn test_garbage_inside_run_stays_in_run() {
        // 'e' may be an exponent; the tokenizer leaves run contents alone.
        let mut diagnostics = Vec::new();
        let toks = tokenize("L1e2 5", &mut diagnostics);
        assert_eq!(toks[0].run, "1e2 5");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(tokens("").is_empty());
    }
}
