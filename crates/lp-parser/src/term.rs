//! Term and expression parsing: turning `2*3*x/5` into a coefficient, and
//! `x1 + x2 - 3` into a list of signed [`Term`]s.

use lp_types::rational::parse_rational;
use lp_types::Rational;

use crate::error::ParseError;

/// One term of an expression: an optional variable name and its coefficient.
/// `var = None` means the term is a bare literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coeff: Rational,
    pub var: Option<String>,
}

/// Parse a left-to-right sequence of terms joined by `+`/`-` tokens, where a
/// term's own token may additionally carry a leading sign (`-x2`).
pub fn parse_expr(tokens: &[&str], line: usize) -> Result<Vec<Term>, ParseError> {
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression { line });
    }

    let mut terms = Vec::new();
    let mut running_sign = 1i32;
    let mut saw_term = false;

    for &tok in tokens {
        match tok {
            "+" => continue,
            "-" => {
                running_sign = -running_sign;
                continue;
            }
            _ => {}
        }

        let (body_sign, body) = strip_leading_sign(tok);
        let term = parse_term_body(body, line)?;
        let sign = if running_sign * body_sign < 0 { -1 } else { 1 };
        let coeff = if sign < 0 { -term.coeff } else { term.coeff };
        terms.push(Term {
            coeff,
            var: term.var,
        });
        running_sign = 1;
        saw_term = true;
    }

    if !saw_term {
        return Err(ParseError::EmptyExpression { line });
    }
    Ok(terms)
}

fn strip_leading_sign(tok: &str) -> (i32, &str) {
    if let Some(rest) = tok.strip_prefix('-') {
        (-1, rest)
    } else if let Some(rest) = tok.strip_prefix('+') {
        (1, rest)
    } else {
        (1, tok)
    }
}

fn parse_term_body(body: &str, line: usize) -> Result<Term, ParseError> {
    let occurrences = find_identifier_runs(body);
    match occurrences.len() {
        0 => {
            let coeff = evaluate_chain(body, line)?;
            Ok(Term { coeff, var: None })
        }
        1 => {
            let (start, end) = occurrences[0];
            let var = body[start..end].to_string();
            let substituted = format!("{}1{}", &body[..start], &body[end..]);
            let coeff = evaluate_chain(&substituted, line)?;
            Ok(Term {
                coeff,
                var: Some(var),
            })
        }
        _ => Err(ParseError::MalformedTerm {
            line,
            term: body.to_string(),
        }),
    }
}

/// Find maximal runs matching `[A-Za-z_][A-Za-z_0-9]*` — variable names never
/// begin with a digit (§ resolved lexer ambiguity).
fn find_identifier_runs(body: &str) -> Vec<(usize, usize)> {
    let bytes = body.as_bytes();
    let mut runs = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < bytes.len() {
                let c = bytes[i] as char;
                if c.is_ascii_alphanumeric() || c == '_' {
                    i += 1;
                } else {
                    break;
                }
            }
            runs.push((start, i));
        } else {
            i += 1;
        }
    }
    runs
}

/// Evaluate a `*`/`/` chain left to right, e.g. `2*3*1/5` -> `6/5`.
fn evaluate_chain(chain: &str, line: usize) -> Result<Rational, ParseError> {
    let (pieces, ops) = split_chain(chain);
    if pieces.iter().any(|p| p.is_empty()) {
        return Err(ParseError::InvalidLiteral {
            line,
            literal: chain.to_string(),
        });
    }

    let mut result = parse_rational(pieces[0], line)?;

    for (op, piece) in ops.iter().zip(pieces.iter().skip(1)) {
        let value = parse_rational(piece, line)?;
        match op {
            '*' => result *= value,
            '/' => {
                if value == Rational::from_integer(0.into()) {
                    return Err(ParseError::DivisionByZero {
                        line,
                        literal: piece.to_string(),
                    });
                }
                result /= value;
            }
            _ => unreachable!("split_chain only emits '*' or '/'"),
        }
    }
    Ok(result)
}

fn split_chain(chain: &str) -> (Vec<&str>, Vec<char>) {
    let mut pieces = Vec::new();
    let mut ops = Vec::new();
    let mut start = 0;
    for (i, b) in chain.bytes().enumerate() {
        if b == b'*' || b == b'/' {
            pieces.push(&chain[start..i]);
            ops.push(b as char);
            start = i + 1;
        }
    }
    pieces.push(&chain[start..]);
    (pieces, ops)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64) -> Rational {
        Rational::from_integer(n.into())
    }

    #[test]
    fn parses_simple_sum() {
        let terms = parse_expr(&["x1", "+", "x2"], 1).unwrap();
        assert_eq!(terms.len(), 2);
        assert_eq!(terms[0].var.as_deref(), Some("x1"));
        assert_eq!(terms[0].coeff, r(1));
        assert_eq!(terms[1].var.as_deref(), Some("x2"));
    }

    #[test]
    fn embedded_leading_minus() {
        let terms = parse_expr(&["x1", "-x2"], 1).unwrap();
        assert_eq!(terms[1].coeff, r(-1));
        assert_eq!(terms[1].var.as_deref(), Some("x2"));
    }

    #[test]
    fn standalone_minus_token_negates() {
        let terms = parse_expr(&["x1", "-", "x2"], 1).unwrap();
        assert_eq!(terms[1].coeff, r(-1));
    }

    #[test]
    fn double_negative_cancels() {
        // "- -x2" (standalone minus, then an already-negative token)
        let terms = parse_expr(&["-", "-x2"], 1).unwrap();
        assert_eq!(terms[0].coeff, r(1));
    }

    #[test]
    fn product_quotient_chain() {
        let terms = parse_expr(&["2*3*x/5"], 1).unwrap();
        assert_eq!(terms[0].coeff, Rational::new(6.into(), 5.into()));
        assert_eq!(terms[0].var.as_deref(), Some("x"));
    }

    #[test]
    fn bare_literal_has_no_variable() {
        let terms = parse_expr(&["x", "+", "7"], 1).unwrap();
        assert_eq!(terms[1].var, None);
        assert_eq!(terms[1].coeff, r(7));
    }

    #[test]
    fn two_variables_in_one_term_is_an_error() {
        let err = parse_expr(&["x*y"], 1).unwrap_err();
        assert!(matches!(err, ParseError::MalformedTerm { .. }));
    }

    #[test]
    fn division_by_zero_literal_is_an_error() {
        let err = parse_expr(&["x/0"], 1).unwrap_err();
        assert!(matches!(err, ParseError::DivisionByZero { .. }));
    }

    #[test]
    fn decimal_and_fraction_literals_both_accepted() {
        let terms = parse_expr(&["1.5*x", "+", "1/2"], 1).unwrap();
        assert_eq!(terms[0].coeff, Rational::new(3.into(), 2.into()));
        assert_eq!(terms[1].coeff, Rational::new(1.into(), 2.into()));
    }
}
