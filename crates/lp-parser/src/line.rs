//! Classifies input lines and assembles them into [`LineAst`] values: the
//! objective, or a single constraint with its comparator.

use crate::error::ParseError;
use crate::lexer::{is_comparator, tokenize_line, EQ, GE, LE};
use crate::term::{parse_expr, Term};

/// A constraint comparator, in its already-normalized (pre-flip) reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmp {
    Le,
    Ge,
    Eq,
}

/// One parsed, classified input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineAst {
    /// `MAX <expr>` or `MIN <expr>`. `is_max` records which keyword was used;
    /// the terms are not yet sign-flipped for MIN — that happens in the
    /// assembler, which needs the same terms to locate every variable name
    /// during its first discovery pass.
    Objective { is_max: bool, terms: Vec<Term> },
    /// `<lhs> <cmp> <rhs>`, both sides still raw term lists.
    Constraint {
        lhs: Vec<Term>,
        cmp: Cmp,
        rhs: Vec<Term>,
    },
}

/// Parse every non-blank line of `input` into a [`LineAst`], in order.
pub fn parse_program(input: &str) -> Result<Vec<LineAst>, ParseError> {
    let mut lines = Vec::new();
    for (idx, raw) in input.lines().enumerate() {
        let line_no = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        lines.push(parse_line(raw, line_no)?);
    }
    Ok(lines)
}

fn parse_line(raw: &str, line_no: usize) -> Result<LineAst, ParseError> {
    let tokens = tokenize_line(raw);

    match tokens.first().copied() {
        Some("MAX") => {
            let terms = parse_expr(&tokens[1..], line_no)?;
            Ok(LineAst::Objective {
                is_max: true,
                terms,
            })
        }
        Some("MIN") => {
            let terms = parse_expr(&tokens[1..], line_no)?;
            Ok(LineAst::Objective {
                is_max: false,
                terms,
            })
        }
        Some(_) => parse_constraint(&tokens, line_no),
        None => Err(ParseError::EmptyExpression { line: line_no }),
    }
}

fn parse_constraint(tokens: &[&str], line_no: usize) -> Result<LineAst, ParseError> {
    let split = tokens
        .iter()
        .position(|&t| is_comparator(t))
        .ok_or(ParseError::MissingComparator { line: line_no })?;

    let cmp = match tokens[split] {
        LE => Cmp::Le,
        GE => Cmp::Ge,
        EQ => Cmp::Eq,
        other => {
            return Err(ParseError::UnknownKeyword {
                line: line_no,
                keyword: other.to_string(),
            })
        }
    };

    let lhs = parse_expr(&tokens[..split], line_no)?;
    let rhs = parse_expr(&tokens[split + 1..], line_no)?;
    Ok(LineAst::Constraint { lhs, cmp, rhs })
}
