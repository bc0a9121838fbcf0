//! Two-pass standard-form builder: first discover every variable name (so
//! column indices are dense and stable), then walk the same line ASTs again
//! to assemble full-width rows. This is the two-pass variant of §4.2's matrix
//! growth note, favored over mid-stream column padding since nothing here is
//! memory-constrained.

use lp_parser::{parse_program, Cmp, LineAst};
use lp_types::{Rational, SymbolTable};

use crate::constraint::{normalize_constraint, NormalizedRow};
use crate::error::SolveError;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub a: Vec<Rational>,
    pub cmp: Cmp,
    pub b: Rational,
}

/// A fully parsed, normalized, free-variable-expanded problem, still in the
/// `(A, rows, c, gamma)` shape — one step short of the assembled tableau.
#[derive(Debug, Clone)]
pub struct Problem {
    pub symbols: SymbolTable,
    pub is_max: bool,
    pub gamma: Rational,
    pub c: Vec<Rational>,
    pub rows: Vec<Row>,
}

fn zero() -> Rational {
    Rational::from_integer(0.into())
}

pub fn build_problem(text: &str) -> Result<Problem, SolveError> {
    let lines = parse_program(text)?;

    let mut symbols = SymbolTable::new();
    for line in &lines {
        match line {
            LineAst::Objective { terms, .. } => {
                for term in terms {
                    if let Some(name) = &term.var {
                        symbols.get_or_insert(name);
                    }
                }
            }
            LineAst::Constraint { lhs, rhs, .. } => {
                for term in lhs.iter().chain(rhs.iter()) {
                    if let Some(name) = &term.var {
                        symbols.get_or_insert(name);
                    }
                }
            }
        }
    }
    let n_original = symbols.len();

    let mut is_max = true;
    let mut saw_objective = false;
    let mut c = vec![zero(); n_original];
    let mut gamma = zero();
    let mut rows: Vec<NormalizedRow> = Vec::new();

    for line in &lines {
        match line {
            LineAst::Objective {
                is_max: line_is_max,
                terms,
            } => {
                saw_objective = true;
                is_max = *line_is_max;
                let flip = !line_is_max;
                for term in terms {
                    let coeff = if flip {
                        -term.coeff.clone()
                    } else {
                        term.coeff.clone()
                    };
                    match &term.var {
                        Some(name) => {
                            let j = symbols.column_of(name).expect("discovered in pass 1");
                            c[j] += coeff;
                        }
                        None => gamma += coeff,
                    }
                }
            }
            LineAst::Constraint { lhs, cmp, rhs } => {
                if let Some(row) = normalize_constraint(&mut symbols, n_original, lhs, *cmp, rhs) {
                    rows.push(row);
                }
            }
        }
    }

    if !saw_objective {
        return Err(SolveError::Shape("no objective line in input".to_string()));
    }

    let mut rows: Vec<Row> = rows
        .into_iter()
        .map(|r| Row {
            a: r.a,
            cmp: r.cmp,
            b: r.b,
        })
        .collect();

    expand_free_variables(&mut symbols, &mut c, &mut rows);

    Ok(Problem {
        symbols,
        is_max,
        gamma,
        c,
        rows,
    })
}

/// §4.4: every name still free at end-of-parse gets a shadow column equal to
/// the negated primary column, so `x = x' - x''` with both halves >= 0.
fn expand_free_variables(symbols: &mut SymbolTable, c: &mut Vec<Rational>, rows: &mut [Row]) {
    for name in symbols.free_names() {
        let j = symbols.column_of(&name).expect("registered");
        let shadow = c.len();
        symbols.set_shadow(&name, shadow);
        c.push(-c[j].clone());
        for row in rows.iter_mut() {
            let mirrored = -row.a[j].clone();
            row.a.push(mirrored);
        }
    }
}
