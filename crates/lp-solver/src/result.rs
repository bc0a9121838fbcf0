//! Result Shaper (§4.9): turns the halted tableau back into the
//! user-observable outcome — undoing the MIN sign flip, folding in `gamma`,
//! collapsing free-variable shadow columns, and carrying the certificate
//! required by the reported status (§6).

use lp_types::Rational;

use crate::error::LpError;
use crate::problem::{build_problem, Problem};
use crate::simplex::{two_phase_solve, SolveOutcome};
use crate::tableau::Tableau;

fn zero() -> Rational {
    Rational::from_integer(0.into())
}

#[derive(Debug, Clone, PartialEq)]
pub enum DomainResult {
    Optimal {
        value: Rational,
        solution: Vec<(String, Rational)>,
        certificate: Vec<Rational>,
    },
    Infeasible {
        certificate: Vec<Rational>,
    },
    Unbounded {
        direction: Vec<Rational>,
    },
}

/// Parse, normalize, assemble, and solve one LP given as free-form text.
pub fn solve_problem(text: &str) -> Result<DomainResult, LpError> {
    let problem = build_problem(text)?;
    let assembled = crate::assemble::assemble(&problem);
    let outcome = two_phase_solve(&assembled.c, &assembled.m_rows, &assembled.b)?;

    Ok(match outcome {
        SolveOutcome::Infeasible { certificate } => DomainResult::Infeasible { certificate },
        SolveOutcome::Unbounded { direction } => DomainResult::Unbounded { direction },
        SolveOutcome::Optimal { tableau } => shape_optimal(&problem, &tableau),
    })
}

fn shape_optimal(problem: &Problem, tableau: &Tableau) -> DomainResult {
    let n_expanded = problem.c.len();

    let mut raw = vec![zero(); n_expanded];
    for i in 0..tableau.m {
        let bv = tableau.basic_vars[i];
        let rel = bv.saturating_sub(tableau.ident_width);
        if bv >= tableau.ident_width && rel < n_expanded {
            raw[rel] = tableau.constraint_rhs(i).clone();
        }
    }

    let mut value = tableau.rhs(tableau.objective_row()).clone() + problem.gamma.clone();
    if !problem.is_max {
        value = -value;
    }

    let solution = problem
        .symbols
        .variables()
        .iter()
        .map(|v| {
            let value = match v.shadow {
                Some(shadow) => raw[v.primary].clone() - raw[shadow].clone(),
                None => raw[v.primary].clone(),
            };
            (v.name.clone(), value)
        })
        .collect();

    let certificate = tableau.identity_row(tableau.objective_row()).to_vec();

    DomainResult::Optimal {
        value,
        solution,
        certificate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64) -> Rational {
        Rational::from_integer(n.into())
    }

    #[test]
    fn s1_bounded_maximize() {
        let result =
            solve_problem("MAX x1 + x2\nx1 + x2 <= 4\nx1 <= 3\nx2 <= 3\n").unwrap();
        match result {
            DomainResult::Optimal { value, solution, .. } => {
                assert_eq!(value, r(4));
                let map: std::collections::HashMap<_, _> = solution.into_iter().collect();
                assert_eq!(map["x1"], r(3));
                assert_eq!(map["x2"], r(1));
            }
            other => panic!("expected optimal, got {other:?}"),
        }
    }

    #[test]
    fn s2_min_with_surplus() {
        let result =
            solve_problem("MIN x1 + x2\nx1 + x2 >= 2\nx1 >= 0\nx2 >= 0\n").unwrap();
        match result {
            DomainResult::Optimal { value, solution, .. } => {
                assert_eq!(value, r(2));
                let map: std::collections::HashMap<_, _> = solution.into_iter().collect();
                assert_eq!(map["x1"], r(2));
                assert_eq!(map["x2"], r(0));
            }
            other => panic!("expected optimal, got {other:?}"),
        }
    }

    #[test]
    fn s3_infeasible_has_certificate() {
        let result = solve_problem("MAX x1\nx1 + x2 == 3\nx2 >= 5\n").unwrap();
        match result {
            DomainResult::Infeasible { certificate } => assert!(!certificate.is_empty()),
            other => panic!("expected infeasible, got {other:?}"),
        }
    }

    #[test]
    fn s4_unbounded_has_direction() {
        let result = solve_problem("MAX x1\nx1 - x2 <= 1\n").unwrap();
        match result {
            DomainResult::Unbounded { direction } => assert!(!direction.is_empty()),
            other => panic!("expected unbounded, got {other:?}"),
        }
    }

    #[test]
    fn s5_free_variable_round_trips_through_shadow_columns() {
        let result = solve_problem("MAX y\ny <= 5\n").unwrap();
        match result {
            DomainResult::Optimal { value, solution, .. } => {
                assert_eq!(value, r(5));
                assert_eq!(solution[0], ("y".to_string(), r(5)));
            }
            other => panic!("expected optimal, got {other:?}"),
        }
    }

    #[test]
    fn s6_constant_folding() {
        let result = solve_problem("MAX x + 7\nx <= 2\n").unwrap();
        match result {
            DomainResult::Optimal { value, .. } => assert_eq!(value, r(9)),
            other => panic!("expected optimal, got {other:?}"),
        }
    }
}
