//! The pivot loop (§4.8) and the two-phase orchestration that drives it
//! across Phase I and Phase II (§4.7). Grounded on the teacher's
//! `linear/two_phase.rs` control flow (build a Phase I tableau, iterate to
//! optimality, check the artificial objective, rebuild for Phase II) but
//! reworked for Bland's rule throughout — the teacher's most-negative
//! entering-column rule has no anti-cycling guarantee, which this system
//! requires since it runs on exact rationals with no perturbation.

use lp_types::Rational;

use crate::error::SolveError;
use crate::tableau::{find_initial_basis, Tableau};

fn zero() -> Rational {
    Rational::from_integer(0.into())
}

fn one() -> Rational {
    Rational::from_integer(1.into())
}

pub enum PivotOutcome {
    Optimal,
    Unbounded { direction: Vec<Rational> },
}

/// Iterate Bland's-rule entering/leaving selection against `obj_row` until
/// optimal or unbounded. Termination is guaranteed by Bland's rule (§4.8, §8
/// invariant 8) — no iteration cap is needed or installed.
pub fn run_pivot_loop(t: &mut Tableau, obj_row: usize) -> PivotOutcome {
    loop {
        let Some(col) = t.entering_column(obj_row) else {
            return PivotOutcome::Optimal;
        };
        match t.leaving_row(col) {
            Some(row) => t.pivot(col, row),
            None => return PivotOutcome::Unbounded {
                direction: unbounded_direction(t, col),
            },
        }
    }
}

/// A feasible Phase I can still leave a zero-valued artificial in the basis
/// (a degenerate row). Pivot it out on any nonzero natural-column entry
/// before deleting the artificial columns, or `basic_vars` would point at a
/// column that no longer exists. If the row is entirely zero across the
/// natural columns too, it is redundant and is left as-is.
fn drive_out_degenerate_artificials(t: &mut Tableau) {
    for i in 0..t.m {
        if !t.is_artificial(t.basic_vars[i]) {
            continue;
        }
        let lo = t.ident_width;
        let hi = t.ident_width + t.n_cur;
        if let Some(col) = (lo..hi).find(|&j| *t.constraint_entry(i, j) != zero()) {
            t.pivot(col, i);
        }
    }
}

fn unbounded_direction(t: &Tableau, q: usize) -> Vec<Rational> {
    let mut d = vec![zero(); t.n_cur];
    let q_rel = q - t.ident_width;
    d[q_rel] = one();
    for i in 0..t.m {
        let bv = t.basic_vars[i];
        if bv >= t.ident_width && bv < t.ident_width + t.n_cur {
            let rel = bv - t.ident_width;
            d[rel] = -t.constraint_entry(i, q).clone();
        }
    }
    d
}

/// The outcome of a full two-phase run, still in internal (maximization,
/// pre-`gamma`, pre-free-variable-collapse) terms. [`crate::result`] shapes
/// this into the user-facing `DomainResult`.
pub enum SolveOutcome {
    Optimal {
        tableau: Tableau,
    },
    Infeasible {
        certificate: Vec<Rational>,
    },
    Unbounded {
        direction: Vec<Rational>,
    },
}

/// Run Phase I (if artificials are needed) then Phase II.
pub fn two_phase_solve(
    c: &[Rational],
    m_rows: &[Vec<Rational>],
    b: &[Rational],
) -> Result<SolveOutcome, SolveError> {
    let n_cur = c.len();
    let basis = find_initial_basis(m_rows, n_cur);
    let m_a = basis
        .iter()
        .filter(|b| matches!(b, crate::tableau::BasisColumn::Artificial(_)))
        .count();

    let mut tableau = Tableau::build(c, m_rows, b, &basis, m_a);

    if m_a > 0 {
        let phase1_row = tableau.phase1_row().expect("has_phase1 implied by m_a > 0");
        match run_pivot_loop(&mut tableau, phase1_row) {
            PivotOutcome::Unbounded { .. } => {
                return Err(SolveError::Arithmetic(
                    "Phase I objective is unbounded, which cannot happen for a sum of \
                     non-negative artificials"
                        .to_string(),
                ));
            }
            PivotOutcome::Optimal => {}
        }

        // Row 1 carries Phase I's cost un-negated (unlike row 0), so its RHS
        // tracks the negative of the artificial objective (§3): optimal-but-
        // infeasible shows up as `tableau[1, -1] < 0`, never `> 0`.
        if *tableau.rhs(phase1_row) < zero() {
            let certificate = tableau.identity_row(phase1_row).to_vec();
            return Ok(SolveOutcome::Infeasible { certificate });
        }

        drive_out_degenerate_artificials(&mut tableau);
        tableau.strip_phase1();
    }

    match run_pivot_loop(&mut tableau, tableau.objective_row()) {
        PivotOutcome::Optimal => Ok(SolveOutcome::Optimal { tableau }),
        PivotOutcome::Unbounded { direction } => Ok(SolveOutcome::Unbounded { direction }),
    }
}
