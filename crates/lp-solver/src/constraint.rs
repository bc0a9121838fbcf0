//! Turns one parsed constraint line into a dense standard-form row: moves
//! variable terms to the left and literals to the right, flips sign to keep
//! `b >= 0`, and applies the bounding-constraint short-circuit of a single
//! lower-bound term (`x >= k`) that standard form already enforces for free.

use lp_parser::{Cmp, Term};
use lp_types::{Rational, SymbolTable};

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub a: Vec<Rational>,
    pub cmp: Cmp,
    pub b: Rational,
}

fn zero() -> Rational {
    Rational::from_integer(0.into())
}

fn flip(cmp: Cmp) -> Cmp {
    match cmp {
        Cmp::Le => Cmp::Ge,
        Cmp::Ge => Cmp::Le,
        Cmp::Eq => Cmp::Eq,
    }
}

/// `n` is the post-discovery, pre-expansion column count: every term's
/// variable is already present in `symbols`.
pub fn normalize_constraint(
    symbols: &mut SymbolTable,
    n: usize,
    lhs: &[Term],
    cmp: Cmp,
    rhs: &[Term],
) -> Option<NormalizedRow> {
    let mut a = vec![zero(); n];
    let mut literal_left = zero();
    let mut literal_right = zero();

    for term in lhs {
        match &term.var {
            Some(name) => {
                let j = symbols.column_of(name).expect("discovered in pass 1");
                a[j] += term.coeff.clone();
            }
            None => literal_left += term.coeff.clone(),
        }
    }
    for term in rhs {
        match &term.var {
            Some(name) => {
                let j = symbols.column_of(name).expect("discovered in pass 1");
                a[j] -= term.coeff.clone();
            }
            None => literal_right += term.coeff.clone(),
        }
    }

    let mut b = literal_right - literal_left;
    let mut cmp = cmp;
    if b < zero() {
        for coeff in a.iter_mut() {
            *coeff = -coeff.clone();
        }
        b = -b;
        cmp = flip(cmp);
    }

    // The sign of `b` alone can't disambiguate direction when `b == 0` (`-0`
    // and `0` compare equal), so a single-nonzero-coefficient row still needs
    // its own sign canonicalized here: `-x <= 0` must normalize to the same
    // `x >= 0` shape `x >= 0` already has, not linger as `-x <= 0`.
    if b == zero() {
        if let Some((_, k)) = single_lower_bound_term(symbols, &a) {
            if k < zero() {
                for coeff in a.iter_mut() {
                    *coeff = -coeff.clone();
                }
                cmp = flip(cmp);
            }
        }
    }

    if let Some((name, k)) = single_lower_bound_term(symbols, &a) {
        if cmp == Cmp::Ge && k > zero() {
            symbols.unmark_free(&name);
            if b == zero() {
                return None;
            }
        }
    }

    Some(NormalizedRow { a, cmp, b })
}

/// If `a` has exactly one nonzero entry, return its variable name and
/// coefficient.
fn single_lower_bound_term(symbols: &SymbolTable, a: &[Rational]) -> Option<(String, Rational)> {
    let mut found = None;
    for (j, coeff) in a.iter().enumerate() {
        if *coeff != zero() {
            if found.is_some() {
                return None;
            }
            found = Some((j, coeff.clone()));
        }
    }
    let (j, k) = found?;
    symbols.name_of(j).map(|name| (name.to_string(), k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lp_parser::Term;

    fn term(coeff: i64, var: Option<&str>) -> Term {
        Term {
            coeff: Rational::from_integer(coeff.into()),
            var: var.map(|s| s.to_string()),
        }
    }

    #[test]
    fn negative_rhs_flips_sign_and_comparator() {
        let mut symbols = SymbolTable::new();
        symbols.get_or_insert("x1");
        symbols.get_or_insert("x2");
        // x1 + x2 <= -3  ->  -x1 - x2 >= 3
        let lhs = vec![term(1, Some("x1")), term(1, Some("x2"))];
        let rhs = vec![term(-3, None)];
        let row = normalize_constraint(&mut symbols, 2, &lhs, Cmp::Le, &rhs).unwrap();
        assert_eq!(row.cmp, Cmp::Ge);
        assert_eq!(row.b, Rational::from_integer(3.into()));
        assert_eq!(row.a[0], Rational::from_integer((-1).into()));
    }

    #[test]
    fn lower_bound_with_zero_rhs_is_dropped() {
        let mut symbols = SymbolTable::new();
        symbols.get_or_insert("x");
        let lhs = vec![term(1, Some("x"))];
        let rhs = vec![term(0, None)];
        let row = normalize_constraint(&mut symbols, 1, &lhs, Cmp::Ge, &rhs);
        assert!(row.is_none());
        assert!(!symbols.is_free("x"));
    }

    #[test]
    fn lower_bound_with_nonzero_rhs_is_kept_and_unmarks_free() {
        let mut symbols = SymbolTable::new();
        symbols.get_or_insert("x");
        let lhs = vec![term(2, Some("x"))];
        let rhs = vec![term(4, None)];
        let row = normalize_constraint(&mut symbols, 1, &lhs, Cmp::Ge, &rhs).unwrap();
        assert_eq!(row.cmp, Cmp::Ge);
        assert_eq!(row.b, Rational::from_integer(4.into()));
        assert!(!symbols.is_free("x"));
    }

    #[test]
    fn upper_bound_never_unmarks_free() {
        let mut symbols = SymbolTable::new();
        symbols.get_or_insert("y");
        let lhs = vec![term(1, Some("y"))];
        let rhs = vec![term(5, None)];
        let row = normalize_constraint(&mut symbols, 1, &lhs, Cmp::Le, &rhs).unwrap();
        assert_eq!(row.cmp, Cmp::Le);
        assert!(symbols.is_free("y"));
    }

    #[test]
    fn negative_coefficient_lower_bound_with_zero_rhs_is_dropped() {
        let mut symbols = SymbolTable::new();
        symbols.get_or_insert("x");
        // -x <= 0  ->  x >= 0, dropped the same way `x >= 0` itself would be.
        let lhs = vec![term(-1, Some("x"))];
        let rhs = vec![term(0, None)];
        let row = normalize_constraint(&mut symbols, 1, &lhs, Cmp::Le, &rhs);
        assert!(row.is_none());
        assert!(!symbols.is_free("x"));
    }

    #[test]
    fn negative_coefficient_upper_bound_with_zero_rhs_is_kept() {
        let mut symbols = SymbolTable::new();
        symbols.get_or_insert("x");
        // -x >= 0  ->  x <= 0, a genuine upper bound, never elided.
        let lhs = vec![term(-1, Some("x"))];
        let rhs = vec![term(0, None)];
        let row = normalize_constraint(&mut symbols, 1, &lhs, Cmp::Ge, &rhs).unwrap();
        assert_eq!(row.cmp, Cmp::Le);
        assert!(symbols.is_free("x"));
    }

    #[test]
    fn equality_never_shortcircuits() {
        let mut symbols = SymbolTable::new();
        symbols.get_or_insert("x");
        let lhs = vec![term(1, Some("x"))];
        let rhs = vec![term(0, None)];
        let row = normalize_constraint(&mut symbols, 1, &lhs, Cmp::Eq, &rhs);
        assert!(row.is_some());
        assert!(symbols.is_free("x"));
    }
}
