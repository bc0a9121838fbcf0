//! LP Assembler (§4.5): concatenates the normalized rows' coefficient
//! vectors with one slack/surplus column per row, and extends the cost
//! vector with zeros so `c` and the assembled matrix agree on width.

use lp_parser::Cmp;
use lp_types::Rational;

use crate::problem::Problem;

fn zero() -> Rational {
    Rational::from_integer(0.into())
}

fn one() -> Rational {
    Rational::from_integer(1.into())
}

pub struct Assembled {
    pub c: Vec<Rational>,
    pub m_rows: Vec<Vec<Rational>>,
    pub b: Vec<Rational>,
}

pub fn assemble(problem: &Problem) -> Assembled {
    let m = problem.rows.len();
    let n = problem.c.len();

    let mut c = problem.c.clone();
    c.extend(std::iter::repeat(zero()).take(m));

    let mut m_rows = Vec::with_capacity(m);
    let mut b = Vec::with_capacity(m);
    for (i, row) in problem.rows.iter().enumerate() {
        let mut full = row.a.clone();
        full.extend(std::iter::repeat(zero()).take(m));
        full[n + i] = match row.cmp {
            Cmp::Le => one(),
            Cmp::Ge => -one(),
            Cmp::Eq => zero(),
        };
        m_rows.push(full);
        b.push(row.b.clone());
    }

    Assembled { c, m_rows, b }
}
