//! The extended tableau of §3: an identity-recording block glued to the
//! working `[A|S|W]` submatrix and the two objective rows that ride along
//! through every pivot. Grounded on the teacher's `linear/tableau.rs` shape
//! (dense rows, a trailing RHS column, a `basic_vars` index array) but over
//! exact [`Rational`]s, with the `I_m` block the teacher's tableau never
//! carried — it is what lets optimality/infeasibility certificates be read
//! off directly once the simplex halts, instead of re-deriving them.

use lp_types::Rational;

fn zero() -> Rational {
    Rational::from_integer(0.into())
}

fn one() -> Rational {
    Rational::from_integer(1.into())
}

/// How a constraint row's initial basic variable was obtained: either a
/// column of `M` already happened to be a unit vector, or an artificial
/// column had to be appended for it (§4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasisColumn {
    Natural(usize),
    Artificial(usize),
}

/// Scan `M` (`m_rows`, each of width `n_cur`) left to right for unclaimed
/// unit columns; rows that find none are assigned a fresh artificial.
pub fn find_initial_basis(m_rows: &[Vec<Rational>], n_cur: usize) -> Vec<BasisColumn> {
    let m = m_rows.len();
    let mut row_claimed = vec![false; m];
    let mut natural: Vec<Option<usize>> = vec![None; m];

    for j in 0..n_cur {
        let mut nonzero_row = None;
        let mut is_unit = true;
        for (i, row) in m_rows.iter().enumerate() {
            let v = &row[j];
            if *v != zero() {
                if *v != one() || nonzero_row.is_some() {
                    is_unit = false;
                    break;
                }
                nonzero_row = Some(i);
            }
        }
        if is_unit {
            if let Some(i) = nonzero_row {
                if !row_claimed[i] {
                    row_claimed[i] = true;
                    natural[i] = Some(j);
                }
            }
        }
    }

    let mut next_artificial = 0;
    natural
        .into_iter()
        .map(|choice| match choice {
            Some(col) => BasisColumn::Natural(col),
            None => {
                let idx = next_artificial;
                next_artificial += 1;
                BasisColumn::Artificial(idx)
            }
        })
        .collect()
}

pub struct Tableau {
    data: Vec<Vec<Rational>>,
    pub m: usize,
    pub ident_width: usize,
    pub n_cur: usize,
    pub m_a: usize,
    pub basic_vars: Vec<usize>,
    pub has_phase1: bool,
}

impl Tableau {
    /// Build the Phase I (or, if `m_a == 0`, straight-to-Phase-II) tableau
    /// and eliminate both objective rows against the initial basis so every
    /// basic column reads zero in its own objective row.
    pub fn build(
        c: &[Rational],
        m_rows: &[Vec<Rational>],
        b: &[Rational],
        basis: &[BasisColumn],
        m_a: usize,
    ) -> Self {
        let m = m_rows.len();
        let n_cur = c.len();
        let ident_width = m;
        let has_phase1 = m_a > 0;
        let total_cols = ident_width + n_cur + m_a + 1;
        let rhs_col = total_cols - 1;

        let mut data = Vec::with_capacity(2 + m);

        let mut row0 = vec![zero(); total_cols];
        for (j, cj) in c.iter().enumerate() {
            row0[ident_width + j] = -cj.clone();
        }
        data.push(row0);

        if has_phase1 {
            let mut row1 = vec![zero(); total_cols];
            for k in 0..m_a {
                row1[ident_width + n_cur + k] = one();
            }
            data.push(row1);
        }

        let mut basic_vars = vec![0usize; m];
        for i in 0..m {
            let mut row = vec![zero(); total_cols];
            row[i] = one();
            for (j, v) in m_rows[i].iter().enumerate() {
                row[ident_width + j] = v.clone();
            }
            basic_vars[i] = match basis[i] {
                BasisColumn::Natural(col) => ident_width + col,
                BasisColumn::Artificial(k) => {
                    row[ident_width + n_cur + k] = one();
                    ident_width + n_cur + k
                }
            };
            row[rhs_col] = b[i].clone();
            data.push(row);
        }

        let mut tableau = Tableau {
            data,
            m,
            ident_width,
            n_cur,
            m_a,
            basic_vars,
            has_phase1,
        };
        tableau.eliminate_objective_rows();
        tableau
    }

    fn constraint_offset(&self) -> usize {
        if self.has_phase1 {
            2
        } else {
            1
        }
    }

    pub fn total_cols(&self) -> usize {
        self.data[0].len()
    }

    fn rhs_col(&self) -> usize {
        self.total_cols() - 1
    }

    fn constraint_row(&self, i: usize) -> usize {
        self.constraint_offset() + i
    }

    /// Row 0's absolute index: always 0. Row 1 (Phase I objective) is 1 when
    /// present.
    pub fn phase1_row(&self) -> Option<usize> {
        self.has_phase1.then_some(1)
    }

    pub fn objective_row(&self) -> usize {
        0
    }

    /// Zero out each basic column's entry in both objective rows by
    /// subtracting the right multiple of its constraint row. Needed once at
    /// construction: a "natural" basic column (no artificial needed) can
    /// still carry a nonzero original cost.
    fn eliminate_objective_rows(&mut self) {
        let obj_rows: Vec<usize> = if self.has_phase1 {
            vec![0, 1]
        } else {
            vec![0]
        };
        for r in obj_rows {
            for i in 0..self.m {
                let col = self.basic_vars[i];
                let factor = self.data[r][col].clone();
                if factor != zero() {
                    let pivot_row = self.constraint_row(i);
                    self.subtract_multiple(r, pivot_row, factor);
                }
            }
        }
    }

    fn subtract_multiple(&mut self, target: usize, source: usize, factor: Rational) {
        let cols = self.total_cols();
        for j in 0..cols {
            let delta = factor.clone() * self.data[source][j].clone();
            self.data[target][j] -= delta;
        }
    }

    pub fn is_artificial(&self, col: usize) -> bool {
        col >= self.ident_width + self.n_cur
    }

    /// Bland's rule entering column: leftmost non-identity, non-artificial
    /// column with a strictly negative reduced cost.
    pub fn entering_column(&self, obj_row: usize) -> Option<usize> {
        let lo = self.ident_width;
        let hi = self.ident_width + self.n_cur;
        (lo..hi).find(|&j| self.data[obj_row][j] < zero())
    }

    /// Bland's rule leaving row: smallest ratio, tie-broken by smallest
    /// basic-variable index.
    pub fn leaving_row(&self, col: usize) -> Option<usize> {
        let mut best: Option<(Rational, usize, usize)> = None;
        for i in 0..self.m {
            let row = self.constraint_row(i);
            let entry = &self.data[row][col];
            if *entry > zero() {
                let ratio = self.data[row][self.rhs_col()].clone() / entry.clone();
                let basic = self.basic_vars[i];
                let better = match &best {
                    None => true,
                    Some((best_ratio, best_basic, _)) => {
                        ratio < *best_ratio || (ratio == *best_ratio && basic < *best_basic)
                    }
                };
                if better {
                    best = Some((ratio, basic, i));
                }
            }
        }
        best.map(|(_, _, i)| i)
    }

    pub fn pivot(&mut self, col: usize, leaving_i: usize) {
        let pivot_row = self.constraint_row(leaving_i);
        let pivot_value = self.data[pivot_row][col].clone();
        let cols = self.total_cols();
        for j in 0..cols {
            self.data[pivot_row][j] = self.data[pivot_row][j].clone() / pivot_value.clone();
        }

        let total_rows = self.data.len();
        for r in 0..total_rows {
            if r == pivot_row {
                continue;
            }
            let factor = self.data[r][col].clone();
            if factor != zero() {
                self.subtract_multiple(r, pivot_row, factor);
            }
        }

        self.basic_vars[leaving_i] = col;
    }

    pub fn entry(&self, row: usize, col: usize) -> &Rational {
        &self.data[row][col]
    }

    pub fn rhs(&self, row: usize) -> &Rational {
        &self.data[row][self.rhs_col()]
    }

    /// The identity block's entries in `row`: the row-operation record used
    /// for certificate extraction.
    pub fn identity_row(&self, row: usize) -> &[Rational] {
        &self.data[row][..self.ident_width]
    }

    pub fn constraint_rhs(&self, i: usize) -> &Rational {
        let row = self.constraint_row(i);
        self.rhs(row)
    }

    pub fn constraint_entry(&self, i: usize, col: usize) -> &Rational {
        let row = self.constraint_row(i);
        self.entry(row, col)
    }

    /// Drop the Phase I objective row and every artificial column, leaving a
    /// plain Phase II tableau. Must only be called once Phase I has
    /// confirmed feasibility (no artificial left in the basis at value > 0).
    pub fn strip_phase1(&mut self) {
        if !self.has_phase1 {
            return;
        }
        let artificial_lo = self.ident_width + self.n_cur;
        let artificial_hi = artificial_lo + self.m_a;

        self.data.remove(1);
        for row in self.data.iter_mut() {
            row.drain(artificial_lo..artificial_hi);
        }
        self.has_phase1 = false;
        self.m_a = 0;
    }
}
