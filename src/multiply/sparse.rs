//! Sparse products
//!
//! Only the stored non-zeros of the sparse operand are visited. Against a
//! sparse partner the partner is indexed by its inner coordinate first, so
//! the cost is O(nnz(A) × average row fill of B) instead of O(m·k·n).
//! Against an identity, rotation or shift each non-zero moves to one
//! target cell and no products are formed.

use std::collections::HashMap;

use super::{Ring, Sink};
use crate::{
    algebra::{Poly, ONE},
    matrix::{AnyMatrix, Kind, Matrix, SparseBinary, SparsePoly},
    MatrixError,
};

/// Non-zero entries of a sparse operand as zero-based (row, col, value)
#[derive(Debug, Clone, Copy)]
pub(super) enum SparseOperand<'a> {
    Binary(&'a SparseBinary),
    Poly(&'a SparsePoly),
}

impl<'a> SparseOperand<'a> {
    pub(super) fn of(kind: &Kind<'a>) -> Option<Self> {
        match *kind {
            Kind::SparseBinary(m) => Some(SparseOperand::Binary(m)),
            Kind::SparsePoly(m) => Some(SparseOperand::Poly(m)),
            _ => None,
        }
    }

    fn size(&self) -> (usize, usize) {
        match self {
            SparseOperand::Binary(m) => m.size(),
            SparseOperand::Poly(m) => m.size(),
        }
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (usize, usize, &'a Poly)> + 'a> {
        match *self {
            SparseOperand::Binary(m) => {
                let one: &'a Poly = &ONE;
                Box::new(m.iter_ones().map(move |(r, c)| (r, c, one)))
            }
            SparseOperand::Poly(m) => Box::new(m.iter()),
        }
    }

    /// Entries grouped by row: row → [(col, value)].
    fn by_row(&self) -> HashMap<usize, Vec<(usize, &'a Poly)>> {
        let mut rows: HashMap<usize, Vec<(usize, &'a Poly)>> = HashMap::new();
        for (r, c, p) in self.entries() {
            rows.entry(r).or_default().push((c, p));
        }
        rows
    }
}

/// `A · B` for sparse `A`.
pub(super) fn sparse_left<B: Matrix + ?Sized>(
    lhs: SparseOperand<'_>,
    b: &B,
    kb: &Kind<'_>,
    ring: Ring,
) -> Result<AnyMatrix, MatrixError> {
    let (ar, _) = lhs.size();
    let (_, bc) = b.size();
    let mut out = Sink::sparse(ring, ar, bc)?;

    if let Some(rhs) = SparseOperand::of(kb) {
        let rhs_rows = rhs.by_row();
        for (r, t, a) in lhs.entries() {
            let Some(row) = rhs_rows.get(&t) else {
                continue;
            };
            for &(c, b_tc) in row {
                out.accumulate(r, c, &ring.product(a, b_tc)?)?;
            }
        }
    } else if let Some(perm) = kb.as_permutation() {
        for (r, c, a) in lhs.entries() {
            let value = ring.scalar(a)?;
            if let Some(cc) = perm.target_column(c) {
                out.accumulate(r, cc, &value)?;
            }
        }
    } else {
        // Row t of B scaled by A[r][t] lands in row r of the product.
        for (r, t, a) in lhs.entries() {
            for c in 0..bc {
                let product = ring.product(a, b.at(t + 1, c + 1)?)?;
                out.accumulate(r, c, &product)?;
            }
        }
    }
    Ok(out.finish())
}

/// `A · B` for sparse `B` and non-sparse `A`.
pub(super) fn sparse_right<A: Matrix + ?Sized>(
    a: &A,
    ka: &Kind<'_>,
    rhs: SparseOperand<'_>,
    ring: Ring,
) -> Result<AnyMatrix, MatrixError> {
    let (ar, _) = a.size();
    let (_, bc) = rhs.size();
    let mut out = Sink::sparse(ring, ar, bc)?;

    if let Some(perm) = ka.as_permutation() {
        for (t, c, b) in rhs.entries() {
            let value = ring.scalar(b)?;
            if let Some(r) = perm.target_row(t) {
                out.accumulate(r, c, &value)?;
            }
        }
    } else {
        // Column t of A scaled by B[t][c] lands in column c of the product.
        for (t, row) in rhs.by_row() {
            for r in 0..ar {
                let a_rt = a.at(r + 1, t + 1)?;
                for &(c, b_tc) in &row {
                    out.accumulate(r, c, &ring.product(a_rt, b_tc)?)?;
                }
            }
        }
    }
    Ok(out.finish())
}
