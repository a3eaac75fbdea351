//! Dense products

use super::{Ring, Sink};
use crate::{
    algebra::Poly,
    matrix::{AnyMatrix, DenseBinary, Matrix},
    MatrixError,
};

/// Reference product through element access only.
///
/// Every cell of the result is the XOR over the inner dimension of the
/// element products. Correct for any operand kinds; O(m·k·n).
pub(super) fn triple_loop<A, B>(a: &A, b: &B, ring: Ring) -> Result<AnyMatrix, MatrixError>
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
{
    let (ar, ac) = a.size();
    let (_, bc) = b.size();
    let mut out = Sink::dense(ring, ar, bc)?;

    for c in 1..=bc {
        for r in 1..=ar {
            let mut sum = Poly::zero();
            for i in 1..=ac {
                sum += ring.product(a.at(r, i)?, b.at(i, c)?)?;
            }
            out.accumulate(r - 1, c - 1, &sum)?;
        }
    }
    Ok(out.finish())
}

/// Packed product: column c of the result is the XOR of the columns of
/// `a` selected by the set bits in column c of `b`.
pub(super) fn dense_binary_columns(
    a: &DenseBinary,
    b: &DenseBinary,
) -> Result<DenseBinary, MatrixError> {
    let (ar, _) = a.size();
    let (_, bc) = b.size();
    let mut out = DenseBinary::new(ar, bc)?;

    for c in 0..bc {
        for t in b.column(c).iter_ones() {
            for r in a.column(t).iter_ones() {
                out.toggle(r, c);
            }
        }
    }
    Ok(out)
}
