//! Multiplication engine
//!
//! Picks an algorithm and an output kind from the operand kinds. First
//! match wins:
//! 1. a zero operand: structural zero, or an empty sparse polynomial
//!    matrix in the polynomial ring
//! 2. sparse left operand: iterate its non-zeros (O(nnz) against a
//!    rotation, shift, identity or sparse right operand)
//! 3. sparse right operand: the mirror image of 2
//! 4. identity operand: resized copy of the other operand
//! 5. dense × dense: column combination for packed bits, otherwise the
//!    triple loop through element access, O(m·k·n)

mod dense;
mod sparse;

use tracing::debug;

use crate::{
    algebra::{from_bit, to_bit, Poly},
    convert::{resize, to_dense_binary, to_sparse_binary},
    matrix::{
        AnyMatrix, DenseBinary, DensePoly, ElementKind, Identity, Kind, Matrix, SparseBinary,
        SparsePoly, Zero,
    },
    MatrixError,
};

use sparse::SparseOperand;

/// Arithmetic used for element products
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ring {
    /// GF(2): every element must be 0 or 1, product is AND
    Binary,
    /// GF(2)[x]: product is carryless convolution
    Polynomial,
}

impl Ring {
    /// Element product; in the binary ring both factors are validated.
    fn product(self, a: &Poly, b: &Poly) -> Result<Poly, MatrixError> {
        match self {
            Ring::Binary => Ok(from_bit(to_bit(a)? & to_bit(b)?).clone()),
            Ring::Polynomial => Ok(a * b),
        }
    }

    /// A single factor carried through unchanged, validated for the ring.
    fn scalar(self, a: &Poly) -> Result<Poly, MatrixError> {
        match self {
            Ring::Binary => Ok(from_bit(to_bit(a)?).clone()),
            Ring::Polynomial => Ok(a.clone()),
        }
    }
}

/// Storage receiving an accumulated product
#[derive(Debug)]
enum Sink {
    SparseBinary(SparseBinary),
    SparsePoly(SparsePoly),
    DenseBinary(DenseBinary),
    DensePoly(DensePoly),
}

impl Sink {
    fn sparse(ring: Ring, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Ok(match ring {
            Ring::Binary => Sink::SparseBinary(SparseBinary::new(rows, cols)?),
            Ring::Polynomial => Sink::SparsePoly(SparsePoly::new(rows, cols)?),
        })
    }

    fn dense(ring: Ring, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Ok(match ring {
            Ring::Binary => Sink::DenseBinary(DenseBinary::new(rows, cols)?),
            Ring::Polynomial => Sink::DensePoly(DensePoly::new(rows, cols)?),
        })
    }

    /// XOR `value` into zero-based (row, col).
    fn accumulate(&mut self, row: usize, col: usize, value: &Poly) -> Result<(), MatrixError> {
        if value.is_zero() {
            return Ok(());
        }
        match self {
            Sink::SparseBinary(m) => {
                if to_bit(value)? {
                    m.toggle(row, col);
                }
            }
            Sink::DenseBinary(m) => {
                if to_bit(value)? {
                    m.toggle(row, col);
                }
            }
            Sink::SparsePoly(m) => m.accumulate(row, col, value),
            Sink::DensePoly(m) => m.accumulate(row, col, value),
        }
        Ok(())
    }

    fn finish(self) -> AnyMatrix {
        match self {
            Sink::SparseBinary(m) => m.into(),
            Sink::DenseBinary(m) => m.into(),
            Sink::SparsePoly(mut m) => {
                m.compact();
                m.into()
            }
            Sink::DensePoly(m) => m.into(),
        }
    }
}

/// Ring product `a · b`.
///
/// Element products are carryless polynomial products when either operand
/// holds polynomials, and the result is then a polynomial kind; otherwise
/// the product is over GF(2) and the result is a binary kind.
pub fn mul<A, B>(a: &A, b: &B) -> Result<AnyMatrix, MatrixError>
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
{
    let ring = if a.element_kind() == ElementKind::Polynomial
        || b.element_kind() == ElementKind::Polynomial
    {
        Ring::Polynomial
    } else {
        Ring::Binary
    };
    multiply(a, b, ring)
}

/// Field product `a · b` over GF(2).
///
/// Every element of either operand must be 0 or 1, including elements of
/// polynomial kinds; all of them are checked before any product is formed,
/// so the outcome does not depend on how the operands are stored. The
/// result is always a binary kind.
pub fn mul_gf2<A, B>(a: &A, b: &B) -> Result<AnyMatrix, MatrixError>
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
{
    multiply(a, b, Ring::Binary)
}

fn multiply<A, B>(a: &A, b: &B, ring: Ring) -> Result<AnyMatrix, MatrixError>
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
{
    let (ar, ac) = a.size();
    let (br, bc) = b.size();
    if ac != br {
        return Err(MatrixError::DimensionMismatch {
            lhs_rows: ar,
            lhs_cols: ac,
            rhs_rows: br,
            rhs_cols: bc,
        });
    }

    let (ka, kb) = (a.kind(), b.kind());
    if ring == Ring::Binary {
        check_field_elements(a, &ka)?;
        check_field_elements(b, &kb)?;
    }
    let log = |strategy: &'static str| {
        debug!(
            strategy,
            lhs = ka.name(),
            rhs = kb.name(),
            m = ar,
            k = ac,
            n = bc,
            ?ring,
            "multiplying"
        );
    };

    if matches!(ka, Kind::Zero(_)) || matches!(kb, Kind::Zero(_)) {
        log("zero");
        return Ok(match ring {
            Ring::Binary => Zero::new(ar, bc)?.into(),
            Ring::Polynomial => Sink::sparse(ring, ar, bc)?.finish(),
        });
    }

    if let Some(lhs) = SparseOperand::of(&ka) {
        log("sparse-left");
        return sparse::sparse_left(lhs, b, &kb, ring);
    }

    if let Some(rhs) = SparseOperand::of(&kb) {
        log("sparse-right");
        return sparse::sparse_right(a, &ka, rhs, ring);
    }

    match (&ka, &kb) {
        (Kind::Identity(_), Kind::Identity(_)) if ac >= ar.min(bc) => {
            log("identity");
            return Ok(Identity::new(ar, bc)?.into());
        }
        (Kind::Identity(_), Kind::Identity(_)) => {}
        (Kind::Identity(_), _) => {
            log("identity");
            return resized_product(b, ar, bc, ring);
        }
        (_, Kind::Identity(_)) => {
            log("identity");
            return resized_product(a, ar, bc, ring);
        }
        _ => {}
    }

    if let (Kind::DenseBinary(lhs), Kind::DenseBinary(rhs)) = (&ka, &kb) {
        log("dense-columns");
        return Ok(dense::dense_binary_columns(lhs, rhs)?.into());
    }

    log("dense");
    dense::triple_loop(a, b, ring)
}

/// Reject any element of a polynomial-kind operand outside {0, 1}.
///
/// Runs before dispatch so a field product fails on the same inputs
/// whichever strategy would have been chosen.
fn check_field_elements<M: Matrix + ?Sized>(m: &M, kind: &Kind<'_>) -> Result<(), MatrixError> {
    if m.element_kind() == ElementKind::Binary {
        return Ok(());
    }
    match *kind {
        Kind::SparsePoly(src) => src.iter().try_for_each(|(_, _, p)| to_bit(p).map(drop)),
        Kind::DensePoly(src) => src.iter().try_for_each(|(_, _, p)| to_bit(p).map(drop)),
        _ => {
            let (rows, cols) = m.size();
            for c in 1..=cols {
                for r in 1..=rows {
                    to_bit(m.at(r, c)?)?;
                }
            }
            Ok(())
        }
    }
}

/// `other` resized to the product shape, in the ring's element type.
fn resized_product<M: Matrix + ?Sized>(
    other: &M,
    rows: usize,
    cols: usize,
    ring: Ring,
) -> Result<AnyMatrix, MatrixError> {
    let out = resize(other, rows, cols)?;
    if ring == Ring::Binary && out.element_kind() == ElementKind::Polynomial {
        return Ok(match out {
            AnyMatrix::SparsePoly(ref m) => to_sparse_binary(m)?.into(),
            ref m => to_dense_binary(m)?.into(),
        });
    }
    Ok(out)
}
