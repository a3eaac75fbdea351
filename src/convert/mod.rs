//! Representation converters
//!
//! Each converter accepts any [`Matrix`] and returns independent storage.
//! Known source kinds take a fast path:
//! - storage kinds: visit only stored (non-zero) cells
//! - structural kinds: visit only the ones given by the closed-form rule
//! - anything else: read all rows × cols cells through `at`
//!
//! Converting into a binary kind rejects any element of degree ≥ 1 other
//! than 1 (see [`crate::algebra::to_bit`]).

mod resize;

pub use resize::resize;

use tracing::trace;

use crate::{
    algebra::{to_bit, Poly},
    matrix::{
        check_storage_size, DenseBinary, DensePoly, Kind, Matrix, SparseBinary, SparsePoly,
    },
    MatrixError,
};

/// Visit every zero-based cell of `m` through element access.
fn for_each_cell<M, F>(m: &M, mut visit: F) -> Result<(), MatrixError>
where
    M: Matrix + ?Sized,
    F: FnMut(usize, usize, &Poly) -> Result<(), MatrixError>,
{
    let (rows, cols) = m.size();
    for c in 0..cols {
        for r in 0..rows {
            visit(r, c, m.at(r + 1, c + 1)?)?;
        }
    }
    Ok(())
}

/// Convert any matrix into a new [`SparseBinary`].
pub fn to_sparse_binary<M: Matrix + ?Sized>(m: &M) -> Result<SparseBinary, MatrixError> {
    let (rows, cols) = m.size();
    check_storage_size(rows, cols)?;
    let kind = m.kind();
    trace!(source = kind.name(), rows, cols, "converting to sparse-binary");

    if let Kind::SparseBinary(src) = kind {
        return Ok(src.clone());
    }

    let mut out = SparseBinary::new(rows, cols)?;
    match kind {
        Kind::DenseBinary(src) => src.iter_ones().for_each(|(r, c)| out.insert(r, c)),
        Kind::SparsePoly(src) => {
            for (r, c, p) in src.iter() {
                if to_bit(p)? {
                    out.insert(r, c);
                }
            }
        }
        Kind::DensePoly(src) => {
            for (r, c, p) in src.iter() {
                if to_bit(p)? {
                    out.insert(r, c);
                }
            }
        }
        _ => match kind.structural_ones() {
            Some(ones) => ones.for_each(|(r, c)| out.insert(r, c)),
            None => for_each_cell(m, |r, c, p| {
                if to_bit(p)? {
                    out.insert(r, c);
                }
                Ok(())
            })?,
        },
    }
    Ok(out)
}

/// Convert any matrix into a new [`DenseBinary`].
pub fn to_dense_binary<M: Matrix + ?Sized>(m: &M) -> Result<DenseBinary, MatrixError> {
    let (rows, cols) = m.size();
    check_storage_size(rows, cols)?;
    let kind = m.kind();
    trace!(source = kind.name(), rows, cols, "converting to dense-binary");

    if let Kind::DenseBinary(src) = kind {
        return Ok(src.clone());
    }

    let mut out = DenseBinary::new(rows, cols)?;
    match kind {
        Kind::SparseBinary(src) => src.iter_ones().for_each(|(r, c)| out.put(r, c, true)),
        Kind::SparsePoly(src) => {
            for (r, c, p) in src.iter() {
                out.put(r, c, to_bit(p)?);
            }
        }
        Kind::DensePoly(src) => {
            for (r, c, p) in src.iter() {
                out.put(r, c, to_bit(p)?);
            }
        }
        _ => match kind.structural_ones() {
            Some(ones) => ones.for_each(|(r, c)| out.put(r, c, true)),
            None => for_each_cell(m, |r, c, p| {
                out.put(r, c, to_bit(p)?);
                Ok(())
            })?,
        },
    }
    Ok(out)
}

/// Convert any matrix into a new [`SparsePoly`] holding no zero entries.
pub fn to_sparse_poly<M: Matrix + ?Sized>(m: &M) -> Result<SparsePoly, MatrixError> {
    let (rows, cols) = m.size();
    check_storage_size(rows, cols)?;
    let kind = m.kind();
    trace!(source = kind.name(), rows, cols, "converting to sparse-poly");

    let mut out = SparsePoly::new(rows, cols)?;
    match kind {
        Kind::SparseBinary(src) => src
            .iter_ones()
            .for_each(|(r, c)| out.insert(r, c, Poly::one())),
        Kind::DenseBinary(src) => src
            .iter_ones()
            .for_each(|(r, c)| out.insert(r, c, Poly::one())),
        Kind::SparsePoly(src) => src
            .iter()
            .for_each(|(r, c, p)| out.insert(r, c, p.clone())),
        Kind::DensePoly(src) => src
            .iter()
            .for_each(|(r, c, p)| out.insert(r, c, p.clone())),
        _ => match kind.structural_ones() {
            Some(ones) => ones.for_each(|(r, c)| out.insert(r, c, Poly::one())),
            None => for_each_cell(m, |r, c, p| {
                out.insert(r, c, p.clone());
                Ok(())
            })?,
        },
    }
    Ok(out)
}

/// Convert any matrix into a new [`DensePoly`].
pub fn to_dense_poly<M: Matrix + ?Sized>(m: &M) -> Result<DensePoly, MatrixError> {
    let (rows, cols) = m.size();
    check_storage_size(rows, cols)?;
    let kind = m.kind();
    trace!(source = kind.name(), rows, cols, "converting to dense-poly");

    if let Kind::DensePoly(src) = kind {
        return Ok(src.clone());
    }

    let mut out = DensePoly::new(rows, cols)?;
    match kind {
        Kind::SparseBinary(src) => src
            .iter_ones()
            .for_each(|(r, c)| out.put(r, c, Poly::one())),
        Kind::DenseBinary(src) => src
            .iter_ones()
            .for_each(|(r, c)| out.put(r, c, Poly::one())),
        Kind::SparsePoly(src) => src
            .iter()
            .for_each(|(r, c, p)| out.put(r, c, p.clone())),
        _ => match kind.structural_ones() {
            Some(ones) => ones.for_each(|(r, c)| out.put(r, c, Poly::one())),
            None => for_each_cell(m, |r, c, p| {
                out.put(r, c, p.clone());
                Ok(())
            })?,
        },
    }
    Ok(out)
}
