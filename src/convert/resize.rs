//! Copy a matrix into a new size
//!
//! The overlapping top-left region is copied; anything new is zero.
//! Multiplying by a rectangular identity is exactly this operation.

use tracing::trace;

use crate::{
    algebra::{to_bit, Poly},
    matrix::{
        check_storage_size, AnyMatrix, DenseBinary, DensePoly, ElementKind, Identity, Kind,
        Matrix, SparseBinary, SparsePoly, Zero,
    },
    MatrixError,
};

/// Copy `m` into a new `rows` × `cols` matrix of the same kind.
///
/// Identity and zero stay structural. Rotation, shift and foreign kinds
/// become dense storage of their element type.
pub fn resize<M: Matrix + ?Sized>(
    m: &M,
    rows: usize,
    cols: usize,
) -> Result<AnyMatrix, MatrixError> {
    let kind = m.kind();
    trace!(source = kind.name(), rows, cols, "resizing");
    let (src_rows, src_cols) = m.size();
    let keep = |r: usize, c: usize| r < rows && c < cols;

    match kind {
        Kind::Identity(_) => return Ok(Identity::new(rows, cols)?.into()),
        Kind::Zero(_) => return Ok(Zero::new(rows, cols)?.into()),
        _ => check_storage_size(rows, cols)?,
    }

    let out: AnyMatrix = match kind {
        Kind::SparseBinary(src) => {
            let mut out = SparseBinary::new(rows, cols)?;
            src.iter_ones()
                .filter(|&(r, c)| keep(r, c))
                .for_each(|(r, c)| out.insert(r, c));
            out.into()
        }
        Kind::DenseBinary(src) => {
            let mut out = DenseBinary::new(rows, cols)?;
            src.iter_ones()
                .filter(|&(r, c)| keep(r, c))
                .for_each(|(r, c)| out.put(r, c, true));
            out.into()
        }
        Kind::SparsePoly(src) => {
            let mut out = SparsePoly::new(rows, cols)?;
            src.iter()
                .filter(|&(r, c, _)| keep(r, c))
                .for_each(|(r, c, p)| out.insert(r, c, p.clone()));
            out.into()
        }
        Kind::DensePoly(src) => {
            let mut out = DensePoly::new(rows, cols)?;
            src.iter()
                .filter(|&(r, c, _)| keep(r, c))
                .for_each(|(r, c, p)| out.put(r, c, p.clone()));
            out.into()
        }
        _ => match (kind.structural_ones(), m.element_kind()) {
            (Some(ones), _) => {
                let mut out = DenseBinary::new(rows, cols)?;
                ones.filter(|&(r, c)| keep(r, c))
                    .for_each(|(r, c)| out.put(r, c, true));
                out.into()
            }
            (None, ElementKind::Binary) => {
                let mut out = DenseBinary::new(rows, cols)?;
                for c in 0..src_cols.min(cols) {
                    for r in 0..src_rows.min(rows) {
                        out.put(r, c, to_bit(m.at(r + 1, c + 1)?)?);
                    }
                }
                out.into()
            }
            (None, ElementKind::Polynomial) => {
                let mut out = DensePoly::new(rows, cols)?;
                for c in 0..src_cols.min(cols) {
                    for r in 0..src_rows.min(rows) {
                        let p: &Poly = m.at(r + 1, c + 1)?;
                        out.put(r, c, p.clone());
                    }
                }
                out.into()
            }
        },
    };
    Ok(out)
}
