//! Dense binary matrix
//!
//! One packed bit per cell, column-major: bit `col * rows + row`.
//! Space: rows × cols bits plus one guard bit.

use bitvec::prelude::*;

use super::{check_index, check_storage_size, ElementKind, Kind, Matrix};
use crate::{
    algebra::{from_bit, to_bit, Poly},
    MatrixError,
};

/// Dense matrix of binary elements, up to 65,535 × 65,535
///
/// Cheaper than [`super::SparseBinary`] once more than a small fraction of
/// cells are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseBinary {
    rows: usize,
    cols: usize,
    /// Cell bits followed by the guard bit at index `rows * cols`, which is
    /// always set and never reachable through a matrix index.
    bits: BitVec,
}

impl DenseBinary {
    /// Zero matrix of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        check_storage_size(rows, cols)?;
        let cells = rows * cols;
        let mut bits = bitvec![0; cells + 1];
        bits.set(cells, true);
        Ok(Self { rows, cols, bits })
    }

    #[inline]
    fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits[..self.cells()].count_ones()
    }

    /// Zero-based coordinates of the set bits, column by column.
    pub fn iter_ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let rows = self.rows;
        self.bits[..self.cells()]
            .iter_ones()
            .map(move |idx| (idx % rows, idx / rows))
    }

    /// Packed bits of one zero-based column.
    pub fn column(&self, col: usize) -> &BitSlice {
        debug_assert!(col < self.cols);
        let start = col * self.rows;
        &self.bits[start..start + self.rows]
    }

    /// Write a zero-based bit already known to be in range.
    pub(crate) fn put(&mut self, row: usize, col: usize, bit: bool) {
        debug_assert!(row < self.rows && col < self.cols);
        self.bits.set(col * self.rows + row, bit);
    }

    /// Flip a zero-based bit already known to be in range.
    pub(crate) fn toggle(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.rows && col < self.cols);
        let idx = col * self.rows + row;
        let bit = self.bits[idx];
        self.bits.set(idx, !bit);
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        let (r, c) = check_index(row, col, self.rows, self.cols)?;
        Ok(c * self.rows + r)
    }
}

impl Matrix for DenseBinary {
    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::Binary
    }

    fn at(&self, row: usize, col: usize) -> Result<&Poly, MatrixError> {
        let idx = self.index(row, col)?;
        Ok(from_bit(self.bits[idx]))
    }

    fn set_at(&mut self, row: usize, col: usize, value: Poly) -> Result<(), MatrixError> {
        let idx = self.index(row, col)?;
        let bit = to_bit(&value)?;
        self.bits.set(idx, bit);
        Ok(())
    }

    fn add_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError> {
        let idx = self.index(row, col)?;
        let bit = self.bits[idx] ^ to_bit(value)?;
        self.bits.set(idx, bit);
        Ok(from_bit(bit))
    }

    fn mul_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError> {
        let idx = self.index(row, col)?;
        let bit = self.bits[idx] & to_bit(value)?;
        self.bits.set(idx, bit);
        Ok(from_bit(bit))
    }

    fn kind(&self) -> Kind<'_> {
        Kind::DenseBinary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_major_layout() {
        let mut m = DenseBinary::new(2, 3).unwrap();
        m.set_at(2, 1, Poly::one()).unwrap();
        m.set_at(1, 3, Poly::one()).unwrap();
        assert!(m.bits[1]);
        assert!(m.bits[4]);
        assert_eq!(m.iter_ones().collect::<Vec<_>>(), vec![(1, 0), (0, 2)]);
        assert_eq!(m.column(2).count_ones(), 1);
    }

    #[test]
    fn test_guard_bit_is_never_exposed() {
        let m = DenseBinary::new(3, 3).unwrap();
        assert!(m.bits[9]);
        assert_eq!(m.count_ones(), 0);
        assert_eq!(m.iter_ones().count(), 0);
        assert!(m.at(4, 1).is_err());
        assert!(m.at(1, 4).is_err());
    }

    #[test]
    fn test_add_and_mul() {
        let mut m = DenseBinary::new(1, 1).unwrap();
        assert!(m.add_at(1, 1, &Poly::one()).unwrap().is_one());
        assert!(m.mul_at(1, 1, &Poly::one()).unwrap().is_one());
        assert!(m.mul_at(1, 1, &Poly::zero()).unwrap().is_zero());
        assert!(m.add_at(1, 1, &Poly::from_u64(0b10)).is_err());
        assert!(m.at(1, 1).unwrap().is_zero());
    }
}
