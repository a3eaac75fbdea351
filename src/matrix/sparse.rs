//! Sparse binary matrix
//!
//! Only the coordinates of set bits are stored.

use std::collections::HashSet;

use super::{check_index, check_storage_size, Coord, ElementKind, Kind, Matrix};
use crate::{
    algebra::{from_bit, to_bit, Poly},
    MatrixError,
};

/// Sparse matrix of binary elements, up to 65,535 × 65,535
///
/// A cleared bit is removed from storage, so the footprint tracks the
/// number of ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseBinary {
    rows: usize,
    cols: usize,
    ones: HashSet<Coord>,
}

impl SparseBinary {
    /// Zero matrix of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        check_storage_size(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            ones: HashSet::new(),
        })
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.ones.len()
    }

    /// Zero-based coordinates of the set bits, in no particular order.
    pub fn iter_ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ones.iter().map(|coord| coord.indices())
    }

    /// Set a zero-based bit already known to be in range.
    pub(crate) fn insert(&mut self, row: usize, col: usize) {
        self.ones.insert(Coord::new(row, col));
    }

    /// Flip a zero-based bit already known to be in range.
    pub(crate) fn toggle(&mut self, row: usize, col: usize) {
        let coord = Coord::new(row, col);
        if !self.ones.remove(&coord) {
            self.ones.insert(coord);
        }
    }

    fn coord(&self, row: usize, col: usize) -> Result<Coord, MatrixError> {
        let (r, c) = check_index(row, col, self.rows, self.cols)?;
        Ok(Coord::new(r, c))
    }
}

impl Matrix for SparseBinary {
    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::Binary
    }

    fn at(&self, row: usize, col: usize) -> Result<&Poly, MatrixError> {
        let coord = self.coord(row, col)?;
        Ok(from_bit(self.ones.contains(&coord)))
    }

    fn set_at(&mut self, row: usize, col: usize, value: Poly) -> Result<(), MatrixError> {
        let coord = self.coord(row, col)?;
        if to_bit(&value)? {
            self.ones.insert(coord);
        } else {
            self.ones.remove(&coord);
        }
        Ok(())
    }

    fn add_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError> {
        let coord = self.coord(row, col)?;
        if to_bit(value)? {
            self.toggle(coord.row as usize, coord.col as usize);
        }
        Ok(from_bit(self.ones.contains(&coord)))
    }

    fn mul_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError> {
        let coord = self.coord(row, col)?;
        if !to_bit(value)? {
            self.ones.remove(&coord);
        }
        Ok(from_bit(self.ones.contains(&coord)))
    }

    fn kind(&self) -> Kind<'_> {
        Kind::SparseBinary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read() {
        let mut m = SparseBinary::new(3, 4).unwrap();
        m.set_at(2, 4, Poly::one()).unwrap();
        assert!(m.at(2, 4).unwrap().is_one());
        assert!(m.at(3, 1).unwrap().is_zero());
        assert_eq!(m.iter_ones().collect::<Vec<_>>(), vec![(1, 3)]);

        m.set_at(2, 4, Poly::zero()).unwrap();
        assert_eq!(m.count_ones(), 0);
    }

    #[test]
    fn test_add_is_xor_and_mul_is_and() {
        let mut m = SparseBinary::new(2, 2).unwrap();
        assert!(m.add_at(1, 1, &Poly::one()).unwrap().is_one());
        assert!(m.mul_at(1, 1, &Poly::one()).unwrap().is_one());
        assert!(m.add_at(1, 1, &Poly::one()).unwrap().is_zero());

        m.set_at(1, 2, Poly::one()).unwrap();
        assert!(m.mul_at(1, 2, &Poly::zero()).unwrap().is_zero());
        assert_eq!(m.count_ones(), 0);
    }

    #[test]
    fn test_failed_write_leaves_state() {
        let mut m = SparseBinary::new(2, 2).unwrap();
        m.set_at(1, 1, Poly::one()).unwrap();
        assert!(matches!(
            m.add_at(1, 1, &Poly::from_u64(0b11)),
            Err(MatrixError::NonBinaryElement(_))
        ));
        assert!(m.at(1, 1).unwrap().is_one());
        assert!(m.set_at(3, 1, Poly::one()).is_err());
        assert_eq!(m.count_ones(), 1);
    }

    #[test]
    fn test_size_limits() {
        assert!(SparseBinary::new(65_535, 65_535).is_ok());
        assert!(SparseBinary::new(65_536, 1).is_err());
        assert!(SparseBinary::new(1, 0).is_err());
    }
}
