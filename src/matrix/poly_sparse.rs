//! Sparse polynomial matrix
//!
//! `set_at` keeps storage free of zeros. `add_at`, `mul_at` and `slot_mut`
//! insert a zero slot when the cell is absent and operate on it in place,
//! so they may leave an explicit zero behind; [`SparsePoly::compact`]
//! drops those again.

use std::collections::HashMap;

use super::{check_index, check_storage_size, Coord, ElementKind, Kind, Matrix};
use crate::{
    algebra::{Poly, ZERO},
    MatrixError,
};

/// Sparse matrix of polynomials, up to 65,535 × 65,535
#[derive(Debug, Clone)]
pub struct SparsePoly {
    rows: usize,
    cols: usize,
    entries: HashMap<Coord, Poly>,
}

impl SparsePoly {
    /// Zero matrix of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        check_storage_size(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            entries: HashMap::new(),
        })
    }

    /// Number of stored entries, including explicit zeros.
    pub fn stored_len(&self) -> usize {
        self.entries.len()
    }

    /// Number of non-zero elements.
    pub fn count_nonzero(&self) -> usize {
        self.entries.values().filter(|p| !p.is_zero()).count()
    }

    /// Drop stored entries whose value is zero.
    pub fn compact(&mut self) {
        self.entries.retain(|_, p| !p.is_zero());
    }

    /// Zero-based non-zero entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Poly)> + '_ {
        self.entries
            .iter()
            .filter(|(_, p)| !p.is_zero())
            .map(|(coord, p)| {
                let (r, c) = coord.indices();
                (r, c, p)
            })
    }

    /// Mutable slot at (`row`, `col`), inserting a zero if absent.
    ///
    /// Changes made through the slot are the matrix's element.
    pub fn slot_mut(&mut self, row: usize, col: usize) -> Result<&mut Poly, MatrixError> {
        let coord = self.coord(row, col)?;
        Ok(self.entries.entry(coord).or_default())
    }

    /// Store a zero-based non-zero element already known to be in range.
    pub(crate) fn insert(&mut self, row: usize, col: usize, value: Poly) {
        if !value.is_zero() {
            self.entries.insert(Coord::new(row, col), value);
        }
    }

    /// Add into a zero-based cell already known to be in range.
    pub(crate) fn accumulate(&mut self, row: usize, col: usize, value: &Poly) {
        *self.entries.entry(Coord::new(row, col)).or_default() += value;
    }

    fn coord(&self, row: usize, col: usize) -> Result<Coord, MatrixError> {
        let (r, c) = check_index(row, col, self.rows, self.cols)?;
        Ok(Coord::new(r, c))
    }
}

impl PartialEq for SparsePoly {
    /// Element-wise: explicit zero entries do not count.
    fn eq(&self, other: &Self) -> bool {
        (self.rows, self.cols) == (other.rows, other.cols)
            && self.count_nonzero() == other.count_nonzero()
            && self
                .iter()
                .all(|(r, c, p)| other.entries.get(&Coord::new(r, c)) == Some(p))
    }
}

impl Eq for SparsePoly {}

impl Matrix for SparsePoly {
    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::Polynomial
    }

    /// The stored polynomial, or the shared zero when the cell is absent.
    fn at(&self, row: usize, col: usize) -> Result<&Poly, MatrixError> {
        let coord = self.coord(row, col)?;
        Ok(self.entries.get(&coord).unwrap_or(&ZERO))
    }

    /// Takes ownership of `value`; zero removes the cell.
    fn set_at(&mut self, row: usize, col: usize, value: Poly) -> Result<(), MatrixError> {
        let coord = self.coord(row, col)?;
        if value.is_zero() {
            self.entries.remove(&coord);
        } else {
            self.entries.insert(coord, value);
        }
        Ok(())
    }

    /// Always returns the stored slot, even when the sum is zero.
    fn add_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError> {
        let slot = self.slot_mut(row, col)?;
        *slot += value;
        Ok(&*slot)
    }

    /// Always returns the stored slot; an absent cell stays zero.
    fn mul_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError> {
        let slot = self.slot_mut(row, col)?;
        *slot *= value;
        Ok(&*slot)
    }

    fn kind(&self) -> Kind<'_> {
        Kind::SparsePoly(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_zero_removes_entry() {
        let mut m = SparsePoly::new(2, 2).unwrap();
        m.set_at(1, 2, Poly::from_u64(0b110)).unwrap();
        assert_eq!(m.stored_len(), 1);
        assert_eq!(m.at(1, 2).unwrap(), &Poly::from_u64(0b110));
        m.set_at(1, 2, Poly::zero()).unwrap();
        assert_eq!(m.stored_len(), 0);
    }

    #[test]
    fn test_add_self_leaves_explicit_zero() {
        let mut m = SparsePoly::new(2, 2).unwrap();
        let p = Poly::from_u64(0b101);
        m.set_at(1, 1, p.clone()).unwrap();
        assert!(m.add_at(1, 1, &p).unwrap().is_zero());
        assert!(m.at(1, 1).unwrap().is_zero());
        assert_eq!(m.stored_len(), 1);
        assert_eq!(m.count_nonzero(), 0);

        m.compact();
        assert_eq!(m.stored_len(), 0);
        assert!(m.at(1, 1).unwrap().is_zero());
    }

    #[test]
    fn test_mul_convolves_in_place() {
        let mut m = SparsePoly::new(1, 1).unwrap();
        assert!(m.mul_at(1, 1, &Poly::from_u64(0b11)).unwrap().is_zero());
        m.set_at(1, 1, Poly::from_u64(0b11)).unwrap();
        let out = m.mul_at(1, 1, &Poly::from_u64(0b11)).unwrap().clone();
        assert_eq!(out, Poly::from_u64(0b101));
        assert_eq!(m.at(1, 1).unwrap(), &out);
    }

    #[test]
    fn test_slot_mut_is_the_element() {
        let mut m = SparsePoly::new(3, 3).unwrap();
        m.slot_mut(2, 3).unwrap().set_bit(5, true);
        assert_eq!(m.at(2, 3).unwrap(), &Poly::monomial(5));
        assert!(m.slot_mut(4, 1).is_err());
    }

    #[test]
    fn test_equality_ignores_explicit_zeros() {
        let mut a = SparsePoly::new(2, 2).unwrap();
        let b = SparsePoly::new(2, 2).unwrap();
        a.add_at(2, 2, &Poly::zero()).unwrap();
        assert_eq!(a.stored_len(), 1);
        assert_eq!(a, b);
    }
}
