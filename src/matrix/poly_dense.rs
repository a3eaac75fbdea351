//! Dense polynomial matrix
//!
//! One polynomial slot per cell, column-major, all allocated up front.

use super::{check_index, check_storage_size, ElementKind, Kind, Matrix};
use crate::{algebra::Poly, MatrixError};

/// Dense matrix of polynomials, up to 65,535 × 65,535
///
/// Reads return the stored element itself, never a copy. Every mutation
/// (`set_at`, `add_at`, `mul_at`, `slot_mut`) acts on that same slot in
/// place, and the reference returned by `add_at`/`mul_at` is the slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DensePoly {
    rows: usize,
    cols: usize,
    cells: Vec<Poly>,
}

impl DensePoly {
    /// Zero matrix of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        check_storage_size(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Poly::zero(); rows * cols],
        })
    }

    /// Number of non-zero elements.
    pub fn count_nonzero(&self) -> usize {
        self.cells.iter().filter(|p| !p.is_zero()).count()
    }

    /// Zero-based non-zero entries, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Poly)> + '_ {
        let rows = self.rows;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_zero())
            .map(move |(idx, p)| (idx % rows, idx / rows, p))
    }

    /// Mutable slot at (`row`, `col`).
    pub fn slot_mut(&mut self, row: usize, col: usize) -> Result<&mut Poly, MatrixError> {
        let idx = self.index(row, col)?;
        Ok(&mut self.cells[idx])
    }

    /// Write a zero-based cell already known to be in range.
    pub(crate) fn put(&mut self, row: usize, col: usize, value: Poly) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[col * self.rows + row] = value;
    }

    /// Add into a zero-based cell already known to be in range.
    pub(crate) fn accumulate(&mut self, row: usize, col: usize, value: &Poly) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[col * self.rows + row] += value;
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        let (r, c) = check_index(row, col, self.rows, self.cols)?;
        Ok(c * self.rows + r)
    }
}

impl Matrix for DensePoly {
    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::Polynomial
    }

    fn at(&self, row: usize, col: usize) -> Result<&Poly, MatrixError> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Takes ownership of `value` as the new slot contents.
    fn set_at(&mut self, row: usize, col: usize, value: Poly) -> Result<(), MatrixError> {
        *self.slot_mut(row, col)? = value;
        Ok(())
    }

    fn add_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError> {
        let slot = self.slot_mut(row, col)?;
        *slot += value;
        Ok(&*slot)
    }

    fn mul_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError> {
        let slot = self.slot_mut(row, col)?;
        *slot *= value;
        Ok(&*slot)
    }

    fn kind(&self) -> Kind<'_> {
        Kind::DensePoly(self)
    }
}
