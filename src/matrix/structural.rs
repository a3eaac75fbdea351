//! Structural matrices
//!
//! Element (r, c) follows from a closed-form rule; nothing is stored and
//! every mutation is rejected. Convert to a storage kind to modify.

use super::{check_index, check_structural_size, ElementKind, Kind, Matrix};
use crate::{
    algebra::{from_bit, Poly},
    MatrixError,
};

/// A matrix with at most one 1 in every row and every column
///
/// Right-multiplying by it moves column `c` of the left operand to
/// `target_column(c)`; left-multiplying moves row `r` of the right operand
/// to `target_row(r)`. `None` means the line is dropped. All indices are
/// zero-based.
pub(crate) trait PartialPermutation {
    fn target_column(&self, col: usize) -> Option<usize>;
    fn target_row(&self, row: usize) -> Option<usize>;
}

fn immutable<T>(name: &'static str) -> Result<T, MatrixError> {
    Err(MatrixError::Immutable(name))
}

/// Rectangular identity: 1 where row == col
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    rows: usize,
    cols: usize,
}

impl Identity {
    /// Identity of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        check_structural_size(rows, cols)?;
        Ok(Self { rows, cols })
    }

    /// Zero-based diagonal coordinates.
    pub fn ones(&self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.rows.min(self.cols)).map(|k| (k, k))
    }
}

impl PartialPermutation for Identity {
    fn target_column(&self, col: usize) -> Option<usize> {
        (col < self.cols).then_some(col)
    }

    fn target_row(&self, row: usize) -> Option<usize> {
        (row < self.rows).then_some(row)
    }
}

impl Matrix for Identity {
    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::Binary
    }

    fn at(&self, row: usize, col: usize) -> Result<&Poly, MatrixError> {
        let (r, c) = check_index(row, col, self.rows, self.cols)?;
        Ok(from_bit(r == c))
    }

    fn set_at(&mut self, _row: usize, _col: usize, _value: Poly) -> Result<(), MatrixError> {
        immutable("identity")
    }

    fn add_at(&mut self, _row: usize, _col: usize, _value: &Poly) -> Result<&Poly, MatrixError> {
        immutable("identity")
    }

    fn mul_at(&mut self, _row: usize, _col: usize, _value: &Poly) -> Result<&Poly, MatrixError> {
        immutable("identity")
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Identity(self)
    }
}

/// Rectangular zero matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zero {
    rows: usize,
    cols: usize,
}

impl Zero {
    /// Zero matrix of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        check_structural_size(rows, cols)?;
        Ok(Self { rows, cols })
    }
}

impl Matrix for Zero {
    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::Binary
    }

    fn at(&self, row: usize, col: usize) -> Result<&Poly, MatrixError> {
        check_index(row, col, self.rows, self.cols)?;
        Ok(from_bit(false))
    }

    fn set_at(&mut self, _row: usize, _col: usize, _value: Poly) -> Result<(), MatrixError> {
        immutable("zero")
    }

    fn add_at(&mut self, _row: usize, _col: usize, _value: &Poly) -> Result<&Poly, MatrixError> {
        immutable("zero")
    }

    fn mul_at(&mut self, _row: usize, _col: usize, _value: &Poly) -> Result<&Poly, MatrixError> {
        immutable("zero")
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Zero(self)
    }
}

/// Square rotation matrix R(n)
///
/// `At(r, c) = 1` iff `((r - 1 + n) mod size) + 1 == c`. As a right
/// multiplicand it moves column `c` of each row to `(c + n) mod size`.
/// R(n) = R(1)^n.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    size: usize,
    /// Reduced into `[0, size)`.
    shift: usize,
}

impl Rotation {
    /// Rotation by `shift` positions; any integer is reduced mod `size`.
    ///
    /// `size` may not exceed `isize::MAX`.
    pub fn new(size: usize, shift: isize) -> Result<Self, MatrixError> {
        check_structural_size(size, size)?;
        let modulus = isize::try_from(size).map_err(|_| MatrixError::DimensionTooLarge {
            rows: size,
            cols: size,
        })?;
        let shift = shift.rem_euclid(modulus) as usize;
        Ok(Self { size, shift })
    }

    /// Rotation amount in `[0, size)`.
    pub fn shift(&self) -> usize {
        self.shift
    }

    /// Zero-based coordinates of the ones.
    pub fn ones(&self) -> impl Iterator<Item = (usize, usize)> {
        let (size, shift) = (self.size, self.shift);
        (0..size).map(move |r| (r, (r + shift) % size))
    }
}

impl PartialPermutation for Rotation {
    fn target_column(&self, col: usize) -> Option<usize> {
        Some((col + self.shift) % self.size)
    }

    fn target_row(&self, row: usize) -> Option<usize> {
        Some((row + self.size - self.shift) % self.size)
    }
}

impl Matrix for Rotation {
    fn size(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::Binary
    }

    fn at(&self, row: usize, col: usize) -> Result<&Poly, MatrixError> {
        let (r, c) = check_index(row, col, self.size, self.size)?;
        Ok(from_bit((r + self.shift) % self.size == c))
    }

    fn set_at(&mut self, _row: usize, _col: usize, _value: Poly) -> Result<(), MatrixError> {
        immutable("rotation")
    }

    fn add_at(&mut self, _row: usize, _col: usize, _value: &Poly) -> Result<&Poly, MatrixError> {
        immutable("rotation")
    }

    fn mul_at(&mut self, _row: usize, _col: usize, _value: &Poly) -> Result<&Poly, MatrixError> {
        immutable("rotation")
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Rotation(self)
    }
}

/// Square shift matrix S(n)
///
/// `At(r, c) = 1` iff `r + n == c`. As a right multiplicand it moves column
/// `c` of each row to `c + n`, dropping whatever leaves the row and
/// zero-filling the vacated end. Negative `n` shifts the other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    size: usize,
    shift: isize,
}

impl Shift {
    /// Shift by `shift` positions. `|shift| >= size` gives a zero matrix.
    pub fn new(size: usize, shift: isize) -> Result<Self, MatrixError> {
        check_structural_size(size, size)?;
        Ok(Self { size, shift })
    }

    /// Shift amount as given.
    pub fn shift(&self) -> isize {
        self.shift
    }

    /// Zero-based coordinates of the ones.
    pub fn ones(&self) -> impl Iterator<Item = (usize, usize)> {
        let (size, shift) = (self.size, self.shift);
        let first = if shift < 0 {
            shift.unsigned_abs().min(size)
        } else {
            0
        };
        let end = if shift > 0 {
            size.saturating_sub(shift as usize)
        } else {
            size
        };
        (first..end.max(first)).map(move |r| (r, r.wrapping_add_signed(shift)))
    }

    fn offset(&self, index: usize, delta: isize) -> Option<usize> {
        index.checked_add_signed(delta).filter(|&i| i < self.size)
    }
}

impl PartialPermutation for Shift {
    fn target_column(&self, col: usize) -> Option<usize> {
        self.offset(col, self.shift)
    }

    fn target_row(&self, row: usize) -> Option<usize> {
        self.offset(row, self.shift.checked_neg()?)
    }
}

impl Matrix for Shift {
    fn size(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::Binary
    }

    fn at(&self, row: usize, col: usize) -> Result<&Poly, MatrixError> {
        let (r, c) = check_index(row, col, self.size, self.size)?;
        Ok(from_bit(self.offset(r, self.shift) == Some(c)))
    }

    fn set_at(&mut self, _row: usize, _col: usize, _value: Poly) -> Result<(), MatrixError> {
        immutable("shift")
    }

    fn add_at(&mut self, _row: usize, _col: usize, _value: &Poly) -> Result<&Poly, MatrixError> {
        immutable("shift")
    }

    fn mul_at(&mut self, _row: usize, _col: usize, _value: &Poly) -> Result<&Poly, MatrixError> {
        immutable("shift")
    }

    fn kind(&self) -> Kind<'_> {
        Kind::Shift(self)
    }
}
