//! Matrix contract and the closed set of matrix kinds
//!
//! Indices at this interface are 1-based. Storage kinds keep zero-based
//! [`Coord`] keys internally.

mod dense;
mod poly_dense;
mod poly_sparse;
mod sparse;
mod structural;

pub use dense::DenseBinary;
pub use poly_dense::DensePoly;
pub use poly_sparse::SparsePoly;
pub use sparse::SparseBinary;
pub use structural::{Identity, Rotation, Shift, Zero};

pub(crate) use structural::PartialPermutation;

use crate::{algebra::Poly, MatrixError, MAX_DIMENSION};

/// Element type held by a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Only 0 and 1; writes of anything else are rejected
    Binary,
    /// Arbitrary polynomials over GF(2)
    Polynomial,
}

/// Run-time view of a matrix's concrete kind
///
/// Converters and the multiplication engine match on this to select fast
/// paths. Matrices defined outside this crate report [`Kind::Other`] and
/// are handled through element access alone.
#[derive(Debug, Clone, Copy)]
pub enum Kind<'a> {
    /// Sparse binary storage
    SparseBinary(&'a SparseBinary),
    /// Packed binary storage
    DenseBinary(&'a DenseBinary),
    /// Sparse polynomial storage
    SparsePoly(&'a SparsePoly),
    /// Dense polynomial storage
    DensePoly(&'a DensePoly),
    /// Rectangular identity
    Identity(&'a Identity),
    /// Zero matrix
    Zero(&'a Zero),
    /// Row rotation
    Rotation(&'a Rotation),
    /// Row shift
    Shift(&'a Shift),
    /// Any other implementation of [`Matrix`]
    Other,
}

impl<'a> Kind<'a> {
    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::SparseBinary(_) => "sparse-binary",
            Kind::DenseBinary(_) => "dense-binary",
            Kind::SparsePoly(_) => "sparse-poly",
            Kind::DensePoly(_) => "dense-poly",
            Kind::Identity(_) => "identity",
            Kind::Zero(_) => "zero",
            Kind::Rotation(_) => "rotation",
            Kind::Shift(_) => "shift",
            Kind::Other => "other",
        }
    }

    /// Zero-based coordinates of the non-zero cells of a structural kind,
    /// computed from its closed-form rule.
    pub fn structural_ones(&self) -> Option<Box<dyn Iterator<Item = (usize, usize)> + 'a>> {
        match *self {
            Kind::Identity(m) => Some(Box::new(m.ones())),
            Kind::Zero(_) => Some(Box::new(std::iter::empty())),
            Kind::Rotation(m) => Some(Box::new(m.ones())),
            Kind::Shift(m) => Some(Box::new(m.ones())),
            _ => None,
        }
    }

    /// Identity, rotation and shift: at most one 1 per row and column.
    pub(crate) fn as_permutation(&self) -> Option<&'a dyn PartialPermutation> {
        match *self {
            Kind::Identity(m) => Some(m),
            Kind::Rotation(m) => Some(m),
            Kind::Shift(m) => Some(m),
            _ => None,
        }
    }
}

/// Element access shared by every matrix kind
///
/// All indices are 1-based; anything outside `[1, rows] × [1, cols]` is a
/// bounds violation. Binary-element kinds return the shared constants
/// [`crate::algebra::ZERO`] and [`crate::algebra::ONE`] from every read.
pub trait Matrix {
    /// Number of rows and columns.
    fn size(&self) -> (usize, usize);

    /// Element type held by this matrix.
    fn element_kind(&self) -> ElementKind;

    /// Element at (`row`, `col`).
    fn at(&self, row: usize, col: usize) -> Result<&Poly, MatrixError>;

    /// Replace the element at (`row`, `col`). Binary kinds reject anything
    /// other than 0 or 1.
    fn set_at(&mut self, row: usize, col: usize, value: Poly) -> Result<(), MatrixError>;

    /// Add `value` into the element at (`row`, `col`) and return the result.
    fn add_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError>;

    /// Multiply the element at (`row`, `col`) by `value` and return the result.
    fn mul_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError>;

    /// Concrete kind, for fast-path selection.
    fn kind(&self) -> Kind<'_> {
        Kind::Other
    }
}

/// Zero-based composite key for sparse storage
///
/// Each field is bounded by [`MAX_DIMENSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Zero-based row
    pub row: u16,
    /// Zero-based column
    pub col: u16,
}

impl Coord {
    /// Key for a zero-based (row, col) already validated against the matrix.
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < MAX_DIMENSION && col < MAX_DIMENSION);
        Self {
            row: row as u16,
            col: col as u16,
        }
    }

    /// Zero-based (row, col).
    #[inline]
    pub fn indices(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }
}

/// Validate a 1-based index and return it zero-based.
pub(crate) fn check_index(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> Result<(usize, usize), MatrixError> {
    if row == 0 || row > rows {
        return Err(MatrixError::RowOutOfBounds { row, rows, cols });
    }
    if col == 0 || col > cols {
        return Err(MatrixError::ColumnOutOfBounds { col, rows, cols });
    }
    Ok((row - 1, col - 1))
}

/// Sizes accepted by the storage kinds.
pub(crate) fn check_storage_size(rows: usize, cols: usize) -> Result<(), MatrixError> {
    check_structural_size(rows, cols)?;
    if rows > MAX_DIMENSION || cols > MAX_DIMENSION {
        return Err(MatrixError::DimensionTooLarge { rows, cols });
    }
    Ok(())
}

/// Sizes accepted by the structural kinds.
pub(crate) fn check_structural_size(rows: usize, cols: usize) -> Result<(), MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::EmptyDimension { rows, cols });
    }
    Ok(())
}

/// Element-wise equality across any two kinds.
///
/// Matrices of different sizes are unequal.
pub fn elementwise_eq<A, B>(a: &A, b: &B) -> Result<bool, MatrixError>
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
{
    let (rows, cols) = a.size();
    if b.size() != (rows, cols) {
        return Ok(false);
    }
    for col in 1..=cols {
        for row in 1..=rows {
            if a.at(row, col)? != b.at(row, col)? {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Any matrix kind defined by this crate
///
/// Returned by the multiplication engine, whose output kind depends on
/// the operands.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyMatrix {
    /// Sparse binary storage
    SparseBinary(SparseBinary),
    /// Packed binary storage
    DenseBinary(DenseBinary),
    /// Sparse polynomial storage
    SparsePoly(SparsePoly),
    /// Dense polynomial storage
    DensePoly(DensePoly),
    /// Rectangular identity
    Identity(Identity),
    /// Zero matrix
    Zero(Zero),
    /// Row rotation
    Rotation(Rotation),
    /// Row shift
    Shift(Shift),
}

macro_rules! dispatch {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            AnyMatrix::SparseBinary($m) => $body,
            AnyMatrix::DenseBinary($m) => $body,
            AnyMatrix::SparsePoly($m) => $body,
            AnyMatrix::DensePoly($m) => $body,
            AnyMatrix::Identity($m) => $body,
            AnyMatrix::Zero($m) => $body,
            AnyMatrix::Rotation($m) => $body,
            AnyMatrix::Shift($m) => $body,
        }
    };
}

impl Matrix for AnyMatrix {
    fn size(&self) -> (usize, usize) {
        dispatch!(self, m => m.size())
    }

    fn element_kind(&self) -> ElementKind {
        dispatch!(self, m => m.element_kind())
    }

    fn at(&self, row: usize, col: usize) -> Result<&Poly, MatrixError> {
        dispatch!(self, m => m.at(row, col))
    }

    fn set_at(&mut self, row: usize, col: usize, value: Poly) -> Result<(), MatrixError> {
        dispatch!(self, m => m.set_at(row, col, value))
    }

    fn add_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError> {
        dispatch!(self, m => m.add_at(row, col, value))
    }

    fn mul_at(&mut self, row: usize, col: usize, value: &Poly) -> Result<&Poly, MatrixError> {
        dispatch!(self, m => m.mul_at(row, col, value))
    }

    fn kind(&self) -> Kind<'_> {
        dispatch!(self, m => m.kind())
    }
}

macro_rules! impl_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for AnyMatrix {
                fn from(m: $variant) -> Self {
                    AnyMatrix::$variant(m)
                }
            }
        )*
    };
}

impl_from!(SparseBinary, DenseBinary, SparsePoly, DensePoly, Identity, Zero, Rotation, Shift);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index_is_one_based() {
        assert_eq!(check_index(1, 1, 2, 3), Ok((0, 0)));
        assert_eq!(check_index(2, 3, 2, 3), Ok((1, 2)));
        assert!(matches!(
            check_index(0, 1, 2, 3),
            Err(MatrixError::RowOutOfBounds { row: 0, .. })
        ));
        assert!(matches!(
            check_index(1, 4, 2, 3),
            Err(MatrixError::ColumnOutOfBounds { col: 4, .. })
        ));
    }

    #[test]
    fn test_storage_size_limits() {
        assert!(check_storage_size(MAX_DIMENSION, 1).is_ok());
        assert!(matches!(
            check_storage_size(MAX_DIMENSION + 1, 1),
            Err(MatrixError::DimensionTooLarge { .. })
        ));
        assert!(matches!(
            check_storage_size(0, 5),
            Err(MatrixError::EmptyDimension { .. })
        ));
        assert!(check_structural_size(MAX_DIMENSION * 2, 1).is_ok());
    }

    #[test]
    fn test_any_matrix_delegates() {
        let mut m: AnyMatrix = SparseBinary::new(2, 2).unwrap().into();
        m.set_at(2, 1, Poly::one()).unwrap();
        assert!(m.at(2, 1).unwrap().is_one());
        assert_eq!(m.kind().name(), "sparse-binary");
        assert_eq!(m.element_kind(), ElementKind::Binary);

        let mut id: AnyMatrix = Identity::new(2, 2).unwrap().into();
        assert!(matches!(
            id.set_at(1, 1, Poly::zero()),
            Err(MatrixError::Immutable("identity"))
        ));
    }
}
