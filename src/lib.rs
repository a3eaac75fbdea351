//! # Matrices over GF(2) and GF(2)[x]
//!
//! Linear algebra where every element is either a single bit or a binary
//! polynomial, aimed at large structured matrices such as the transition
//! matrices of linear-feedback shift registers.
//!
//! ## Matrix kinds
//!
//! 1. **Storage kinds**: [`SparseBinary`], [`DenseBinary`], [`SparsePoly`],
//!    [`DensePoly`], each at most 65,535 × 65,535
//! 2. **Structural kinds**: [`Identity`], [`Zero`], [`Rotation`], [`Shift`],
//!    computed from a closed-form rule with no storage and never mutable
//!
//! Every kind implements the [`Matrix`] contract with 1-based indices.
//! [`convert`] moves between storage kinds and [`multiply`] picks a
//! product algorithm from the operand kinds.
//!
//! ## Usage Example
//!
//! ```
//! use gf2mat::{mul, DenseBinary, Matrix, Poly, Rotation};
//!
//! let mut row = DenseBinary::new(1, 4)?;
//! row.set_at(1, 1, Poly::one())?;
//! let rotated = mul(&row, &Rotation::new(4, 1)?)?;
//! assert!(rotated.at(1, 2)?.is_one());
//! # Ok::<(), gf2mat::MatrixError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod algebra; // GF(2) polynomials and field elements
pub mod convert; // Representation converters
pub mod matrix; // Matrix contract and kinds
pub mod multiply; // Multiplication engine

pub use algebra::{from_bit, to_bit, Poly};
pub use convert::{resize, to_dense_binary, to_dense_poly, to_sparse_binary, to_sparse_poly};
pub use matrix::{
    elementwise_eq, AnyMatrix, Coord, DenseBinary, DensePoly, ElementKind, Identity, Kind, Matrix,
    Rotation, Shift, SparseBinary, SparsePoly, Zero,
};
pub use multiply::{mul, mul_gf2};

use thiserror::Error;

/// Largest row or column count of a storage-backed matrix.
pub const MAX_DIMENSION: usize = u16::MAX as usize;

/// Contract violations reported by matrix operations
///
/// A call that returns an error has not modified its matrix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Row index outside `[1, rows]`
    #[error("row index {row} out of bounds (size {rows}x{cols})")]
    RowOutOfBounds {
        /// Offending 1-based row
        row: usize,
        /// Matrix row count
        rows: usize,
        /// Matrix column count
        cols: usize,
    },

    /// Column index outside `[1, cols]`
    #[error("column index {col} out of bounds (size {rows}x{cols})")]
    ColumnOutOfBounds {
        /// Offending 1-based column
        col: usize,
        /// Matrix row count
        rows: usize,
        /// Matrix column count
        cols: usize,
    },

    /// A polynomial other than 0 or 1 used where a field element is required
    #[error("cannot use polynomial {0} in binary element matrix")]
    NonBinaryElement(String),

    /// Left column count differs from right row count
    #[error("inner dimension mismatch: {lhs_rows}x{lhs_cols} * {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        /// Left operand rows
        lhs_rows: usize,
        /// Left operand columns
        lhs_cols: usize,
        /// Right operand rows
        rhs_rows: usize,
        /// Right operand columns
        rhs_cols: usize,
    },

    /// Zero rows or zero columns requested
    #[error("cannot make {rows}x{cols} matrix: size must be positive")]
    EmptyDimension {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Storage kind requested beyond [`MAX_DIMENSION`]
    #[error("cannot make {rows}x{cols} matrix: maximum dimension is 65535")]
    DimensionTooLarge {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Write, add or multiply attempted on a structural matrix
    #[error("immutable {0} matrix must be converted before modifying")]
    Immutable(&'static str),
}
