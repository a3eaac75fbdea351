//! GF(2) field elements inside the polynomial ring
//!
//! Binary matrices store single bits but speak `Poly` at their interface.
//! Reads hand out the shared constants below, never fresh allocations.

use super::Poly;
use crate::MatrixError;

/// Canonical zero element, shared by every binary-element read.
pub static ZERO: Poly = Poly::zero();

/// Canonical one element, shared by every binary-element read.
pub static ONE: Poly = Poly::one();

/// Check that `value` is a field element (0 or 1) and return its bit.
///
/// Any polynomial of degree ≥ 1 other than the constant 1, i.e. anything
/// with more than one significant bit, is rejected.
pub fn to_bit(value: &Poly) -> Result<bool, MatrixError> {
    match value.bit_len() {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(MatrixError::NonBinaryElement(value.to_string())),
    }
}

/// The shared constant for `bit`.
#[inline]
pub fn from_bit(bit: bool) -> &'static Poly {
    if bit {
        &ONE
    } else {
        &ZERO
    }
}
