//! Ring arithmetic
//!
//! - `Poly`: polynomials over GF(2), bit i = coefficient of x^i
//! - `field`: the GF(2) subset {0, 1} used by binary-element matrices

pub mod field;
mod polynomial;

pub use field::{from_bit, to_bit, ONE, ZERO};
pub use polynomial::Poly;
