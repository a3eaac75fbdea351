//! Polynomials over GF(2)
//!
//! Bit i of the packed words is the coefficient of x^i.
//! Addition is XOR, multiplication is carryless convolution.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign};

/// Bits per storage word.
const WORD_BITS: usize = 64;

/// Arbitrary-degree polynomial over GF(2)
///
/// Stored as little-endian `u64` words with no trailing zero word, so two
/// equal polynomials always have identical storage. The zero polynomial has
/// no words at all. Constants borrow static storage and only allocate once
/// they are mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Poly {
    words: Cow<'static, [u64]>,
}

impl Poly {
    /// The zero polynomial.
    pub const fn zero() -> Self {
        Self {
            words: Cow::Borrowed(&[]),
        }
    }

    /// The constant polynomial 1.
    pub const fn one() -> Self {
        Self {
            words: Cow::Borrowed(&[1]),
        }
    }

    /// Polynomial whose coefficients are the bits of `bits`.
    pub fn from_u64(bits: u64) -> Self {
        if bits == 0 {
            return Self::zero();
        }
        Self {
            words: Cow::Owned(vec![bits]),
        }
    }

    /// Polynomial from little-endian coefficient words.
    pub fn from_words(words: Vec<u64>) -> Self {
        let mut poly = Self {
            words: Cow::Owned(words),
        };
        poly.normalize();
        poly
    }

    /// Polynomial with a coefficient of 1 at every listed exponent.
    ///
    /// Repeated exponents cancel, as they would under addition.
    pub fn from_exponents<I: IntoIterator<Item = usize>>(exponents: I) -> Self {
        let mut poly = Self::zero();
        for exp in exponents {
            poly.flip_bit(exp);
        }
        poly
    }

    /// The monomial x^exp.
    pub fn monomial(exp: usize) -> Self {
        Self::from_exponents([exp])
    }

    /// Little-endian coefficient words, without trailing zeros.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// True for the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.words.is_empty()
    }

    /// True for the constant polynomial 1.
    #[inline]
    pub fn is_one(&self) -> bool {
        *self.words == [1]
    }

    /// Number of significant bits (degree + 1, or 0 for the zero polynomial).
    pub fn bit_len(&self) -> usize {
        match self.words.last() {
            Some(&top) => {
                (self.words.len() - 1) * WORD_BITS + (WORD_BITS - top.leading_zeros() as usize)
            }
            None => 0,
        }
    }

    /// Degree, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.bit_len().checked_sub(1)
    }

    /// Coefficient of x^exp.
    pub fn bit(&self, exp: usize) -> bool {
        self.words
            .get(exp / WORD_BITS)
            .map(|word| (word >> (exp % WORD_BITS)) & 1 == 1)
            .unwrap_or(false)
    }

    /// Set the coefficient of x^exp.
    pub fn set_bit(&mut self, exp: usize, value: bool) {
        if self.bit(exp) != value {
            self.flip_bit(exp);
        }
    }

    /// Exponents with a non-zero coefficient, in increasing order.
    pub fn exponents(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(idx, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(idx * WORD_BITS + bit)
            })
        })
    }

    fn flip_bit(&mut self, exp: usize) {
        let (word_idx, bit_idx) = (exp / WORD_BITS, exp % WORD_BITS);
        let words = self.words.to_mut();
        if word_idx >= words.len() {
            words.resize(word_idx + 1, 0);
        }
        words[word_idx] ^= 1u64 << bit_idx;
        self.normalize();
    }

    fn normalize(&mut self) {
        if self.words.last() != Some(&0) {
            return;
        }
        let words = self.words.to_mut();
        while words.last() == Some(&0) {
            words.pop();
        }
    }

    /// Add `other` in place (coefficient-wise XOR).
    pub fn add_assign_ref(&mut self, other: &Poly) {
        if other.is_zero() {
            return;
        }
        let words = self.words.to_mut();
        if words.len() < other.words.len() {
            words.resize(other.words.len(), 0);
        }
        for (dst, src) in words.iter_mut().zip(other.words.iter()) {
            *dst ^= src;
        }
        self.normalize();
    }

    /// Carryless product of two polynomials.
    pub fn product(&self, other: &Poly) -> Poly {
        if self.is_zero() || other.is_zero() {
            return Poly::zero();
        }
        if self.is_one() {
            return other.clone();
        }
        if other.is_one() {
            return self.clone();
        }

        let mut out = vec![0u64; self.words.len() + other.words.len()];
        for (i, &a) in self.words.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.words.iter().enumerate() {
                let (lo, hi) = clmul64(a, b);
                out[i + j] ^= lo;
                out[i + j + 1] ^= hi;
            }
        }
        Poly::from_words(out)
    }
}

/// 64×64 → 128 bit carryless multiply, returned as (low, high) words.
#[inline]
fn clmul64(a: u64, b: u64) -> (u64, u64) {
    let mut lo = 0u64;
    let mut hi = 0u64;
    let mut rest = b;
    while rest != 0 {
        let shift = rest.trailing_zeros();
        lo ^= a << shift;
        if shift != 0 {
            hi ^= a >> (64 - shift);
        }
        rest &= rest - 1;
    }
    (lo, hi)
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for Poly {
    fn from(bits: u64) -> Self {
        Self::from_u64(bits)
    }
}

impl From<bool> for Poly {
    fn from(bit: bool) -> Self {
        if bit {
            Self::one()
        } else {
            Self::zero()
        }
    }
}

impl AddAssign<&Poly> for Poly {
    fn add_assign(&mut self, rhs: &Poly) {
        self.add_assign_ref(rhs);
    }
}

impl AddAssign for Poly {
    fn add_assign(&mut self, rhs: Poly) {
        self.add_assign_ref(&rhs);
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        let mut out = self.clone();
        out.add_assign_ref(rhs);
        out
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(mut self, rhs: Poly) -> Poly {
        self.add_assign_ref(&rhs);
        self
    }
}

impl MulAssign<&Poly> for Poly {
    fn mul_assign(&mut self, rhs: &Poly) {
        *self = self.product(rhs);
    }
}

impl MulAssign for Poly {
    fn mul_assign(&mut self, rhs: Poly) {
        *self = self.product(&rhs);
    }
}

impl Mul<&Poly> for &Poly {
    type Output = Poly;

    fn mul(self, rhs: &Poly) -> Poly {
        self.product(rhs)
    }
}

impl Mul for Poly {
    type Output = Poly;

    fn mul(self, rhs: Poly) -> Poly {
        self.product(&rhs)
    }
}

impl fmt::Binary for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((top, rest)) = self.words.split_last() else {
            return f.write_str("0");
        };
        write!(f, "{:b}", top)?;
        for word in rest.iter().rev() {
            write!(f, "{:064b}", word)?;
        }
        Ok(())
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self, f)
    }
}
