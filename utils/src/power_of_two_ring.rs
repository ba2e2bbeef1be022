//! The ring of integers modulo `2^BITS`, a toy ring for testing the generic
//! linear algebra. Units are exactly the odd residues.

use crate::field_helpers::{FieldHelpersError, Result};
use ark_ff::{One, Zero};
use core::{
    fmt,
    iter::{Product, Sum},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use num_bigint::BigUint;
use rand_core::RngCore;

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PowerOfTwoRing<const BITS: u32> {
    n: u64,
}

impl<const BITS: u32> PowerOfTwoRing<BITS> {
    const MASK: u64 = {
        assert!(BITS >= 1 && BITS <= 63, "unsupported ring width");
        (1 << BITS) - 1
    };

    /// Size of the fixed-width encoding in bytes
    pub const SIZE_IN_BYTES: usize = BITS.div_ceil(8) as usize;

    pub const fn new(n: u64) -> Self {
        Self { n: n & Self::MASK }
    }

    pub const fn from_i64(n: i64) -> Self {
        Self::new(n as u64)
    }

    /// Representative in `[0, 2^BITS)`
    pub const fn canonical(self) -> u64 {
        self.n
    }

    /// Representative in `[-2^(BITS-1), 2^(BITS-1))`
    pub const fn balanced(self) -> i64 {
        if self.n >> (BITS - 1) == 1 {
            (self.n as i64).wrapping_sub((1u64 << BITS) as i64)
        } else {
            self.n as i64
        }
    }

    pub const fn absolute(self) -> u64 {
        self.balanced().unsigned_abs()
    }

    /// Whether the balanced representative lies strictly between `-bound`
    /// and `bound`.
    pub const fn check_infinity_norm(self, bound: u64) -> bool {
        self.absolute() < bound
    }

    #[must_use]
    pub const fn double(self) -> Self {
        Self::new(self.n << 1)
    }

    #[must_use]
    pub const fn square(self) -> Self {
        Self::new(self.n.wrapping_mul(self.n))
    }

    /// Multiplicative inverse, present for odd residues only.
    pub fn inverse(self) -> Option<Self> {
        if self.n & 1 == 0 {
            return None;
        }
        // an odd n is its own inverse modulo 8, each Newton step doubles the
        // number of correct low bits
        let mut x = self.n;
        for _ in 0..5 {
            x = x.wrapping_mul(2u64.wrapping_sub(self.n.wrapping_mul(x)));
        }
        Some(Self::new(x))
    }

    /// Uniformly random element. The modulus is a power of two, so masking
    /// a full word introduces no bias.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.next_u64())
    }

    pub fn from_bytes_le(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::SIZE_IN_BYTES {
            return Err(FieldHelpersError::Length {
                expected: Self::SIZE_IN_BYTES,
                actual: bytes.len(),
            });
        }
        let n = bytes
            .iter()
            .rev()
            .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
        if n > Self::MASK {
            return Err(FieldHelpersError::OutOfRange);
        }
        Ok(Self { n })
    }

    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self> {
        let mut bytes = bytes.to_vec();
        bytes.reverse();
        Self::from_bytes_le(&bytes)
    }

    /// Big-endian hex literal with an optional `0x` prefix, reduced modulo
    /// `2^BITS`. At most the fixed width of digits is accepted.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        if digits.is_empty() {
            return Err(FieldHelpersError::DecodeHex);
        }
        let width = digits.len().div_ceil(2);
        if width > Self::SIZE_IN_BYTES {
            return Err(FieldHelpersError::Length {
                expected: Self::SIZE_IN_BYTES,
                actual: width,
            });
        }
        let padded = if digits.len() % 2 == 1 {
            format!("0{digits}")
        } else {
            digits.to_owned()
        };
        let bytes = hex::decode(padded).map_err(|_| FieldHelpersError::DecodeHex)?;
        let n = bytes
            .iter()
            .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
        Ok(Self::new(n))
    }

    /// Decimal literal of any length, reduced modulo `2^BITS`.
    pub fn from_decimal(decimal: &str) -> Result<Self> {
        if decimal.is_empty() {
            return Err(FieldHelpersError::DecodeDecimal);
        }
        let n = BigUint::parse_bytes(decimal.as_bytes(), 10)
            .ok_or(FieldHelpersError::DecodeDecimal)?;
        // 2^BITS divides 2^64, so the low limb determines the residue
        Ok(Self::new(n.iter_u64_digits().next().unwrap_or(0)))
    }

    pub fn to_hex(self) -> String {
        hex::encode(self.to_bytes_be())
    }

    pub fn to_bytes_le(self) -> Vec<u8> {
        self.n.to_le_bytes()[..Self::SIZE_IN_BYTES].to_vec()
    }

    pub fn to_bytes_be(self) -> Vec<u8> {
        let mut bytes = self.to_bytes_le();
        bytes.reverse();
        bytes
    }
}

impl<const BITS: u32> fmt::Debug for PowerOfTwoRing<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.balanced())
    }
}

impl<const BITS: u32> fmt::Display for PowerOfTwoRing<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.n)
    }
}

impl<const BITS: u32> From<u64> for PowerOfTwoRing<BITS> {
    fn from(n: u64) -> Self {
        Self::new(n)
    }
}

impl<const BITS: u32> From<i64> for PowerOfTwoRing<BITS> {
    fn from(n: i64) -> Self {
        Self::from_i64(n)
    }
}

impl<const BITS: u32> Add for PowerOfTwoRing<BITS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.n.wrapping_add(rhs.n))
    }
}

impl<const BITS: u32> Sub for PowerOfTwoRing<BITS> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.n.wrapping_sub(rhs.n))
    }
}

impl<const BITS: u32> Mul for PowerOfTwoRing<BITS> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.n.wrapping_mul(rhs.n))
    }
}

impl<const BITS: u32> Neg for PowerOfTwoRing<BITS> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.n.wrapping_neg())
    }
}

impl<const BITS: u32> AddAssign for PowerOfTwoRing<BITS> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const BITS: u32> SubAssign for PowerOfTwoRing<BITS> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const BITS: u32> MulAssign for PowerOfTwoRing<BITS> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const BITS: u32> Zero for PowerOfTwoRing<BITS> {
    fn zero() -> Self {
        Self { n: 0 }
    }

    fn is_zero(&self) -> bool {
        self.n == 0
    }
}

impl<const BITS: u32> One for PowerOfTwoRing<BITS> {
    fn one() -> Self {
        Self { n: 1 }
    }
}

impl<const BITS: u32> Sum for PowerOfTwoRing<BITS> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<const BITS: u32> Product for PowerOfTwoRing<BITS> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}
