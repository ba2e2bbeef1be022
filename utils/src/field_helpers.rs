use ark_ff::{BigInteger, Field, PrimeField};
use num_bigint::{BigInt, BigUint};
use rand_core::RngCore;
use thiserror::Error;

// Field helpers error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldHelpersError {
    #[error("expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("encoded value is not below the modulus")]
    OutOfRange,
    #[error("failed to decode hex")]
    DecodeHex,
    #[error("failed to decode decimal")]
    DecodeDecimal,
}
pub type Result<T> = std::result::Result<T, FieldHelpersError>;

/// Errors of the arithmetic operations that are partial on their whole domain.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Field element helpers
pub trait FieldHelpers: Sized {
    /// Size of the fixed-width encoding in bytes
    fn size_in_bytes() -> usize;

    /// Get the modulus as `BigUint`
    fn modulus_biguint() -> BigUint;

    /// Decode the canonical little-endian encoding. The input must have the
    /// exact fixed width and encode a value below the modulus.
    fn from_bytes_le(bytes: &[u8]) -> Result<Self>;

    /// Decode the canonical big-endian encoding, see [`Self::from_bytes_le`].
    fn from_bytes_be(bytes: &[u8]) -> Result<Self>;

    /// Parse a big-endian hex literal, reducing it modulo the characteristic.
    /// A leading `0x` is accepted.
    fn from_hex(hex: &str) -> Result<Self>;

    /// Parse a decimal literal, reducing it modulo the characteristic.
    fn from_decimal(decimal: &str) -> Result<Self>;

    /// Embed a signed integer.
    fn from_i64(n: i64) -> Self;

    /// Serialize to the canonical little-endian encoding
    fn to_bytes_le(&self) -> Vec<u8>;

    /// Serialize to the canonical big-endian encoding
    fn to_bytes_be(&self) -> Vec<u8>;

    /// Serialize to big-endian hex
    fn to_hex(&self) -> String;

    /// Representative in `[0, p)`
    fn canonical(&self) -> BigUint;

    /// Representative in `(-p/2, p/2]`
    fn balanced(&self) -> BigInt;

    /// Magnitude of the balanced representative
    fn absolute(&self) -> BigUint;

    /// Whether the balanced representative lies strictly between `-bound`
    /// and `bound`.
    fn check_infinity_norm(&self, bound: &BigUint) -> bool;

    /// Euler's criterion. Zero is counted as a residue.
    fn is_quadratic_residue(&self) -> bool;

    /// Division that reports a zero divisor.
    fn checked_div(&self, rhs: &Self) -> std::result::Result<Self, ArithmeticError>;

    /// Uniformly random element. Successive words of `rng` fill the limbs,
    /// the top limb is masked to the bit length of the modulus and values
    /// that are not below the modulus are rejected.
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}

impl<F: PrimeField> FieldHelpers for F {
    fn size_in_bytes() -> usize {
        F::BigInt::NUM_LIMBS * 8
    }

    fn modulus_biguint() -> BigUint {
        F::MODULUS.into()
    }

    fn from_bytes_le(bytes: &[u8]) -> Result<F> {
        if bytes.len() != F::size_in_bytes() {
            return Err(FieldHelpersError::Length {
                expected: F::size_in_bytes(),
                actual: bytes.len(),
            });
        }
        let n = BigUint::from_bytes_le(bytes);
        if n >= F::modulus_biguint() {
            return Err(FieldHelpersError::OutOfRange);
        }
        Ok(F::from(n))
    }

    fn from_bytes_be(bytes: &[u8]) -> Result<F> {
        let mut bytes = bytes.to_vec();
        bytes.reverse();
        F::from_bytes_le(&bytes)
    }

    fn from_hex(hex: &str) -> Result<F> {
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        if digits.is_empty() {
            return Err(FieldHelpersError::DecodeHex);
        }
        let width = digits.len().div_ceil(2);
        if width > F::size_in_bytes() {
            return Err(FieldHelpersError::Length {
                expected: F::size_in_bytes(),
                actual: width,
            });
        }
        let padded = if digits.len() % 2 == 1 {
            format!("0{digits}")
        } else {
            digits.to_owned()
        };
        let bytes = hex::decode(padded).map_err(|_| FieldHelpersError::DecodeHex)?;
        Ok(F::from_be_bytes_mod_order(&bytes))
    }

    fn from_decimal(decimal: &str) -> Result<F> {
        if decimal.is_empty() {
            return Err(FieldHelpersError::DecodeDecimal);
        }
        BigUint::parse_bytes(decimal.as_bytes(), 10)
            .map(F::from)
            .ok_or(FieldHelpersError::DecodeDecimal)
    }

    fn from_i64(n: i64) -> F {
        let magnitude = F::from(n.unsigned_abs());
        if n < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    fn to_bytes_le(&self) -> Vec<u8> {
        self.into_bigint().to_bytes_le()
    }

    fn to_bytes_be(&self) -> Vec<u8> {
        self.into_bigint().to_bytes_be()
    }

    fn to_hex(&self) -> String {
        hex::encode(self.to_bytes_be())
    }

    fn canonical(&self) -> BigUint {
        self.into_bigint().into()
    }

    fn balanced(&self) -> BigInt {
        let modulus = F::modulus_biguint();
        let half = &modulus >> 1u32;
        let n = self.canonical();
        if n > half {
            BigInt::from(n) - BigInt::from(modulus)
        } else {
            BigInt::from(n)
        }
    }

    fn absolute(&self) -> BigUint {
        self.balanced().magnitude().clone()
    }

    fn check_infinity_norm(&self, bound: &BigUint) -> bool {
        self.absolute() < *bound
    }

    fn is_quadratic_residue(&self) -> bool {
        !self.legendre().is_qnr()
    }

    fn checked_div(&self, rhs: &F) -> std::result::Result<F, ArithmeticError> {
        rhs.inverse()
            .map(|inv| *self * inv)
            .ok_or(ArithmeticError::DivisionByZero)
    }

    fn random<R: RngCore + ?Sized>(rng: &mut R) -> F {
        let excess = F::BigInt::NUM_LIMBS * 64 - F::MODULUS_BIT_SIZE as usize;
        let mut repr = F::BigInt::default();
        loop {
            for limb in repr.as_mut() {
                *limb = rng.next_u64();
            }
            if let Some(top) = repr.as_mut().last_mut() {
                *top &= u64::MAX >> excess;
            }
            if let Some(x) = F::from_bigint(repr) {
                return x;
            }
        }
    }
}

/// Characteristic of a field as `BigUint`, from the little-endian limbs that
/// [`Field::characteristic`] returns.
pub fn characteristic<F: Field>() -> BigUint {
    BigUint::from_slice(
        &F::characteristic()
            .iter()
            .flat_map(|limb| [*limb as u32, (*limb >> 32) as u32])
            .collect::<Vec<_>>(),
    )
}
