//! The abelian group interface shared by every point representation, and
//! scalar multiplication written once against it.

use ark_ff::{BitIteratorLE, PrimeField};
use rand_core::RngCore;
use core::{
    fmt::Debug,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

/// An additive abelian group with a distinguished scalar field.
///
/// `mul_bigint` and `mul_scalar` come for free through [`add_sub_chain`], so
/// an implementation only supplies the group law.
pub trait Group:
    Copy
    + Debug
    + Eq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
{
    type ScalarField: PrimeField;

    /// The neutral element
    const IDENTITY: Self;

    #[must_use]
    fn double(&self) -> Self;

    fn is_identity(&self) -> bool;

    /// Multiplication by an unsigned integer given as little-endian 64-bit
    /// limbs. The integer is not reduced by the group order.
    #[must_use]
    fn mul_bigint(&self, scalar: impl AsRef<[u64]>) -> Self {
        add_sub_chain(*self, BitIteratorLE::without_trailing_zeros(scalar))
    }

    #[must_use]
    fn mul_scalar(&self, scalar: &Self::ScalarField) -> Self {
        self.mul_bigint(scalar.into_bigint())
    }
}

/// A group whose elements can be sampled uniformly, given a source of
/// random words.
pub trait RandomGroup: Group {
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChainState {
    /// No set bit is waiting to be accounted for
    Idle,
    /// A single set bit is waiting at the current power
    Single,
    /// A run of set bits was opened with a subtraction and still needs the
    /// closing addition
    Run,
}

fn double_n<G: Group>(mut g: G, n: usize) -> G {
    for _ in 0..n {
        g = g.double();
    }
    g
}

/// Computes `n * base` for the integer `n` given by `bits`, least significant
/// bit first.
///
/// `power` is kept as `2^k * base` with the doublings owed to it counted in
/// `pending` and only performed right before `power` is added or subtracted.
/// A run of ones `2^i + ... + 2^j` is evaluated as `2^(j+1) - 2^i`, so long
/// runs cost one subtraction and one addition instead of one addition per bit.
pub fn add_sub_chain<G: Group>(base: G, bits: impl IntoIterator<Item = bool>) -> G {
    let mut result = G::IDENTITY;
    let mut power = base;
    let mut pending = 0usize;
    let mut state = ChainState::Idle;

    for bit in bits {
        match (state, bit) {
            (ChainState::Idle, false) => pending += 1,
            (ChainState::Idle, true) => state = ChainState::Single,
            (ChainState::Single, bit) => {
                power = double_n(power, pending);
                // the next bit was consumed here as well
                pending = 2;
                if bit {
                    result -= power;
                    state = ChainState::Run;
                } else {
                    result += power;
                    state = ChainState::Idle;
                }
            }
            (ChainState::Run, true) => pending += 1,
            (ChainState::Run, false) => state = ChainState::Single,
        }
    }

    if state != ChainState::Idle {
        result += double_n(power, pending);
    }
    result
}
