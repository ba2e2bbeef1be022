//! Fixed-size vectors over a ring.

use ark_ff::{One, Zero};
use core::{
    fmt::Debug,
    ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign},
};

/// The operations [`Module`] and [`crate::MatrixRing`] need from their
/// scalars. Commutativity is not required.
pub trait Ring:
    Copy
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Ring for T where
    T: Copy
        + Debug
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Neg<Output = T>
{
}

/// An element of the free module `R^N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Module<R, const N: usize>(pub [R; N]);

impl<R: Ring, const N: usize> Module<R, N> {
    pub const fn new(entries: [R; N]) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, R> {
        self.0.iter()
    }

    /// Inner product `Σ self[i] * rhs[i]`
    pub fn dot(&self, rhs: &Self) -> R {
        self.0
            .iter()
            .zip(rhs.0.iter())
            .fold(R::zero(), |acc, (a, b)| acc + *a * *b)
    }

    /// Entry-wise product
    #[must_use]
    pub fn hadamard(&self, rhs: &Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] * rhs.0[i]))
    }

    /// Sum of the entries
    pub fn sum(&self) -> R {
        self.0.iter().fold(R::zero(), |acc, x| acc + *x)
    }
}

impl<R, const N: usize> From<[R; N]> for Module<R, N> {
    fn from(entries: [R; N]) -> Self {
        Self(entries)
    }
}

impl<R, const N: usize> From<Module<R, N>> for [R; N] {
    fn from(module: Module<R, N>) -> Self {
        module.0
    }
}

impl<R, const N: usize> Index<usize> for Module<R, N> {
    type Output = R;

    fn index(&self, i: usize) -> &R {
        &self.0[i]
    }
}

impl<R, const N: usize> IndexMut<usize> for Module<R, N> {
    fn index_mut(&mut self, i: usize) -> &mut R {
        &mut self.0[i]
    }
}

impl<R: Ring, const N: usize> Zero for Module<R, N> {
    fn zero() -> Self {
        Self([R::zero(); N])
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }
}

impl<R: Ring, const N: usize> Add for Module<R, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl<R: Ring, const N: usize> Sub for Module<R, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl<R: Ring, const N: usize> Neg for Module<R, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.map(Neg::neg))
    }
}

impl<R: Ring, const N: usize> AddAssign for Module<R, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<R: Ring, const N: usize> SubAssign for Module<R, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Right scalar multiplication
impl<R: Ring, const N: usize> Mul<R> for Module<R, N> {
    type Output = Self;

    fn mul(self, rhs: R) -> Self {
        Self(self.0.map(|x| x * rhs))
    }
}
