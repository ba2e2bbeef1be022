//! Square matrices over a ring, themselves forming a (non-commutative) ring.

use crate::module::{Module, Ring};
use ark_ff::{One, Zero};
use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatrixRing<R, const N: usize> {
    rows: [[R; N]; N],
}

impl<R: Ring, const N: usize> MatrixRing<R, N> {
    pub const fn new(rows: [[R; N]; N]) -> Self {
        Self { rows }
    }

    pub fn identity() -> Self {
        Self::one()
    }

    /// Matrix with `d` on the main diagonal
    pub fn diagonal(d: [R; N]) -> Self {
        let mut rows = [[R::zero(); N]; N];
        for (i, x) in d.into_iter().enumerate() {
            rows[i][i] = x;
        }
        Self { rows }
    }

    /// Matrix with every entry equal to `x`
    pub fn constant(x: R) -> Self {
        Self { rows: [[x; N]; N] }
    }

    pub const fn rows(&self) -> &[[R; N]; N] {
        &self.rows
    }

    pub fn row(&self, i: usize) -> Module<R, N> {
        Module(self.rows[i])
    }

    pub fn column(&self, j: usize) -> Module<R, N> {
        Module(core::array::from_fn(|i| self.rows[i][j]))
    }

    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            rows: core::array::from_fn(|i| core::array::from_fn(|j| self.rows[j][i])),
        }
    }

    /// Right scalar multiplication
    #[must_use]
    pub fn scale(&self, x: R) -> Self {
        Self {
            rows: self.rows.map(|row| row.map(|y| y * x)),
        }
    }

    pub fn trace(&self) -> R {
        (0..N).fold(R::zero(), |acc, i| acc + self.rows[i][i])
    }
}

impl<R, const N: usize> Index<(usize, usize)> for MatrixRing<R, N> {
    type Output = R;

    fn index(&self, (i, j): (usize, usize)) -> &R {
        &self.rows[i][j]
    }
}

impl<R, const N: usize> IndexMut<(usize, usize)> for MatrixRing<R, N> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut R {
        &mut self.rows[i][j]
    }
}

impl<R: Ring, const N: usize> Zero for MatrixRing<R, N> {
    fn zero() -> Self {
        Self::constant(R::zero())
    }

    fn is_zero(&self) -> bool {
        self.rows.iter().flatten().all(Zero::is_zero)
    }
}

impl<R: Ring, const N: usize> One for MatrixRing<R, N> {
    fn one() -> Self {
        Self::diagonal([R::one(); N])
    }
}

impl<R: Ring, const N: usize> Add for MatrixRing<R, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            rows: core::array::from_fn(|i| {
                core::array::from_fn(|j| self.rows[i][j] + rhs.rows[i][j])
            }),
        }
    }
}

impl<R: Ring, const N: usize> Sub for MatrixRing<R, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            rows: core::array::from_fn(|i| {
                core::array::from_fn(|j| self.rows[i][j] - rhs.rows[i][j])
            }),
        }
    }
}

impl<R: Ring, const N: usize> Neg for MatrixRing<R, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            rows: self.rows.map(|row| row.map(Neg::neg)),
        }
    }
}

impl<R: Ring, const N: usize> Mul for MatrixRing<R, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            rows: core::array::from_fn(|i| {
                core::array::from_fn(|j| {
                    (0..N).fold(R::zero(), |acc, k| acc + self.rows[i][k] * rhs.rows[k][j])
                })
            }),
        }
    }
}

impl<R: Ring, const N: usize> Mul<Module<R, N>> for MatrixRing<R, N> {
    type Output = Module<R, N>;

    fn mul(self, rhs: Module<R, N>) -> Module<R, N> {
        Module(core::array::from_fn(|i| self.row(i).dot(&rhs)))
    }
}
