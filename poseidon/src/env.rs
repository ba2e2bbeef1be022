//! Evaluation environments.
//!
//! The permutations of this crate are written once, generically over an
//! [Environment]. The environment fixes what a lane of the state is and how
//! the only non-linear operation, the S-box power map, is carried out:
//!
//! - [Native] computes on field elements.
//! - [Witness] computes on field elements and records every intermediate
//!   value of the S-box decomposition, in order.
//! - [Circuit] computes on [LinearCombination]s and reports one constraint
//!   per step of the decomposition to a [ConstraintSystem].
//!
//! For a given degree bound the decomposition is the same in [Witness] and
//! [Circuit] mode, so the values appended by the former are an assignment of
//! the auxiliary variables allocated by the latter.

use crate::circuit::{Constraint, ConstraintSystem, LinearCombination};
use ark_ff::Field;
use core::{
    fmt::Debug,
    ops::{Add, AddAssign, Mul},
};

/// What the round functions need from a lane: additions, scaling by field
/// constants and embedding of constants.
pub trait LaneAlgebra<F>:
    Clone + Debug + Add<Output = Self> + AddAssign + AddAssign<F> + Mul<F, Output = Self> + From<F>
{
}

impl<F, T> LaneAlgebra<F> for T where
    T: Clone + Debug + Add<Output = T> + AddAssign + AddAssign<F> + Mul<F, Output = T> + From<F>
{
}

/// Supported S-box exponents
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SBox {
    Cube,
    Fifth,
    Seventeenth,
}

impl SBox {
    pub const fn exponent(self) -> u64 {
        match self {
            Self::Cube => 3,
            Self::Fifth => 5,
            Self::Seventeenth => 17,
        }
    }

    /// Steps computing `x^α` with constraints of at most `degree` factors,
    /// using as few steps as possible. Step `k` multiplies the listed
    /// operands, where operand 0 is `x` and operand `j > 0` is the result of
    /// step `j - 1`. The last step yields `x^α`.
    ///
    /// A `degree` below 2 is treated as 2.
    pub const fn decomposition(self, degree: usize) -> &'static [&'static [usize]] {
        match (self, degree) {
            (Self::Cube, 3..) => &[&[0, 0, 0]],
            (Self::Cube, _) => &[&[0, 0], &[0, 1]],
            (Self::Fifth, 5..) => &[&[0; 5]],
            (Self::Fifth, 3..) => &[&[0, 0], &[0, 1, 1]],
            (Self::Fifth, _) => &[&[0, 0], &[1, 1], &[0, 2]],
            (Self::Seventeenth, 17..) => &[&[0; 17]],
            (Self::Seventeenth, 5..) => &[&[0; 4], &[1, 1, 1, 1, 0]],
            (Self::Seventeenth, 4) => &[&[0; 4], &[1; 4], &[2, 0]],
            (Self::Seventeenth, 3) => &[&[0; 3], &[1, 1, 0], &[2, 2, 1]],
            (Self::Seventeenth, _) => &[&[0, 0], &[1, 1], &[2, 2], &[3, 3], &[4, 0]],
        }
    }

    /// `x^α` by the shortest addition chain
    pub fn apply<F: Field>(self, x: F) -> F {
        match self {
            Self::Cube => x.square() * x,
            Self::Fifth => x.square().square() * x,
            Self::Seventeenth => {
                let mut y = x;
                for _ in 0..4 {
                    y.square_in_place();
                }
                y * x
            }
        }
    }
}

/// The semantics a permutation is evaluated under.
pub trait Environment<F: Field> {
    type Lane: LaneAlgebra<F>;

    /// `x^α`
    fn power(&mut self, x: &Self::Lane, sbox: SBox) -> Self::Lane;
}

/// Plain evaluation on field elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Native;

impl<F: Field> Environment<F> for Native {
    type Lane = F;

    fn power(&mut self, x: &F, sbox: SBox) -> F {
        sbox.apply(*x)
    }
}

/// Evaluation on field elements that appends the values of the auxiliary
/// variables a [Circuit] evaluation with constraint degree `DEGREE` would
/// allocate.
#[derive(Debug)]
pub struct Witness<'a, F, const DEGREE: usize> {
    trace: &'a mut Vec<F>,
}

impl<'a, F, const DEGREE: usize> Witness<'a, F, DEGREE> {
    pub fn new(trace: &'a mut Vec<F>) -> Self {
        const { assert!(DEGREE >= 2, "constraints must allow at least degree 2") };
        Self { trace }
    }

    pub fn trace(&self) -> &[F] {
        self.trace
    }
}

impl<F: Field, const DEGREE: usize> Environment<F> for Witness<'_, F, DEGREE> {
    type Lane = F;

    fn power(&mut self, x: &F, sbox: SBox) -> F {
        let mut values = vec![*x];
        for step in sbox.decomposition(DEGREE) {
            let value = step.iter().fold(F::ONE, |acc, i| acc * values[*i]);
            self.trace.push(value);
            values.push(value);
        }
        values[values.len() - 1]
    }
}

/// Symbolic evaluation: lanes are linear combinations and every S-box
/// allocates auxiliary variables in `cs`.
#[derive(Debug)]
pub struct Circuit<'a, CS> {
    cs: &'a mut CS,
}

impl<'a, CS> Circuit<'a, CS> {
    pub fn new(cs: &'a mut CS) -> Self {
        Self { cs }
    }

    pub fn constraint_system(&mut self) -> &mut CS {
        self.cs
    }
}

impl<F: Field, CS: ConstraintSystem<F>> Environment<F> for Circuit<'_, CS> {
    type Lane = LinearCombination<F>;

    fn power(&mut self, x: &LinearCombination<F>, sbox: SBox) -> LinearCombination<F> {
        let mut values = vec![x.clone()];
        for step in sbox.decomposition(CS::DEGREE) {
            let aux = LinearCombination::from(self.cs.auxiliary());
            let factors = step.iter().map(|i| values[*i].clone()).collect();
            self.cs.constrain(Constraint::new(factors, aux.clone()));
            values.push(aux);
        }
        values.swap_remove(values.len() - 1)
    }
}
