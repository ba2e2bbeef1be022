//! The hook through which an arithmetization consumes the symbolic
//! evaluations of this crate.
//!
//! Symbolic values are affine [LinearCombination]s of [Variable]s. The only
//! non-linear statements are [Constraint]s `f_1 * ... * f_k = rhs`, whose
//! degree is the number of factors. A [ConstraintSystem] hands out fresh
//! auxiliary variables and receives the constraints as they are generated.
//!
//! [ConstraintRecorder] is a minimal system that keeps everything in memory
//! and can check an assignment against the recorded constraints.

use ark_ff::{Field, Zero};
use core::ops::{Add, AddAssign, Mul, Neg, Sub};
use log::trace;
use thiserror::Error;

/// Index into the assignment vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(pub usize);

/// `constant + Σ coefficient * variable`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearCombination<F> {
    pub terms: Vec<(Variable, F)>,
    pub constant: F,
}

impl<F: Field> LinearCombination<F> {
    pub fn constant(constant: F) -> Self {
        Self {
            terms: vec![],
            constant,
        }
    }

    pub fn is_constant(&self) -> bool {
        self.terms.iter().all(|(_, c)| c.is_zero())
    }

    /// Evaluate under `assignment`, or `None` when a variable is not
    /// assigned.
    pub fn evaluate(&self, assignment: &[F]) -> Option<F> {
        self.terms
            .iter()
            .try_fold(self.constant, |acc, (Variable(i), c)| {
                assignment.get(*i).map(|v| acc + *c * v)
            })
    }
}

impl<F: Field> Default for LinearCombination<F> {
    fn default() -> Self {
        Self::constant(F::ZERO)
    }
}

impl<F: Field> From<Variable> for LinearCombination<F> {
    fn from(v: Variable) -> Self {
        Self {
            terms: vec![(v, F::ONE)],
            constant: F::ZERO,
        }
    }
}

impl<F: Field> From<F> for LinearCombination<F> {
    fn from(constant: F) -> Self {
        Self::constant(constant)
    }
}

impl<F: Field> Add for LinearCombination<F> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<F: Field> AddAssign for LinearCombination<F> {
    fn add_assign(&mut self, rhs: Self) {
        for (v, c) in rhs.terms {
            match self.terms.iter_mut().find(|(w, _)| *w == v) {
                Some((_, d)) => *d += c,
                None => self.terms.push((v, c)),
            }
        }
        self.terms.retain(|(_, c)| !c.is_zero());
        self.constant += rhs.constant;
    }
}

impl<F: Field> AddAssign<F> for LinearCombination<F> {
    fn add_assign(&mut self, rhs: F) {
        self.constant += rhs;
    }
}

impl<F: Field> Neg for LinearCombination<F> {
    type Output = Self;

    fn neg(self) -> Self {
        self * -F::ONE
    }
}

impl<F: Field> Sub for LinearCombination<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<F: Field> Mul<F> for LinearCombination<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self {
        if rhs.is_zero() {
            return Self::default();
        }
        Self {
            terms: self.terms.into_iter().map(|(v, c)| (v, c * rhs)).collect(),
            constant: self.constant * rhs,
        }
    }
}

/// `factors[0] * ... * factors[k - 1] = rhs`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraint<F> {
    pub factors: Vec<LinearCombination<F>>,
    pub rhs: LinearCombination<F>,
}

impl<F: Field> Constraint<F> {
    pub fn new(factors: Vec<LinearCombination<F>>, rhs: LinearCombination<F>) -> Self {
        Self { factors, rhs }
    }

    pub fn degree(&self) -> usize {
        self.factors.len()
    }

    /// `None` when a variable is unassigned
    pub fn is_satisfied(&self, assignment: &[F]) -> Option<bool> {
        let lhs = self
            .factors
            .iter()
            .try_fold(F::ONE, |acc, f| f.evaluate(assignment).map(|v| acc * v))?;
        Some(lhs == self.rhs.evaluate(assignment)?)
    }
}

/// Receiver of the constraints generated by a symbolic evaluation.
pub trait ConstraintSystem<F: Field> {
    /// Maximum number of factors in a constraint. Non-linear steps are
    /// decomposed so that no constraint exceeds it.
    const DEGREE: usize;

    /// A fresh variable, to be constrained by the caller.
    fn auxiliary(&mut self) -> Variable;

    fn constrain(&mut self, constraint: Constraint<F>);
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    #[error("the assignment has {actual} values, expected {expected}")]
    AssignmentLength { expected: usize, actual: usize },
    #[error("constraint {index} has degree {degree}, above the bound {bound}")]
    DegreeTooHigh {
        index: usize,
        degree: usize,
        bound: usize,
    },
    #[error("constraint {index} is not satisfied")]
    Unsatisfied { index: usize },
}

pub type Result<T> = std::result::Result<T, CircuitError>;

/// Keeps the variables and constraints of a symbolic evaluation. Inputs and
/// auxiliaries share one index space, in order of allocation.
#[derive(Clone, Debug)]
pub struct ConstraintRecorder<F, const DEGREE: usize> {
    variables: usize,
    constraints: Vec<Constraint<F>>,
}

impl<F: Field, const DEGREE: usize> ConstraintRecorder<F, DEGREE> {
    pub fn new() -> Self {
        const { assert!(DEGREE >= 2, "constraints must allow at least degree 2") };
        Self {
            variables: 0,
            constraints: vec![],
        }
    }

    /// A fresh, unconstrained variable
    pub fn input(&mut self) -> Variable {
        let v = Variable(self.variables);
        self.variables += 1;
        v
    }

    pub fn variables(&self) -> usize {
        self.variables
    }

    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Check `assignment`, indexed by variable, against every recorded
    /// constraint.
    pub fn is_satisfied(&self, assignment: &[F]) -> Result<()> {
        if assignment.len() != self.variables {
            return Err(CircuitError::AssignmentLength {
                expected: self.variables,
                actual: assignment.len(),
            });
        }
        for (index, constraint) in self.constraints.iter().enumerate() {
            if constraint.degree() > DEGREE {
                return Err(CircuitError::DegreeTooHigh {
                    index,
                    degree: constraint.degree(),
                    bound: DEGREE,
                });
            }
            // all variables are in range after the length check
            if constraint.is_satisfied(assignment) != Some(true) {
                return Err(CircuitError::Unsatisfied { index });
            }
        }
        Ok(())
    }
}

impl<F: Field, const DEGREE: usize> Default for ConstraintRecorder<F, DEGREE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field, const DEGREE: usize> ConstraintSystem<F> for ConstraintRecorder<F, DEGREE> {
    const DEGREE: usize = DEGREE;

    fn auxiliary(&mut self) -> Variable {
        self.input()
    }

    fn constrain(&mut self, constraint: Constraint<F>) {
        trace!(
            "constraint {}: degree {}, {} terms on the right",
            self.constraints.len(),
            constraint.degree(),
            constraint.rhs.terms.len()
        );
        self.constraints.push(constraint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kestrel_curves::fields::PervushinField as F;

    #[test]
    fn linear_combination_arithmetic() {
        let mut cs = ConstraintRecorder::<F, 2>::new();
        let x = cs.input();
        let y = cs.input();
        let a = LinearCombination::from(x) * F::from(3u64) + LinearCombination::from(y);
        let b = LinearCombination::from(x) * -F::from(3u64) + LinearCombination::from(F::ONE);
        let sum = a + b;
        assert_eq!(sum.terms, vec![(y, F::ONE)]);
        assert_eq!(sum.constant, F::ONE);
        assert_eq!(sum.evaluate(&[F::from(5u64), F::from(7u64)]), Some(F::from(8u64)));
        assert_eq!(sum.evaluate(&[F::from(5u64)]), None);
        assert!(LinearCombination::<F>::from(F::from(4u64)).is_constant());
    }

    #[test]
    fn recorder_checks_assignments() {
        let mut cs = ConstraintRecorder::<F, 2>::new();
        let x = cs.input();
        let y = cs.auxiliary();
        cs.constrain(Constraint::new(vec![x.into(), x.into()], y.into()));
        assert_eq!(cs.is_satisfied(&[F::from(3u64), F::from(9u64)]), Ok(()));
        assert_eq!(
            cs.is_satisfied(&[F::from(3u64), F::from(8u64)]),
            Err(CircuitError::Unsatisfied { index: 0 })
        );
        assert_eq!(
            cs.is_satisfied(&[F::from(3u64)]),
            Err(CircuitError::AssignmentLength {
                expected: 2,
                actual: 1
            })
        );

        cs.constrain(Constraint::new(vec![x.into(); 3], y.into()));
        assert_eq!(
            cs.is_satisfied(&[F::from(3u64), F::from(9u64)]),
            Err(CircuitError::DegreeTooHigh {
                index: 1,
                degree: 3,
                bound: 2
            })
        );
    }
}
