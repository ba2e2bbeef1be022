//! Pedersen commitments to vectors of scalars.

use crate::error::CommitmentError;
use kestrel_curves::{Group, RandomGroup};
use log::debug;
use rand_core::RngCore;
use rayon::prelude::*;

/// Commitment parameters: the generators `G_0, ..., G_{n-1}`, which must
/// have no known discrete log relation between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PedersenCommitment<G: Group> {
    generators: Vec<G>,
}

impl<G: Group> PedersenCommitment<G> {
    pub fn new(generators: Vec<G>) -> Self {
        Self { generators }
    }

    /// Samples `size` independent generators. Use a sponge backed
    /// [`rand_core::RngCore`] for parameters that others can rederive.
    pub fn setup<R: RngCore + ?Sized>(rng: &mut R, size: usize) -> Self
    where
        G: RandomGroup,
    {
        let generators: Vec<G> = (0..size).map(|_| G::random(rng)).collect();
        debug!("sampled {size} Pedersen generators");
        Self { generators }
    }

    pub fn generators(&self) -> &[G] {
        &self.generators
    }

    /// `G_0 s + G_1 t`, with `s` the committed value and `t` the blinder.
    pub fn commit(&self, s: &G::ScalarField, t: &G::ScalarField) -> Result<G, CommitmentError> {
        match self.generators.as_slice() {
            [g, h, ..] => Ok(g.mul_scalar(s) + h.mul_scalar(t)),
            generators => Err(CommitmentError::LengthMismatch(2, generators.len())),
        }
    }

    /// `sum_i G_i v_i`, with one scalar per generator.
    pub fn commit_vector(&self, scalars: &[G::ScalarField]) -> Result<G, CommitmentError> {
        if scalars.len() != self.generators.len() {
            return Err(CommitmentError::LengthMismatch(
                scalars.len(),
                self.generators.len(),
            ));
        }

        let commitment = self
            .generators
            .par_iter()
            .zip(scalars.par_iter())
            .map(|(g, v)| g.mul_scalar(v))
            .reduce(|| G::IDENTITY, |mut acc, p| {
                acc += p;
                acc
            });
        Ok(commitment)
    }

    pub fn open(
        &self,
        commitment: &G,
        s: &G::ScalarField,
        t: &G::ScalarField,
    ) -> Result<bool, CommitmentError> {
        Ok(self.commit(s, t)? == *commitment)
    }

    pub fn open_vector(
        &self,
        commitment: &G,
        scalars: &[G::ScalarField],
    ) -> Result<bool, CommitmentError> {
        Ok(self.commit_vector(scalars)? == *commitment)
    }
}
