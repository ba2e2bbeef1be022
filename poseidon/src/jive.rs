//! Jive: a two-to-one compression function from one permutation call.
//!
//! `compress(x, y)` permutes `x || y` into `s` and returns
//! `x[i] + y[i] + s[i] + s[i + M]` for each `i < M`.
//! See <https://eprint.iacr.org/2022/840>.

use crate::{
    circuit::{ConstraintSystem, LinearCombination},
    env::{Circuit, Environment, Native, Witness},
    poseidon2::Permutation,
};
use ark_ff::Field;
use core::{fmt::Debug, marker::PhantomData};

/// Compression of two hashes into one, as consumed by a Merkle tree.
pub trait CompressionFunction {
    type Hash: Clone + Debug + Default + PartialEq;

    fn compress(x0: &Self::Hash, x1: &Self::Hash) -> Self::Hash;
}

/// Jive over the permutation `P` of width `WIDTH = 2 M`
#[derive(Clone, Copy, Debug, Default)]
pub struct Jive<F, P, const M: usize, const WIDTH: usize>(PhantomData<(F, P)>);

impl<F, P, const M: usize, const WIDTH: usize> Jive<F, P, M, WIDTH>
where
    F: Field,
    P: Permutation<F, WIDTH>,
{
    pub fn compress_in<E: Environment<F>>(
        env: &mut E,
        x0: &[E::Lane; M],
        x1: &[E::Lane; M],
    ) -> [E::Lane; M] {
        const { assert!(2 * M == WIDTH, "Jive needs a permutation of twice the hash width") };

        let mut state: [E::Lane; WIDTH] = core::array::from_fn(|i| {
            if i < M {
                x0[i].clone()
            } else {
                x1[i - M].clone()
            }
        });
        P::permute(env, &mut state);
        core::array::from_fn(|i| {
            x0[i].clone() + x1[i].clone() + state[i].clone() + state[i + M].clone()
        })
    }

    pub fn compress_witness<const DEGREE: usize>(
        trace: &mut Vec<F>,
        x0: &[F; M],
        x1: &[F; M],
    ) -> [F; M] {
        Self::compress_in(&mut Witness::<F, DEGREE>::new(trace), x0, x1)
    }

    pub fn compress_circuit<CS: ConstraintSystem<F>>(
        cs: &mut CS,
        x0: &[LinearCombination<F>; M],
        x1: &[LinearCombination<F>; M],
    ) -> [LinearCombination<F>; M] {
        Self::compress_in(&mut Circuit::new(cs), x0, x1)
    }
}

impl<F, P, const M: usize, const WIDTH: usize> CompressionFunction for Jive<F, P, M, WIDTH>
where
    F: Field,
    P: Permutation<F, WIDTH>,
    [F; M]: Default,
{
    type Hash = [F; M];

    fn compress(x0: &[F; M], x1: &[F; M]) -> [F; M] {
        Self::compress_in(&mut Native, x0, x1)
    }
}
