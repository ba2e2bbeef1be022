//! The Poseidon2 permutation.
//!
//! One call runs the external linear layer, then
//!
//! - `RCB.len()` external rounds: add the round constants, apply the S-box to
//!   every lane, apply the external layer;
//! - `RCP.len()` internal rounds: add the round constant to lane 0, apply the
//!   S-box to lane 0, apply the internal layer;
//! - `RCE.len()` external rounds.
//!
//! See <https://eprint.iacr.org/2023/323>.

use crate::{
    circuit::{ConstraintSystem, LinearCombination},
    constants::Poseidon2Params,
    env::{Circuit, Environment, LaneAlgebra, Native, SBox, Witness},
};
use ark_ff::Field;
use core::marker::PhantomData;
use kestrel_utils::MatrixRing;

/// A fixed-width permutation, generic over the evaluation environment.
pub trait Permutation<F: Field, const WIDTH: usize> {
    fn permute<E: Environment<F>>(env: &mut E, state: &mut [E::Lane; WIDTH]);
}

/// Poseidon2 with the parameters `P`
#[derive(Clone, Copy, Debug, Default)]
pub struct Poseidon2<F, P, const WIDTH: usize>(PhantomData<(F, P)>);

impl<F, P, const WIDTH: usize> Permutation<F, WIDTH> for Poseidon2<F, P, WIDTH>
where
    F: Field,
    P: Poseidon2Params<F, WIDTH>,
{
    fn permute<E: Environment<F>>(env: &mut E, state: &mut [E::Lane; WIDTH]) {
        const {
            assert!(
                matches!(WIDTH, 2 | 3 | 4 | 8 | 12 | 16 | 20 | 24),
                "unsupported Poseidon2 width"
            )
        };

        external_layer::<F, _, WIDTH>(state);
        for rc in P::RCB {
            full_round::<F, E, WIDTH>(env, state, rc, P::SBOX);
        }
        for rc in P::RCP {
            state[0] += *rc;
            state[0] = env.power(&state[0], P::SBOX);
            internal_layer(state, &P::M);
        }
        for rc in P::RCE {
            full_round::<F, E, WIDTH>(env, state, rc, P::SBOX);
        }
    }
}

impl<F, P, const WIDTH: usize> Poseidon2<F, P, WIDTH>
where
    F: Field,
    P: Poseidon2Params<F, WIDTH>,
{
    pub fn permute_native(state: &mut [F; WIDTH]) {
        Self::permute(&mut Native, state);
    }

    /// Same as [`Self::permute_native`], also appending the S-box
    /// intermediates to `trace`.
    pub fn permute_witness<const DEGREE: usize>(trace: &mut Vec<F>, state: &mut [F; WIDTH]) {
        Self::permute(&mut Witness::<F, DEGREE>::new(trace), state);
    }

    /// Replace the symbolic `state` by the permuted one, reporting the
    /// constraints to `cs`.
    pub fn permute_circuit<CS: ConstraintSystem<F>>(
        cs: &mut CS,
        state: &mut [LinearCombination<F>; WIDTH],
    ) {
        Self::permute(&mut Circuit::new(cs), state);
    }

    /// The external linear layer as a matrix
    pub fn external_matrix() -> MatrixRing<F, WIDTH> {
        let mut matrix = MatrixRing::identity();
        for j in 0..WIDTH {
            let mut column = [F::ZERO; WIDTH];
            column[j] = F::ONE;
            external_layer::<F, F, WIDTH>(&mut column);
            for (i, x) in column.into_iter().enumerate() {
                matrix[(i, j)] = x;
            }
        }
        matrix
    }

    /// The internal linear layer as a matrix
    pub fn internal_matrix() -> MatrixRing<F, WIDTH> {
        MatrixRing::diagonal(P::M) + MatrixRing::constant(F::ONE)
    }
}

fn full_round<F: Field, E: Environment<F>, const WIDTH: usize>(
    env: &mut E,
    state: &mut [E::Lane; WIDTH],
    rc: &[F; WIDTH],
    sbox: SBox,
) {
    for (x, c) in state.iter_mut().zip(rc) {
        *x += *c;
        *x = env.power(x, sbox);
    }
    external_layer::<F, _, WIDTH>(state);
}

fn sum<F: Field, L: LaneAlgebra<F>>(lanes: &[L]) -> L {
    lanes
        .iter()
        .cloned()
        .fold(L::from(F::ZERO), |acc, x| acc + x)
}

/// `circ(2, 3, 1, 1)` on four lanes, with 8 additions
fn m4<F: Field, L: LaneAlgebra<F>>(x: &mut [L]) {
    let two = F::from(2u64);
    let four = F::from(4u64);
    let t0 = x[0].clone() + x[1].clone();
    let t1 = x[2].clone() + x[3].clone();
    let t2 = x[1].clone() * two + t1.clone();
    let t3 = x[3].clone() * two + t0.clone();
    let t4 = t1 * four + t3.clone();
    let t5 = t0 * four + t2.clone();
    let t6 = t3 + t5.clone();
    let t7 = t2 + t4.clone();
    x[0] = t6;
    x[1] = t5;
    x[2] = t7;
    x[3] = t4;
}

fn external_layer<F: Field, L: LaneAlgebra<F>, const WIDTH: usize>(state: &mut [L; WIDTH]) {
    match WIDTH {
        2 | 3 => {
            let s = sum::<F, L>(state);
            for x in state.iter_mut() {
                *x += s.clone();
            }
        }
        4 => m4::<F, L>(state),
        _ => {
            for block in state.chunks_exact_mut(4) {
                m4::<F, L>(block);
            }
            let sums: [L; 4] = core::array::from_fn(|i| {
                state
                    .iter()
                    .skip(i)
                    .step_by(4)
                    .cloned()
                    .fold(L::from(F::ZERO), |acc, x| acc + x)
            });
            for (i, x) in state.iter_mut().enumerate() {
                *x += sums[i % 4].clone();
            }
        }
    }
}

fn internal_layer<F: Field, L: LaneAlgebra<F>, const WIDTH: usize>(
    state: &mut [L; WIDTH],
    diagonal: &[F; WIDTH],
) {
    let s = sum::<F, L>(state);
    for (x, m) in state.iter_mut().zip(diagonal) {
        *x = x.clone() * *m + s.clone();
    }
}
