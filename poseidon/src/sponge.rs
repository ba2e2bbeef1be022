//! A duplex sponge over a [Permutation].
//!
//! The state has `RATE` lanes exposed to absorbing and squeezing, followed by
//! `CAPACITY` lanes that only the permutation touches. Switching from
//! absorbing to squeezing pads the rate with the minimal non-injective
//! padding of Hirose: if the rate is not full, a `1` is written after the
//! last absorbed lane and the rest of the rate is zeroed, and the last
//! capacity lane is incremented by 2; otherwise it is incremented by 1.
//!
//! The sponge is generic over the [Environment], so the same code absorbs
//! and squeezes field elements, linear combinations or traced values.

use crate::{
    env::{Environment, Native},
    poseidon2::Permutation,
};
use ark_ff::Field;
use core::marker::PhantomData;

/// How an absorbed value is combined with the rate lane it lands in.
///
/// XOR is only meaningful in characteristic 2 and is not provided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpongeMode {
    Add,
    Overwrite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpongePhase {
    Absorb,
    Squeeze,
}

pub struct Sponge<F, P, E, const RATE: usize, const CAPACITY: usize, const WIDTH: usize>
where
    F: Field,
    E: Environment<F>,
{
    env: E,
    state: [E::Lane; WIDTH],
    phase: SpongePhase,
    position: usize,
    mode: SpongeMode,
    iv: [F; CAPACITY],
    _permutation: PhantomData<P>,
}

impl<F, P, E, const RATE: usize, const CAPACITY: usize, const WIDTH: usize>
    Sponge<F, P, E, RATE, CAPACITY, WIDTH>
where
    F: Field,
    P: Permutation<F, WIDTH>,
    E: Environment<F>,
{
    /// A sponge in the absorbing phase with a zero rate and the capacity set
    /// to `iv`.
    pub fn new(env: E, iv: [F; CAPACITY], mode: SpongeMode) -> Self {
        const {
            assert!(RATE > 0 && CAPACITY > 0, "rate and capacity must be positive");
            assert!(RATE + CAPACITY == WIDTH, "rate and capacity must fill the state");
        };
        Self {
            env,
            state: Self::initial_state(&iv),
            phase: SpongePhase::Absorb,
            position: 0,
            mode,
            iv,
            _permutation: PhantomData,
        }
    }

    fn initial_state(iv: &[F; CAPACITY]) -> [E::Lane; WIDTH] {
        core::array::from_fn(|i| {
            if i < RATE {
                E::Lane::from(F::ZERO)
            } else {
                E::Lane::from(iv[i - RATE])
            }
        })
    }

    /// Back to the state returned by [`Self::new`]
    pub fn reset(&mut self) {
        self.state = Self::initial_state(&self.iv);
        self.phase = SpongePhase::Absorb;
        self.position = 0;
    }

    pub fn absorb(&mut self, x: E::Lane) {
        match self.phase {
            SpongePhase::Squeeze => {
                self.phase = SpongePhase::Absorb;
                self.position = 0;
            }
            SpongePhase::Absorb if self.position == RATE => {
                self.permute();
                self.position = 0;
            }
            SpongePhase::Absorb => {}
        }
        match self.mode {
            SpongeMode::Add => self.state[self.position] += x,
            SpongeMode::Overwrite => self.state[self.position] = x,
        }
        self.position += 1;
    }

    pub fn absorb_slice(&mut self, xs: &[E::Lane]) {
        for x in xs {
            self.absorb(x.clone());
        }
    }

    pub fn squeeze(&mut self) -> E::Lane {
        match self.phase {
            SpongePhase::Absorb => {
                self.phase = SpongePhase::Squeeze;
                self.pad();
                self.permute();
                self.position = 0;
            }
            SpongePhase::Squeeze if self.position == RATE => {
                self.permute();
                self.position = 0;
            }
            SpongePhase::Squeeze => {}
        }
        let out = self.state[self.position].clone();
        self.position += 1;
        out
    }

    pub fn squeeze_n<const N: usize>(&mut self) -> [E::Lane; N] {
        core::array::from_fn(|_| self.squeeze())
    }

    pub fn state(&self) -> &[E::Lane; WIDTH] {
        &self.state
    }

    pub fn phase(&self) -> SpongePhase {
        self.phase
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn env(&mut self) -> &mut E {
        &mut self.env
    }

    fn pad(&mut self) {
        if self.position == RATE {
            self.state[WIDTH - 1] += F::ONE;
        } else {
            self.state[self.position] = E::Lane::from(F::ONE);
            for x in &mut self.state[self.position + 1..RATE] {
                *x = E::Lane::from(F::ZERO);
            }
            self.state[WIDTH - 1] += F::from(2u64);
        }
    }

    fn permute(&mut self) {
        P::permute(&mut self.env, &mut self.state);
    }
}

impl<F, P, const RATE: usize, const CAPACITY: usize, const WIDTH: usize>
    Sponge<F, P, Native, RATE, CAPACITY, WIDTH>
where
    F: Field,
    P: Permutation<F, WIDTH>,
{
    /// Hash `input` into `N` elements with a fresh native sponge.
    pub fn hash<const N: usize>(iv: [F; CAPACITY], mode: SpongeMode, input: &[F]) -> [F; N] {
        let mut sponge = Self::new(Native, iv, mode);
        sponge.absorb_slice(input);
        sponge.squeeze_n()
    }
}

impl<F, P, E, const RATE: usize, const CAPACITY: usize, const WIDTH: usize> Clone
    for Sponge<F, P, E, RATE, CAPACITY, WIDTH>
where
    F: Field,
    E: Environment<F> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            env: self.env.clone(),
            state: self.state.clone(),
            phase: self.phase,
            position: self.position,
            mode: self.mode,
            iv: self.iv,
            _permutation: PhantomData,
        }
    }
}

impl<F, P, E, const RATE: usize, const CAPACITY: usize, const WIDTH: usize> core::fmt::Debug
    for Sponge<F, P, E, RATE, CAPACITY, WIDTH>
where
    F: Field,
    E: Environment<F>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sponge")
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("position", &self.position)
            .field("mode", &self.mode)
            .finish()
    }
}
