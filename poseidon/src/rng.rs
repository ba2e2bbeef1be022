//! A deterministic random number generator squeezing a native sponge.

use crate::{env::Native, poseidon2::Permutation, sponge::Sponge};
use ark_ff::PrimeField;
use rand_core::{impls, Error, RngCore};

/// Each 64-bit word is the low limb of one squeezed element, so the field
/// must be much larger than 2^64 for the words to be close to uniform.
#[derive(Clone, Debug)]
pub struct SpongeRng<F, P, const RATE: usize, const CAPACITY: usize, const WIDTH: usize>
where
    F: PrimeField,
{
    sponge: Sponge<F, P, Native, RATE, CAPACITY, WIDTH>,
}

impl<F, P, const RATE: usize, const CAPACITY: usize, const WIDTH: usize>
    SpongeRng<F, P, RATE, CAPACITY, WIDTH>
where
    F: PrimeField,
    P: Permutation<F, WIDTH>,
{
    pub fn new(sponge: Sponge<F, P, Native, RATE, CAPACITY, WIDTH>) -> Self {
        const { assert!(F::MODULUS_BIT_SIZE >= 128, "field too small to sample words from") };
        Self { sponge }
    }

    pub fn into_inner(self) -> Sponge<F, P, Native, RATE, CAPACITY, WIDTH> {
        self.sponge
    }
}

impl<F, P, const RATE: usize, const CAPACITY: usize, const WIDTH: usize> RngCore
    for SpongeRng<F, P, RATE, CAPACITY, WIDTH>
where
    F: PrimeField,
    P: Permutation<F, WIDTH>,
{
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.sponge.squeeze().into_bigint().as_ref()[0]
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
