//! The prime field of order 2^62 - 2^8 - 2^5 + 1, a Solinas prime that
//! fits a single 64-bit limb.

use ark_ff::{
    fields::{MontBackend, MontConfig},
    Fp64,
};

#[derive(MontConfig)]
#[modulus = "4611686018427387617"]
#[generator = "3"]
pub struct Solinas62Config;
pub type Solinas62Field = Fp64<MontBackend<Solinas62Config, 1>>;
