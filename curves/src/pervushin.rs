//! The Mersenne prime field of order 2^61 - 1, small enough for a single
//! 64-bit limb.

use ark_ff::{
    fields::{MontBackend, MontConfig},
    Fp64,
};

#[derive(MontConfig)]
#[modulus = "2305843009213693951"]
#[generator = "37"]
pub struct PervushinConfig;
pub type PervushinField = Fp64<MontBackend<PervushinConfig, 1>>;
