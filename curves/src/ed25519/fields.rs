use ark_ff::{
    fields::{MontBackend, MontConfig},
    Fp256,
};

/// 2^255 - 19
#[derive(MontConfig)]
#[modulus = "57896044618658097711785492504343953926634992332820282019728792003956564819949"]
#[generator = "2"]
pub struct Field25519Config;
pub type Field25519 = Fp256<MontBackend<Field25519Config, 4>>;

/// 2^252 + 27742317777372353535851937790883648493, the order of the prime
/// subgroup of edwards25519
#[derive(MontConfig)]
#[modulus = "7237005577332262213973186563042994240857116359379907606001950938285454250989"]
#[generator = "2"]
pub struct Scalar25519Config;
pub type Scalar25519 = Fp256<MontBackend<Scalar25519Config, 4>>;
