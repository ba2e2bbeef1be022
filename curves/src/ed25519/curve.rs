use super::{Field25519, Scalar25519};
use ark_ec::{
    models::twisted_edwards::{Affine, MontCurveConfig, TECurveConfig},
    CurveConfig,
};
use ark_ff::MontFp;

/// G_GENERATOR_X =
/// 15112221349535400772501151409588531511454012693041857206046113283949847762202
pub const G_GENERATOR_X: Field25519 =
    MontFp!("15112221349535400772501151409588531511454012693041857206046113283949847762202");

/// G_GENERATOR_Y = 4/5 =
/// 46316835694926478169428394003475163141307993866256225615783033603165251855960
pub const G_GENERATOR_Y: Field25519 =
    MontFp!("46316835694926478169428394003475163141307993866256225615783033603165251855960");

/// edwards25519, `-x^2 + y^2 = 1 + d x^2 y^2` with `d = -121665/121666`,
/// birationally equivalent to Curve25519.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ed25519Config;

impl CurveConfig for Ed25519Config {
    type BaseField = Field25519;
    type ScalarField = Scalar25519;

    /// COFACTOR = 8
    const COFACTOR: &'static [u64] = &[8];

    /// COFACTOR_INV = 8^(-1) mod l
    const COFACTOR_INV: Scalar25519 =
        MontFp!("2713877091499598330239944961141122840321418634767465352250731601857045344121");
}

impl TECurveConfig for Ed25519Config {
    /// COEFF_A = -1
    const COEFF_A: Field25519 = MontFp!("-1");

    /// COEFF_D = -121665/121666
    const COEFF_D: Field25519 =
        MontFp!("37095705934669439343138083508754565189542113879843219016388785533085940283555");

    const GENERATOR: Affine<Self> = Affine::new_unchecked(G_GENERATOR_X, G_GENERATOR_Y);

    type MontCurveConfig = Self;

    #[inline(always)]
    fn mul_by_a(elem: Field25519) -> Field25519 {
        -elem
    }
}

impl MontCurveConfig for Ed25519Config {
    /// COEFF_A = 486662
    const COEFF_A: Field25519 = MontFp!("486662");

    /// COEFF_B = 57896044618658097711785492504343953926634992332820282019728792003956564333285
    const COEFF_B: Field25519 =
        MontFp!("57896044618658097711785492504343953926634992332820282019728792003956564333285");

    type TECurveConfig = Self;
}
