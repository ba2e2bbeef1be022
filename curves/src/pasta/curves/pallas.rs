use crate::pasta::{Fp, Fq};
use ark_ec::{
    models::short_weierstrass::{Affine, Projective, SWCurveConfig},
    CurveConfig,
};
use ark_ff::{AdditiveGroup, MontFp};

/// G_GENERATOR_X = 1
pub const G_GENERATOR_X: Fp = MontFp!("1");

/// G_GENERATOR_Y =
/// 12418654782883325593414442427049395787963493412651469444558597405572177144507
pub const G_GENERATOR_Y: Fp =
    MontFp!("12418654782883325593414442427049395787963493412651469444558597405572177144507");

/// The Pallas curve `y^2 = x^3 + 5` over [`Fp`], with a prime number [`Fq`]
/// of points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PallasConfig;

impl CurveConfig for PallasConfig {
    type BaseField = Fp;
    type ScalarField = Fq;

    /// COFACTOR = 1
    const COFACTOR: &'static [u64] = &[0x1];

    /// COFACTOR_INV = 1
    const COFACTOR_INV: Fq = MontFp!("1");
}

impl SWCurveConfig for PallasConfig {
    const COEFF_A: Fp = MontFp!("0");

    const COEFF_B: Fp = MontFp!("5");

    const GENERATOR: Affine<Self> = Affine::new_unchecked(G_GENERATOR_X, G_GENERATOR_Y);

    #[inline(always)]
    fn mul_by_a(_: Fp) -> Fp {
        Fp::ZERO
    }
}

pub type Pallas = Affine<PallasConfig>;
pub type ProjectivePallas = Projective<PallasConfig>;
