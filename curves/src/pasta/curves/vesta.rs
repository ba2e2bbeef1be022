use crate::pasta::{Fp, Fq};
use ark_ec::{
    models::short_weierstrass::{Affine, Projective, SWCurveConfig},
    CurveConfig,
};
use ark_ff::{AdditiveGroup, MontFp};

/// G_GENERATOR_X = 1
pub const G_GENERATOR_X: Fq = MontFp!("1");

/// G_GENERATOR_Y =
/// 11426906929455361843568202299992114520848200991084027513389447476559454104162
pub const G_GENERATOR_Y: Fq =
    MontFp!("11426906929455361843568202299992114520848200991084027513389447476559454104162");

/// The Vesta curve `y^2 = x^3 + 5` over [`Fq`], with a prime number [`Fp`]
/// of points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VestaConfig;

impl CurveConfig for VestaConfig {
    type BaseField = Fq;
    type ScalarField = Fp;

    /// COFACTOR = 1
    const COFACTOR: &'static [u64] = &[0x1];

    /// COFACTOR_INV = 1
    const COFACTOR_INV: Fp = MontFp!("1");
}

impl SWCurveConfig for VestaConfig {
    const COEFF_A: Fq = MontFp!("0");

    const COEFF_B: Fq = MontFp!("5");

    const GENERATOR: Affine<Self> = Affine::new_unchecked(G_GENERATOR_X, G_GENERATOR_Y);

    #[inline(always)]
    fn mul_by_a(_: Fq) -> Fq {
        Fq::ZERO
    }
}

pub type Vesta = Affine<VestaConfig>;
pub type ProjectiveVesta = Projective<VestaConfig>;
