//! Short Weierstrass curves `y^2 = x^3 + a x + b` in affine, projective and
//! Jacobian coordinates. Curve coefficients are read from an
//! [`SWCurveConfig`].

mod affine;
mod jacobian;
mod projective;

pub use affine::WeierstrassAffine;
pub use jacobian::WeierstrassJacobian;
pub use projective::WeierstrassProjective;

use ark_ec::short_weierstrass::SWCurveConfig;
use ark_ff::{Field, PrimeField};
use kestrel_utils::FieldHelpers;
use rand_core::RngCore;

/// returns the right-hand side of the curve equation for a given x
pub(crate) fn curve_eqn<P: SWCurveConfig>(x: P::BaseField) -> P::BaseField {
    let mut res = x;
    res *= &x; // x^2
    res += &P::COEFF_A; // x^2 + A
    res *= &x; // x^3 + A x
    res += &P::COEFF_B; // x^3 + A x + B

    res
}

/// Samples a uniformly random finite point. The sign of `y` is drawn once
/// up front, then x-coordinates are drawn until one lands on the curve,
/// which takes two attempts on average.
pub(crate) fn random_xy<P, R>(rng: &mut R) -> (P::BaseField, P::BaseField)
where
    P: SWCurveConfig,
    P::BaseField: PrimeField,
    R: RngCore + ?Sized,
{
    let negate = rng.next_u32() & 1 == 1;
    loop {
        let x = P::BaseField::random(rng);
        if let Some(y) = curve_eqn::<P>(x).sqrt() {
            return (x, if negate { -y } else { y });
        }
    }
}
