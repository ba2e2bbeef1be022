//! Twisted Edwards curves `a x^2 + y^2 = 1 + d x^2 y^2` in affine, projective
//! and extended coordinates. Curve coefficients are read from a
//! [`TECurveConfig`].
//!
//! With `a` a square and `d` a non-square the addition law is complete: the
//! same formula covers doubling and the identity, and no denominator vanishes
//! on the curve.

mod affine;
mod extended;
mod projective;

pub use affine::EdwardsAffine;
pub use extended::EdwardsExtended;
pub use projective::EdwardsProjective;

use ark_ec::twisted_edwards::TECurveConfig;
use ark_ff::{Field, PrimeField};
use kestrel_utils::FieldHelpers;
use rand_core::RngCore;

/// Samples a uniformly random point. The sign of `y` is drawn once up front,
/// then x-coordinates are drawn until `y^2 = (a x^2 - 1) / (d x^2 - 1)` has a
/// root.
pub(crate) fn random_xy<P, R>(rng: &mut R) -> (P::BaseField, P::BaseField)
where
    P: TECurveConfig,
    P::BaseField: PrimeField,
    R: RngCore + ?Sized,
{
    let negate = rng.next_u32() & 1 == 1;
    loop {
        let x = P::BaseField::random(rng);
        let xx = x.square();
        let numerator = P::mul_by_a(xx) - P::BaseField::ONE;
        let Some(denominator) = (P::COEFF_D * xx - P::BaseField::ONE).inverse() else {
            continue;
        };
        if let Some(y) = (numerator * denominator).sqrt() {
            return (x, if negate { -y } else { y });
        }
    }
}
