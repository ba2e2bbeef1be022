use super::random_xy;
use crate::{
    encoding,
    group::{Group, RandomGroup},
};
use ark_ec::twisted_edwards::{Affine, TECurveConfig};
use ark_ff::{AdditiveGroup, Field, PrimeField, Zero};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};
use rand_core::RngCore;

/// A point in affine coordinates. The identity is `(0, 1)`.
pub struct EdwardsAffine<P: TECurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
}

impl<P: TECurveConfig> EdwardsAffine<P> {
    pub const fn new_unchecked(x: P::BaseField, y: P::BaseField) -> Self {
        Self { x, y }
    }

    /// Point with the given coordinates, or `None` if they do not satisfy the
    /// curve equation.
    pub fn new(x: P::BaseField, y: P::BaseField) -> Option<Self> {
        let point = Self::new_unchecked(x, y);
        point.is_on_curve().then_some(point)
    }

    pub fn generator() -> Self {
        P::GENERATOR.into()
    }

    pub fn is_on_curve(&self) -> bool {
        let xx = self.x.square();
        let yy = self.y.square();
        P::mul_by_a(xx) + yy == P::BaseField::ONE + P::COEFF_D * xx * yy
    }

    /// Uniformly random point of the prime order subgroup. A point of the
    /// full curve is sampled and multiplied by the cofactor, retrying when
    /// that lands on the identity.
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self
    where
        P::BaseField: PrimeField,
    {
        loop {
            let (x, y) = random_xy::<P, R>(rng);
            let point = Self { x, y };
            if P::cofactor_is_one() {
                return point;
            }
            let point = point.mul_bigint(P::COFACTOR);
            if !point.is_identity() {
                return point;
            }
        }
    }

    /// The compressed encoding, see [`crate::encoding`].
    pub fn to_bytes(&self) -> encoding::Result<Vec<u8>> {
        encoding::to_bytes(&Affine::<P>::from(*self))
    }

    pub fn from_bytes(bytes: &[u8]) -> encoding::Result<Self> {
        encoding::from_bytes::<Affine<P>>(bytes).map(Self::from)
    }
}

impl<P: TECurveConfig> RandomGroup for EdwardsAffine<P>
where
    P::BaseField: PrimeField,
{
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::random(rng)
    }
}

impl<P: TECurveConfig> Group for EdwardsAffine<P> {
    type ScalarField = P::ScalarField;

    const IDENTITY: Self = Self::new_unchecked(P::BaseField::ZERO, P::BaseField::ONE);

    fn double(&self) -> Self {
        *self + *self
    }

    fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == P::BaseField::ONE
    }
}

impl<P: TECurveConfig> Add for EdwardsAffine<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let x1x2 = self.x * rhs.x;
        let y1y2 = self.y * rhs.y;
        let k = P::COEFF_D * x1x2 * y1y2;
        let x_inv = (P::BaseField::ONE + k).inverse();
        let y_inv = (P::BaseField::ONE - k).inverse();
        match (x_inv, y_inv) {
            (Some(x_inv), Some(y_inv)) => Self::new_unchecked(
                (self.x * rhs.y + self.y * rhs.x) * x_inv,
                (y1y2 - P::mul_by_a(x1x2)) * y_inv,
            ),
            _ => Self::IDENTITY,
        }
    }
}

impl<P: TECurveConfig> Sub for EdwardsAffine<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<P: TECurveConfig> Neg for EdwardsAffine<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new_unchecked(-self.x, self.y)
    }
}

impl<P: TECurveConfig> AddAssign for EdwardsAffine<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: TECurveConfig> SubAssign for EdwardsAffine<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: TECurveConfig> Mul<P::ScalarField> for EdwardsAffine<P> {
    type Output = Self;

    fn mul(self, rhs: P::ScalarField) -> Self {
        self.mul_scalar(&rhs)
    }
}

impl<P: TECurveConfig> Clone for EdwardsAffine<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: TECurveConfig> Copy for EdwardsAffine<P> {}

impl<P: TECurveConfig> PartialEq for EdwardsAffine<P> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<P: TECurveConfig> Eq for EdwardsAffine<P> {}

impl<P: TECurveConfig> fmt::Debug for EdwardsAffine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<P: TECurveConfig> Default for EdwardsAffine<P> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<P: TECurveConfig> From<Affine<P>> for EdwardsAffine<P> {
    fn from(p: Affine<P>) -> Self {
        Self::new_unchecked(p.x, p.y)
    }
}

impl<P: TECurveConfig> From<EdwardsAffine<P>> for Affine<P> {
    fn from(p: EdwardsAffine<P>) -> Self {
        Self::new_unchecked(p.x, p.y)
    }
}
