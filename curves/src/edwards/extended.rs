use super::{EdwardsAffine, EdwardsProjective};
use crate::{
    encoding,
    group::{Group, RandomGroup},
};
use ark_ec::twisted_edwards::{Projective, TECurveConfig};
use ark_ff::{AdditiveGroup, Field, PrimeField, Zero};
use core::{
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};
use rand_core::RngCore;

/// A point in extended coordinates `(X : Y : Z : T)` with `x = X/Z`,
/// `y = Y/Z` and `T = XY/Z`. The identity is `(0 : 1 : 1 : 0)`.
///
/// Uses add-2008-hwcd and dbl-2008-hwcd. Same layout as the arkworks
/// [`Projective`].
pub struct EdwardsExtended<P: TECurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
    pub t: P::BaseField,
    _config: PhantomData<P>,
}

impl<P: TECurveConfig> EdwardsExtended<P> {
    pub const fn new_unchecked(
        x: P::BaseField,
        y: P::BaseField,
        z: P::BaseField,
        t: P::BaseField,
    ) -> Self {
        Self {
            x,
            y,
            z,
            t,
            _config: PhantomData,
        }
    }

    pub fn generator() -> Self {
        EdwardsAffine::generator().into()
    }

    /// The projective curve equation, and `X Y = Z T`
    pub fn is_on_curve(&self) -> bool {
        EdwardsProjective::from(*self).is_on_curve() && self.x * self.y == self.z * self.t
    }

    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self
    where
        P::BaseField: PrimeField,
    {
        EdwardsAffine::random(rng).into()
    }

    pub fn to_affine(&self) -> EdwardsAffine<P> {
        match self.z.inverse() {
            Some(z_inv) => EdwardsAffine::new_unchecked(self.x * z_inv, self.y * z_inv),
            None => EdwardsAffine::IDENTITY,
        }
    }

    /// See [`crate::encoding`].
    pub fn to_bytes(&self) -> encoding::Result<Vec<u8>> {
        self.to_affine().to_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> encoding::Result<Self> {
        EdwardsAffine::from_bytes(bytes).map(Self::from)
    }
}

impl<P: TECurveConfig> RandomGroup for EdwardsExtended<P>
where
    P::BaseField: PrimeField,
{
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::random(rng)
    }
}

impl<P: TECurveConfig> Group for EdwardsExtended<P> {
    type ScalarField = P::ScalarField;

    const IDENTITY: Self = Self::new_unchecked(
        P::BaseField::ZERO,
        P::BaseField::ONE,
        P::BaseField::ONE,
        P::BaseField::ZERO,
    );

    fn double(&self) -> Self {
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square().double();
        let d = P::mul_by_a(a);
        let e = (self.x + self.y).square() - a - b;
        let g = d + b;
        let f = g - c;
        let h = d - b;
        Self::new_unchecked(e * f, g * h, f * g, e * h)
    }

    fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == self.z
    }
}

impl<P: TECurveConfig> Add for EdwardsExtended<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let a = self.x * rhs.x;
        let b = self.y * rhs.y;
        let c = P::COEFF_D * self.t * rhs.t;
        let d = self.z * rhs.z;
        let e = (self.x + self.y) * (rhs.x + rhs.y) - a - b;
        let f = d - c;
        let g = d + c;
        let h = b - P::mul_by_a(a);
        Self::new_unchecked(e * f, g * h, f * g, e * h)
    }
}

impl<P: TECurveConfig> Sub for EdwardsExtended<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<P: TECurveConfig> Neg for EdwardsExtended<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new_unchecked(-self.x, self.y, self.z, -self.t)
    }
}

impl<P: TECurveConfig> AddAssign for EdwardsExtended<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: TECurveConfig> SubAssign for EdwardsExtended<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: TECurveConfig> Mul<P::ScalarField> for EdwardsExtended<P> {
    type Output = Self;

    fn mul(self, rhs: P::ScalarField) -> Self {
        self.mul_scalar(&rhs)
    }
}

impl<P: TECurveConfig> Clone for EdwardsExtended<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: TECurveConfig> Copy for EdwardsExtended<P> {}

impl<P: TECurveConfig> PartialEq for EdwardsExtended<P> {
    fn eq(&self, other: &Self) -> bool {
        self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
    }
}

impl<P: TECurveConfig> Eq for EdwardsExtended<P> {}

impl<P: TECurveConfig> fmt::Debug for EdwardsExtended<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} : {} : {} : {})", self.x, self.y, self.z, self.t)
    }
}

impl<P: TECurveConfig> From<EdwardsAffine<P>> for EdwardsExtended<P> {
    fn from(p: EdwardsAffine<P>) -> Self {
        Self::new_unchecked(p.x, p.y, P::BaseField::ONE, p.x * p.y)
    }
}

impl<P: TECurveConfig> From<EdwardsExtended<P>> for EdwardsAffine<P> {
    fn from(p: EdwardsExtended<P>) -> Self {
        p.to_affine()
    }
}

impl<P: TECurveConfig> From<EdwardsProjective<P>> for EdwardsExtended<P> {
    /// `(X : Y : Z)` is `(X Z : Y Z : Z^2 : X Y)`.
    fn from(p: EdwardsProjective<P>) -> Self {
        Self::new_unchecked(p.x * p.z, p.y * p.z, p.z.square(), p.x * p.y)
    }
}

impl<P: TECurveConfig> From<Projective<P>> for EdwardsExtended<P> {
    fn from(p: Projective<P>) -> Self {
        Self::new_unchecked(p.x, p.y, p.z, p.t)
    }
}

impl<P: TECurveConfig> From<EdwardsExtended<P>> for Projective<P> {
    fn from(p: EdwardsExtended<P>) -> Self {
        Self::new_unchecked(p.x, p.y, p.t, p.z)
    }
}
