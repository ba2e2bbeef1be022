use super::{EdwardsAffine, EdwardsExtended};
use crate::{
    encoding,
    group::{Group, RandomGroup},
};
use ark_ec::twisted_edwards::TECurveConfig;
use ark_ff::{AdditiveGroup, Field, PrimeField, Zero};
use core::{
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};
use rand_core::RngCore;

/// A point in homogeneous projective coordinates `(X : Y : Z)`, standing for
/// `(X/Z, Y/Z)`. The identity is `(0 : 1 : 1)`.
///
/// Uses add-2008-bbjlp and dbl-2008-bbjlp.
pub struct EdwardsProjective<P: TECurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
    _config: PhantomData<P>,
}

impl<P: TECurveConfig> EdwardsProjective<P> {
    pub const fn new_unchecked(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        Self {
            x,
            y,
            z,
            _config: PhantomData,
        }
    }

    pub fn generator() -> Self {
        EdwardsAffine::generator().into()
    }

    /// `(a X^2 + Y^2) Z^2 = Z^4 + d X^2 Y^2`
    pub fn is_on_curve(&self) -> bool {
        if self.z.is_zero() {
            return false;
        }
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();
        (P::mul_by_a(xx) + yy) * zz == zz.square() + P::COEFF_D * xx * yy
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

impl<P: TECurveConfig> RandomGroup for EdwardsProjective<P>
where
    P::BaseField: PrimeField,
{
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::random(rng)
    }
}

impl<P: TECurveConfig> Group for EdwardsProjective<P> {
    type ScalarField = P::ScalarField;

    const IDENTITY: Self = Self::new_unchecked(
        P::BaseField::ZERO,
        P::BaseField::ONE,
        P::BaseField::ONE,
    );

    fn double(&self) -> Self {
        let b = (self.x + self.y).square();
        let c = self.x.square();
        let d = self.y.square();
        let e = P::mul_by_a(c);
        let f = e + d;
        let h = self.z.square();
        let j = f - h.double();
        Self::new_unchecked((b - c - d) * j, f * (e - d), f * j)
    }

    fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == self.z
    }
}

impl<P: TECurveConfig> Add for EdwardsProjective<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let a = self.z * rhs.z;
        let b = a.square();
        let c = self.x * rhs.x;
        let d = self.y * rhs.y;
        let e = P::COEFF_D * c * d;
        let f = b - e;
        let g = b + e;
        let x = a * f * ((self.x + self.y) * (rhs.x + rhs.y) - c - d);
        let y = a * g * (d - P::mul_by_a(c));
        Self::new_unchecked(x, y, f * g)
    }
}

impl<P: TECurveConfig> Sub for EdwardsProjective<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<P: TECurveConfig> Neg for EdwardsProjective<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new_unchecked(-self.x, self.y, self.z)
    }
}

impl<P: TECurveConfig> AddAssign for EdwardsProjective<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: TECurveConfig> SubAssign for EdwardsProjective<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: TECurveConfig> Mul<P::ScalarField> for EdwardsProjective<P> {
    type Output = Self;

    fn mul(self, rhs: P::ScalarField) -> Self {
        self.mul_scalar(&rhs)
    }
}

impl<P: TECurveConfig> Clone for EdwardsProjective<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: TECurveConfig> Copy for EdwardsProjective<P> {}

impl<P: TECurveConfig> PartialEq for EdwardsProjective<P> {
    fn eq(&self, other: &Self) -> bool {
        self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
    }
}

impl<P: TECurveConfig> Eq for EdwardsProjective<P> {}

impl<P: TECurveConfig> fmt::Debug for EdwardsProjective<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} : {} : {})", self.x, self.y, self.z)
    }
}

impl<P: TECurveConfig> From<EdwardsAffine<P>> for EdwardsProjective<P> {
    fn from(p: EdwardsAffine<P>) -> Self {
        Self::new_unchecked(p.x, p.y, P::BaseField::ONE)
    }
}

impl<P: TECurveConfig> From<EdwardsProjective<P>> for EdwardsAffine<P> {
    fn from(p: EdwardsProjective<P>) -> Self {
        p.to_affine()
    }
}

impl<P: TECurveConfig> From<EdwardsExtended<P>> for EdwardsProjective<P> {
    /// Drops the auxiliary coordinate `T = XY/Z`.
    fn from(p: EdwardsExtended<P>) -> Self {
        Self::new_unchecked(p.x, p.y, p.z)
    }
}
