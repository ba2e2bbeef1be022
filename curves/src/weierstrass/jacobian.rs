use super::{WeierstrassAffine, WeierstrassProjective};
use crate::{
    encoding,
    group::{Group, RandomGroup},
};
use ark_ec::short_weierstrass::{Projective, SWCurveConfig};
use ark_ff::{AdditiveGroup, Field, PrimeField, Zero};
use core::{
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};
use rand_core::RngCore;

/// A point in Jacobian coordinates `(X : Y : Z)`, standing for
/// `(X/Z^2, Y/Z^3)`. The identity is any point with `Z = 0`.
///
/// Uses add-1986-cc and dbl-1986-cc. This is the representation arkworks
/// uses for [`Projective`], and the two convert into each other for free.
pub struct WeierstrassJacobian<P: SWCurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
    _config: PhantomData<P>,
}

impl<P: SWCurveConfig> WeierstrassJacobian<P> {
    pub const fn new_unchecked(x: P::BaseField, y: P::BaseField, z: P::BaseField) -> Self {
        Self {
            x,
            y,
            z,
            _config: PhantomData,
        }
    }

    pub fn generator() -> Self {
        WeierstrassAffine::generator().into()
    }

    /// `Y^2 = X^3 + a X Z^4 + b Z^6`
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        let zz = self.z.square();
        let z4 = zz.square();
        self.y.square()
            == self.x.square() * self.x + P::COEFF_A * self.x * z4 + P::COEFF_B * z4 * zz
    }

    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self
    where
        P::BaseField: PrimeField,
    {
        WeierstrassAffine::random(rng).into()
    }

    pub fn to_affine(&self) -> WeierstrassAffine<P> {
        match self.z.inverse() {
            Some(z_inv) => {
                let zz_inv = z_inv.square();
                WeierstrassAffine::new_unchecked(self.x * zz_inv, self.y * zz_inv * z_inv)
            }
            None => WeierstrassAffine::Identity,
        }
    }

    /// See [`crate::encoding`].
    pub fn to_bytes(&self) -> encoding::Result<Vec<u8>> {
        self.to_affine().to_bytes()
    }

    pub fn from_bytes(bytes: &[u8]) -> encoding::Result<Self> {
        WeierstrassAffine::from_bytes(bytes).map(Self::from)
    }
}

impl<P: SWCurveConfig> RandomGroup for WeierstrassJacobian<P>
where
    P::BaseField: PrimeField,
{
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::random(rng)
    }
}

impl<P: SWCurveConfig> Group for WeierstrassJacobian<P> {
    type ScalarField = P::ScalarField;

    const IDENTITY: Self = Self::new_unchecked(
        P::BaseField::ONE,
        P::BaseField::ONE,
        P::BaseField::ZERO,
    );

    fn double(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();
        let s = (self.x * yy).double().double();
        let m = xx.double() + xx + P::mul_by_a(zz.square());
        let t = m.square() - s.double();
        let y = m * (s - t) - yy.square().double().double().double();
        Self::new_unchecked(t, y, (self.y * self.z).double())
    }

    fn is_identity(&self) -> bool {
        self.z.is_zero()
    }
}

impl<P: SWCurveConfig> Add for WeierstrassJacobian<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.is_identity() {
            return rhs;
        }
        if rhs.is_identity() {
            return self;
        }
        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;
        let s1 = self.y * z2z2 * rhs.z;
        let s2 = rhs.y * z1z1 * self.z;
        if u1 == u2 {
            return if s1 == s2 {
                self.double()
            } else {
                Self::IDENTITY
            };
        }
        let h = u2 - u1;
        let r = s2 - s1;
        let hh = h.square();
        let hhh = hh * h;
        let v = u1 * hh;
        let x = r.square() - hhh - v.double();
        let y = r * (v - x) - s1 * hhh;
        Self::new_unchecked(x, y, self.z * rhs.z * h)
    }
}

impl<P: SWCurveConfig> Sub for WeierstrassJacobian<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<P: SWCurveConfig> Neg for WeierstrassJacobian<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new_unchecked(self.x, -self.y, self.z)
    }
}

impl<P: SWCurveConfig> AddAssign for WeierstrassJacobian<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: SWCurveConfig> SubAssign for WeierstrassJacobian<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: SWCurveConfig> Mul<P::ScalarField> for WeierstrassJacobian<P> {
    type Output = Self;

    fn mul(self, rhs: P::ScalarField) -> Self {
        self.mul_scalar(&rhs)
    }
}

impl<P: SWCurveConfig> Clone for WeierstrassJacobian<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: SWCurveConfig> Copy for WeierstrassJacobian<P> {}

impl<P: SWCurveConfig> PartialEq for WeierstrassJacobian<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => true,
            (false, false) => {
                let z1z1 = self.z.square();
                let z2z2 = other.z.square();
                self.x * z2z2 == other.x * z1z1
                    && self.y * z2z2 * other.z == other.y * z1z1 * self.z
            }
            _ => false,
        }
    }
}

impl<P: SWCurveConfig> Eq for WeierstrassJacobian<P> {}

impl<P: SWCurveConfig> fmt::Debug for WeierstrassJacobian<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} : {} : {})", self.x, self.y, self.z)
    }
}

impl<P: SWCurveConfig> From<WeierstrassAffine<P>> for WeierstrassJacobian<P> {
    fn from(p: WeierstrassAffine<P>) -> Self {
        match p {
            WeierstrassAffine::Identity => Self::IDENTITY,
            WeierstrassAffine::Point { x, y } => Self::new_unchecked(x, y, P::BaseField::ONE),
        }
    }
}

impl<P: SWCurveConfig> From<WeierstrassJacobian<P>> for WeierstrassAffine<P> {
    fn from(p: WeierstrassJacobian<P>) -> Self {
        p.to_affine()
    }
}

impl<P: SWCurveConfig> From<WeierstrassProjective<P>> for WeierstrassJacobian<P> {
    /// `(X : Y : Z)` homogeneous is `(X Z : Y Z^2 : Z)` Jacobian.
    fn from(p: WeierstrassProjective<P>) -> Self {
        if p.is_identity() {
            return Self::IDENTITY;
        }
        Self::new_unchecked(p.x * p.z, p.y * p.z.square(), p.z)
    }
}

impl<P: SWCurveConfig> From<Projective<P>> for WeierstrassJacobian<P> {
    fn from(p: Projective<P>) -> Self {
        Self::new_unchecked(p.x, p.y, p.z)
    }
}

impl<P: SWCurveConfig> From<WeierstrassJacobian<P>> for Projective<P> {
    fn from(p: WeierstrassJacobian<P>) -> Self {
        if p.is_identity() {
            return Self::new_unchecked(
                P::BaseField::ONE,
                P::BaseField::ONE,
                P::BaseField::ZERO,
            );
        }
        Self::new_unchecked(p.x, p.y, p.z)
    }
}
