use super::{WeierstrassAffine, WeierstrassJacobian};
use crate::{
    encoding,
    group::{Group, RandomGroup},
};
use ark_ec::short_weierstrass::SWCurveConfig;
use ark_ff::{AdditiveGroup, Field, PrimeField, Zero};
use core::{
    fmt,
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};
use rand_core::RngCore;

/// A point in homogeneous projective coordinates `(X : Y : Z)`, standing for
/// `(X/Z, Y/Z)`. The identity is any point with `Z = 0`.
///
/// Uses add-1998-cmo-2 and dbl-2007-bl from the Explicit-Formulas Database.
pub struct WeierstrassProjective<P: SWCurveConfig> {
    pub x: P::BaseField,
    pub y: P::BaseField,
    pub z: P::BaseField,
    _config: PhantomData<P>,
}

impl<P: SWCurveConfig> WeierstrassProjective<P> {
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

    /// `Y^2 Z = X^3 + a X Z^2 + b Z^3`
    pub fn is_on_curve(&self) -> bool {
        if self.is_identity() {
            return true;
        }
        let zz = self.z.square();
        self.y.square() * self.z
            == self.x.square() * self.x + P::COEFF_A * self.x * zz + P::COEFF_B * zz * self.z
    }

    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self
    where
        P::BaseField: PrimeField,
    {
        WeierstrassAffine::random(rng).into()
    }

    /// Normalizes to affine coordinates at the cost of one inversion.
    pub fn to_affine(&self) -> WeierstrassAffine<P> {
        match self.z.inverse() {
            Some(z_inv) => WeierstrassAffine::new_unchecked(self.x * z_inv, self.y * z_inv),
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

impl<P: SWCurveConfig> RandomGroup for WeierstrassProjective<P>
where
    P::BaseField: PrimeField,
{
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::random(rng)
    }
}

impl<P: SWCurveConfig> Group for WeierstrassProjective<P> {
    type ScalarField = P::ScalarField;

    const IDENTITY: Self = Self::new_unchecked(
        P::BaseField::ZERO,
        P::BaseField::ONE,
        P::BaseField::ZERO,
    );

    fn double(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        let xx = self.x.square();
        let zz = self.z.square();
        let w = P::mul_by_a(zz) + xx.double() + xx;
        let s = (self.y * self.z).double();
        let ss = s.square();
        let sss = ss * s;
        let r = self.y * s;
        let rr = r.square();
        let b = (self.x + r).square() - xx - rr;
        let h = w.square() - b.double();
        Self::new_unchecked(h * s, w * (b - h) - rr.double(), sss)
    }

    fn is_identity(&self) -> bool {
        self.z.is_zero()
    }
}

impl<P: SWCurveConfig> Add for WeierstrassProjective<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        if self.is_identity() {
            return rhs;
        }
        if rhs.is_identity() {
            return self;
        }
        let u1 = rhs.y * self.z;
        let u2 = self.y * rhs.z;
        let v1 = rhs.x * self.z;
        let v2 = self.x * rhs.z;
        if v1 == v2 {
            return if u1 == u2 {
                self.double()
            } else {
                Self::IDENTITY
            };
        }
        let u = u1 - u2;
        let v = v1 - v2;
        let w = self.z * rhs.z;
        let uu = u.square();
        let vv = v.square();
        let vvv = v * vv;
        let r = vv * v2;
        let a = uu * w - vvv - r.double();
        Self::new_unchecked(v * a, u * (r - a) - vvv * u2, vvv * w)
    }
}

impl<P: SWCurveConfig> Sub for WeierstrassProjective<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<P: SWCurveConfig> Neg for WeierstrassProjective<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new_unchecked(self.x, -self.y, self.z)
    }
}

impl<P: SWCurveConfig> AddAssign for WeierstrassProjective<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: SWCurveConfig> SubAssign for WeierstrassProjective<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: SWCurveConfig> Mul<P::ScalarField> for WeierstrassProjective<P> {
    type Output = Self;

    fn mul(self, rhs: P::ScalarField) -> Self {
        self.mul_scalar(&rhs)
    }
}

impl<P: SWCurveConfig> Clone for WeierstrassProjective<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: SWCurveConfig> Copy for WeierstrassProjective<P> {}

impl<P: SWCurveConfig> PartialEq for WeierstrassProjective<P> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => true,
            (false, false) => {
                self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
            }
            _ => false,
        }
    }
}

impl<P: SWCurveConfig> Eq for WeierstrassProjective<P> {}

impl<P: SWCurveConfig> fmt::Debug for WeierstrassProjective<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} : {} : {})", self.x, self.y, self.z)
    }
}

impl<P: SWCurveConfig> From<WeierstrassAffine<P>> for WeierstrassProjective<P> {
    fn from(p: WeierstrassAffine<P>) -> Self {
        match p {
            WeierstrassAffine::Identity => Self::IDENTITY,
            WeierstrassAffine::Point { x, y } => Self::new_unchecked(x, y, P::BaseField::ONE),
        }
    }
}

impl<P: SWCurveConfig> From<WeierstrassProjective<P>> for WeierstrassAffine<P> {
    fn from(p: WeierstrassProjective<P>) -> Self {
        p.to_affine()
    }
}

impl<P: SWCurveConfig> From<WeierstrassJacobian<P>> for WeierstrassProjective<P> {
    /// `(X : Y : Z)` Jacobian is `(X Z : Y : Z^3)` homogeneous.
    fn from(p: WeierstrassJacobian<P>) -> Self {
        if p.is_identity() {
            return Self::IDENTITY;
        }
        Self::new_unchecked(p.x * p.z, p.y, p.z.square() * p.z)
    }
}
