use super::{curve_eqn, random_xy};
use crate::{
    encoding,
    group::{Group, RandomGroup},
};
use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ff::{AdditiveGroup, Field, PrimeField};
use core::{
    fmt,
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};
use rand_core::RngCore;

/// A point in affine coordinates, with the point at infinity kept as its own
/// variant.
///
/// Every addition pays for a field inversion. An inversion that fails (a
/// vertical chord or tangent) produces [`WeierstrassAffine::Identity`].
pub enum WeierstrassAffine<P: SWCurveConfig> {
    Identity,
    Point { x: P::BaseField, y: P::BaseField },
}

impl<P: SWCurveConfig> WeierstrassAffine<P> {
    /// Point with the given coordinates, without checking that it lies on
    /// the curve.
    pub const fn new_unchecked(x: P::BaseField, y: P::BaseField) -> Self {
        Self::Point { x, y }
    }

    /// Point with the given coordinates, or `None` if they do not satisfy the
    /// curve equation.
    pub fn new(x: P::BaseField, y: P::BaseField) -> Option<Self> {
        let point = Self::new_unchecked(x, y);
        point.is_on_curve().then_some(point)
    }

    /// The generator from the curve configuration
    pub fn generator() -> Self {
        P::GENERATOR.into()
    }

    pub fn xy(&self) -> Option<(P::BaseField, P::BaseField)> {
        match *self {
            Self::Identity => None,
            Self::Point { x, y } => Some((x, y)),
        }
    }

    pub fn is_on_curve(&self) -> bool {
        match *self {
            Self::Identity => true,
            Self::Point { x, y } => y.square() == curve_eqn::<P>(x),
        }
    }

    /// Uniformly random point of the prime order subgroup, see
    /// [`crate::edwards::EdwardsAffine::random`].
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self
    where
        P::BaseField: PrimeField,
    {
        loop {
            let (x, y) = random_xy::<P, R>(rng);
            let point = Self::Point { x, y };
            if P::cofactor_is_one() {
                return point;
            }
            let point = point.mul_bigint(P::COFACTOR);
            if !point.is_identity() {
                return point;
            }
        }
    }

    /// Third point on the line of slope `k` through `(x1, y1)` and a point
    /// with x-coordinate `x2`, reflected.
    fn chord(k: P::BaseField, x1: P::BaseField, y1: P::BaseField, x2: P::BaseField) -> Self {
        let x3 = k.square() - x1 - x2;
        let y3 = k * (x1 - x3) - y1;
        Self::Point { x: x3, y: y3 }
    }

    /// The compressed encoding, see [`crate::encoding`].
    pub fn to_bytes(&self) -> encoding::Result<Vec<u8>> {
        encoding::to_bytes(&Affine::<P>::from(*self))
    }

    pub fn from_bytes(bytes: &[u8]) -> encoding::Result<Self> {
        encoding::from_bytes::<Affine<P>>(bytes).map(Self::from)
    }
}

impl<P: SWCurveConfig> RandomGroup for WeierstrassAffine<P>
where
    P::BaseField: PrimeField,
{
    fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        Self::random(rng)
    }
}

impl<P: SWCurveConfig> Group for WeierstrassAffine<P> {
    type ScalarField = P::ScalarField;

    const IDENTITY: Self = Self::Identity;

    fn double(&self) -> Self {
        let Self::Point { x, y } = *self else {
            return Self::Identity;
        };
        let xx = x.square();
        let numerator = xx.double() + xx + P::COEFF_A;
        match y.double().inverse() {
            Some(inv) => Self::chord(numerator * inv, x, y, x),
            None => Self::Identity,
        }
    }

    fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }
}

impl<P: SWCurveConfig> Add for WeierstrassAffine<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Identity, q) => q,
            (p, Self::Identity) => p,
            (Self::Point { x: x1, y: y1 }, Self::Point { x: x2, y: y2 }) => {
                if x1 == x2 {
                    return if y1 == y2 {
                        self.double()
                    } else {
                        Self::Identity
                    };
                }
                match (x2 - x1).inverse() {
                    Some(inv) => Self::chord((y2 - y1) * inv, x1, y1, x2),
                    None => Self::Identity,
                }
            }
        }
    }
}

impl<P: SWCurveConfig> Sub for WeierstrassAffine<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<P: SWCurveConfig> Neg for WeierstrassAffine<P> {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Identity => Self::Identity,
            Self::Point { x, y } => Self::Point { x, y: -y },
        }
    }
}

impl<P: SWCurveConfig> AddAssign for WeierstrassAffine<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<P: SWCurveConfig> SubAssign for WeierstrassAffine<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<P: SWCurveConfig> Mul<P::ScalarField> for WeierstrassAffine<P> {
    type Output = Self;

    fn mul(self, rhs: P::ScalarField) -> Self {
        self.mul_scalar(&rhs)
    }
}

impl<P: SWCurveConfig> Clone for WeierstrassAffine<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: SWCurveConfig> Copy for WeierstrassAffine<P> {}

impl<P: SWCurveConfig> PartialEq for WeierstrassAffine<P> {
    fn eq(&self, other: &Self) -> bool {
        self.xy() == other.xy()
    }
}

impl<P: SWCurveConfig> Eq for WeierstrassAffine<P> {}

impl<P: SWCurveConfig> fmt::Debug for WeierstrassAffine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "Infinity"),
            Self::Point { x, y } => write!(f, "({x}, {y})"),
        }
    }
}

impl<P: SWCurveConfig> Default for WeierstrassAffine<P> {
    fn default() -> Self {
        Self::Identity
    }
}

impl<P: SWCurveConfig> From<Affine<P>> for WeierstrassAffine<P> {
    fn from(p: Affine<P>) -> Self {
        if p.infinity {
            Self::Identity
        } else {
            Self::Point { x: p.x, y: p.y }
        }
    }
}

impl<P: SWCurveConfig> From<WeierstrassAffine<P>> for Affine<P> {
    fn from(p: WeierstrassAffine<P>) -> Self {
        match p {
            WeierstrassAffine::Identity => Self::identity(),
            WeierstrassAffine::Point { x, y } => Self::new_unchecked(x, y),
        }
    }
}
