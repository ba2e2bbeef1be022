//! The edwards25519 curve and its two prime fields.

pub mod curve;
pub mod fields;

pub use curve::{Ed25519Config, G_GENERATOR_X, G_GENERATOR_Y};
pub use fields::{Field25519, Scalar25519};

use crate::edwards::{EdwardsAffine, EdwardsExtended, EdwardsProjective};

pub type Ed25519Affine = EdwardsAffine<Ed25519Config>;
pub type Ed25519Projective = EdwardsProjective<Ed25519Config>;
pub type Ed25519Extended = EdwardsExtended<Ed25519Config>;
