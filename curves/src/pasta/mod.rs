//! The Pasta cycle: Pallas and Vesta, each curve's base field being the
//! other's scalar field.

pub mod curves;
pub mod fields;

pub use curves::{
    pallas::{Pallas, PallasConfig, ProjectivePallas},
    vesta::{ProjectiveVesta, Vesta, VestaConfig},
};
pub use fields::{Fp, Fq};

use crate::weierstrass::{WeierstrassAffine, WeierstrassJacobian, WeierstrassProjective};

pub type PallasAffine = WeierstrassAffine<PallasConfig>;
pub type PallasProjective = WeierstrassProjective<PallasConfig>;
pub type PallasJacobian = WeierstrassJacobian<PallasConfig>;

pub type VestaAffine = WeierstrassAffine<VestaConfig>;
pub type VestaProjective = WeierstrassProjective<VestaConfig>;
pub type VestaJacobian = WeierstrassJacobian<VestaConfig>;
