//! Prime fields and elliptic curve groups.
//!
//! The fields are arkworks Montgomery fields and the curve coefficients live
//! in arkworks curve configurations, while the group law is implemented here
//! once per coordinate system, generically over the configuration. Scalar
//! multiplication is shared by all of them, see [`group::add_sub_chain`].

#![deny(unsafe_code)]
#![deny(clippy::all)]
// Cryptographic constants are written as unseparated decimal literals
#![allow(clippy::unreadable_literal)]

pub mod ed25519;
pub mod edwards;
pub mod encoding;
pub mod fields;
pub mod group;
pub mod pasta;
pub mod pervushin;
pub mod solinas62;
pub mod weierstrass;

pub use encoding::PointEncodingError;
pub use group::{add_sub_chain, Group, RandomGroup};
