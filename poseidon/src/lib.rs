//! This crate provides the Poseidon2 permutation and the constructions built
//! on it: a duplex [Sponge](crate::sponge::Sponge) and the
//! [Jive](crate::jive::Jive) compression function.
//!
//! Everything is written once against an [Environment](crate::env::Environment)
//! and can be evaluated in three ways which agree on their outputs:
//! natively on field elements, symbolically to generate the constraints of
//! an arithmetic circuit, and natively while recording the witness of those
//! constraints.
//!
//! Parameters for the Pallas base field are in [crate::pasta], for the
//! field of order 2^61 - 1 in [crate::pervushin] and for the field of order
//! 2^62 - 2^8 - 2^5 + 1 in [crate::solinas62]. For instance, to hash two
//! elements:
//! ```rust
//! use kestrel_curves::pasta::Fp;
//! use kestrel_poseidon::{pasta::Poseidon2PallasSponge, sponge::SpongeMode};
//!
//! let [digest]: [Fp; 1] = Poseidon2PallasSponge::hash(
//!     [Fp::from(0u64)],
//!     SpongeMode::Overwrite,
//!     &[Fp::from(1u64), Fp::from(2u64)],
//! );
//! # let _ = digest;
//! ```

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod circuit;
pub mod constants;
pub mod env;
pub mod jive;
pub mod pasta;
pub mod pervushin;
pub mod poseidon2;
pub mod rng;
pub mod solinas62;
pub mod sponge;

pub use constants::Poseidon2Params;
pub use env::{Circuit, Environment, Native, SBox, Witness};
pub use jive::{CompressionFunction, Jive};
pub use poseidon2::{Permutation, Poseidon2};
pub use sponge::{Sponge, SpongeMode};
