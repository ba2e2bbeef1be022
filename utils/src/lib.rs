//! Helpers shared by the algebra crates: encoding and sampling of prime
//! field elements, fixed-size linear algebra over arbitrary rings and serde
//! adapters for arkworks types.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod field_helpers;
pub mod matrix_ring;
pub mod module;
pub mod power_of_two_ring;
pub mod serialization;

pub use field_helpers::{ArithmeticError, FieldHelpers, FieldHelpersError};
pub use matrix_ring::MatrixRing;
pub use module::{Module, Ring};
pub use power_of_two_ring::PowerOfTwoRing;
