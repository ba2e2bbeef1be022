//! Every prime field of the crate, in one place.

pub use crate::{
    ed25519::{Field25519, Scalar25519},
    pasta::{Fp, Fq},
    pervushin::PervushinField,
    solinas62::Solinas62Field,
};
