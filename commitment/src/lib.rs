//! Commitment schemes on top of the algebra of `kestrel-curves` and the
//! hashes of `kestrel-poseidon`: a [Merkle tree](crate::merkle::MerkleTree)
//! over any two-to-one compression function, and
//! [Pedersen commitments](crate::pedersen::PedersenCommitment) over any prime
//! order group.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod error;
pub mod merkle;
pub mod pedersen;

pub use error::{CommitmentError, MerkleError};
pub use merkle::MerkleTree;
pub use pedersen::PedersenCommitment;
