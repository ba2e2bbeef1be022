//! Fixed-width point encodings. A point is encoded as the compressed
//! arkworks encoding of its affine form: one coordinate and a sign flag,
//! with a flag for the identity on short Weierstrass curves.
//!
//! Decoding rejects inputs of the wrong length, coordinates with no point
//! on the curve and points outside the prime order subgroup.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PointEncodingError {
    #[error("a point is encoded in {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },
    #[error("invalid point encoding: {0}")]
    Invalid(#[from] SerializationError),
}

pub type Result<T> = std::result::Result<T, PointEncodingError>;

pub(crate) fn to_bytes<T: CanonicalSerialize>(point: &T) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(point.compressed_size());
    point.serialize_compressed(&mut bytes)?;
    Ok(bytes)
}

/// Decodes exactly `T::default().compressed_size()` bytes.
pub(crate) fn from_bytes<T>(bytes: &[u8]) -> Result<T>
where
    T: CanonicalSerialize + CanonicalDeserialize + Default,
{
    let expected = T::default().compressed_size();
    if bytes.len() != expected {
        return Err(PointEncodingError::Length {
            expected,
            actual: bytes.len(),
        });
    }
    Ok(T::deserialize_compressed(bytes)?)
}
