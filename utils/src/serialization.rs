//! [serde_with] adapter for arkworks types that implement [CanonicalSerialize]
//! and [CanonicalDeserialize].
//!
//! Annotate a field with `#[serde_as(as = "kestrel_utils::serialization::SerdeAs")]`,
//! or with `Vec<SerdeAs>` for containers of such types. Values are stored as
//! their compressed canonical bytes.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde_with::{Bytes, DeserializeAs, SerializeAs};

pub struct SerdeAs;

impl<T> SerializeAs<T> for SerdeAs
where
    T: CanonicalSerialize,
{
    fn serialize_as<S>(val: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut bytes = vec![];
        val.serialize_compressed(&mut bytes)
            .map_err(serde::ser::Error::custom)?;

        Bytes::serialize_as(&bytes, serializer)
    }
}

impl<'de, T> DeserializeAs<'de, T> for SerdeAs
where
    T: CanonicalDeserialize,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes: Vec<u8> = Bytes::deserialize_as(deserializer)?;
        T::deserialize_compressed(&mut &bytes[..]).map_err(serde::de::Error::custom)
    }
}
